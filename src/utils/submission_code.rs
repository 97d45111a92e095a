use rand::Rng;

/// 生成形如 `SUB-2026-0042` 的投稿编号
///
/// 四位数字随机生成，唯一性由数据库唯一索引保证，
/// 冲突时由调用方重试。
pub fn generate_submission_code(year: i32) -> String {
    let number: u32 = rand::rng().random_range(0..10000);
    format!("SUB-{year}-{number:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;

    static CODE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^SUB-\d{4}-\d{4}$").expect("Invalid code regex"));

    #[test]
    fn test_code_format() {
        for _ in 0..100 {
            let code = generate_submission_code(2026);
            assert!(CODE_RE.is_match(&code), "unexpected code: {code}");
            assert!(code.starts_with("SUB-2026-"));
        }
    }
}
