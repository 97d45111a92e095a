/// 业务错误码
///
/// 前两位对应 HTTP 状态类别，后三位为业务内编号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 参数与校验
    ValidationFailed = 40001,
    EmailInvalid = 40002,
    PasswordInvalid = 40003,
    InvalidStatusTransition = 40004,
    InvalidAssignmentResponse = 40005,
    VenueClosed = 40006,

    // 401xx 认证
    Unauthorized = 40101,
    AuthFailed = 40102,
    AccountDeactivated = 40103,

    // 403xx 授权
    PermissionDenied = 40301,

    // 404xx 资源不存在
    AccountNotFound = 40401,
    JournalNotFound = 40402,
    ConferenceNotFound = 40403,
    SubmissionNotFound = 40404,
    ReviewNotFound = 40405,
    AssignmentNotFound = 40406,

    // 409xx 冲突
    EmailAlreadyExists = 40901,
    ShortNameAlreadyExists = 40902,
    ReviewerAlreadyAssigned = 40903,
    SubmissionIdExhausted = 40904,

    // 500xx 服务端
    InternalServerError = 50000,
    RegisterFailed = 50001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_follow_http_class() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32 / 100, 401);
        assert_eq!(ErrorCode::PermissionDenied as i32 / 100, 403);
        assert_eq!(ErrorCode::EmailAlreadyExists as i32 / 100, 409);
    }
}
