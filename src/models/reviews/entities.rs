use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评审报告状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewStatus {
    Draft,
    Submitted,
    Withdrawn,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Draft => write!(f, "draft"),
            ReviewStatus::Submitted => write!(f, "submitted"),
            ReviewStatus::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ReviewStatus::Draft),
            "submitted" => Ok(ReviewStatus::Submitted),
            "withdrawn" => Ok(ReviewStatus::Withdrawn),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

// 评审建议，与编辑决定使用同一组取值
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum Recommendation {
    Accept,
    AcceptWithMinorRevisions,
    ReviseAndResubmit,
    Reject,
}

// 评审人对自身判断的把握程度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewerConfidence {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

// 表单问题的回答，内容随模板问题类型而变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct FormResponse {
    pub question_id: String,
    #[ts(type = "unknown")]
    pub response: serde_json::Value,
}

// 总体评价
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct OverallAssessment {
    pub recommendation: Option<Recommendation>,
    pub confidence: Option<ReviewerConfidence>,
    pub summary: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub comments_to_authors: Option<String>,
    // 只对编辑可见
    pub confidential_comments_to_editor: Option<String>,
}

// 各维度打分，取值 1-5
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewRatings {
    pub originality: Option<i32>,
    pub significance: Option<i32>,
    pub methodology: Option<i32>,
    pub presentation: Option<i32>,
    pub overall: Option<i32>,
}

impl ReviewRatings {
    fn dimensions(&self) -> [Option<i32>; 5] {
        [
            self.originality,
            self.significance,
            self.methodology,
            self.presentation,
            self.overall,
        ]
    }

    pub fn all_in_range(&self) -> bool {
        self.dimensions()
            .iter()
            .all(|r| r.is_none_or(|v| (1..=5).contains(&v)))
    }

    pub fn average(&self) -> Option<f64> {
        let values: Vec<i32> = self.dimensions().into_iter().flatten().collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<i32>() as f64 / values.len() as f64)
    }
}

// 评审过程时间线
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewProcess {
    pub started_at: chrono::DateTime<chrono::Utc>,
    // 提交时刻只设置一次，重复提交不覆盖
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_saved_at: chrono::DateTime<chrono::Utc>,
}

// 评审报告实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: i64,
    pub submission_id: i64,
    pub assignment_id: String,
    pub reviewer_id: i64,
    pub status: ReviewStatus,
    pub responses: Vec<FormResponse>,
    pub assessment: OverallAssessment,
    pub ratings: ReviewRatings,
    pub process: ReviewProcess,
    pub withdrawal_reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Review {
    pub fn is_editable(&self) -> bool {
        self.status == ReviewStatus::Draft
    }

    /// 提交评审。submitted_at 只在首次提交时写入。
    pub fn submit(&mut self) -> bool {
        if self.status != ReviewStatus::Draft {
            return false;
        }
        self.status = ReviewStatus::Submitted;
        if self.process.submitted_at.is_none() {
            self.process.submitted_at = Some(chrono::Utc::now());
        }
        true
    }

    pub fn withdraw(&mut self, reason: Option<String>) -> bool {
        if self.status == ReviewStatus::Withdrawn {
            return false;
        }
        self.status = ReviewStatus::Withdrawn;
        self.withdrawal_reason = reason;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft_review() -> Review {
        let now = Utc::now();
        Review {
            id: 1,
            submission_id: 1,
            assignment_id: "a1".into(),
            reviewer_id: 20,
            status: ReviewStatus::Draft,
            responses: vec![],
            assessment: OverallAssessment::default(),
            ratings: ReviewRatings::default(),
            process: ReviewProcess {
                started_at: now,
                submitted_at: None,
                last_saved_at: now,
            },
            withdrawal_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_submit_sets_submitted_at_once() {
        let mut r = draft_review();
        assert!(r.submit());
        let first = r.process.submitted_at.unwrap();
        // 已提交的报告不能再次提交
        assert!(!r.submit());
        assert_eq!(r.process.submitted_at, Some(first));
    }

    #[test]
    fn test_withdraw_is_idempotent_failure() {
        let mut r = draft_review();
        assert!(r.withdraw(Some("conflict of interest".into())));
        assert_eq!(r.status, ReviewStatus::Withdrawn);
        assert!(!r.withdraw(None));
        assert_eq!(r.withdrawal_reason.as_deref(), Some("conflict of interest"));
    }

    #[test]
    fn test_ratings_range_check() {
        let mut ratings = ReviewRatings::default();
        assert!(ratings.all_in_range());
        ratings.originality = Some(5);
        ratings.presentation = Some(1);
        assert!(ratings.all_in_range());
        ratings.overall = Some(6);
        assert!(!ratings.all_in_range());
    }

    #[test]
    fn test_average_ignores_missing_dimensions() {
        let ratings = ReviewRatings {
            originality: Some(4),
            significance: Some(2),
            methodology: None,
            presentation: None,
            overall: None,
        };
        assert_eq!(ratings.average(), Some(3.0));
        assert_eq!(ReviewRatings::default().average(), None);
    }

    #[test]
    fn test_recommendation_wire_values() {
        for (raw, expected) in [
            ("accept", Recommendation::Accept),
            (
                "accept_with_minor_revisions",
                Recommendation::AcceptWithMinorRevisions,
            ),
            ("revise_and_resubmit", Recommendation::ReviseAndResubmit),
            ("reject", Recommendation::Reject),
        ] {
            let parsed: Recommendation =
                serde_json::from_value(serde_json::Value::String(raw.into())).unwrap();
            assert_eq!(parsed, expected);
        }
        // 旧值不再接受
        assert!(
            serde_json::from_value::<Recommendation>(serde_json::Value::String(
                "minor_revision".into()
            ))
            .is_err()
        );
    }

    #[test]
    fn test_confidence_wire_values() {
        for raw in ["very_low", "low", "medium", "high", "very_high"] {
            assert!(
                serde_json::from_value::<ReviewerConfidence>(serde_json::Value::String(
                    raw.into()
                ))
                .is_ok(),
                "{raw} should parse"
            );
        }
    }
}
