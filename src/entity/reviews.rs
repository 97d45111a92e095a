//! 评审报告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    // 对应投稿里 ReviewAssignment.assignment_id
    #[sea_orm(unique)]
    pub assignment_id: String,
    pub reviewer_id: i64,
    pub status: String,
    // JSON: Vec<FormResponse>
    pub responses: String,
    // JSON: OverallAssessment
    pub assessment: String,
    // JSON: ReviewRatings
    pub ratings: String,
    pub started_at: i64,
    pub submitted_at: Option<i64>,
    pub last_saved_at: i64,
    pub withdrawal_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submissions,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::ReviewerId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_review(self) -> crate::models::reviews::entities::Review {
        use crate::models::reviews::entities::{Review, ReviewProcess, ReviewStatus};
        use chrono::{DateTime, Utc};

        Review {
            id: self.id,
            submission_id: self.submission_id,
            assignment_id: self.assignment_id,
            reviewer_id: self.reviewer_id,
            status: self
                .status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::Draft),
            responses: serde_json::from_str(&self.responses).unwrap_or_default(),
            assessment: serde_json::from_str(&self.assessment).unwrap_or_default(),
            ratings: serde_json::from_str(&self.ratings).unwrap_or_default(),
            process: ReviewProcess {
                started_at: DateTime::<Utc>::from_timestamp(self.started_at, 0)
                    .unwrap_or_default(),
                submitted_at: self
                    .submitted_at
                    .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
                last_saved_at: DateTime::<Utc>::from_timestamp(self.last_saved_at, 0)
                    .unwrap_or_default(),
            },
            withdrawal_reason: self.withdrawal_reason,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
