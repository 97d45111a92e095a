//! 投稿实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub submission_code: String,
    pub title: String,
    pub abstract_text: String,
    // JSON: Vec<String>
    pub keywords: String,
    pub venue_type: String,
    pub venue_id: i64,
    pub track: Option<String>,
    // JSON: Vec<SubmissionAuthor>
    pub authors: String,
    pub submitted_by: i64,
    pub assigned_editor: Option<i64>,
    pub status: String,
    // JSON: Vec<StatusChange>
    pub status_history: String,
    // JSON: Vec<ReviewAssignment>
    pub review_assignments: String,
    // JSON: Option<DecisionRecord>
    pub decision: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::SubmittedBy",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus, VenueType};
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            submission_code: self.submission_code,
            title: self.title,
            abstract_text: self.abstract_text,
            keywords: serde_json::from_str(&self.keywords).unwrap_or_default(),
            venue_type: self
                .venue_type
                .parse::<VenueType>()
                .unwrap_or(VenueType::Journal),
            venue_id: self.venue_id,
            track: self.track,
            authors: serde_json::from_str(&self.authors).unwrap_or_default(),
            submitted_by: self.submitted_by,
            assigned_editor: self.assigned_editor,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Submitted),
            status_history: serde_json::from_str(&self.status_history).unwrap_or_default(),
            review_assignments: serde_json::from_str(&self.review_assignments).unwrap_or_default(),
            decision: self
                .decision
                .and_then(|raw| serde_json::from_str(&raw).ok()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
