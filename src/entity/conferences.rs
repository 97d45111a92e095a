//! 会议实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "conferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub short_name: String,
    pub conference_type: String,
    pub description: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub submission_deadline: Option<i64>,
    pub review_deadline: Option<i64>,
    pub notification_date: Option<i64>,
    // JSON: ConferenceLocation
    pub location: String,
    pub status: String,
    pub chair: Option<i64>,
    // JSON: Vec<CommitteeMember>
    pub program_committee: String,
    // JSON: Vec<ConferenceTrack>
    pub tracks: String,
    pub min_reviewers_per_submission: i32,
    pub max_reviewers_per_submission: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_conference(self) -> crate::models::conferences::entities::Conference {
        use crate::models::conferences::entities::{
            Conference, ConferenceStatus, ConferenceType,
        };
        use chrono::{DateTime, Utc};

        let ts = |v: Option<i64>| v.map(|t| DateTime::<Utc>::from_timestamp(t, 0).unwrap_or_default());

        Conference {
            id: self.id,
            name: self.name,
            short_name: self.short_name,
            conference_type: self
                .conference_type
                .parse::<ConferenceType>()
                .unwrap_or(ConferenceType::Conference),
            description: self.description,
            start_date: ts(self.start_date),
            end_date: ts(self.end_date),
            submission_deadline: ts(self.submission_deadline),
            review_deadline: ts(self.review_deadline),
            notification_date: ts(self.notification_date),
            location: serde_json::from_str(&self.location).unwrap_or_default(),
            status: self
                .status
                .parse::<ConferenceStatus>()
                .unwrap_or(ConferenceStatus::Planned),
            chair: self.chair,
            program_committee: serde_json::from_str(&self.program_committee).unwrap_or_default(),
            tracks: serde_json::from_str(&self.tracks).unwrap_or_default(),
            min_reviewers_per_submission: self.min_reviewers_per_submission,
            max_reviewers_per_submission: self.max_reviewers_per_submission,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
