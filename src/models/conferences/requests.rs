use serde::Deserialize;
use ts_rs::TS;

use super::entities::{
    CommitteeRole, ConferenceLocation, ConferenceStatus, ConferenceTrack, ConferenceType,
};

// 创建会议请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct CreateConferenceRequest {
    pub name: String,
    pub short_name: String,
    pub conference_type: ConferenceType,
    pub description: Option<String>,
    #[ts(type = "string | null")]
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub submission_deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub review_deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub notification_date: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<ConferenceLocation>,
    pub chair: Option<i64>,
    #[serde(default)]
    pub tracks: Vec<ConferenceTrack>,
    pub min_reviewers_per_submission: Option<i32>,
    pub max_reviewers_per_submission: Option<i32>,
}

// 更新会议请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct UpdateConferenceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[ts(type = "string | null")]
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub submission_deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub review_deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[ts(type = "string | null")]
    pub notification_date: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<ConferenceLocation>,
    pub status: Option<ConferenceStatus>,
    pub chair: Option<i64>,
    pub tracks: Option<Vec<ConferenceTrack>>,
    pub min_reviewers_per_submission: Option<i32>,
    pub max_reviewers_per_submission: Option<i32>,
}

// 加入程序委员会请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct AddCommitteeMemberRequest {
    pub account_id: i64,
    pub role: Option<CommitteeRole>,
}

// 会议列表查询过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ConferenceStatus>,
    pub conference_type: Option<ConferenceType>,
    pub search: Option<String>,
}
