use serde::Deserialize;
use ts_rs::TS;

use super::entities::{EditorialDecision, SubmissionAuthor, SubmissionStatus, VenueType};

// 创建投稿请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub title: String,
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub venue_type: VenueType,
    pub venue_id: i64,
    pub track: Option<String>,
    pub authors: Vec<SubmissionAuthor>,
}

// 状态变更请求（编辑操作）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct UpdateStatusRequest {
    pub status: SubmissionStatus,
    pub note: Option<String>,
}

// 指派负责编辑请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignEditorRequest {
    pub editor_id: i64,
}

// 邀请评审人请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignReviewerRequest {
    pub reviewer_id: i64,
    #[ts(type = "string | null")]
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 评审人对邀请的答复
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignmentResponseRequest {
    // 只接受 "accept" 或 "decline"
    pub response: String,
}

// 记录编辑决定请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct RecordDecisionRequest {
    pub decision: EditorialDecision,
    pub comments: Option<String>,
}

// 投稿列表查询过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<SubmissionStatus>,
    pub venue_type: Option<VenueType>,
    pub venue_id: Option<i64>,
    pub search: Option<String>,
}
