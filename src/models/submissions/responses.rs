use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{ReviewAssignment, Submission};
use crate::models::PaginationInfo;

// 投稿列表响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}

// 邀请评审人响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignmentResponse {
    pub submission_id: i64,
    pub assignment: ReviewAssignment,
}
