use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Review;
use crate::models::PaginationInfo;

// 评审列表响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListResponse {
    pub items: Vec<Review>,
    pub pagination: PaginationInfo,
}
