use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Conference;
use crate::models::PaginationInfo;

// 会议列表响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceListResponse {
    pub items: Vec<Conference>,
    pub pagination: PaginationInfo,
}
