use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Journal;
use crate::models::PaginationInfo;
use crate::models::accounts::entities::Account;

// 期刊列表响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct JournalListResponse {
    pub items: Vec<Journal>,
    pub pagination: PaginationInfo,
}

// 可用评审人响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/journal.ts")]
pub struct AvailableReviewersResponse {
    pub reviewers: Vec<Account>,
}
