use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Account;
use crate::models::PaginationInfo;

// 账号列表响应数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct AccountListResponse {
    pub items: Vec<Account>,
    pub pagination: PaginationInfo,
}
