use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::accounts::entities::Account;

// 登录/注册成功响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub account: Account,
}

// 刷新 token 响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub token: String,
    pub expires_in: i64,
}

// token 校验响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct TokenVerificationResponse {
    pub valid: bool,
    pub account: Option<Account>,
}
