use serde::Deserialize;
use ts_rs::TS;

use super::entities::{AccountRole, MembershipStatus, ReviewerAvailability};

// 更新个人资料请求（所有字段可选，缺省字段不变）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub secondary_email: Option<String>,
    pub affiliation: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub orcid_id: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub topics_of_interest: Option<Vec<String>>,
    pub reviewer_availability: Option<ReviewerAvailability>,
}

// 修改密码请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// 管理员更新账号角色请求（整体替换角色集合）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct UpdateRolesRequest {
    pub roles: Vec<AccountRole>,
}

// 管理员更新账号状态请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct UpdateAccountStatusRequest {
    pub is_active: Option<bool>,
    pub membership_status: Option<MembershipStatus>,
    #[ts(type = "string | null")]
    pub membership_expiry: Option<chrono::DateTime<chrono::Utc>>,
}

// 账号列表查询过滤
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct AccountListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<AccountRole>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

// 存储层创建账号的数据（密码已在业务层哈希）
#[derive(Debug, Clone)]
pub struct CreateAccountData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub account_type: super::entities::AccountType,
    pub roles: Vec<AccountRole>,
}
