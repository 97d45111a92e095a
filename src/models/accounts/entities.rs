use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账号角色（一个账号可以同时持有多个角色）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum AccountRole {
    #[serde(rename = "reviewer")]
    Reviewer,
    #[serde(rename = "editor")]
    Editor,
    #[serde(rename = "editor-in-chief")]
    EditorInChief,
    #[serde(rename = "administrator")]
    Administrator,
    #[serde(rename = "super-admin")]
    SuperAdmin,
}

impl AccountRole {
    pub const REVIEWER: &'static str = "reviewer";
    pub const EDITOR: &'static str = "editor";
    pub const EDITOR_IN_CHIEF: &'static str = "editor-in-chief";
    pub const ADMINISTRATOR: &'static str = "administrator";
    pub const SUPER_ADMIN: &'static str = "super-admin";

    // 注意：没有角色层级推断，每个调用点都按字面列出允许的角色
    pub fn admin_roles() -> &'static [AccountRole] {
        &[Self::Administrator, Self::SuperAdmin]
    }
    pub fn venue_management_roles() -> &'static [AccountRole] {
        &[Self::EditorInChief, Self::Administrator, Self::SuperAdmin]
    }
    pub fn editorial_roles() -> &'static [AccountRole] {
        &[
            Self::Editor,
            Self::EditorInChief,
            Self::Administrator,
            Self::SuperAdmin,
        ]
    }
    pub fn all_roles() -> &'static [AccountRole] {
        &[
            Self::Reviewer,
            Self::Editor,
            Self::EditorInChief,
            Self::Administrator,
            Self::SuperAdmin,
        ]
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Reviewer => write!(f, "{}", AccountRole::REVIEWER),
            AccountRole::Editor => write!(f, "{}", AccountRole::EDITOR),
            AccountRole::EditorInChief => write!(f, "{}", AccountRole::EDITOR_IN_CHIEF),
            AccountRole::Administrator => write!(f, "{}", AccountRole::ADMINISTRATOR),
            AccountRole::SuperAdmin => write!(f, "{}", AccountRole::SUPER_ADMIN),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reviewer" => Ok(AccountRole::Reviewer),
            "editor" => Ok(AccountRole::Editor),
            "editor-in-chief" => Ok(AccountRole::EditorInChief),
            "administrator" => Ok(AccountRole::Administrator),
            "super-admin" => Ok(AccountRole::SuperAdmin),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 账号类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum AccountType {
    Colleague,
    Member,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Colleague => write!(f, "colleague"),
            AccountType::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "colleague" => Ok(AccountType::Colleague),
            "member" => Ok(AccountType::Member),
            _ => Err(format!("Invalid account type: {s}")),
        }
    }
}

// 会员状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum MembershipStatus {
    Active,
    Expired,
    Pending,
    Cancelled,
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipStatus::Active => write!(f, "active"),
            MembershipStatus::Expired => write!(f, "expired"),
            MembershipStatus::Pending => write!(f, "pending"),
            MembershipStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MembershipStatus::Active),
            "expired" => Ok(MembershipStatus::Expired),
            "pending" => Ok(MembershipStatus::Pending),
            "cancelled" => Ok(MembershipStatus::Cancelled),
            _ => Err(format!("Invalid membership status: {s}")),
        }
    }
}

// 评审人资格状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum ReviewerStatus {
    Pending,
    Approved,
    Rejected,
    Inactive,
}

impl std::fmt::Display for ReviewerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReviewerStatus::Pending => "pending",
            ReviewerStatus::Approved => "approved",
            ReviewerStatus::Rejected => "rejected",
            ReviewerStatus::Inactive => "inactive",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ReviewerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewerStatus::Pending),
            "approved" => Ok(ReviewerStatus::Approved),
            "rejected" => Ok(ReviewerStatus::Rejected),
            "inactive" => Ok(ReviewerStatus::Inactive),
            _ => Err(format!("Invalid reviewer status: {s}")),
        }
    }
}

// 评审人可用时间窗口
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct ReviewerAvailability {
    pub is_available: bool,
    pub unavailable_from: Option<chrono::DateTime<chrono::Utc>>,
    pub unavailable_to: Option<chrono::DateTime<chrono::Utc>>,
    pub max_reviews_per_year: i32,
    pub min_days_between_assignments: i32,
}

impl Default for ReviewerAvailability {
    fn default() -> Self {
        Self {
            is_available: true,
            unavailable_from: None,
            unavailable_to: None,
            max_reviews_per_year: 10,
            min_days_between_assignments: 7,
        }
    }
}

// 学术资料
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct AcademicProfile {
    pub affiliation: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub orcid_id: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

// 账号实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub secondary_email: Option<String>,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub account_type: AccountType,
    pub membership_status: MembershipStatus,
    pub membership_expiry: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub profile: AcademicProfile,
    pub topics_of_interest: Vec<String>,
    pub is_reviewer: bool,
    pub reviewer_status: ReviewerStatus,
    pub reviewer_availability: ReviewerAvailability,
    pub roles: Vec<AccountRole>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Account {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_role(&self, role: AccountRole) -> bool {
        self.roles.contains(&role)
    }

    // 角色集合的非空交集检查
    pub fn has_any_role(&self, roles: &[AccountRole]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    pub fn is_member(&self) -> bool {
        self.account_type == AccountType::Member
            && self.membership_status == MembershipStatus::Active
    }

    /// 检查评审人在给定日期是否可接受新的评审邀请
    pub fn is_available_on(&self, date: chrono::DateTime<chrono::Utc>) -> bool {
        if !self.reviewer_availability.is_available {
            return false;
        }
        match (
            self.reviewer_availability.unavailable_from,
            self.reviewer_availability.unavailable_to,
        ) {
            (Some(from), Some(to)) => date < from || date > to,
            (Some(from), None) => date < from,
            _ => true,
        }
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.email,
            &self.roles,
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn account_with_roles(roles: Vec<AccountRole>) -> Account {
        Account {
            id: 1,
            first_name: "Jo".into(),
            last_name: "Li".into(),
            email: "jo@example.com".into(),
            secondary_email: None,
            password_hash: String::new(),
            account_type: AccountType::Member,
            membership_status: MembershipStatus::Pending,
            membership_expiry: None,
            is_active: true,
            profile: AcademicProfile::default(),
            topics_of_interest: vec![],
            is_reviewer: false,
            reviewer_status: ReviewerStatus::Pending,
            reviewer_availability: ReviewerAvailability::default(),
            roles,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in AccountRole::all_roles() {
            let parsed: AccountRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, *role);
        }
        assert!("chief-editor".parse::<AccountRole>().is_err());
    }

    #[test]
    fn test_has_any_role_is_set_intersection() {
        let account = account_with_roles(vec![AccountRole::Reviewer, AccountRole::Editor]);
        assert!(account.has_any_role(AccountRole::editorial_roles()));
        assert!(!account.has_any_role(AccountRole::admin_roles()));
        assert!(!account.has_any_role(&[]));
    }

    #[test]
    fn test_super_admin_does_not_imply_administrator() {
        let account = account_with_roles(vec![AccountRole::SuperAdmin]);
        assert!(!account.has_role(AccountRole::Administrator));
        // admin_roles 把两个角色都按字面列出，所以 super-admin 仍然通过
        assert!(account.has_any_role(AccountRole::admin_roles()));
    }

    #[test]
    fn test_is_member_requires_active_status() {
        let mut account = account_with_roles(vec![]);
        assert!(!account.is_member());
        account.membership_status = MembershipStatus::Active;
        assert!(account.is_member());
        account.account_type = AccountType::Colleague;
        assert!(!account.is_member());
    }

    #[test]
    fn test_availability_window() {
        let mut account = account_with_roles(vec![AccountRole::Reviewer]);
        let now = Utc::now();
        assert!(account.is_available_on(now));

        account.reviewer_availability.unavailable_from = Some(now - Duration::days(1));
        account.reviewer_availability.unavailable_to = Some(now + Duration::days(1));
        assert!(!account.is_available_on(now));
        assert!(account.is_available_on(now + Duration::days(2)));

        account.reviewer_availability.is_available = false;
        assert!(!account.is_available_on(now + Duration::days(2)));
    }
}
