//! 账号实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub secondary_email: Option<String>,
    pub password_hash: String,
    pub account_type: String,
    pub membership_status: String,
    pub membership_expiry: Option<i64>,
    pub is_active: bool,
    // JSON: AcademicProfile
    pub profile: String,
    // JSON: Vec<String>
    pub topics_of_interest: String,
    pub is_reviewer: bool,
    pub reviewer_status: String,
    // JSON: ReviewerAvailability
    pub reviewer_availability: String,
    // JSON: 角色字符串数组
    pub roles: String,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_account(self) -> crate::models::accounts::entities::Account {
        use crate::models::accounts::entities::{
            Account, AccountType, MembershipStatus, ReviewerStatus,
        };
        use chrono::{DateTime, Utc};

        Account {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            secondary_email: self.secondary_email,
            password_hash: self.password_hash,
            account_type: self
                .account_type
                .parse::<AccountType>()
                .unwrap_or(AccountType::Colleague),
            membership_status: self
                .membership_status
                .parse::<MembershipStatus>()
                .unwrap_or(MembershipStatus::Pending),
            membership_expiry: self
                .membership_expiry
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            is_active: self.is_active,
            profile: serde_json::from_str(&self.profile).unwrap_or_default(),
            topics_of_interest: serde_json::from_str(&self.topics_of_interest).unwrap_or_default(),
            is_reviewer: self.is_reviewer,
            reviewer_status: self
                .reviewer_status
                .parse::<ReviewerStatus>()
                .unwrap_or(ReviewerStatus::Pending),
            reviewer_availability: serde_json::from_str(&self.reviewer_availability)
                .unwrap_or_default(),
            roles: serde_json::from_str(&self.roles).unwrap_or_default(),
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
