use super::SeaOrmStorage;
use crate::entity::accounts::{ActiveModel, Column, Entity as Accounts};
use crate::errors::{Result, ScholarFlowError};
use crate::models::{
    PaginationInfo,
    accounts::{
        entities::{
            AcademicProfile, Account, AccountRole, MembershipStatus, ReviewerAvailability,
            ReviewerStatus,
        },
        requests::{
            AccountListQuery, CreateAccountData, UpdateAccountStatusRequest, UpdateProfileRequest,
        },
        responses::AccountListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_account_impl(&self, data: CreateAccountData) -> Result<Account> {
        let now = chrono::Utc::now().timestamp();
        let is_reviewer = data.roles.contains(&AccountRole::Reviewer);

        let model = ActiveModel {
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email.to_lowercase()),
            password_hash: Set(data.password_hash),
            account_type: Set(data.account_type.to_string()),
            membership_status: Set(MembershipStatus::Pending.to_string()),
            is_active: Set(true),
            profile: Set(serde_json::to_string(&AcademicProfile::default())?),
            topics_of_interest: Set("[]".to_string()),
            is_reviewer: Set(is_reviewer),
            reviewer_status: Set(ReviewerStatus::Pending.to_string()),
            reviewer_availability: Set(serde_json::to_string(&ReviewerAvailability::default())?),
            roles: Set(serde_json::to_string(&data.roles)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(&e, sea_orm::DbErr::Query(_)) && e.to_string().contains("UNIQUE") {
                ScholarFlowError::unique_violation(format!("邮箱已被注册: {e}"))
            } else {
                ScholarFlowError::database_operation(format!("创建账号失败: {e}"))
            }
        })?;

        Ok(result.into_account())
    }

    /// 通过 ID 获取账号
    pub async fn get_account_by_id_impl(&self, id: i64) -> Result<Option<Account>> {
        let result = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 通过邮箱获取账号
    pub async fn get_account_by_email_impl(&self, email: &str) -> Result<Option<Account>> {
        let result = Accounts::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 批量获取账号
    pub async fn get_accounts_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Account>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let result = Accounts::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("批量查询账号失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_account()).collect())
    }

    /// 分页列出账号
    pub async fn list_accounts_with_pagination_impl(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Accounts::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 角色筛选（角色列是 JSON 数组文本，用包含匹配）
        if let Some(role) = query.role {
            select = select.filter(Column::Roles.contains(format!("\"{role}\"")));
        }

        // 启用状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询账号总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询账号页数失败: {e}")))?;

        let accounts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询账号列表失败: {e}")))?;

        Ok(AccountListResponse {
            items: accounts.into_iter().map(|m| m.into_account()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新个人资料
    pub async fn update_account_profile_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Account>> {
        // 先检查账号是否存在
        let Some(existing) = self.get_account_by_id_impl(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(secondary_email) = update.secondary_email {
            model.secondary_email = Set(Some(secondary_email));
        }
        if let Some(topics) = update.topics_of_interest {
            model.topics_of_interest = Set(serde_json::to_string(&topics)?);
        }
        if let Some(availability) = update.reviewer_availability {
            model.reviewer_availability = Set(serde_json::to_string(&availability)?);
        }

        // 学术资料字段合并到现有 profile
        let mut profile = existing.profile;
        let mut profile_changed = false;
        for (target, value) in [
            (&mut profile.affiliation, update.affiliation),
            (&mut profile.department, update.department),
            (&mut profile.position, update.position),
            (&mut profile.orcid_id, update.orcid_id),
            (&mut profile.bio, update.bio),
            (&mut profile.country, update.country),
            (&mut profile.city, update.city),
        ] {
            if let Some(v) = value {
                *target = Some(v);
                profile_changed = true;
            }
        }
        if profile_changed {
            model.profile = Set(serde_json::to_string(&profile)?);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新账号失败: {e}")))?;

        self.get_account_by_id_impl(id).await
    }

    /// 更新密码哈希
    pub async fn update_account_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Accounts::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 整体替换角色集合
    pub async fn update_account_roles_impl(
        &self,
        id: i64,
        roles: &[AccountRole],
    ) -> Result<Option<Account>> {
        if self.get_account_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let is_reviewer = roles.contains(&AccountRole::Reviewer);

        let model = ActiveModel {
            id: Set(id),
            roles: Set(serde_json::to_string(roles)?),
            is_reviewer: Set(is_reviewer),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新角色失败: {e}")))?;

        self.get_account_by_id_impl(id).await
    }

    /// 更新账号状态
    pub async fn update_account_status_impl(
        &self,
        id: i64,
        update: UpdateAccountStatusRequest,
    ) -> Result<Option<Account>> {
        if self.get_account_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(status) = update.membership_status {
            model.membership_status = Set(status.to_string());
        }
        if let Some(expiry) = update.membership_expiry {
            model.membership_expiry = Set(Some(expiry.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新账号状态失败: {e}")))?;

        self.get_account_by_id_impl(id).await
    }

    /// 更新账号最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Accounts::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ScholarFlowError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 统计账号数量
    pub async fn count_accounts_impl(&self) -> Result<u64> {
        let count = Accounts::find()
            .count(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("统计账号数量失败: {e}")))?;

        Ok(count)
    }
}
