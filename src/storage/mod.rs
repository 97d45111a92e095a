use std::sync::Arc;

use crate::models::{
    accounts::{
        entities::{Account, AccountRole},
        requests::{
            AccountListQuery, CreateAccountData, UpdateAccountStatusRequest, UpdateProfileRequest,
        },
        responses::AccountListResponse,
    },
    conferences::{
        entities::Conference,
        requests::{ConferenceListQuery, CreateConferenceRequest, UpdateConferenceRequest},
        responses::ConferenceListResponse,
    },
    journals::{
        entities::Journal,
        requests::{CreateJournalRequest, JournalListQuery, UpdateJournalRequest},
        responses::JournalListResponse,
    },
    reviews::{
        entities::Review,
        requests::{CreateReviewData, ReviewListQuery},
        responses::ReviewListResponse,
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号
    async fn create_account(&self, data: CreateAccountData) -> Result<Account>;
    // 通过ID获取账号信息
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>>;
    // 通过邮箱获取账号信息
    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>>;
    // 列出账号
    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse>;
    // 批量获取账号
    async fn get_accounts_by_ids(&self, ids: &[i64]) -> Result<Vec<Account>>;
    // 更新个人资料
    async fn update_account_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Account>>;
    // 更新密码哈希
    async fn update_account_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 整体替换角色集合
    async fn update_account_roles(&self, id: i64, roles: &[AccountRole])
    -> Result<Option<Account>>;
    // 更新账号状态（启用/停用、会员状态）
    async fn update_account_status(
        &self,
        id: i64,
        update: UpdateAccountStatusRequest,
    ) -> Result<Option<Account>>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计账号数量
    async fn count_accounts(&self) -> Result<u64>;

    /// 期刊管理方法
    // 创建期刊
    async fn create_journal(&self, req: CreateJournalRequest) -> Result<Journal>;
    // 通过ID获取期刊信息
    async fn get_journal_by_id(&self, id: i64) -> Result<Option<Journal>>;
    // 通过短名称获取期刊信息
    async fn get_journal_by_short_name(&self, short_name: &str) -> Result<Option<Journal>>;
    // 列出期刊
    async fn list_journals_with_pagination(
        &self,
        query: JournalListQuery,
    ) -> Result<JournalListResponse>;
    // 更新期刊信息
    async fn update_journal(
        &self,
        id: i64,
        update: UpdateJournalRequest,
    ) -> Result<Option<Journal>>;
    // 整体写回期刊（编辑团队、评审人名册的变更）
    async fn save_journal(&self, journal: &Journal) -> Result<()>;

    /// 会议管理方法
    // 创建会议
    async fn create_conference(&self, req: CreateConferenceRequest) -> Result<Conference>;
    // 通过ID获取会议信息
    async fn get_conference_by_id(&self, id: i64) -> Result<Option<Conference>>;
    // 列出会议
    async fn list_conferences_with_pagination(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse>;
    // 更新会议信息
    async fn update_conference(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>>;
    // 整体写回会议（程序委员会的变更）
    async fn save_conference(&self, conference: &Conference) -> Result<()>;

    /// 投稿管理方法
    // 创建投稿（自动生成唯一投稿编号）
    async fn create_submission(
        &self,
        submitted_by: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 通过ID获取投稿信息
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 列出投稿（编辑视角，可按状态/场所过滤）
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 列出某作者的投稿
    async fn list_submissions_by_author(
        &self,
        account_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 列出某负责编辑的投稿
    async fn list_submissions_by_editor(
        &self,
        editor_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 列出某评审人被指派的投稿
    async fn list_submissions_by_reviewer(
        &self,
        reviewer_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 整体写回投稿（状态、指派、决定的变更）
    async fn save_submission(&self, submission: &Submission) -> Result<()>;

    /// 评审管理方法
    // 创建评审草稿
    async fn create_review(&self, data: CreateReviewData) -> Result<Review>;
    // 通过ID获取评审信息
    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>>;
    // 通过指派ID获取评审信息
    async fn get_review_by_assignment_id(&self, assignment_id: &str) -> Result<Option<Review>>;
    // 列出某评审人的评审
    async fn list_reviews_by_reviewer(
        &self,
        reviewer_id: i64,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse>;
    // 列出某投稿的全部评审
    async fn list_reviews_by_submission(&self, submission_id: i64) -> Result<Vec<Review>>;
    // 整体写回评审
    async fn save_review(&self, review: &Review) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
