//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod conferences;
mod journals;
mod reviews;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{Result, ScholarFlowError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ScholarFlowError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ScholarFlowError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ScholarFlowError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ScholarFlowError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_account(&self, data: CreateAccountData) -> Result<Account> {
        self.create_account_impl(data).await
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.get_account_by_id_impl(id).await
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.get_account_by_email_impl(email).await
    }

    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        self.list_accounts_with_pagination_impl(query).await
    }

    async fn get_accounts_by_ids(&self, ids: &[i64]) -> Result<Vec<Account>> {
        self.get_accounts_by_ids_impl(ids).await
    }

    async fn update_account_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Account>> {
        self.update_account_profile_impl(id, update).await
    }

    async fn update_account_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_account_password_impl(id, password_hash).await
    }

    async fn update_account_roles(
        &self,
        id: i64,
        roles: &[AccountRole],
    ) -> Result<Option<Account>> {
        self.update_account_roles_impl(id, roles).await
    }

    async fn update_account_status(
        &self,
        id: i64,
        update: UpdateAccountStatusRequest,
    ) -> Result<Option<Account>> {
        self.update_account_status_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_accounts(&self) -> Result<u64> {
        self.count_accounts_impl().await
    }

    // 期刊模块
    async fn create_journal(&self, req: CreateJournalRequest) -> Result<Journal> {
        self.create_journal_impl(req).await
    }

    async fn get_journal_by_id(&self, id: i64) -> Result<Option<Journal>> {
        self.get_journal_by_id_impl(id).await
    }

    async fn get_journal_by_short_name(&self, short_name: &str) -> Result<Option<Journal>> {
        self.get_journal_by_short_name_impl(short_name).await
    }

    async fn list_journals_with_pagination(
        &self,
        query: JournalListQuery,
    ) -> Result<JournalListResponse> {
        self.list_journals_with_pagination_impl(query).await
    }

    async fn update_journal(
        &self,
        id: i64,
        update: UpdateJournalRequest,
    ) -> Result<Option<Journal>> {
        self.update_journal_impl(id, update).await
    }

    async fn save_journal(&self, journal: &Journal) -> Result<()> {
        self.save_journal_impl(journal).await
    }

    // 会议模块
    async fn create_conference(&self, req: CreateConferenceRequest) -> Result<Conference> {
        self.create_conference_impl(req).await
    }

    async fn get_conference_by_id(&self, id: i64) -> Result<Option<Conference>> {
        self.get_conference_by_id_impl(id).await
    }

    async fn list_conferences_with_pagination(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse> {
        self.list_conferences_with_pagination_impl(query).await
    }

    async fn update_conference(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>> {
        self.update_conference_impl(id, update).await
    }

    async fn save_conference(&self, conference: &Conference) -> Result<()> {
        self.save_conference_impl(conference).await
    }

    // 投稿模块
    async fn create_submission(
        &self,
        submitted_by: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(submitted_by, req).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn list_submissions_by_author(
        &self,
        account_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_by_author_impl(account_id, query).await
    }

    async fn list_submissions_by_editor(
        &self,
        editor_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_by_editor_impl(editor_id, query).await
    }

    async fn list_submissions_by_reviewer(
        &self,
        reviewer_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_by_reviewer_impl(reviewer_id, query)
            .await
    }

    async fn save_submission(&self, submission: &Submission) -> Result<()> {
        self.save_submission_impl(submission).await
    }

    // 评审模块
    async fn create_review(&self, data: CreateReviewData) -> Result<Review> {
        self.create_review_impl(data).await
    }

    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(id).await
    }

    async fn get_review_by_assignment_id(&self, assignment_id: &str) -> Result<Option<Review>> {
        self.get_review_by_assignment_id_impl(assignment_id).await
    }

    async fn list_reviews_by_reviewer(
        &self,
        reviewer_id: i64,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        self.list_reviews_by_reviewer_impl(reviewer_id, query).await
    }

    async fn list_reviews_by_submission(&self, submission_id: i64) -> Result<Vec<Review>> {
        self.list_reviews_by_submission_impl(submission_id).await
    }

    async fn save_review(&self, review: &Review) -> Result<()> {
        self.save_review_impl(review).await
    }
}

#[cfg(test)]
impl SeaOrmStorage {
    /// 测试用内存数据库，单连接以保证共享同一个库
    pub(crate) async fn new_in_memory() -> Self {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt)
            .await
            .expect("Failed to open in-memory SQLite");
        Migrator::up(&db, None).await.expect("Failed to run migrations");
        Self { db }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accounts::entities::AccountType;
    use crate::models::submissions::entities::{SubmissionAuthor, VenueType};

    fn account_data(first_name: &str, email: &str) -> CreateAccountData {
        CreateAccountData {
            first_name: first_name.to_string(),
            last_name: "Chen".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            account_type: AccountType::Colleague,
            roles: vec![],
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let storage = SeaOrmStorage::new_in_memory().await;

        storage
            .create_account_impl(account_data("Mia", "mia@example.com"))
            .await
            .expect("first create should succeed");

        // 邮箱统一小写存储，大小写不同也视为重复
        let duplicate = storage
            .create_account_impl(account_data("Mia2", "Mia@Example.com"))
            .await;
        assert!(duplicate.is_err());

        let count = storage.count_accounts_impl().await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_submission_codes_stay_unique_across_sequential_creates() {
        let storage = SeaOrmStorage::new_in_memory().await;
        let author = storage
            .create_account_impl(account_data("Jo", "jo@example.com"))
            .await
            .unwrap();

        let mut codes = std::collections::HashSet::new();
        for i in 0..20 {
            let submission = storage
                .create_submission_impl(
                    author.id,
                    CreateSubmissionRequest {
                        title: format!("Paper {i}"),
                        abstract_text: "A study.".to_string(),
                        keywords: vec![],
                        venue_type: VenueType::Journal,
                        venue_id: 1,
                        track: None,
                        authors: vec![SubmissionAuthor {
                            name: "Jo Chen".to_string(),
                            email: "jo@example.com".to_string(),
                            affiliation: None,
                            account_id: Some(author.id),
                            is_corresponding: true,
                        }],
                    },
                )
                .await
                .unwrap();

            assert!(
                codes.insert(submission.submission_code.clone()),
                "duplicate submission code {}",
                submission.submission_code
            );
        }
        assert_eq!(codes.len(), 20);
    }
}
