use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{Result, ScholarFlowError};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{CreateSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use crate::utils::submission_code::generate_submission_code;
use chrono::Datelike;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建投稿，自动生成唯一投稿编号
    ///
    /// 编号由唯一索引保证，冲突时重新生成，重试次数有上限。
    pub async fn create_submission_impl(
        &self,
        submitted_by: i64,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let config = AppConfig::get();
        let year = chrono::Utc::now().year();
        let max_retries = config.review.submission_id_max_retries;

        for attempt in 1..=max_retries {
            let code = generate_submission_code(year);
            let now = chrono::Utc::now().timestamp();

            let model = ActiveModel {
                submission_code: Set(code.clone()),
                title: Set(req.title.clone()),
                abstract_text: Set(req.abstract_text.clone()),
                keywords: Set(serde_json::to_string(&req.keywords)?),
                venue_type: Set(req.venue_type.to_string()),
                venue_id: Set(req.venue_id),
                track: Set(req.track.clone()),
                authors: Set(serde_json::to_string(&req.authors)?),
                submitted_by: Set(submitted_by),
                status: Set(SubmissionStatus::Submitted.to_string()),
                status_history: Set("[]".to_string()),
                review_assignments: Set("[]".to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(result) => return Ok(result.into_submission()),
                Err(e) if e.to_string().contains("UNIQUE") => {
                    warn!("投稿编号冲突，重试 ({attempt}/{max_retries}): {code}");
                    continue;
                }
                Err(e) => {
                    return Err(ScholarFlowError::database_operation(format!(
                        "创建投稿失败: {e}"
                    )));
                }
            }
        }

        Err(ScholarFlowError::identifier_exhausted(format!(
            "投稿编号生成重试 {max_retries} 次仍然冲突"
        )))
    }

    /// 通过 ID 获取投稿
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询投稿失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 分页列出投稿（编辑视角）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.paginate_submissions(Submissions::find(), query).await
    }

    /// 列出某作者的投稿
    pub async fn list_submissions_by_author_impl(
        &self,
        account_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let select = Submissions::find().filter(Column::SubmittedBy.eq(account_id));
        self.paginate_submissions(select, query).await
    }

    /// 列出某负责编辑的投稿
    pub async fn list_submissions_by_editor_impl(
        &self,
        editor_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let select = Submissions::find().filter(Column::AssignedEditor.eq(editor_id));
        self.paginate_submissions(select, query).await
    }

    /// 列出某评审人被指派的投稿
    ///
    /// 指派存储在 JSON 列中，按 `"reviewer_id":N,` 模式做包含匹配，
    /// 结尾的逗号避免 2 误匹配 20。
    pub async fn list_submissions_by_reviewer_impl(
        &self,
        reviewer_id: i64,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let pattern = format!("\"reviewer_id\":{reviewer_id},");
        let select = Submissions::find().filter(Column::ReviewAssignments.contains(&pattern));
        self.paginate_submissions(select, query).await
    }

    async fn paginate_submissions(
        &self,
        mut select: Select<Submissions>,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::SubmissionCode.contains(&escaped)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(venue_type) = query.venue_type {
            select = select.filter(Column::VenueType.eq(venue_type.to_string()));
        }

        if let Some(venue_id) = query.venue_id {
            select = select.filter(Column::VenueId.eq(venue_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询投稿总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询投稿页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询投稿列表失败: {e}")))?;

        Ok(SubmissionListResponse {
            items: submissions.into_iter().map(|m| m.into_submission()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 整体写回投稿（状态、指派、编辑、决定）
    pub async fn save_submission_impl(&self, submission: &Submission) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let decision = submission
            .decision
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let model = ActiveModel {
            id: Set(submission.id),
            title: Set(submission.title.clone()),
            abstract_text: Set(submission.abstract_text.clone()),
            keywords: Set(serde_json::to_string(&submission.keywords)?),
            authors: Set(serde_json::to_string(&submission.authors)?),
            assigned_editor: Set(submission.assigned_editor),
            status: Set(submission.status.to_string()),
            status_history: Set(serde_json::to_string(&submission.status_history)?),
            review_assignments: Set(serde_json::to_string(&submission.review_assignments)?),
            decision: Set(decision),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("写回投稿失败: {e}")))?;

        Ok(())
    }
}
