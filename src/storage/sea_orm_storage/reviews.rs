use super::SeaOrmStorage;
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::errors::{Result, ScholarFlowError};
use crate::models::{
    PaginationInfo,
    reviews::{
        entities::{OverallAssessment, Review, ReviewRatings, ReviewStatus},
        requests::{CreateReviewData, ReviewListQuery},
        responses::ReviewListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建评审草稿
    pub async fn create_review_impl(&self, data: CreateReviewData) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            submission_id: Set(data.submission_id),
            assignment_id: Set(data.assignment_id),
            reviewer_id: Set(data.reviewer_id),
            status: Set(ReviewStatus::Draft.to_string()),
            responses: Set("[]".to_string()),
            assessment: Set(serde_json::to_string(&OverallAssessment::default())?),
            ratings: Set(serde_json::to_string(&ReviewRatings::default())?),
            started_at: Set(now),
            last_saved_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ScholarFlowError::unique_violation(format!("该指派已存在评审记录: {e}"))
            } else {
                ScholarFlowError::database_operation(format!("创建评审失败: {e}"))
            }
        })?;

        Ok(result.into_review())
    }

    /// 通过 ID 获取评审
    pub async fn get_review_by_id_impl(&self, id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 通过指派 ID 获取评审
    pub async fn get_review_by_assignment_id_impl(
        &self,
        assignment_id: &str,
    ) -> Result<Option<Review>> {
        let result = Reviews::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 分页列出某评审人的评审
    pub async fn list_reviews_by_reviewer_impl(
        &self,
        reviewer_id: i64,
        query: ReviewListQuery,
    ) -> Result<ReviewListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Reviews::find().filter(Column::ReviewerId.eq(reviewer_id));

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(submission_id) = query.submission_id {
            select = select.filter(Column::SubmissionId.eq(submission_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审页数失败: {e}")))?;

        let reviews = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审列表失败: {e}")))?;

        Ok(ReviewListResponse {
            items: reviews.into_iter().map(|m| m.into_review()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出某投稿的全部评审
    pub async fn list_reviews_by_submission_impl(&self, submission_id: i64) -> Result<Vec<Review>> {
        let result = Reviews::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询评审列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_review()).collect())
    }

    /// 整体写回评审
    pub async fn save_review_impl(&self, review: &Review) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(review.id),
            status: Set(review.status.to_string()),
            responses: Set(serde_json::to_string(&review.responses)?),
            assessment: Set(serde_json::to_string(&review.assessment)?),
            ratings: Set(serde_json::to_string(&review.ratings)?),
            submitted_at: Set(review.process.submitted_at.map(|d| d.timestamp())),
            last_saved_at: Set(now),
            withdrawal_reason: Set(review.withdrawal_reason.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("写回评审失败: {e}")))?;

        Ok(())
    }
}
