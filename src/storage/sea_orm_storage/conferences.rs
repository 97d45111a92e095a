use super::SeaOrmStorage;
use crate::entity::conferences::{ActiveModel, Column, Entity as Conferences};
use crate::errors::{Result, ScholarFlowError};
use crate::models::{
    PaginationInfo,
    conferences::{
        entities::{Conference, ConferenceLocation, ConferenceStatus},
        requests::{ConferenceListQuery, CreateConferenceRequest, UpdateConferenceRequest},
        responses::ConferenceListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建会议
    pub async fn create_conference_impl(&self, req: CreateConferenceRequest) -> Result<Conference> {
        let now = chrono::Utc::now().timestamp();
        let location = req.location.unwrap_or_else(ConferenceLocation::default);

        let model = ActiveModel {
            name: Set(req.name),
            short_name: Set(req.short_name.to_uppercase()),
            conference_type: Set(req.conference_type.to_string()),
            description: Set(req.description),
            start_date: Set(req.start_date.map(|d| d.timestamp())),
            end_date: Set(req.end_date.map(|d| d.timestamp())),
            submission_deadline: Set(req.submission_deadline.map(|d| d.timestamp())),
            review_deadline: Set(req.review_deadline.map(|d| d.timestamp())),
            notification_date: Set(req.notification_date.map(|d| d.timestamp())),
            location: Set(serde_json::to_string(&location)?),
            status: Set(ConferenceStatus::Planned.to_string()),
            chair: Set(req.chair),
            program_committee: Set("[]".to_string()),
            tracks: Set(serde_json::to_string(&req.tracks)?),
            min_reviewers_per_submission: Set(req.min_reviewers_per_submission.unwrap_or(2)),
            max_reviewers_per_submission: Set(req.max_reviewers_per_submission.unwrap_or(3)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ScholarFlowError::unique_violation(format!("会议短名称已存在: {e}"))
            } else {
                ScholarFlowError::database_operation(format!("创建会议失败: {e}"))
            }
        })?;

        Ok(result.into_conference())
    }

    /// 通过 ID 获取会议
    pub async fn get_conference_by_id_impl(&self, id: i64) -> Result<Option<Conference>> {
        let result = Conferences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询会议失败: {e}")))?;

        Ok(result.map(|m| m.into_conference()))
    }

    /// 分页列出会议
    pub async fn list_conferences_with_pagination_impl(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Conferences::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::ShortName.contains(&escaped)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        if let Some(conference_type) = query.conference_type {
            select = select.filter(Column::ConferenceType.eq(conference_type.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询会议总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询会议页数失败: {e}")))?;

        let conferences = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询会议列表失败: {e}")))?;

        Ok(ConferenceListResponse {
            items: conferences.into_iter().map(|m| m.into_conference()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新会议信息
    pub async fn update_conference_impl(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>> {
        if self.get_conference_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(Some(start_date.timestamp()));
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(Some(end_date.timestamp()));
        }
        if let Some(deadline) = update.submission_deadline {
            model.submission_deadline = Set(Some(deadline.timestamp()));
        }
        if let Some(deadline) = update.review_deadline {
            model.review_deadline = Set(Some(deadline.timestamp()));
        }
        if let Some(date) = update.notification_date {
            model.notification_date = Set(Some(date.timestamp()));
        }
        if let Some(location) = update.location {
            model.location = Set(serde_json::to_string(&location)?);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(chair) = update.chair {
            model.chair = Set(Some(chair));
        }
        if let Some(tracks) = update.tracks {
            model.tracks = Set(serde_json::to_string(&tracks)?);
        }
        if let Some(min) = update.min_reviewers_per_submission {
            model.min_reviewers_per_submission = Set(min);
        }
        if let Some(max) = update.max_reviewers_per_submission {
            model.max_reviewers_per_submission = Set(max);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新会议失败: {e}")))?;

        self.get_conference_by_id_impl(id).await
    }

    /// 整体写回会议（程序委员会）
    pub async fn save_conference_impl(&self, conference: &Conference) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(conference.id),
            status: Set(conference.status.to_string()),
            chair: Set(conference.chair),
            program_committee: Set(serde_json::to_string(&conference.program_committee)?),
            tracks: Set(serde_json::to_string(&conference.tracks)?),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("写回会议失败: {e}")))?;

        Ok(())
    }
}
