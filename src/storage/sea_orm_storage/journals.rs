use super::SeaOrmStorage;
use crate::entity::journals::{ActiveModel, Column, Entity as Journals};
use crate::errors::{Result, ScholarFlowError};
use crate::models::{
    PaginationInfo,
    journals::{
        entities::{Journal, PublicationSettings},
        requests::{CreateJournalRequest, JournalListQuery, UpdateJournalRequest},
        responses::JournalListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建期刊
    pub async fn create_journal_impl(&self, req: CreateJournalRequest) -> Result<Journal> {
        let now = chrono::Utc::now().timestamp();
        let settings = req.publication_settings.unwrap_or_default();
        let template = req.review_form_template.unwrap_or_default();

        let model = ActiveModel {
            title: Set(req.title),
            // 短名称统一大写存储
            short_name: Set(req.short_name.to_uppercase()),
            description: Set(req.description),
            issn: Set(req.issn),
            publisher: Set(req.publisher),
            subject_areas: Set(serde_json::to_string(&req.subject_areas)?),
            editor_in_chief: Set(req.editor_in_chief),
            associate_editors: Set("[]".to_string()),
            reviewers: Set("[]".to_string()),
            publication_settings: Set(serde_json::to_string(&settings)?),
            review_form_template: Set(serde_json::to_string(&template)?),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                ScholarFlowError::unique_violation(format!("期刊短名称已存在: {e}"))
            } else {
                ScholarFlowError::database_operation(format!("创建期刊失败: {e}"))
            }
        })?;

        Ok(result.into_journal())
    }

    /// 通过 ID 获取期刊
    pub async fn get_journal_by_id_impl(&self, id: i64) -> Result<Option<Journal>> {
        let result = Journals::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询期刊失败: {e}")))?;

        Ok(result.map(|m| m.into_journal()))
    }

    /// 通过短名称获取期刊
    pub async fn get_journal_by_short_name_impl(&self, short_name: &str) -> Result<Option<Journal>> {
        let result = Journals::find()
            .filter(Column::ShortName.eq(short_name.to_uppercase()))
            .one(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询期刊失败: {e}")))?;

        Ok(result.map(|m| m.into_journal()))
    }

    /// 分页列出期刊
    pub async fn list_journals_with_pagination_impl(
        &self,
        query: JournalListQuery,
    ) -> Result<JournalListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Journals::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::ShortName.contains(&escaped)),
            );
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 学科领域列是 JSON 数组文本，用包含匹配
        if let Some(ref area) = query.subject_area {
            let escaped = escape_like_pattern(area.trim());
            select = select.filter(Column::SubjectAreas.contains(format!("\"{escaped}\"")));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询期刊总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询期刊页数失败: {e}")))?;

        let journals = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("查询期刊列表失败: {e}")))?;

        Ok(JournalListResponse {
            items: journals.into_iter().map(|m| m.into_journal()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新期刊信息
    pub async fn update_journal_impl(
        &self,
        id: i64,
        update: UpdateJournalRequest,
    ) -> Result<Option<Journal>> {
        if self.get_journal_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(issn) = update.issn {
            model.issn = Set(Some(issn));
        }
        if let Some(publisher) = update.publisher {
            model.publisher = Set(Some(publisher));
        }
        if let Some(areas) = update.subject_areas {
            model.subject_areas = Set(serde_json::to_string(&areas)?);
        }
        if let Some(eic) = update.editor_in_chief {
            model.editor_in_chief = Set(Some(eic));
        }
        if let Some(settings) = update.publication_settings {
            let settings: PublicationSettings = settings;
            model.publication_settings = Set(serde_json::to_string(&settings)?);
        }
        if let Some(template) = update.review_form_template {
            model.review_form_template = Set(serde_json::to_string(&template)?);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("更新期刊失败: {e}")))?;

        self.get_journal_by_id_impl(id).await
    }

    /// 整体写回期刊（编辑团队与评审人名册）
    pub async fn save_journal_impl(&self, journal: &Journal) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(journal.id),
            editor_in_chief: Set(journal.editor_in_chief),
            associate_editors: Set(serde_json::to_string(&journal.associate_editors)?),
            reviewers: Set(serde_json::to_string(&journal.reviewers)?),
            publication_settings: Set(serde_json::to_string(&journal.publication_settings)?),
            is_active: Set(journal.is_active),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ScholarFlowError::database_operation(format!("写回期刊失败: {e}")))?;

        Ok(())
    }
}
