pub mod available_reviewers;
pub mod create;
pub mod detail;
pub mod list;
pub mod team;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::journals::entities::Journal;
use crate::models::journals::requests::{
    AddAssociateEditorRequest, AddJournalReviewerRequest, AvailableReviewersQuery,
    CreateJournalRequest, JournalListQuery, UpdateJournalRequest,
};
use crate::storage::Storage;

pub struct JournalService {
    storage: Option<Arc<dyn Storage>>,
}

impl JournalService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 主编本人或管理角色才能管理期刊团队
    pub(crate) fn can_manage_team(journal: &Journal, request: &HttpRequest) -> bool {
        match RequireJWT::extract_account(request) {
            Some(Account { id, roles, .. }) => {
                journal.editor_in_chief == Some(id)
                    || roles
                        .iter()
                        .any(|r| AccountRole::admin_roles().contains(r))
            }
            None => false,
        }
    }

    // 创建期刊
    pub async fn create_journal(
        &self,
        req: CreateJournalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_journal(self, req, request).await
    }

    // 列出期刊
    pub async fn list_journals(
        &self,
        query: JournalListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_journals(self, query, request).await
    }

    // 获取期刊详情
    pub async fn get_journal(
        &self,
        journal_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_journal(self, journal_id, request).await
    }

    // 更新期刊信息
    pub async fn update_journal(
        &self,
        journal_id: i64,
        update: UpdateJournalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_journal(self, journal_id, update, request).await
    }

    // 加入评审人名册
    pub async fn add_reviewer(
        &self,
        journal_id: i64,
        req: AddJournalReviewerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        team::handle_add_reviewer(self, journal_id, req, request).await
    }

    // 从评审人名册移除
    pub async fn remove_reviewer(
        &self,
        journal_id: i64,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        team::handle_remove_reviewer(self, journal_id, account_id, request).await
    }

    // 任命副编辑
    pub async fn add_associate_editor(
        &self,
        journal_id: i64,
        req: AddAssociateEditorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        team::handle_add_associate_editor(self, journal_id, req, request).await
    }

    // 解除副编辑
    pub async fn remove_associate_editor(
        &self,
        journal_id: i64,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        team::handle_remove_associate_editor(self, journal_id, account_id, request).await
    }

    // 查询名册中当前可接受指派的评审人
    pub async fn available_reviewers(
        &self,
        journal_id: i64,
        query: AvailableReviewersQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        available_reviewers::handle_available_reviewers(self, journal_id, query, request).await
    }
}
