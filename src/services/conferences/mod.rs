pub mod committee;
pub mod create;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::conferences::entities::Conference;
use crate::models::conferences::requests::{
    AddCommitteeMemberRequest, ConferenceListQuery, CreateConferenceRequest,
    UpdateConferenceRequest,
};
use crate::storage::Storage;

pub struct ConferenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConferenceService {
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

    /// 会议主席本人或管理角色才能管理程序委员会
    pub(crate) fn can_manage_committee(conference: &Conference, request: &HttpRequest) -> bool {
        match RequireJWT::extract_account(request) {
            Some(Account { id, roles, .. }) => {
                conference.chair == Some(id)
                    || roles
                        .iter()
                        .any(|r| AccountRole::admin_roles().contains(r))
            }
            None => false,
        }
    }

    // 创建会议
    pub async fn create_conference(
        &self,
        req: CreateConferenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_conference(self, req, request).await
    }

    // 列出会议
    pub async fn list_conferences(
        &self,
        query: ConferenceListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_conferences(self, query, request).await
    }

    // 获取会议详情
    pub async fn get_conference(
        &self,
        conference_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_conference(self, conference_id, request).await
    }

    // 更新会议信息
    pub async fn update_conference(
        &self,
        conference_id: i64,
        update: UpdateConferenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_conference(self, conference_id, update, request).await
    }

    // 加入程序委员会
    pub async fn add_committee_member(
        &self,
        conference_id: i64,
        req: AddCommitteeMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        committee::handle_add_committee_member(self, conference_id, req, request).await
    }

    // 移出程序委员会
    pub async fn remove_committee_member(
        &self,
        conference_id: i64,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        committee::handle_remove_committee_member(self, conference_id, account_id, request).await
    }
}
