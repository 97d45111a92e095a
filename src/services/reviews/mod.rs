pub mod detail;
pub mod list;
pub mod submit;
pub mod update;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::reviews::entities::Review;
use crate::models::reviews::requests::{ReviewListQuery, UpdateReviewRequest, WithdrawReviewRequest};
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
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

    /// 评审人本人或编辑类角色可以查看评审报告
    pub(crate) fn can_view(review: &Review, request: &HttpRequest) -> bool {
        match RequireJWT::extract_account(request) {
            Some(Account { id, roles, .. }) => {
                review.reviewer_id == id
                    || roles
                        .iter()
                        .any(|r| AccountRole::editorial_roles().contains(r))
            }
            None => false,
        }
    }

    // 列出本人的评审
    pub async fn list_my_reviews(
        &self,
        query: ReviewListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_my_reviews(self, query, request).await
    }

    // 列出某投稿的全部评审（编辑视角）
    pub async fn list_reviews_for_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_reviews_for_submission(self, submission_id, request).await
    }

    // 获取评审详情
    pub async fn get_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_review(self, review_id, request).await
    }

    // 保存评审草稿
    pub async fn update_review(
        &self,
        review_id: i64,
        update: UpdateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_review(self, review_id, update, request).await
    }

    // 提交评审
    pub async fn submit_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_review(self, review_id, request).await
    }

    // 撤回评审
    pub async fn withdraw_review(
        &self,
        review_id: i64,
        req: WithdrawReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        withdraw::handle_withdraw_review(self, review_id, req, request).await
    }
}
