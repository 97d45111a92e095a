pub mod assign_editor;
pub mod create;
pub mod decision;
pub mod detail;
pub mod list;
pub mod respond;
pub mod reviewers;
pub mod status;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::{
    AssignEditorRequest, AssignReviewerRequest, AssignmentResponseRequest, CreateSubmissionRequest,
    RecordDecisionRequest, SubmissionListQuery, UpdateStatusRequest,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    /// 作者、负责编辑、被指派的评审人以及编辑类角色可以查看投稿
    pub(crate) fn can_view(submission: &Submission, request: &HttpRequest) -> bool {
        match RequireJWT::extract_account(request) {
            Some(Account { id, roles, .. }) => {
                submission.is_author(id)
                    || submission.assigned_editor == Some(id)
                    || submission
                        .review_assignments
                        .iter()
                        .any(|a| a.reviewer_id == id)
                    || roles
                        .iter()
                        .any(|r| AccountRole::editorial_roles().contains(r))
            }
            None => false,
        }
    }

    /// 只有负责编辑本人，或主编/管理员角色，可以记录编辑决定
    pub(crate) fn can_decide(submission: &Submission, request: &HttpRequest) -> bool {
        match RequireJWT::extract_account(request) {
            Some(Account { id, roles, .. }) => {
                submission.assigned_editor == Some(id)
                    || roles
                        .iter()
                        .any(|r| AccountRole::venue_management_roles().contains(r))
            }
            None => false,
        }
    }

    // 创建投稿
    pub async fn create_submission(
        &self,
        req: CreateSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_submission(self, req, request).await
    }

    // 列出全部投稿（编辑视角）
    pub async fn list_submissions(
        &self,
        query: SubmissionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_submissions(self, query, request).await
    }

    // 列出本人投稿
    pub async fn list_my_submissions(
        &self,
        query: SubmissionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_my_submissions(self, query, request).await
    }

    // 列出本人作为负责编辑的投稿
    pub async fn list_assigned_submissions(
        &self,
        query: SubmissionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_assigned_submissions(self, query, request).await
    }

    // 列出本人被邀请评审的投稿
    pub async fn list_reviewing_submissions(
        &self,
        query: SubmissionListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_reviewing_submissions(self, query, request).await
    }

    // 获取投稿详情
    pub async fn get_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_submission(self, submission_id, request).await
    }

    // 推进投稿状态（编辑操作）
    pub async fn update_status(
        &self,
        submission_id: i64,
        update: UpdateStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::handle_update_status(self, submission_id, update, request).await
    }

    // 指派负责编辑
    pub async fn assign_editor(
        &self,
        submission_id: i64,
        req: AssignEditorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign_editor::handle_assign_editor(self, submission_id, req, request).await
    }

    // 邀请评审人
    pub async fn assign_reviewer(
        &self,
        submission_id: i64,
        req: AssignReviewerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reviewers::handle_assign_reviewer(self, submission_id, req, request).await
    }

    // 评审人答复邀请
    pub async fn respond_to_assignment(
        &self,
        submission_id: i64,
        assignment_id: String,
        req: AssignmentResponseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond::handle_respond_to_assignment(self, submission_id, assignment_id, req, request)
            .await
    }

    // 记录编辑决定
    pub async fn record_decision(
        &self,
        submission_id: i64,
        req: RecordDecisionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        decision::handle_record_decision(self, submission_id, req, request).await
    }

    // 作者撤稿
    pub async fn withdraw_submission(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        withdraw::handle_withdraw_submission(self, submission_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accounts::entities::{
        AcademicProfile, AccountType, MembershipStatus, ReviewerAvailability, ReviewerStatus,
    };
    use crate::models::submissions::entities::{SubmissionAuthor, SubmissionStatus, VenueType};
    use actix_web::HttpMessage;
    use chrono::Utc;

    fn account(id: i64, roles: Vec<AccountRole>) -> Account {
        let now = Utc::now();
        Account {
            id,
            first_name: "Mia".into(),
            last_name: "Chen".into(),
            email: format!("account{id}@example.com"),
            secondary_email: None,
            password_hash: String::new(),
            account_type: AccountType::Colleague,
            membership_status: MembershipStatus::Active,
            membership_expiry: None,
            is_active: true,
            profile: AcademicProfile::default(),
            topics_of_interest: vec![],
            is_reviewer: false,
            reviewer_status: ReviewerStatus::Pending,
            reviewer_availability: ReviewerAvailability::default(),
            roles,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn submission_with_editor(editor_id: i64) -> Submission {
        let now = Utc::now();
        Submission {
            id: 1,
            submission_code: "SUB-2026-0042".into(),
            title: "On Testing".into(),
            abstract_text: "A study.".into(),
            keywords: vec![],
            venue_type: VenueType::Journal,
            venue_id: 1,
            track: None,
            authors: vec![SubmissionAuthor {
                name: "Jo Li".into(),
                email: "jo@example.com".into(),
                affiliation: None,
                account_id: Some(5),
                is_corresponding: true,
            }],
            submitted_by: 5,
            assigned_editor: Some(editor_id),
            status: SubmissionStatus::AwaitingEditorDecision,
            status_history: vec![],
            review_assignments: vec![],
            decision: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn request_as(account: Account) -> HttpRequest {
        let req = actix_web::test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(account);
        req
    }

    #[actix_web::test]
    async fn test_assigned_editor_can_decide() {
        let submission = submission_with_editor(10);
        let req = request_as(account(10, vec![AccountRole::Editor]));
        assert!(SubmissionService::can_decide(&submission, &req));
    }

    #[actix_web::test]
    async fn test_unrelated_editor_cannot_decide() {
        let submission = submission_with_editor(10);
        let req = request_as(account(11, vec![AccountRole::Editor]));
        assert!(!SubmissionService::can_decide(&submission, &req));
    }

    #[actix_web::test]
    async fn test_editor_in_chief_can_decide_any_submission() {
        let submission = submission_with_editor(10);
        let req = request_as(account(12, vec![AccountRole::EditorInChief]));
        assert!(SubmissionService::can_decide(&submission, &req));
    }

    #[actix_web::test]
    async fn test_anonymous_request_cannot_decide() {
        let submission = submission_with_editor(10);
        let req = actix_web::test::TestRequest::default().to_http_request();
        assert!(!SubmissionService::can_decide(&submission, &req));
    }
}
