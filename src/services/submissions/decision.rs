use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::submissions::entities::{DecisionRecord, EditorialDecision, SubmissionStatus};
use crate::models::submissions::requests::RecordDecisionRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

/// 记录编辑决定并把投稿推进到对应的结果状态。
pub async fn handle_record_decision(
    service: &SubmissionService,
    submission_id: i64,
    req: RecordDecisionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let decided_by = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let mut submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve submission: {e}"),
                )),
            );
        }
    };

    if !SubmissionService::can_decide(&submission, request) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Only the assigned editor or an editor-in-chief can record a decision",
        )));
    }

    if submission.status != SubmissionStatus::AwaitingEditorDecision {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!(
                "A decision cannot be recorded while the submission is {}",
                submission.status
            ),
        )));
    }

    let now = chrono::Utc::now();
    submission.decision = Some(DecisionRecord {
        decision: req.decision,
        decided_by,
        comments: req.comments.clone(),
        decided_at: now,
    });

    // awaiting_editor_decision -> decision_made -> 决定对应的结果状态
    submission.transition_to(SubmissionStatus::DecisionMade, decided_by, req.comments);
    let outcome = match req.decision {
        EditorialDecision::Accept => SubmissionStatus::Accepted,
        EditorialDecision::AcceptWithMinorRevisions | EditorialDecision::ReviseAndResubmit => {
            SubmissionStatus::RevisionRequested
        }
        EditorialDecision::Reject => SubmissionStatus::Rejected,
    };
    submission.transition_to(outcome, decided_by, None);

    match storage.save_submission(&submission).await {
        Ok(()) => {
            tracing::info!(
                "Decision {:?} recorded for submission {}",
                req.decision,
                submission.submission_code
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(submission, "Decision recorded successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record decision: {e}"),
            )),
        ),
    }
}
