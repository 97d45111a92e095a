use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

/// 作者主动撤稿。
pub async fn handle_withdraw_submission(
    service: &SubmissionService,
    submission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account_id = match RequireJWT::extract_account_id(request) {
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

    if !submission.is_author(account_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Only an author can withdraw the submission",
        )));
    }

    let from = submission.status;
    if !submission.transition_to(SubmissionStatus::Withdrawn, account_id, None) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!("Cannot withdraw a submission that is {from}"),
        )));
    }

    match storage.save_submission(&submission).await {
        Ok(()) => {
            tracing::info!("Submission {} withdrawn", submission.submission_code);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                submission,
                "Submission withdrawn successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to withdraw submission: {e}"),
            )),
        ),
    }
}
