use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::submissions::requests::UpdateStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

pub async fn handle_update_status(
    service: &SubmissionService,
    submission_id: i64,
    update: UpdateStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let changed_by = match RequireJWT::extract_account_id(request) {
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

    let from = submission.status;
    if !submission.transition_to(update.status, changed_by, update.note) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!("Cannot transition from {from} to {}", update.status),
        )));
    }

    match storage.save_submission(&submission).await {
        Ok(()) => {
            tracing::info!(
                "Submission {} moved from {} to {}",
                submission.submission_code,
                from,
                submission.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                submission,
                "Submission status updated successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update submission status: {e}"),
            )),
        ),
    }
}
