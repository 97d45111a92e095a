use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::reviews::requests::WithdrawReviewRequest;
use crate::models::submissions::entities::AssignmentStatus;
use crate::models::{ApiResponse, ErrorCode};

use super::ReviewService;

/// 撤回评审报告，同时释放对应的指派名额。
pub async fn handle_withdraw_review(
    service: &ReviewService,
    review_id: i64,
    req: WithdrawReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let reviewer_id = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let mut review = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "Review not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve review: {e}"),
                )),
            );
        }
    };

    if review.reviewer_id != reviewer_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Access denied.",
        )));
    }

    if !review.withdraw(req.reason) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "The review has already been withdrawn",
        )));
    }

    if let Err(e) = storage.save_review(&review).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to withdraw review: {e}"),
            )),
        );
    }

    // 对应指派同步标记为撤回
    match storage.get_submission_by_id(review.submission_id).await {
        Ok(Some(mut submission)) => {
            if let Some(assignment) = submission.assignment_by_id_mut(&review.assignment_id) {
                assignment.status = AssignmentStatus::Withdrawn;
            }
            if let Err(e) = storage.save_submission(&submission).await {
                tracing::error!(
                    "Failed to update assignment after review {} withdrawal: {}",
                    review.id,
                    e
                );
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "Failed to load submission {} after review withdrawal: {}",
                review.submission_id,
                e
            );
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(review, "Review withdrawn successfully")))
}
