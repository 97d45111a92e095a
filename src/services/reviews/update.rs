use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::reviews::requests::UpdateReviewRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ReviewService;

/// 保存评审草稿；只有草稿状态可编辑，且只能由评审人本人操作。
pub async fn handle_update_review(
    service: &ReviewService,
    review_id: i64,
    update: UpdateReviewRequest,
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
    if !review.is_editable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Only a draft review can be edited",
        )));
    }

    if let Some(ratings) = &update.ratings
        && !ratings.all_in_range()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Ratings must be between 1 and 5",
        )));
    }

    if let Some(responses) = update.responses {
        review.responses = responses;
    }
    if let Some(assessment) = update.assessment {
        review.assessment = assessment;
    }
    if let Some(ratings) = update.ratings {
        review.ratings = ratings;
    }

    match storage.save_review(&review).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(review, "Review draft saved successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save review draft: {e}"),
            )),
        ),
    }
}
