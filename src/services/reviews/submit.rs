use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::submissions::entities::{AssignmentStatus, SubmissionStatus, VenueType};
use crate::models::{ApiResponse, ErrorCode};

use super::ReviewService;

/// 提交评审报告。
///
/// 提交后对应的指派记为已完成；当已完成的评审数达到场所要求的
/// 最低评审人数时，投稿自动从 under_review 推进到 review_completed。
pub async fn handle_submit_review(
    service: &ReviewService,
    review_id: i64,
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

    // 提交前建议与把握程度必须给出
    if review.assessment.recommendation.is_none() || review.assessment.confidence.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "A recommendation and a confidence level are required before submitting",
        )));
    }

    if !review.submit() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Only a draft review can be submitted",
        )));
    }

    if let Err(e) = storage.save_review(&review).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to submit review: {e}"),
            )),
        );
    }

    // 把对应指派标记为已完成，并视情况推进投稿状态
    if let Err(e) = complete_assignment(service, &review, reviewer_id, request).await {
        tracing::error!(
            "Failed to update assignment after review {} submission: {}",
            review.id,
            e
        );
    }

    tracing::info!(
        "Review {} for submission {} submitted",
        review.id,
        review.submission_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(review, "Review submitted successfully")))
}

async fn complete_assignment(
    service: &ReviewService,
    review: &crate::models::reviews::entities::Review,
    reviewer_id: i64,
    request: &HttpRequest,
) -> crate::errors::Result<()> {
    let storage = service.get_storage(request);

    let Some(mut submission) = storage.get_submission_by_id(review.submission_id).await? else {
        return Ok(());
    };

    let now = chrono::Utc::now();
    if let Some(assignment) = submission.assignment_by_id_mut(&review.assignment_id) {
        assignment.status = AssignmentStatus::Completed;
        assignment.completed_at = Some(now);
    }

    let min_reviewers = match submission.venue_type {
        VenueType::Journal => storage
            .get_journal_by_id(submission.venue_id)
            .await?
            .map(|j| j.publication_settings.min_reviewers_per_submission)
            .unwrap_or(1),
        VenueType::Conference => storage
            .get_conference_by_id(submission.venue_id)
            .await?
            .map(|c| c.min_reviewers_per_submission)
            .unwrap_or(1),
    };

    if submission.status == SubmissionStatus::UnderReview
        && submission.completed_assignment_count() >= min_reviewers as usize
    {
        submission.transition_to(SubmissionStatus::ReviewCompleted, reviewer_id, None);
    }

    storage.save_submission(&submission).await
}
