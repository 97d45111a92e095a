use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::reviews::requests::CreateReviewData;
use crate::models::submissions::entities::AssignmentStatus;
use crate::models::submissions::requests::AssignmentResponseRequest;
use crate::models::submissions::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

/// 评审人对邀请的答复；接受时自动建立评审草稿。
pub async fn handle_respond_to_assignment(
    service: &SubmissionService,
    submission_id: i64,
    assignment_id: String,
    req: AssignmentResponseRequest,
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

    let accepted = match req.response.as_str() {
        "accept" => true,
        "decline" => false,
        other => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidAssignmentResponse,
                format!("Invalid assignment response: {other}"),
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

    let now = chrono::Utc::now();
    match submission.assignment_by_id_mut(&assignment_id) {
        Some(assignment) => {
            // 只能答复自己的、仍处于邀请状态的指派
            if assignment.reviewer_id != reviewer_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    "Access denied.",
                )));
            }
            if assignment.status != AssignmentStatus::Invited {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidAssignmentResponse,
                    "The invitation has already been responded to",
                )));
            }
            assignment.status = if accepted {
                AssignmentStatus::Accepted
            } else {
                AssignmentStatus::Declined
            };
            assignment.responded_at = Some(now);
        }
        None => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
    }

    if let Err(e) = storage.save_submission(&submission).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to respond to assignment: {e}"),
            )),
        );
    }

    // 接受邀请后建立评审草稿
    if accepted
        && let Err(e) = storage
            .create_review(CreateReviewData {
                submission_id: submission.id,
                assignment_id: assignment_id.clone(),
                reviewer_id,
            })
            .await
    {
        tracing::error!(
            "Failed to create review draft for assignment {}: {}",
            assignment_id,
            e
        );
    }

    let assignment = submission
        .review_assignments
        .iter()
        .find(|a| a.assignment_id == assignment_id)
        .cloned();

    match assignment {
        Some(assignment) => {
            tracing::info!(
                "Reviewer {} {} invitation {} on submission {}",
                reviewer_id,
                if accepted { "accepted" } else { "declined" },
                assignment_id,
                submission.submission_code
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentResponse {
                    submission_id: submission.id,
                    assignment,
                },
                "Assignment response recorded successfully",
            )))
        }
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
    }
}
