use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::submissions::entities::{
    AssignmentStatus, ReviewAssignment, SubmissionStatus, VenueType,
};
use crate::models::submissions::requests::AssignReviewerRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

// 允许邀请评审人的投稿状态
const INVITABLE_STATUSES: &[SubmissionStatus] = &[
    SubmissionStatus::Submitted,
    SubmissionStatus::UnderDeskReview,
    SubmissionStatus::UnderReview,
    SubmissionStatus::RevisionSubmitted,
];

pub async fn handle_assign_reviewer(
    service: &SubmissionService,
    submission_id: i64,
    req: AssignReviewerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

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

    if !INVITABLE_STATUSES.contains(&submission.status) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            format!(
                "Reviewers cannot be invited while the submission is {}",
                submission.status
            ),
        )));
    }

    // 1. 评审人账号必须存在且可用
    let now = chrono::Utc::now();
    match storage.get_account_by_id(req.reviewer_id).await {
        Ok(Some(reviewer)) => {
            if !reviewer.is_active || !reviewer.is_available_on(now) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Reviewer is not currently available",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                "Reviewer account not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to invite reviewer: {e}"),
                )),
            );
        }
    }

    // 2. 利益冲突：作者不能评审自己的投稿
    if submission.is_author(req.reviewer_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "An author cannot review their own submission",
        )));
    }

    // 3. 同一评审人不能有重复的活跃指派
    if submission.assignment_for(req.reviewer_id).is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ReviewerAlreadyAssigned,
            "Reviewer already has an active assignment for this submission",
        )));
    }

    // 4. 不超过场所允许的评审人上限
    let max_reviewers = match submission.venue_type {
        VenueType::Journal => match storage.get_journal_by_id(submission.venue_id).await {
            Ok(Some(journal)) => journal.publication_settings.max_reviewers_per_submission,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::JournalNotFound,
                    "Journal not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to invite reviewer: {e}"),
                    )),
                );
            }
        },
        VenueType::Conference => match storage.get_conference_by_id(submission.venue_id).await {
            Ok(Some(conference)) => conference.max_reviewers_per_submission,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ConferenceNotFound,
                    "Conference not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to invite reviewer: {e}"),
                    )),
                );
            }
        },
    };
    if submission.active_assignment_count() >= max_reviewers as usize {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "The maximum number of reviewers has been reached",
        )));
    }

    let assignment = ReviewAssignment {
        assignment_id: uuid::Uuid::new_v4().to_string(),
        reviewer_id: req.reviewer_id,
        status: AssignmentStatus::Invited,
        invited_at: now,
        responded_at: None,
        due_at: req
            .due_at
            .or_else(|| Some(now + chrono::Duration::days(config.review.invitation_due_days))),
        completed_at: None,
    };
    submission.review_assignments.push(assignment);

    match storage.save_submission(&submission).await {
        Ok(()) => {
            tracing::info!(
                "Reviewer {} invited to submission {}",
                req.reviewer_id,
                submission.submission_code
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(submission, "Reviewer invited successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to invite reviewer: {e}"),
            )),
        ),
    }
}
