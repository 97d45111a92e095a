use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::submissions::entities::VenueType;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

use super::SubmissionService;

pub async fn handle_create_submission(
    service: &SubmissionService,
    req: CreateSubmissionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submitted_by = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 1. 基本字段校验
    if req.title.trim().is_empty() || req.abstract_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Title and abstract cannot be empty",
        )));
    }

    // 2. 作者列表非空且恰好一位通讯作者
    if req.authors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "At least one author is required",
        )));
    }
    let corresponding = req.authors.iter().filter(|a| a.is_corresponding).count();
    if corresponding != 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Exactly one corresponding author is required",
        )));
    }
    for author in &req.authors {
        if let Err(msg) = validate_email(&author.email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }
    }

    // 3. 目标场所必须存在且正在接受投稿
    let now = chrono::Utc::now();
    let venue_open = match req.venue_type {
        VenueType::Journal => match storage.get_journal_by_id(req.venue_id).await {
            Ok(Some(journal)) => {
                journal.is_active && journal.publication_settings.is_accepting_submissions
            }
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
                        format!("Failed to create submission: {e}"),
                    )),
                );
            }
        },
        VenueType::Conference => match storage.get_conference_by_id(req.venue_id).await {
            Ok(Some(conference)) => conference.is_accepting_submissions(now),
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
                        format!("Failed to create submission: {e}"),
                    )),
                );
            }
        },
    };
    if !venue_open {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::VenueClosed,
            "The venue is not accepting submissions",
        )));
    }

    match storage.create_submission(submitted_by, req).await {
        Ok(submission) => {
            tracing::info!(
                "Submission {} created by account {}",
                submission.submission_code,
                submitted_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                submission,
                "Submission created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create submission: {e}"),
            )),
        ),
    }
}
