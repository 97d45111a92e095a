use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::conferences::entities::CommitteeRole;
use crate::models::conferences::requests::AddCommitteeMemberRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ConferenceService;

pub async fn handle_add_committee_member(
    service: &ConferenceService,
    conference_id: i64,
    req: AddCommitteeMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut conference = match storage.get_conference_by_id(conference_id).await {
        Ok(Some(conference)) => conference,
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
                    format!("Failed to retrieve conference: {e}"),
                )),
            );
        }
    };

    if !ConferenceService::can_manage_committee(&conference, request) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Only the conference chair or an administrator can manage the program committee",
        )));
    }

    match storage.get_account_by_id(req.account_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                "Committee member account not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add committee member: {e}"),
                )),
            );
        }
    }

    conference.add_committee_member(req.account_id, req.role.unwrap_or(CommitteeRole::Member));

    match storage.save_conference(&conference).await {
        Ok(()) => {
            tracing::info!(
                "Account {} added to program committee of {}",
                req.account_id,
                conference.short_name
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                conference,
                "Committee member added successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to add committee member: {e}"),
            )),
        ),
    }
}

pub async fn handle_remove_committee_member(
    service: &ConferenceService,
    conference_id: i64,
    account_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut conference = match storage.get_conference_by_id(conference_id).await {
        Ok(Some(conference)) => conference,
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
                    format!("Failed to retrieve conference: {e}"),
                )),
            );
        }
    };

    if !ConferenceService::can_manage_committee(&conference, request) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Only the conference chair or an administrator can manage the program committee",
        )));
    }

    if !conference.remove_committee_member(account_id) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account is not a member of the program committee",
        )));
    }

    match storage.save_conference(&conference).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            conference,
            "Committee member removed successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove committee member: {e}"),
            )),
        ),
    }
}
