use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::conferences::requests::UpdateConferenceRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ConferenceService;

pub async fn handle_update_conference(
    service: &ConferenceService,
    conference_id: i64,
    update: UpdateConferenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let (Some(start), Some(end)) = (update.start_date, update.end_date)
        && end < start
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "End date cannot be earlier than start date",
        )));
    }

    if let Some(chair_id) = update.chair {
        match storage.get_account_by_id(chair_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AccountNotFound,
                    "Chair account not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to update conference: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_conference(conference_id, update).await {
        Ok(Some(conference)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            conference,
            "Conference updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConferenceNotFound,
            "Conference not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update conference: {e}"),
            )),
        ),
    }
}
