use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ConferenceService;

pub async fn handle_get_conference(
    service: &ConferenceService,
    conference_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_conference_by_id(conference_id).await {
        Ok(Some(conference)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            conference,
            "Conference retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConferenceNotFound,
            "Conference not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve conference: {e}"),
            )),
        ),
    }
}
