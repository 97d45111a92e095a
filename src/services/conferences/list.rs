use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::conferences::requests::ConferenceListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::ConferenceService;

pub async fn handle_list_conferences(
    service: &ConferenceService,
    query: ConferenceListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_conferences_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Conference list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve conference list: {e}"),
            )),
        ),
    }
}
