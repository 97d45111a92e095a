use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::journals::requests::JournalListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::JournalService;

pub async fn handle_list_journals(
    service: &JournalService,
    query: JournalListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_journals_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Journal list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve journal list: {e}"),
            )),
        ),
    }
}
