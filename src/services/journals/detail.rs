use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::JournalService;

pub async fn handle_get_journal(
    service: &JournalService,
    journal_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_journal_by_id(journal_id).await {
        Ok(Some(journal)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            journal,
            "Journal retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JournalNotFound,
            "Journal not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve journal: {e}"),
            )),
        ),
    }
}
