use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::journals::requests::UpdateJournalRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::JournalService;

pub async fn handle_update_journal(
    service: &JournalService,
    journal_id: i64,
    update: UpdateJournalRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 新主编必须是已有账号
    if let Some(editor_id) = update.editor_in_chief {
        match storage.get_account_by_id(editor_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AccountNotFound,
                    "Editor-in-chief account not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to update journal: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_journal(journal_id, update).await {
        Ok(Some(journal)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            journal,
            "Journal updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JournalNotFound,
            "Journal not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update journal: {e}"),
            )),
        ),
    }
}
