use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::journals::requests::CreateJournalRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_name;

use super::JournalService;

pub async fn handle_create_journal(
    service: &JournalService,
    req: CreateJournalRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_name(&req.title) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if req.short_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Short name cannot be empty",
        )));
    }

    // 短名称全局唯一（大小写不敏感）
    match storage.get_journal_by_short_name(&req.short_name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ShortNameAlreadyExists,
                "Journal short name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create journal: {e}"),
                )),
            );
        }
    }

    // 主编若指定则必须是已有账号
    if let Some(editor_id) = req.editor_in_chief {
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
                        format!("Failed to create journal: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_journal(req).await {
        Ok(journal) => {
            tracing::info!("Journal {} ({}) created", journal.title, journal.short_name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(journal, "Journal created successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create journal: {e}"),
            )),
        ),
    }
}
