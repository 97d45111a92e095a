use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::conferences::requests::CreateConferenceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_name;

use super::ConferenceService;

pub async fn handle_create_conference(
    service: &ConferenceService,
    req: CreateConferenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_name(&req.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if req.short_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Short name cannot be empty",
        )));
    }

    // 起止日期必须有序
    if let (Some(start), Some(end)) = (req.start_date, req.end_date)
        && end < start
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "End date cannot be earlier than start date",
        )));
    }

    // 主席若指定则必须是已有账号
    if let Some(chair_id) = req.chair {
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
                        format!("Failed to create conference: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_conference(req).await {
        Ok(conference) => {
            tracing::info!(
                "Conference {} ({}) created",
                conference.name,
                conference.short_name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                conference,
                "Conference created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create conference: {e}"),
            )),
        ),
    }
}
