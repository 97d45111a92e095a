use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::requests::UpdateAccountStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AccountService;

pub async fn handle_update_status(
    service: &AccountService,
    account_id: i64,
    update: UpdateAccountStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 管理员不能停用自己的账号
    if update.is_active == Some(false)
        && RequireJWT::extract_account_id(request) == Some(account_id)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Cannot deactivate your own account",
        )));
    }

    match storage.update_account_status(account_id, update).await {
        Ok(Some(account)) => {
            tracing::info!(
                "Account {} status updated (active: {})",
                account.email,
                account.is_active
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                account,
                "Account status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update account status: {e}"),
            )),
        ),
    }
}
