use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::requests::UpdateProfileRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_name;

use super::AccountService;

pub async fn handle_update_profile(
    service: &AccountService,
    update: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let account_id = match RequireJWT::extract_account_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 姓名若提供则不能为空
    for name in [&update.first_name, &update.last_name].into_iter().flatten() {
        if let Err(msg) = validate_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }
    }

    match storage.update_account_profile(account_id, update).await {
        Ok(Some(account)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            account,
            "Profile updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update profile: {e}"),
            )),
        ),
    }
}
