use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::UpdateRolesRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AccountService;

pub async fn handle_update_roles(
    service: &AccountService,
    account_id: i64,
    update: UpdateRolesRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只有超级管理员能授予或回收 super-admin 角色
    if update.roles.contains(&AccountRole::SuperAdmin) {
        let operator_roles = RequireJWT::extract_roles(request).unwrap_or_default();
        if !operator_roles.contains(&AccountRole::SuperAdmin) {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Only a super administrator can grant the super-admin role",
            )));
        }
    }

    match storage.update_account_roles(account_id, &update.roles).await {
        Ok(Some(account)) => {
            tracing::info!(
                "Account {} roles replaced with {:?}",
                account.email,
                account.roles
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                account,
                "Account roles updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update account roles: {e}"),
            )),
        ),
    }
}
