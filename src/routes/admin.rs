use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::{
    AccountListQuery, UpdateAccountStatusRequest, UpdateRolesRequest,
};
use crate::services::AccountService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AccountService 实例
static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

pub async fn list_accounts(
    req: HttpRequest,
    query: web::Query<AccountListQuery>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.list_accounts(query.into_inner(), &req).await
}

pub async fn get_account(req: HttpRequest, account_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.get_account(account_id.0, &req).await
}

pub async fn update_roles(
    req: HttpRequest,
    account_id: SafeIDI64,
    roles_data: web::Json<UpdateRolesRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_roles(account_id.0, roles_data.into_inner(), &req)
        .await
}

pub async fn update_status(
    req: HttpRequest,
    account_id: SafeIDI64,
    status_data: web::Json<UpdateAccountStatusRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_status(account_id.0, status_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(AccountRole::admin_roles()))
                    .route("/users", web::get().to(list_accounts))
                    .route("/users/{id}", web::get().to(get_account))
                    .route("/users/{id}/role", web::put().to(update_roles))
                    .route("/users/{id}/status", web::put().to(update_status)),
            ),
    );
}
