use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::requests::{ChangePasswordRequest, UpdateProfileRequest};
use crate::services::AccountService;

// 懒加载的全局 AccountService 实例
static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

pub async fn get_profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    // 资料即当前登录账号本身
    crate::routes::auth::get_current_account(request).await
}

pub async fn update_profile(
    req: HttpRequest,
    update_data: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_profile(update_data.into_inner(), &req)
        .await
}

pub async fn change_password(
    req: HttpRequest,
    change_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .change_password(change_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .wrap(middlewares::RequireJWT)
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/password", web::put().to(change_password)),
    );
}
