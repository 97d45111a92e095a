use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 根据邮箱获取账号信息
    match storage.get_account_by_email(&login_request.email).await {
        Ok(Some(account)) => {
            // 2. 验证密码
            if !verify_password(&login_request.password, &account.password_hash) {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Email or password is incorrect",
                )));
            }

            // 3. 停用账号禁止登录
            if !account.is_active {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AccountDeactivated,
                    "Account has been deactivated",
                )));
            }

            // 4. 更新最后登录时间
            let _ = storage.update_last_login(account.id).await;

            // 5. 生成令牌对
            match account.generate_token_pair(login_request.remember_me.then(|| {
                chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
            })) {
                Ok(token_pair) => {
                    tracing::info!("Account {} logged in successfully", account.email);

                    let response = LoginResponse {
                        token: token_pair.access_token,
                        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                        account,
                    };

                    // 6. 创建 refresh token cookie
                    let refresh_cookie =
                        jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                    Ok(HttpResponse::Ok()
                        .cookie(refresh_cookie)
                        .json(ApiResponse::success(response, "Login successful")))
                }
                Err(e) => {
                    tracing::error!("Failed to generate JWT token: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Login failed, unable to generate token",
                        )),
                    )
                }
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accounts::entities::AccountType;
    use crate::models::accounts::requests::{CreateAccountData, UpdateAccountStatusRequest};
    use crate::services::AuthService;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::password::hash_password;
    use actix_web::{http::StatusCode, web};
    use std::sync::Arc;

    async fn request_with_storage(storage: SeaOrmStorage) -> actix_web::HttpRequest {
        let storage: Arc<dyn Storage> = Arc::new(storage);
        actix_web::test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request()
    }

    #[actix_web::test]
    async fn test_login_rejected_for_deactivated_account() {
        let storage = SeaOrmStorage::new_in_memory().await;
        let account = storage
            .create_account(CreateAccountData {
                first_name: "Mia".to_string(),
                last_name: "Chen".to_string(),
                email: "mia@example.com".to_string(),
                password_hash: hash_password("secret1").unwrap(),
                account_type: AccountType::Colleague,
                roles: vec![],
            })
            .await
            .unwrap();

        storage
            .update_account_status(
                account.id,
                UpdateAccountStatusRequest {
                    is_active: Some(false),
                    membership_status: None,
                    membership_expiry: None,
                },
            )
            .await
            .unwrap();

        let request = request_with_storage(storage).await;
        let response = handle_login(
            &AuthService::new_lazy(),
            LoginRequest {
                email: "mia@example.com".to_string(),
                password: "secret1".to_string(),
                remember_me: false,
            },
            &request,
        )
        .await
        .unwrap();

        // 密码正确也不能登录已停用的账号
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_login_rejected_for_wrong_password() {
        let storage = SeaOrmStorage::new_in_memory().await;
        storage
            .create_account(CreateAccountData {
                first_name: "Mia".to_string(),
                last_name: "Chen".to_string(),
                email: "mia@example.com".to_string(),
                password_hash: hash_password("secret1").unwrap(),
                account_type: AccountType::Colleague,
                roles: vec![],
            })
            .await
            .unwrap();

        let request = request_with_storage(storage).await;
        let response = handle_login(
            &AuthService::new_lazy(),
            LoginRequest {
                email: "mia@example.com".to_string(),
                password: "not-the-password".to_string(),
                remember_me: false,
            },
            &request,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
