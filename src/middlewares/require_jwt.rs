/*!
 * JWT 认证中间件
 *
 * 验证请求头中的 access token，并把账号信息注入请求扩展，
 * 供后续中间件与处理程序使用。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件提取并验证JWT令牌
 * 3. 优先从缓存取账号信息，未命中再回源数据库并写回缓存
 * 4. 停用的账号即使持有有效 token 也会被拒绝
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::ErrorCode;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Account, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取账号信息
    match cache.get_raw(&format!("account:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<Account>(&json) {
            Ok(account) => {
                if !account.is_active {
                    return Err("Account is deactivated".to_string());
                }
                return Ok(account);
            }
            Err(_) => {
                cache.remove(&format!("account:{token}")).await;
                info!(
                    "Failed to deserialize account from cache for token: {}",
                    token
                );
            }
        },
        _ => {
            info!("Account not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let account_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid account ID in JWT".to_string())?;

    let account = storage
        .get_account_by_id(account_id)
        .await
        .map_err(|_| "Failed to retrieve account from storage".to_string())?
        .ok_or_else(|| "Account not found".to_string())?;

    if !account.is_active {
        return Err("Account is deactivated".to_string());
    }

    // 将账号信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(account_json) = serde_json::to_string(&account) {
        cache
            .insert_raw(
                format!("account:{token}"),
                account_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(account)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Unauthorized, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(account) => {
                    debug!("JWT authentication successful for ID: {}", account.id);
                    req.extensions_mut().insert(account);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    let code = if err.contains("deactivated") {
                        ErrorCode::AccountDeactivated
                    } else {
                        ErrorCode::Unauthorized
                    };
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            code,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取账号信息
impl RequireJWT {
    /// 从请求扩展中提取完整账号信息
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_account(req: &actix_web::HttpRequest) -> Option<Account> {
        req.extensions().get::<Account>().cloned()
    }

    /// 从请求扩展中提取账号ID
    pub fn extract_account_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Account>().map(|account| account.id)
    }

    /// 从请求扩展中提取角色集合
    pub fn extract_roles(req: &actix_web::HttpRequest) -> Option<Vec<AccountRole>> {
        req.extensions()
            .get::<Account>()
            .map(|account| account.roles.clone())
    }
}
