//! 路径参数安全提取器
//!
//! 在进入业务层之前完成格式校验，非法参数直接返回 400。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, err, ok};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        message.to_string(),
        actix_web::HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            message,
        )),
    )
    .into()
}

/// 路径中的 `{id}` 参数，要求为正整数
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => ok(SafeIDI64(id)),
            _ => err(bad_request("Invalid id in path")),
        }
    }
}

static ASSIGNMENT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("Invalid assignment id regex")
});

/// 路径中的 `{assignment_id}` 参数，要求为 UUID 格式
pub struct SafeAssignmentId(pub String);

impl FromRequest for SafeAssignmentId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("assignment_id").unwrap_or_default();
        if ASSIGNMENT_ID_RE.is_match(raw) {
            ok(SafeAssignmentId(raw.to_string()))
        } else {
            err(bad_request("Invalid assignment id in path"))
        }
    }
}
