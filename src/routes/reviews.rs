use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{ReviewListQuery, UpdateReviewRequest, WithdrawReviewRequest};
use crate::services::ReviewService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn list_my_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListQuery>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_my_reviews(query.into_inner(), &req).await
}

pub async fn get_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review(review_id.0, &req).await
}

pub async fn update_review(
    req: HttpRequest,
    review_id: SafeIDI64,
    update_data: web::Json<UpdateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .update_review(review_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn submit_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.submit_review(review_id.0, &req).await
}

pub async fn withdraw_review(
    req: HttpRequest,
    review_id: SafeIDI64,
    withdraw_data: web::Json<WithdrawReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .withdraw_review(review_id.0, withdraw_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reviews")
            .wrap(middlewares::RequireJWT)
            .route("/my", web::get().to(list_my_reviews))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_review))
                    .route(web::put().to(update_review)),
            )
            .route("/{id}/submit", web::post().to(submit_review))
            .route("/{id}/withdraw", web::post().to(withdraw_review)),
    );
}
