use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::entities::AccountRole;
use crate::models::submissions::requests::{
    AssignEditorRequest, AssignReviewerRequest, AssignmentResponseRequest, CreateSubmissionRequest,
    RecordDecisionRequest, SubmissionListQuery, UpdateStatusRequest,
};
use crate::services::{ReviewService, SubmissionService};
use crate::utils::{SafeAssignmentId, SafeIDI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);
// 投稿下的评审列表复用 ReviewService
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn create_submission(
    req: HttpRequest,
    submission_data: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(submission_data.into_inner(), &req)
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(query.into_inner(), &req)
        .await
}

pub async fn list_my_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_my_submissions(query.into_inner(), &req)
        .await
}

pub async fn list_assigned_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_assigned_submissions(query.into_inner(), &req)
        .await
}

pub async fn list_reviewing_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_reviewing_submissions(query.into_inner(), &req)
        .await
}

pub async fn get_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(submission_id.0, &req).await
}

pub async fn update_status(
    req: HttpRequest,
    submission_id: SafeIDI64,
    status_data: web::Json<UpdateStatusRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .update_status(submission_id.0, status_data.into_inner(), &req)
        .await
}

pub async fn assign_editor(
    req: HttpRequest,
    submission_id: SafeIDI64,
    editor_data: web::Json<AssignEditorRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .assign_editor(submission_id.0, editor_data.into_inner(), &req)
        .await
}

pub async fn assign_reviewer(
    req: HttpRequest,
    submission_id: SafeIDI64,
    reviewer_data: web::Json<AssignReviewerRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .assign_reviewer(submission_id.0, reviewer_data.into_inner(), &req)
        .await
}

pub async fn respond_to_assignment(
    req: HttpRequest,
    submission_id: SafeIDI64,
    assignment_id: SafeAssignmentId,
    response_data: web::Json<AssignmentResponseRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .respond_to_assignment(
            submission_id.0,
            assignment_id.0,
            response_data.into_inner(),
            &req,
        )
        .await
}

pub async fn record_decision(
    req: HttpRequest,
    submission_id: SafeIDI64,
    decision_data: web::Json<RecordDecisionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .record_decision(submission_id.0, decision_data.into_inner(), &req)
        .await
}

pub async fn withdraw_submission(
    req: HttpRequest,
    submission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .withdraw_submission(submission_id.0, &req)
        .await
}

pub async fn list_submission_reviews(
    req: HttpRequest,
    submission_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_reviews_for_submission(submission_id.0, &req)
        .await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/submissions")
            .wrap(middlewares::RequireJWT)
            // 全量列表只对编辑类角色开放，创建对所有登录账号开放
            .service(
                web::resource("")
                    .guard(guard::Get())
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .route(web::get().to(list_submissions)),
            )
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .route(web::post().to(create_submission)),
            )
            .route("/my", web::get().to(list_my_submissions))
            .route("/assigned", web::get().to(list_assigned_submissions))
            .route("/reviewing", web::get().to(list_reviewing_submissions))
            .service(
                web::resource("/{id}/status")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .route(web::put().to(update_status)),
            )
            .service(
                web::resource("/{id}/editor")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .route(web::post().to(assign_editor)),
            )
            .service(
                web::resource("/{id}/reviewers")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .route(web::post().to(assign_reviewer)),
            )
            .service(
                web::resource("/{id}/reviews")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .route(web::get().to(list_submission_reviews)),
            )
            .service(
                web::resource("/{id}/decision")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .route(web::post().to(record_decision)),
            )
            .route(
                "/{id}/reviewers/{assignment_id}",
                web::put().to(respond_to_assignment),
            )
            .route("/{id}/withdraw", web::post().to(withdraw_submission))
            .route("/{id}", web::get().to(get_submission)),
    );
}
