use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::entities::AccountRole;
use crate::models::journals::requests::{
    AddAssociateEditorRequest, AddJournalReviewerRequest, AvailableReviewersQuery,
    CreateJournalRequest, JournalListQuery, UpdateJournalRequest,
};
use crate::services::JournalService;
use crate::utils::SafeIDI64;

// 懒加载的全局 JournalService 实例
static JOURNAL_SERVICE: Lazy<JournalService> = Lazy::new(JournalService::new_lazy);

pub async fn list_journals(
    req: HttpRequest,
    query: web::Query<JournalListQuery>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE.list_journals(query.into_inner(), &req).await
}

pub async fn get_journal(req: HttpRequest, journal_id: SafeIDI64) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE.get_journal(journal_id.0, &req).await
}

pub async fn create_journal(
    req: HttpRequest,
    journal_data: web::Json<CreateJournalRequest>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE
        .create_journal(journal_data.into_inner(), &req)
        .await
}

pub async fn update_journal(
    req: HttpRequest,
    journal_id: SafeIDI64,
    update_data: web::Json<UpdateJournalRequest>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE
        .update_journal(journal_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn add_reviewer(
    req: HttpRequest,
    journal_id: SafeIDI64,
    reviewer_data: web::Json<AddJournalReviewerRequest>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE
        .add_reviewer(journal_id.0, reviewer_data.into_inner(), &req)
        .await
}

pub async fn remove_reviewer(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (journal_id, account_id) = path.into_inner();
    JOURNAL_SERVICE
        .remove_reviewer(journal_id, account_id, &req)
        .await
}

pub async fn available_reviewers(
    req: HttpRequest,
    journal_id: SafeIDI64,
    query: web::Query<AvailableReviewersQuery>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE
        .available_reviewers(journal_id.0, query.into_inner(), &req)
        .await
}

pub async fn add_associate_editor(
    req: HttpRequest,
    journal_id: SafeIDI64,
    editor_data: web::Json<AddAssociateEditorRequest>,
) -> ActixResult<HttpResponse> {
    JOURNAL_SERVICE
        .add_associate_editor(journal_id.0, editor_data.into_inner(), &req)
        .await
}

pub async fn remove_associate_editor(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (journal_id, account_id) = path.into_inner();
    JOURNAL_SERVICE
        .remove_associate_editor(journal_id, account_id, &req)
        .await
}

// 配置路由
//
// 同一路径上公开读与受保护写共存，必须用方法守卫拆成独立资源，
// 否则先注册的资源会以 405 吞掉另一方法的请求。
pub fn configure_journal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/journals")
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_journal)),
            )
            // 目录浏览公开
            .service(
                web::resource("")
                    .guard(guard::Get())
                    .route(web::get().to(list_journals)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Put())
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route(web::put().to(update_journal)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Get())
                    .route(web::get().to(get_journal)),
            )
            // 团队管理，路由放行编辑类角色，是否为本刊主编由服务层判定
            .service(
                web::scope("/{id}")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::editorial_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route(
                        "/reviewers/available",
                        web::get().to(available_reviewers),
                    )
                    .route("/reviewers", web::post().to(add_reviewer))
                    .route(
                        "/reviewers/{account_id}",
                        web::delete().to(remove_reviewer),
                    )
                    .route("/editors", web::post().to(add_associate_editor))
                    .route(
                        "/editors/{account_id}",
                        web::delete().to(remove_associate_editor),
                    ),
            ),
    );
}
