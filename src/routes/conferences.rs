use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::entities::AccountRole;
use crate::models::conferences::requests::{
    AddCommitteeMemberRequest, ConferenceListQuery, CreateConferenceRequest,
    UpdateConferenceRequest,
};
use crate::services::ConferenceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ConferenceService 实例
static CONFERENCE_SERVICE: Lazy<ConferenceService> = Lazy::new(ConferenceService::new_lazy);

pub async fn list_conferences(
    req: HttpRequest,
    query: web::Query<ConferenceListQuery>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .list_conferences(query.into_inner(), &req)
        .await
}

pub async fn get_conference(
    req: HttpRequest,
    conference_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE.get_conference(conference_id.0, &req).await
}

pub async fn create_conference(
    req: HttpRequest,
    conference_data: web::Json<CreateConferenceRequest>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .create_conference(conference_data.into_inner(), &req)
        .await
}

pub async fn update_conference(
    req: HttpRequest,
    conference_id: SafeIDI64,
    update_data: web::Json<UpdateConferenceRequest>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .update_conference(conference_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn add_committee_member(
    req: HttpRequest,
    conference_id: SafeIDI64,
    member_data: web::Json<AddCommitteeMemberRequest>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .add_committee_member(conference_id.0, member_data.into_inner(), &req)
        .await
}

pub async fn remove_committee_member(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (conference_id, account_id) = path.into_inner();
    CONFERENCE_SERVICE
        .remove_committee_member(conference_id, account_id, &req)
        .await
}

// 配置路由
//
// 公开读与受保护写共享路径，用方法守卫拆资源，避免 405 吞请求。
pub fn configure_conference_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/conferences")
            .service(
                web::resource("")
                    .guard(guard::Post())
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_conference)),
            )
            // 目录浏览公开
            .service(
                web::resource("")
                    .guard(guard::Get())
                    .route(web::get().to(list_conferences)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Put())
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route(web::put().to(update_conference)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Get())
                    .route(web::get().to(get_conference)),
            )
            // 程序委员会管理，是否为本会主席由服务层判定
            .service(
                web::scope("/{id}")
                    .wrap(middlewares::RequireRole::new_any(
                        AccountRole::venue_management_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .route("/committee", web::post().to(add_committee_member))
                    .route(
                        "/committee/{account_id}",
                        web::delete().to(remove_committee_member),
                    ),
            ),
    );
}
