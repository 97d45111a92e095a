use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::journals::requests::{AddAssociateEditorRequest, AddJournalReviewerRequest};
use crate::models::{ApiResponse, ErrorCode};

use super::JournalService;

// 加载期刊并校验团队管理权限，失败时直接返回响应
macro_rules! load_journal_for_team {
    ($service:expr, $storage:expr, $journal_id:expr, $request:expr) => {
        match $storage.get_journal_by_id($journal_id).await {
            Ok(Some(journal)) => {
                if !JournalService::can_manage_team(&journal, $request) {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::PermissionDenied,
                        "Only the editor-in-chief or an administrator can manage the journal team",
                    )));
                }
                journal
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::JournalNotFound,
                    "Journal not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve journal: {e}"),
                    )),
                );
            }
        }
    };
}

pub async fn handle_add_reviewer(
    service: &JournalService,
    journal_id: i64,
    req: AddJournalReviewerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut journal = load_journal_for_team!(service, storage, journal_id, request);

    // 名册账号必须真实存在
    match storage.get_account_by_id(req.account_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                "Reviewer account not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add reviewer: {e}"),
                )),
            );
        }
    }

    // 已在名册且处于激活状态时拒绝重复加入
    if journal
        .active_reviewers()
        .iter()
        .any(|r| r.account_id == req.account_id)
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ReviewerAlreadyAssigned,
            "Reviewer is already on the journal roster",
        )));
    }

    journal.add_reviewer(req.account_id, req.topics);

    match storage.save_journal(&journal).await {
        Ok(()) => {
            tracing::info!(
                "Account {} added to reviewer roster of journal {}",
                req.account_id,
                journal.short_name
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(journal, "Reviewer added successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to add reviewer: {e}"),
            )),
        ),
    }
}

pub async fn handle_remove_reviewer(
    service: &JournalService,
    journal_id: i64,
    account_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut journal = load_journal_for_team!(service, storage, journal_id, request);

    if !journal.remove_reviewer(account_id) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Reviewer is not on the journal roster",
        )));
    }

    match storage.save_journal(&journal).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(journal, "Reviewer removed successfully"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove reviewer: {e}"),
            )),
        ),
    }
}

pub async fn handle_add_associate_editor(
    service: &JournalService,
    journal_id: i64,
    req: AddAssociateEditorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut journal = load_journal_for_team!(service, storage, journal_id, request);

    match storage.get_account_by_id(req.account_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                "Editor account not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add associate editor: {e}"),
                )),
            );
        }
    }

    journal.add_associate_editor(req.account_id);

    match storage.save_journal(&journal).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            journal,
            "Associate editor added successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to add associate editor: {e}"),
            )),
        ),
    }
}

pub async fn handle_remove_associate_editor(
    service: &JournalService,
    journal_id: i64,
    account_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut journal = load_journal_for_team!(service, storage, journal_id, request);

    if !journal.remove_associate_editor(account_id) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account is not an associate editor of this journal",
        )));
    }

    match storage.save_journal(&journal).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            journal,
            "Associate editor removed successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove associate editor: {e}"),
            )),
        ),
    }
}
