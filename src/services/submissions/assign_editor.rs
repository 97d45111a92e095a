use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::accounts::entities::AccountRole;
use crate::models::submissions::requests::AssignEditorRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::SubmissionService;

pub async fn handle_assign_editor(
    service: &SubmissionService,
    submission_id: i64,
    req: AssignEditorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve submission: {e}"),
                )),
            );
        }
    };

    if submission.status.is_terminal() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            "Cannot assign an editor to a closed submission",
        )));
    }

    // 被指派者必须存在且具有编辑类角色
    match storage.get_account_by_id(req.editor_id).await {
        Ok(Some(editor)) => {
            if !editor.has_any_role(AccountRole::editorial_roles()) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Account does not hold an editorial role",
                )));
            }
        }
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
                    format!("Failed to assign editor: {e}"),
                )),
            );
        }
    }

    submission.assigned_editor = Some(req.editor_id);

    match storage.save_submission(&submission).await {
        Ok(()) => {
            tracing::info!(
                "Editor {} assigned to submission {}",
                req.editor_id,
                submission.submission_code
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(submission, "Editor assigned successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to assign editor: {e}"),
            )),
        ),
    }
}
