use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::journals::requests::AvailableReviewersQuery;
use crate::models::journals::responses::AvailableReviewersResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::JournalService;

/// 名册中与主题匹配、且当前可接受指派的评审人。
///
/// topics 参数为逗号分隔的主题列表；缺省表示不过滤主题。
pub async fn handle_available_reviewers(
    service: &JournalService,
    journal_id: i64,
    query: AvailableReviewersQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let journal = match storage.get_journal_by_id(journal_id).await {
        Ok(Some(journal)) => journal,
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
    };

    let topics: Vec<String> = query
        .topics
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let roster_ids = if topics.is_empty() {
        journal
            .active_reviewers()
            .into_iter()
            .map(|r| r.account_id)
            .collect::<Vec<_>>()
    } else {
        journal.reviewer_ids_for_topics(&topics)
    };

    let now = chrono::Utc::now();
    match storage.get_accounts_by_ids(&roster_ids).await {
        Ok(accounts) => {
            let reviewers = accounts
                .into_iter()
                .filter(|a| a.is_active && a.is_available_on(now))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AvailableReviewersResponse { reviewers },
                "Available reviewers retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve available reviewers: {e}"),
            )),
        ),
    }
}
