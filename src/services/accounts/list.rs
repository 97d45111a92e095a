use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::accounts::requests::AccountListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::AccountService;

pub async fn handle_list_accounts(
    service: &AccountService,
    query: AccountListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_accounts_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Account list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve account list: {e}"),
            )),
        ),
    }
}
