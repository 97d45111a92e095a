pub mod detail;
pub mod list;
pub mod password;
pub mod profile;
pub mod roles;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounts::requests::{
    AccountListQuery, ChangePasswordRequest, UpdateAccountStatusRequest, UpdateProfileRequest,
    UpdateRolesRequest,
};
use crate::storage::Storage;

pub struct AccountService {
    storage: Option<Arc<dyn Storage>>,
}

impl AccountService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 更新本人资料
    pub async fn update_profile(
        &self,
        update: UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_update_profile(self, update, request).await
    }

    // 修改本人密码
    pub async fn change_password(
        &self,
        change: ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password::handle_change_password(self, change, request).await
    }

    // 列出账号（管理端）
    pub async fn list_accounts(
        &self,
        query: AccountListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_accounts(self, query, request).await
    }

    // 获取指定账号（管理端）
    pub async fn get_account(
        &self,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_account(self, account_id, request).await
    }

    // 整体替换账号角色集合（管理端）
    pub async fn update_roles(
        &self,
        account_id: i64,
        update: UpdateRolesRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roles::handle_update_roles(self, account_id, update, request).await
    }

    // 更新账号启用/会员状态（管理端）
    pub async fn update_status(
        &self,
        account_id: i64,
        update: UpdateAccountStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::handle_update_status(self, account_id, update, request).await
    }
}
