pub mod accounts;
pub mod auth;
pub mod common;
pub mod conferences;
pub mod journals;
pub mod reviews;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间（健康检查接口用于计算运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
