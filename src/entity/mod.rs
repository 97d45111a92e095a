//! SeaORM 数据库实体定义
//!
//! 嵌套文档（作者列表、评审指派、委员会等）以 JSON 文本列存储，
//! 在 `into_*` 转换方法中解码为业务模型。

pub mod accounts;
pub mod conferences;
pub mod journals;
pub mod prelude;
pub mod reviews;
pub mod submissions;
