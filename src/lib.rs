//! Stockroom 客户端核心
//!
//! 与平台无关的部分，浏览器相关的实现位于 `frontend` crate：
//! - `request`: HTTP 传输抽象 (`HttpClient`)
//! - `gateway`: 请求网关，将状态码映射为 `ApiResult`
//! - `api`: 各实体的调用集合，以及 401 跳转、错误提示等副作用
//! - `session`: 路由进入时的会话守卫
//! - `notification` / `theme`: 通知与主题的状态机

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod notification;
pub mod request;
pub mod route;
pub mod session;
pub mod theme;

pub use api::{InventoryApi, Reply};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use gateway::{Gateway, RequestOptions};
pub use notification::{Notifier, Severity, Toaster};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use session::{GuardOutcome, Navigator};
pub use theme::{Theme, ThemeSwitcher};

pub use stockroom_shared as shared;
