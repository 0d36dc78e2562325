use thiserror::Error;

/// 请求网关的错误分类
///
/// - `Unauthorized`: 401，会话失效，由调用方决定跳转
/// - `Http`: 其他非 2xx 状态
/// - `Network`: 请求未能完成（连接失败、浏览器拒绝等）
/// - `Encode` / `Decode`: 请求体序列化或响应体解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("API error: {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// 对应的 HTTP 状态码（仅在服务端给出响应时存在）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
