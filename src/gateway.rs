//! 请求网关
//!
//! 所有对后端的请求都经过这里：拼接 URL、附加 JSON 请求头与会话凭据、
//! 按状态码归类结果。网关本身没有副作用，跳转与提示由 `api` 层决定。

use crate::config::normalize_base;
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpMethod, HttpRequest};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// 单次调用的可选覆盖项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(HttpMethod::Post)
    }

    pub fn put() -> Self {
        Self::with_method(HttpMethod::Put)
    }

    pub fn delete() -> Self {
        Self::with_method(HttpMethod::Delete)
    }

    fn with_method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 将记录序列化为 JSON 请求体，不做任何校验或转换
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

pub struct Gateway<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> Gateway<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base(base_url),
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 发送请求并解析 JSON 响应
    ///
    /// - 401 -> `ApiError::Unauthorized`
    /// - 其他非 2xx -> `ApiError::Http`
    /// - 传输失败 -> `ApiError::Network`
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("{} {}", options.method.as_str(), url);

        let mut req = HttpRequest::new(&url, options.method)
            .with_header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .with_credentials();
        for (key, value) in &options.headers {
            // 调用方的请求头覆盖默认值
            req.headers.retain(|k, _| !k.eq_ignore_ascii_case(key));
            req = req.with_header(key, value);
        }
        if let Some(body) = options.body {
            req = req.with_body(body);
        }

        let resp = self.client.send(req).await?;

        if resp.status == STATUS_UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status,
            });
        }

        resp.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MockHttpClient;
    use serde_json::{Value, json};

    const PRODUCTS_URL: &str = "/api/products";

    fn gateway() -> Gateway<MockHttpClient> {
        Gateway::new(MockHttpClient::new(), "/api/")
    }

    #[test]
    fn test_url_joining() {
        let gw = gateway();
        assert_eq!(gw.url("/products"), "/api/products");
        assert_eq!(gw.url("products/3"), "/api/products/3");
    }

    #[tokio::test]
    async fn test_success_decodes_json() {
        let gw = gateway();
        gw.client()
            .mock_response(HttpMethod::Get, PRODUCTS_URL, 200, json!([{ "id": 1 }]));

        let value: Value = gw.request("/products", RequestOptions::get()).await.unwrap();
        assert_eq!(value, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_sends_json_header_credentials_and_body() {
        let gw = gateway();
        gw.client()
            .mock_response(HttpMethod::Post, PRODUCTS_URL, 201, json!({ "id": 9 }));

        let options = RequestOptions::post().json(&json!({ "name": "Nut" })).unwrap();
        let _: Value = gw.request("/products", options).await.unwrap();

        let req = gw.client().last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert!(req.include_credentials);
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"Nut"}"#));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let gw = gateway();
        gw.client()
            .mock_response(HttpMethod::Get, PRODUCTS_URL, 200, json!([]));

        let options = RequestOptions::get()
            .header("content-type", "text/plain")
            .header("X-Trace", "abc");
        let _: Value = gw.request("/products", options).await.unwrap();

        let req = gw.client().last_request().unwrap();
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
        assert_eq!(req.header("x-trace"), Some("abc"));
    }

    #[tokio::test]
    async fn test_status_classification() {
        let gw = gateway();
        gw.client()
            .mock_response(HttpMethod::Get, "/api/check-auth", 401, json!({}));
        gw.client()
            .mock_response(HttpMethod::Get, PRODUCTS_URL, 500, json!({ "error": "boom" }));

        let unauthorized = gw.request::<Value>("/check-auth", RequestOptions::get()).await;
        assert_eq!(unauthorized, Err(ApiError::Unauthorized));

        let server_error = gw.request::<Value>("/products", RequestOptions::get()).await;
        assert_eq!(server_error, Err(ApiError::Http { status: 500 }));

        // 未配置的地址由 mock 返回 404
        let missing = gw.request::<Value>("/nowhere", RequestOptions::get()).await;
        assert_eq!(missing, Err(ApiError::Http { status: 404 }));
    }

    #[tokio::test]
    async fn test_network_and_decode_failures() {
        let gw = gateway();
        gw.client()
            .mock_failure(HttpMethod::Get, PRODUCTS_URL, "connection refused");
        gw.client()
            .mock_raw(HttpMethod::Get, "/api/employees", 200, "<html>");

        let network = gw.request::<Value>("/products", RequestOptions::get()).await;
        assert_eq!(network, Err(ApiError::Network("connection refused".into())));

        let decode = gw.request::<Value>("/employees", RequestOptions::get()).await;
        assert!(matches!(decode, Err(ApiError::Decode(_))));
    }
}
