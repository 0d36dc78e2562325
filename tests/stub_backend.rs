//! 针对本地 axum 桩服务的端到端测试
//!
//! 桩服务模拟后端的 Cookie 会话与三类记录的增删改查，
//! 客户端使用 reqwest（带 Cookie 存储）实现 `HttpClient`。

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use stockroom::session::guard_route;
use stockroom::shared::{
    Credentials, DeliveryStatus, NewDelivery, NewEmployee, NewProduct, RecordId, SessionStatus,
};
use stockroom::{
    ApiError, ApiResult, AppRoute, Gateway, GuardOutcome, HttpClient, HttpMethod, HttpRequest,
    HttpResponse, InventoryApi, Navigator, Notifier, Severity,
};

const SESSION_COOKIE: &str = "session=valid";
const COLLECTIONS: [&str; 3] = ["products", "employees", "deliveries"];

// =========================================================
// 桩服务
// =========================================================

#[derive(Clone, Default)]
struct Backend {
    store: Arc<Mutex<Store>>,
}

#[derive(Default)]
struct Store {
    next_id: RecordId,
    records: HashMap<String, Vec<Value>>,
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.split(';').any(|c| c.trim() == SESSION_COOKIE))
}

fn with_id(payload: Value, id: RecordId) -> Value {
    let mut record = match payload {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    record.insert("id".to_string(), json!(id));
    Value::Object(record)
}

async fn login(Json(credentials): Json<Credentials>) -> Response {
    if credentials.username != "admin" || credentials.password != "secret" {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let status = SessionStatus {
        authenticated: true,
        username: Some(credentials.username),
    };
    (
        [(header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE))],
        Json(status),
    )
        .into_response()
}

async fn logout() -> Response {
    (
        [(header::SET_COOKIE, "session=; Path=/; Max-Age=0".to_string())],
        Json(json!({ "message": "logged out" })),
    )
        .into_response()
}

async fn check_auth(headers: HeaderMap) -> Response {
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({ "authenticated": true, "username": "admin" })).into_response()
}

async fn list(State(backend): State<Backend>, headers: HeaderMap, Path(collection): Path<String>) -> Response {
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if !COLLECTIONS.contains(&collection.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let store = backend.store.lock().unwrap();
    let records = store.records.get(&collection).cloned().unwrap_or_default();
    Json(records).into_response()
}

async fn create(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(collection): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if !COLLECTIONS.contains(&collection.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut store = backend.store.lock().unwrap();
    store.next_id += 1;
    let record = with_id(payload, store.next_id);
    store.records.entry(collection).or_default().push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path((collection, id)): Path<(String, RecordId)>,
    Json(payload): Json<Value>,
) -> Response {
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut store = backend.store.lock().unwrap();
    let Some(records) = store.records.get_mut(&collection) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match records.iter_mut().find(|r| r["id"] == json!(id)) {
        Some(slot) => {
            *slot = with_id(payload, id);
            Json(slot.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn remove(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path((collection, id)): Path<(String, RecordId)>,
) -> Response {
    if !has_session(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut store = backend.store.lock().unwrap();
    let Some(records) = store.records.get_mut(&collection) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let before = records.len();
    records.retain(|r| r["id"] != json!(id));
    if records.len() == before {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "message": "deleted" })).into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/check-auth", get(check_auth))
        .route("/api/{collection}", get(list).post(create))
        .route("/api/{collection}/{id}", put(update).delete(remove))
        .with_state(Backend::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

// =========================================================
// 客户端
// =========================================================

struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    fn new() -> Self {
        let inner = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();
        Self { inner }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.inner.request(method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Default)]
struct Visits(RefCell<Vec<String>>);

impl Navigator for Visits {
    fn redirect(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
struct Toasts(RefCell<Vec<(String, Severity)>>);

impl Notifier for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        self.0.borrow_mut().push((message.to_string(), severity));
    }
}

struct Session {
    api: InventoryApi<ReqwestClient>,
    visits: Rc<Visits>,
    toasts: Rc<Toasts>,
}

fn connect(base: &str) -> Session {
    let visits = Rc::new(Visits::default());
    let toasts = Rc::new(Toasts::default());
    let api = InventoryApi::new(
        Gateway::new(ReqwestClient::new(), base),
        visits.clone(),
        toasts.clone(),
        "/login",
    );
    Session { api, visits, toasts }
}

async fn logged_in(base: &str) -> Session {
    let session = connect(base);
    let status = session
        .api
        .login(&Credentials::new("admin", "secret"))
        .await
        .unwrap()
        .unwrap();
    assert!(status.authenticated);
    session
}

// =========================================================
// 测试
// =========================================================

#[tokio::test]
async fn test_create_then_read_returns_payload_with_assigned_id() {
    let base = spawn_backend().await;
    let s = logged_in(&base).await;

    let products = [
        NewProduct {
            name: "Hex bolt".into(),
            sku: Some("HB-10".into()),
            category: Some("Hardware".into()),
            quantity: 120,
            price: 0.4,
            ..Default::default()
        },
        NewProduct {
            name: "Pallet".into(),
            sku: None,
            category: None,
            quantity: 0,
            price: 12.0,
            ..Default::default()
        },
    ];
    for payload in &products {
        let created = s.api.create_product(payload).await.unwrap().unwrap();
        assert_eq!(&created.base, payload);

        let listed = s.api.list_products().await.unwrap().unwrap();
        let read = listed.iter().find(|p| p.id == created.id).unwrap();
        assert_eq!(read, &created);
    }

    let employee = NewEmployee {
        name: "Ana Silva".into(),
        email: "ana@example.com".into(),
        position: Some("Picker".into()),
        phone: None,
        ..Default::default()
    };
    let created = s.api.create_employee(&employee).await.unwrap().unwrap();
    let listed = s.api.list_employees().await.unwrap().unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.base, employee);

    let delivery = NewDelivery {
        product_id: Some(1),
        supplier: "Acme".into(),
        quantity: 40,
        status: DeliveryStatus::InTransit,
        delivery_date: Some("2024-03-05".into()),
        ..Default::default()
    };
    let created = s.api.create_delivery(&delivery).await.unwrap().unwrap();
    let listed = s.api.list_deliveries().await.unwrap().unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.base, delivery);

    // 每条记录的 ID 都不同
    assert_ne!(listed[0].id, s.api.list_employees().await.unwrap().unwrap()[0].id);
    assert!(s.visits.0.borrow().is_empty());
    assert!(s.toasts.0.borrow().is_empty());
}

#[tokio::test]
async fn test_update_and_delete() {
    let base = spawn_backend().await;
    let s = logged_in(&base).await;

    let mut payload = NewEmployee {
        name: "Bo".into(),
        email: "bo@example.com".into(),
        position: None,
        phone: None,
        ..Default::default()
    };
    let created = s.api.create_employee(&payload).await.unwrap().unwrap();

    payload.position = Some("Driver".into());
    let updated = s.api.update_employee(created.id, &payload).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.base.position.as_deref(), Some("Driver"));

    let ack = s.api.delete_employee(created.id).await.unwrap().unwrap();
    assert_eq!(ack.message.as_deref(), Some("deleted"));
    assert!(s.api.list_employees().await.unwrap().unwrap().is_empty());

    // 再次删除：404 -> 错误提示 + 返回错误
    let again = s.api.delete_employee(created.id).await;
    assert_eq!(again, Err(ApiError::Http { status: 404 }));
    let toasts = s.toasts.0.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].1, Severity::Error);
}

#[tokio::test]
async fn test_missing_session_redirects_without_error() {
    let base = spawn_backend().await;
    let s = connect(&base);

    assert_eq!(s.api.list_products().await, Ok(None));
    assert_eq!(s.api.check_auth().await, Ok(None));
    assert_eq!(*s.visits.0.borrow(), vec!["/login", "/login"]);
    assert!(s.toasts.0.borrow().is_empty());
}

#[tokio::test]
async fn test_rejected_login_redirects_to_login() {
    let base = spawn_backend().await;
    let s = connect(&base);

    let reply = s.api.login(&Credentials::new("admin", "wrong")).await;
    assert_eq!(reply, Ok(None));
    assert_eq!(*s.visits.0.borrow(), vec!["/login"]);
}

#[tokio::test]
async fn test_guard_follows_session_lifecycle() {
    let base = spawn_backend().await;
    let s = logged_in(&base).await;

    assert_eq!(guard_route(AppRoute::Stock, &s.api).await, GuardOutcome::Allowed);
    assert_eq!(guard_route(AppRoute::Login, &s.api).await, GuardOutcome::Public);

    let ack = s.api.logout().await.unwrap().unwrap();
    assert_eq!(ack.message.as_deref(), Some("logged out"));

    assert_eq!(guard_route(AppRoute::Employees, &s.api).await, GuardOutcome::Redirected);
    assert_eq!(*s.visits.0.borrow(), vec!["/login"]);
}

#[tokio::test]
async fn test_unreachable_server_notifies() {
    // 绑定后立即释放端口，保证无人监听
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let s = connect(&format!("http://{}/api", addr));
    let result = s.api.list_deliveries().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(
        *s.toasts.0.borrow(),
        vec![("Error connecting to server".to_string(), Severity::Error)]
    );
}
