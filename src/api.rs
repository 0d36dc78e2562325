//! 领域调用集合
//!
//! 每个函数都是对网关的固定调用：方法与路径写死，请求体原样序列化，
//! 不做任何校验或转换。副作用在 `call` 中统一处理：
//! - 401：跳转登录页，调用方得到 `Ok(None)`
//! - 其他失败：记录日志并显示一条错误通知，然后把错误交给调用方

use crate::error::{ApiError, ApiResult};
use crate::gateway::{Gateway, RequestOptions};
use crate::notification::{Notifier, Severity};
use crate::request::HttpClient;
use crate::session::Navigator;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use stockroom_shared::{
    Ack, Credentials, Delivery, Employee, NewDelivery, NewEmployee, NewProduct, PATH_CHECK_AUTH,
    PATH_DELIVERIES, PATH_EMPLOYEES, PATH_LOGIN, PATH_LOGOUT, PATH_PRODUCTS, Product, RecordId,
    SessionStatus, record_path,
};

/// 请求失败时显示给用户的文本
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server";

/// `Ok(None)` 表示会话已失效且已跳转到登录页
pub type Reply<T> = ApiResult<Option<T>>;

pub struct InventoryApi<C: HttpClient> {
    gateway: Rc<Gateway<C>>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    login_path: String,
}

impl<C: HttpClient> Clone for InventoryApi<C> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            navigator: Rc::clone(&self.navigator),
            notifier: Rc::clone(&self.notifier),
            login_path: self.login_path.clone(),
        }
    }
}

impl<C: HttpClient> InventoryApi<C> {
    pub fn new(
        gateway: Gateway<C>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            gateway: Rc::new(gateway),
            navigator,
            notifier,
            login_path: login_path.into(),
        }
    }

    pub fn gateway(&self) -> &Gateway<C> {
        &self.gateway
    }

    /// 跳转到登录页
    pub fn redirect_to_login(&self) {
        self.navigator.redirect(&self.login_path);
    }

    /// 通过同一个通知组件显示消息（如操作成功提示）
    pub fn notify(&self, message: &str, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    // =========================================================
    // 通用调用
    // =========================================================

    /// 对任意路径发起请求，副作用与固定调用相同
    pub async fn request<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Reply<T> {
        self.call(path, Ok(options)).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        options: ApiResult<RequestOptions>,
    ) -> Reply<T> {
        let result = match options {
            Ok(options) => self.gateway.request(path, options).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::Unauthorized) => {
                log::warn!("{}: session expired, redirecting to {}", path, self.login_path);
                self.redirect_to_login();
                Ok(None)
            }
            Err(e) => {
                log::error!("API call failed: {}: {}", path, e);
                self.notifier.notify(CONNECTION_ERROR_MESSAGE, Severity::Error);
                Err(e)
            }
        }
    }

    // =========================================================
    // 认证
    // =========================================================

    pub async fn login(&self, credentials: &Credentials) -> Reply<SessionStatus> {
        self.call(PATH_LOGIN, RequestOptions::post().json(credentials))
            .await
    }

    pub async fn logout(&self) -> Reply<Ack> {
        self.call(PATH_LOGOUT, Ok(RequestOptions::post())).await
    }

    pub async fn check_auth(&self) -> Reply<SessionStatus> {
        self.call(PATH_CHECK_AUTH, Ok(RequestOptions::get())).await
    }

    // =========================================================
    // 库存
    // =========================================================

    pub async fn list_products(&self) -> Reply<Vec<Product>> {
        self.call(PATH_PRODUCTS, Ok(RequestOptions::get())).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Reply<Product> {
        self.call(PATH_PRODUCTS, RequestOptions::post().json(product))
            .await
    }

    pub async fn update_product(&self, id: RecordId, product: &NewProduct) -> Reply<Product> {
        self.call(
            &record_path(PATH_PRODUCTS, id),
            RequestOptions::put().json(product),
        )
        .await
    }

    pub async fn delete_product(&self, id: RecordId) -> Reply<Ack> {
        self.call(&record_path(PATH_PRODUCTS, id), Ok(RequestOptions::delete()))
            .await
    }

    // =========================================================
    // 员工
    // =========================================================

    pub async fn list_employees(&self) -> Reply<Vec<Employee>> {
        self.call(PATH_EMPLOYEES, Ok(RequestOptions::get())).await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Reply<Employee> {
        self.call(PATH_EMPLOYEES, RequestOptions::post().json(employee))
            .await
    }

    pub async fn update_employee(&self, id: RecordId, employee: &NewEmployee) -> Reply<Employee> {
        self.call(
            &record_path(PATH_EMPLOYEES, id),
            RequestOptions::put().json(employee),
        )
        .await
    }

    pub async fn delete_employee(&self, id: RecordId) -> Reply<Ack> {
        self.call(&record_path(PATH_EMPLOYEES, id), Ok(RequestOptions::delete()))
            .await
    }

    // =========================================================
    // 配送
    // =========================================================

    pub async fn list_deliveries(&self) -> Reply<Vec<Delivery>> {
        self.call(PATH_DELIVERIES, Ok(RequestOptions::get())).await
    }

    pub async fn create_delivery(&self, delivery: &NewDelivery) -> Reply<Delivery> {
        self.call(PATH_DELIVERIES, RequestOptions::post().json(delivery))
            .await
    }

    pub async fn update_delivery(&self, id: RecordId, delivery: &NewDelivery) -> Reply<Delivery> {
        self.call(
            &record_path(PATH_DELIVERIES, id),
            RequestOptions::put().json(delivery),
        )
        .await
    }

    pub async fn delete_delivery(&self, id: RecordId) -> Reply<Ack> {
        self.call(&record_path(PATH_DELIVERIES, id), Ok(RequestOptions::delete()))
            .await
    }
}
