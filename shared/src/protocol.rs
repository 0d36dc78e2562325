use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const PATH_LOGIN: &str = "/login";
pub const PATH_LOGOUT: &str = "/logout";
pub const PATH_CHECK_AUTH: &str = "/check-auth";
pub const PATH_PRODUCTS: &str = "/products";
pub const PATH_EMPLOYEES: &str = "/employees";
pub const PATH_DELIVERIES: &str = "/deliveries";

/// 服务端分配的记录 ID
pub type RecordId = i64;

/// 拼接单条记录的资源路径，如 `/products/42`
pub fn record_path(collection: &str, id: RecordId) -> String {
    format!("{}/{}", collection, id)
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// `/login` 与 `/check-auth` 的响应
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// 删除、注销等操作的确认消息，未知字段忽略
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

// =========================================================
// 记录 (Records)
//
// 载荷结构只声明界面用到的字段，其余字段收进 `extra`，
// 读出后再原样写回时不会丢失服务端的数据。
// 除 `id` 外的字段缺失时取默认值。
// =========================================================

/// 界面未建模的字段
pub type Extra = Map<String, Value>;

// =========================================================
// 库存 (Products)
// =========================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(flatten)]
    pub base: NewProduct,
}

// =========================================================
// 员工 (Employees)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    #[serde(flatten)]
    pub base: NewEmployee,
}

// =========================================================
// 配送 (Deliveries)
// =========================================================

/// 配送状态，以字符串在线上传输
///
/// 无法识别的状态保存在 `Other` 中，写回时保持原值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
    Other(String),
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
            DeliveryStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InTransit => "In transit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
            DeliveryStatus::Other(raw) => raw,
        }
    }

    /// 仍可标记为已收货或取消
    pub fn is_open(&self) -> bool {
        matches!(self, DeliveryStatus::Pending | DeliveryStatus::InTransit)
    }
}

impl From<String> for DeliveryStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => DeliveryStatus::Pending,
            "in_transit" => DeliveryStatus::InTransit,
            "delivered" => DeliveryStatus::Delivered,
            "cancelled" => DeliveryStatus::Cancelled,
            _ => DeliveryStatus::Other(raw),
        }
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        match status {
            DeliveryStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewDelivery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<RecordId>,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: RecordId,
    #[serde(flatten)]
    pub base: NewDelivery,
}
