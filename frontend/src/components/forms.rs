//! 表单状态管理模块
//!
//! 将零散的 signal 整合为结构体，负责数据的持有、重置，以及到请求载荷的转换。
//! 载荷原样提交，这里只做输入框文本到数字的解析。

use leptos::prelude::*;
use stockroom_shared::{DeliveryStatus, NewDelivery, NewEmployee, NewProduct, RecordId};

/// 空白输入视为未填写
fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct ProductForm {
    pub name: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub category: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub price: RwSignal<String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            sku: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.sku.set(String::new());
        self.category.set(String::new());
        self.quantity.set(String::new());
        self.price.set(String::new());
    }

    /// 数量或价格无法解析时返回 `None`
    pub fn to_payload(&self) -> Option<NewProduct> {
        Some(NewProduct {
            name: self.name.get().trim().to_string(),
            sku: optional(self.sku.get()),
            category: optional(self.category.get()),
            quantity: self.quantity.get().trim().parse().ok()?,
            price: self.price.get().trim().parse().ok()?,
            ..Default::default()
        })
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeForm {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub position: RwSignal<String>,
    pub phone: RwSignal<String>,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            position: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.position.set(String::new());
        self.phone.set(String::new());
    }

    pub fn to_payload(&self) -> NewEmployee {
        NewEmployee {
            name: self.name.get().trim().to_string(),
            email: self.email.get().trim().to_string(),
            position: optional(self.position.get()),
            phone: optional(self.phone.get()),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct DeliveryForm {
    pub product_id: RwSignal<String>,
    pub supplier: RwSignal<String>,
    pub quantity: RwSignal<String>,
    /// `<input type="date">` 的值，格式为 `YYYY-MM-DD`
    pub delivery_date: RwSignal<String>,
}

impl DeliveryForm {
    pub fn new() -> Self {
        Self {
            product_id: RwSignal::new(String::new()),
            supplier: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            delivery_date: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.product_id.set(String::new());
        self.supplier.set(String::new());
        self.quantity.set(String::new());
        self.delivery_date.set(String::new());
    }

    /// 新建的配送单总是 `pending`
    pub fn to_payload(&self) -> Option<NewDelivery> {
        let product_id = match optional(self.product_id.get()) {
            Some(raw) => Some(raw.parse::<RecordId>().ok()?),
            None => None,
        };

        Some(NewDelivery {
            product_id,
            supplier: self.supplier.get().trim().to_string(),
            quantity: self.quantity.get().trim().parse().ok()?,
            status: DeliveryStatus::Pending,
            delivery_date: optional(self.delivery_date.get()),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_payload_parses_numbers_and_drops_blank_fields() {
        let form = ProductForm::new();
        form.name.set(" Widget ".to_string());
        form.sku.set("   ".to_string());
        form.quantity.set("12".to_string());
        form.price.set("3.5".to_string());

        let payload = form.to_payload().expect("valid form");
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.sku, None);
        assert_eq!(payload.quantity, 12);
        assert_eq!(payload.price, 3.5);

        form.price.set("cheap".to_string());
        assert!(form.to_payload().is_none());
    }

    #[test]
    fn delivery_payload_is_pending_with_optional_product() {
        let form = DeliveryForm::new();
        form.supplier.set("Acme".to_string());
        form.quantity.set("40".to_string());
        form.delivery_date.set("2024-03-05".to_string());

        let payload = form.to_payload().expect("valid form");
        assert_eq!(payload.product_id, None);
        assert_eq!(payload.status, DeliveryStatus::Pending);
        assert_eq!(payload.delivery_date.as_deref(), Some("2024-03-05"));

        form.product_id.set("x1".to_string());
        assert!(form.to_payload().is_none());

        form.reset();
        assert!(form.supplier.get().is_empty());
    }
}
