//! 通知元素的 DOM 实现

use super::document::{body, document, element_by_id};
use super::timer::Timeout;
use std::rc::Rc;
use std::time::Duration;
use stockroom::notification::{Notification, Notifier, Severity, ToastSurface, Toaster};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const ELEMENT_ID: &str = "notification";

// 固定在右上角
const BASE_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "15px"),
    ("border-radius", "5px"),
    ("color", "white"),
    ("z-index", "1000"),
];

/// 页面中 id 为 `notification` 的元素
pub struct DomToast;

impl ToastSurface for DomToast {
    fn is_mounted(&self) -> bool {
        element_by_id(ELEMENT_ID).is_some()
    }

    fn mount(&self) {
        let (Some(doc), Some(body)) = (document(), body()) else {
            return;
        };
        let Some(el) = doc
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        el.set_id(ELEMENT_ID);
        let style = el.style();
        for (key, value) in BASE_STYLE {
            let _ = style.set_property(key, value);
        }
        let _ = style.set_property("display", "none");
        let _ = body.append_child(&el);
    }

    fn render(&self, notification: &Notification) {
        let Some(el) = element_by_id(ELEMENT_ID) else {
            return;
        };
        el.set_text_content(Some(&notification.message));
        el.set_class_name(&notification.class_name());
        let style = el.style();
        let _ = style.set_property("background-color", notification.severity.color());
        let _ = style.set_property("display", "block");
    }

    fn hide(&self) {
        if let Some(el) = element_by_id(ELEMENT_ID) {
            let _ = el.style().set_property("display", "none");
        }
    }
}

/// 应用内唯一的通知组件，到期后由 `setTimeout` 隐藏
#[derive(Clone)]
pub struct Toasts {
    inner: Rc<Toaster<DomToast>>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            inner: Rc::new(Toaster::new(DomToast, duration)),
        }
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        let ticket = self.inner.show(message, severity);
        let toaster = Rc::clone(&self.inner);
        let millis = u32::try_from(ticket.after().as_millis()).unwrap_or(u32::MAX);

        match Timeout::new(millis, move || {
            toaster.dismiss(ticket);
        }) {
            Some(timeout) => timeout.forget(),
            None => log::warn!("failed to schedule notification dismissal"),
        }
    }
}
