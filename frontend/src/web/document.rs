//! DOM 查询的小工具

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// 读取 `<meta name="..." content="...">` 的内容，用于运行时配置
pub fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??
        .get_attribute("content")
}
