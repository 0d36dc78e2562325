//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setTimeout`。

use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 被 drop 时自动清除；调用 `forget` 后改为在到期时执行并释放。
pub struct Timeout {
    handle: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// 创建新的定时器
    ///
    /// # 参数
    /// - `millis`: 延迟时间（毫秒）
    /// - `callback`: 到期时执行的回调
    ///
    /// 无法获取 window 对象或设置定时器失败时返回 `None`
    pub fn new<F>(millis: u32, callback: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        let window = web_sys::window()?;

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )
            .ok()?;

        Some(Self {
            handle: Some(handle),
            closure: Some(closure),
        })
    }

    /// 取消定时器
    pub fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }

    /// 放弃所有权，让定时器照常触发
    pub fn forget(mut self) {
        self.handle = None;
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
