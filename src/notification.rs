//! 通知组件
//!
//! 页面上最多只有一个通知元素。`Toaster` 负责“首次创建、之后复用”的策略，
//! 并用代数标记保证只有最近一次显示对应的定时器能隐藏它（后写者胜）。
//! 实际的 DOM 操作由 `ToastSurface` 实现提供。

use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// 用作元素 class 的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// 背景色
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#17a2b8",
            Severity::Success => "#28a745",
            Severity::Warning => "#ffc107",
            Severity::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// 元素的完整 class，如 `notification error`
    pub fn class_name(&self) -> String {
        format!("notification {}", self.severity.as_str())
    }
}

/// 通知元素的显示面
pub trait ToastSurface {
    /// 页面中是否已存在通知元素
    fn is_mounted(&self) -> bool;
    /// 创建通知元素并挂载到页面
    fn mount(&self);
    /// 更新文本、样式并显示
    fn render(&self, notification: &Notification);
    /// 隐藏（不移除）
    fn hide(&self);
}

/// 对外的通知接口，供 `api` 层在失败时提示
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// 一次显示对应的隐藏凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
    after: Duration,
}

impl DismissTicket {
    /// 应在多久之后调用 `Toaster::dismiss`
    pub fn after(&self) -> Duration {
        self.after
    }
}

pub struct Toaster<S: ToastSurface> {
    surface: S,
    duration: Duration,
    generation: Cell<u64>,
    current: RefCell<Option<Notification>>,
}

impl<S: ToastSurface> Toaster<S> {
    pub fn new(surface: S, duration: Duration) -> Self {
        Self {
            surface,
            duration,
            generation: Cell::new(0),
            current: RefCell::new(None),
        }
    }

    /// 显示通知，返回到期后用于隐藏的凭据
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> DismissTicket {
        if !self.surface.is_mounted() {
            self.surface.mount();
        }

        let notification = Notification {
            message: message.into(),
            severity,
        };
        self.surface.render(&notification);
        *self.current.borrow_mut() = Some(notification);

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        DismissTicket {
            generation,
            after: self.duration,
        }
    }

    /// 隐藏通知
    ///
    /// 凭据已被更新的显示取代时不做任何事，返回 `false`。
    pub fn dismiss(&self, ticket: DismissTicket) -> bool {
        if ticket.generation != self.generation.get() {
            return false;
        }
        self.surface.hide();
        self.current.borrow_mut().take();
        true
    }

    /// 当前可见的通知
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
