//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："监听 -> 切换 -> 守卫 -> 加载"，守卫由核心库的 `guard_route` 完成。

use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom::AppRoute;
use stockroom::session::{GuardOutcome, Navigator, guard_route};
use wasm_bindgen::prelude::*;

use crate::auth::AuthContext;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于规范化旧地址）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 会话失效时整页跳转
///
/// 已经位于目标路径时不做任何事，避免登录页反复刷新。
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn redirect(&self, path: &str) {
        if current_path() == path {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("[Router] redirect to {} failed: {:?}", path, e);
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 旧版页面地址（如 `/stock.html`）会被替换为规范路径。
    fn new() -> Self {
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        if initial_route != AppRoute::NotFound && initial_route.to_path() != path {
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定路由并推入 History
    pub fn navigate_to(&self, route: AppRoute) {
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 每次路由切换都执行会话守卫
    fn setup_session_guard(&self, auth: AuthContext) {
        let current_route = self.current_route;

        Effect::new(move |_| {
            let route = current_route.get();
            if !route.requires_session() {
                return;
            }

            let api = auth.api();
            spawn_local(async move {
                let outcome = guard_route(route, &api).await;
                log::debug!("[Router] guard {} -> {:?}", route, outcome);
                if outcome == GuardOutcome::Redirected {
                    auth.session.set(None);
                }
            });
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth: AuthContext) -> RouterService {
    let router = RouterService::new();

    router.init_popstate_listener();
    router.setup_session_guard(auth);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部、认证上下文之后使用。
#[component]
pub fn Router(
    /// 认证上下文，守卫通过它发起会话检查
    auth: AuthContext,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(auth);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
