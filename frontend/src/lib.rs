//! Stockroom 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `auth`: API 客户端与会话状态
//! - `theme`: 主题上下文
//! - `web::router`: 路由服务，进入受保护路由时执行会话守卫
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod deliveries;
    pub mod employees;
    mod forms;
    pub mod layout;
    pub mod login;
    pub mod overview;
    pub mod reports;
    pub mod settings;
    pub mod stock;
}
mod theme;

use crate::auth::AuthContext;
use crate::components::deliveries::DeliveriesPage;
use crate::components::employees::EmployeesPage;
use crate::components::login::LoginPage;
use crate::components::overview::OverviewPage;
use crate::components::reports::ReportsPage;
use crate::components::settings::SettingsPage;
use crate::components::stock::StockPage;
use crate::theme::ThemeContext;

use leptos::prelude::*;
use std::rc::Rc;
use stockroom::{AppRoute, ClientConfig, Gateway, InventoryApi};

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod console;
    mod document;
    mod http;
    pub mod router;
    mod storage;
    mod theme;
    mod timer;
    mod toast;

    pub use console::init as init_console_logger;
    pub use document::meta_content;
    pub use http::FetchClient;
    pub use storage::BrowserStorage;
    pub use theme::{DomTheme, TOGGLE_ID};
    pub use toast::Toasts;
}

use web::router::{LocationNavigator, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Main => view! { <OverviewPage /> }.into_any(),
        AppRoute::Stock => view! { <StockPage /> }.into_any(),
        AppRoute::Deliveries => view! { <DeliveriesPage /> }.into_any(),
        AppRoute::Employees => view! { <EmployeesPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <a class="link link-primary mt-4 inline-block" href=AppRoute::Login.to_path()>
                        "Back to login"
                    </a>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 安装浏览器控制台日志
pub fn init_logging() {
    web::init_console_logger(log::LevelFilter::Debug);
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取 <meta> 中的运行时配置
    let config = ClientConfig::from_lookup(web::meta_content);
    log::debug!("[App] api base {}", config.api_base);

    // 2. 组装 API 客户端：fetch 传输、整页跳转、DOM 通知
    let api = InventoryApi::new(
        Gateway::new(web::FetchClient, &config.api_base),
        Rc::new(LocationNavigator),
        Rc::new(web::Toasts::new(config.notification_duration)),
        config.login_path.clone(),
    );
    let auth = AuthContext::new(api);
    provide_context(auth);

    // 3. 恢复主题偏好
    provide_context(ThemeContext::init(&config.theme_storage_key));
    provide_context(config);

    view! {
        // 4. 路由器组件：每次路由切换都执行会话守卫
        <Router auth=auth>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
