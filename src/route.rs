//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 每个路由自行声明是否需要会话，由路由服务在进入时解析。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 总览
    Main,
    /// 库存
    Stock,
    /// 配送
    Deliveries,
    /// 员工
    Employees,
    /// 报表
    Reports,
    /// 设置
    Settings,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 兼容旧版静态页面的文件名（如 `/stock.html`、`/Employee.html`），
    /// 去掉 `.html` 后不区分大小写匹配。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        let name = name.strip_suffix(".html").unwrap_or(name).to_ascii_lowercase();

        match name.as_str() {
            "" | "index" | "login" => Self::Login,
            "main" | "dashboard" => Self::Main,
            "stock" | "products" => Self::Stock,
            "delivery" | "deliveries" => Self::Deliveries,
            "employee" | "employees" => Self::Employees,
            "reports" => Self::Reports,
            "settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Main => "/main",
            Self::Stock => "/stock",
            Self::Deliveries => "/delivery",
            Self::Employees => "/employees",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// 导航栏显示的标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Main => "Overview",
            Self::Stock => "Stock",
            Self::Deliveries => "Deliveries",
            Self::Employees => "Employees",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::NotFound => "Not found",
        }
    }

    /// **核心守卫逻辑：该路由是否需要有效会话**
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Self::Main
                | Self::Stock
                | Self::Deliveries
                | Self::Employees
                | Self::Reports
                | Self::Settings
        )
    }

    /// 导航栏中列出的受保护页面
    pub fn navigation() -> [Self; 6] {
        [
            Self::Main,
            Self::Stock,
            Self::Deliveries,
            Self::Employees,
            Self::Reports,
            Self::Settings,
        ]
    }

    /// 登录成功后的跳转目标
    pub fn after_login() -> Self {
        Self::Main
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
