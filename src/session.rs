//! 会话守卫
//!
//! 进入路由时检查会话。路由通过 `AppRoute::requires_session` 声明自己是否受保护，
//! 只有受保护的路由才会请求 `/check-auth`。
//! 这只是客户端侧的提示性拦截，服务端仍需对每个接口单独鉴权。

use crate::api::InventoryApi;
use crate::request::HttpClient;
use crate::route::AppRoute;

/// 页面跳转
pub trait Navigator {
    fn redirect(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 路由不需要会话，未发起请求
    Public,
    /// 会话有效
    Allowed,
    /// 会话无效，已跳转到登录页
    Redirected,
}

/// 检查进入 `route` 是否被允许
pub async fn guard_route<C: HttpClient>(route: AppRoute, api: &InventoryApi<C>) -> GuardOutcome {
    if !route.requires_session() {
        return GuardOutcome::Public;
    }

    match api.check_auth().await {
        Ok(Some(_)) => GuardOutcome::Allowed,
        // 网关已经处理了 401 跳转
        Ok(None) => GuardOutcome::Redirected,
        Err(e) => {
            log::warn!("[Guard] session check for {} failed: {}", route, e);
            api.redirect_to_login();
            GuardOutcome::Redirected
        }
    }
}
