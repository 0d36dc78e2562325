//! 认证模块
//!
//! 会话保存在服务端 Cookie 中，这里只持有 API 客户端和最近一次的会话状态。

use crate::web::FetchClient;
use leptos::prelude::*;
use stockroom::InventoryApi;
use stockroom_shared::{Credentials, SessionStatus};

pub type Api = InventoryApi<FetchClient>;

/// 认证上下文
///
/// API 客户端内部持有 `Rc`，因此以本地存储的方式放入 Context。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<Api, LocalStorage>,
    /// 最近一次登录得到的会话
    pub session: RwSignal<Option<SessionStatus>>,
}

impl AuthContext {
    pub fn new(api: Api) -> Self {
        Self {
            api: StoredValue::new_local(api),
            session: RwSignal::new(None),
        }
    }

    /// 获取 API 客户端
    pub fn api(&self) -> Api {
        self.api.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录
///
/// # Returns
/// 成功时返回会话状态；失败时返回显示在表单上的错误信息
pub async fn login(ctx: AuthContext, credentials: Credentials) -> Result<SessionStatus, String> {
    match ctx.api().login(&credentials).await {
        Ok(Some(status)) => {
            log::info!("[Auth] logged in as {}", credentials.username);
            ctx.session.set(Some(status.clone()));
            Ok(status)
        }
        Ok(None) => Err("Invalid username or password".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// 注销并清除状态，返回服务端是否确认
pub async fn logout(ctx: AuthContext) -> bool {
    let result = ctx.api().logout().await;
    ctx.session.set(None);
    matches!(result, Ok(Some(_)))
}
