//! 运行时配置
//!
//! 默认值编译期确定，运行时可通过查找函数覆盖（浏览器中由 `<meta>` 标签提供），
//! 未提供或无法解析的项回退到默认值。

use std::time::Duration;

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_NOTIFICATION_MILLIS: u64 = 3000;

// 覆盖项的键名
pub const KEY_API_BASE: &str = "stockroom-api-base";
pub const KEY_LOGIN_PATH: &str = "stockroom-login-path";
pub const KEY_THEME_KEY: &str = "stockroom-theme-key";
pub const KEY_NOTIFICATION_MILLIS: &str = "stockroom-notification-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API 根路径，不含结尾的 `/`
    pub api_base: String,
    /// 会话失效时跳转的登录页
    pub login_path: String,
    /// 主题偏好在本地存储中的键
    pub theme_storage_key: String,
    /// 通知的显示时长
    pub notification_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            notification_duration: Duration::from_millis(DEFAULT_NOTIFICATION_MILLIS),
        }
    }
}

impl ClientConfig {
    /// 从查找函数构建配置
    ///
    /// # Arguments
    /// * `lookup` - 按键名返回覆盖值，缺失时返回 `None`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let notification_duration = match get(KEY_NOTIFICATION_MILLIS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("ignoring invalid {}: {:?}", KEY_NOTIFICATION_MILLIS, raw);
                    defaults.notification_duration
                }
            },
            None => defaults.notification_duration,
        };

        Self {
            api_base: get(KEY_API_BASE)
                .map(|base| normalize_base(&base))
                .unwrap_or(defaults.api_base),
            login_path: get(KEY_LOGIN_PATH).unwrap_or(defaults.login_path),
            theme_storage_key: get(KEY_THEME_KEY).unwrap_or(defaults.theme_storage_key),
            notification_duration,
        }
    }
}

/// 去掉结尾的 `/`
pub fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_provided() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.notification_duration, Duration::from_millis(3000));
    }

    #[test]
    fn test_overrides_are_applied() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (KEY_API_BASE, "http://localhost:5000/api/"),
            (KEY_LOGIN_PATH, "/Login.html"),
            (KEY_NOTIFICATION_MILLIS, "1500"),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.login_path, "/Login.html");
        assert_eq!(config.theme_storage_key, DEFAULT_THEME_KEY);
        assert_eq!(config.notification_duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_and_blank_values_fall_back() {
        let config = ClientConfig::from_lookup(|k| match k {
            KEY_NOTIFICATION_MILLIS => Some("soon".to_string()),
            KEY_THEME_KEY => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.notification_duration, Duration::from_millis(3000));
        assert_eq!(config.theme_storage_key, "theme");
    }
}
