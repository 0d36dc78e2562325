//! 主题上下文

use crate::web::{BrowserStorage, DomTheme};
use leptos::prelude::*;
use stockroom::{Theme, ThemeSwitcher};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    switcher: StoredValue<ThemeSwitcher<BrowserStorage, DomTheme>, LocalStorage>,
    /// 当前主题，驱动切换按钮的图标
    pub current: RwSignal<Theme>,
}

impl ThemeContext {
    /// 创建上下文并应用已保存的偏好
    pub fn init(storage_key: &str) -> Self {
        let switcher = ThemeSwitcher::new(BrowserStorage, DomTheme, storage_key);
        if let Some(theme) = switcher.restore() {
            log::debug!("[Theme] restored {}", theme);
        }
        let current = RwSignal::new(switcher.current());

        Self {
            switcher: StoredValue::new_local(switcher),
            current,
        }
    }

    pub fn toggle(&self) {
        let next = self.switcher.with_value(|s| s.toggle());
        self.current.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
