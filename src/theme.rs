//! 主题切换
//!
//! 偏好以 `"light"` / `"dark"` 字符串保存在本地存储中。
//! 加载时只有读到合法值才会应用，否则保持页面默认状态。

use std::cell::Cell;
use std::fmt::Display;
use std::str::FromStr;

/// 暗色模式时加在 body 上的 class
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 切换按钮上的图标 class：暗色时显示太阳，亮色时显示月亮
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 偏好的持久化存储
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    /// 写入是否成功
    fn save(&self, key: &str, value: &str) -> bool;
}

/// 将主题应用到页面
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeSwitcher<P: PreferenceStore, S: ThemeSurface> {
    store: P,
    surface: S,
    key: String,
    current: Cell<Theme>,
}

impl<P: PreferenceStore, S: ThemeSurface> ThemeSwitcher<P, S> {
    pub fn new(store: P, surface: S, key: impl Into<String>) -> Self {
        Self {
            store,
            surface,
            key: key.into(),
            current: Cell::new(Theme::default()),
        }
    }

    /// 恢复已保存的偏好
    ///
    /// 返回应用的主题；未保存或值无法识别时返回 `None`，页面保持不变。
    pub fn restore(&self) -> Option<Theme> {
        let saved = self.store.load(&self.key)?;
        match saved.parse::<Theme>() {
            Ok(theme) => {
                self.surface.apply(theme);
                self.current.set(theme);
                Some(theme)
            }
            Err(e) => {
                log::debug!("ignoring stored preference: {}", e);
                None
            }
        }
    }

    /// 切换主题并保存
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.surface.apply(next);
        self.current.set(next);
        if !self.store.save(&self.key, next.as_str()) {
            log::warn!("failed to persist theme preference");
        }
        next
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.save(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> bool {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
    }

    #[derive(Default)]
    struct FakePage {
        applied: RefCell<Vec<Theme>>,
    }

    impl FakePage {
        fn shown(&self) -> Option<Theme> {
            self.applied.borrow().last().copied()
        }
    }

    impl ThemeSurface for FakePage {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    #[test]
    fn test_restore_applies_saved_theme() {
        let switcher = ThemeSwitcher::new(MemoryStore::with("theme", "dark"), FakePage::default(), "theme");
        assert_eq!(switcher.restore(), Some(Theme::Dark));
        assert_eq!(switcher.surface.shown(), Some(Theme::Dark));
        assert_eq!(switcher.current(), Theme::Dark);
    }

    #[test]
    fn test_restore_leaves_page_untouched_without_preference() {
        let switcher = ThemeSwitcher::new(MemoryStore::default(), FakePage::default(), "theme");
        assert_eq!(switcher.restore(), None);
        assert!(switcher.surface.applied.borrow().is_empty());

        let switcher = ThemeSwitcher::new(MemoryStore::with("theme", "sepia"), FakePage::default(), "theme");
        assert_eq!(switcher.restore(), None);
        assert!(switcher.surface.applied.borrow().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        for saved in ["light", "dark"] {
            let switcher = ThemeSwitcher::new(MemoryStore::with("theme", saved), FakePage::default(), "theme");
            let original = switcher.restore().unwrap();

            assert_eq!(switcher.toggle(), original.toggled());
            assert_eq!(switcher.store.load("theme").as_deref(), Some(original.toggled().as_str()));

            assert_eq!(switcher.toggle(), original);
            assert_eq!(switcher.surface.shown(), Some(original));
            assert_eq!(switcher.store.load("theme").as_deref(), Some(saved));
        }
    }

    #[test]
    fn test_first_toggle_without_preference_goes_dark() {
        let switcher = ThemeSwitcher::new(MemoryStore::default(), FakePage::default(), "theme");
        switcher.restore();
        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.store.load("theme").as_deref(), Some("dark"));
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
    }
}
