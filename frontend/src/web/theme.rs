//! 主题的 DOM 实现：body 上的 `dark-mode` class 与切换按钮里的图标

use super::document::{body, document};
use stockroom::theme::{DARK_CLASS, Theme, ThemeSurface};

pub const TOGGLE_ID: &str = "theme-toggle";

pub struct DomTheme;

impl ThemeSurface for DomTheme {
    fn apply(&self, theme: Theme) {
        if let Some(body) = body() {
            let classes = body.class_list();
            let _ = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }

        let icon = document().and_then(|d| {
            d.query_selector(&format!("#{} i", TOGGLE_ID))
                .ok()
                .flatten()
        });
        if let Some(icon) = icon {
            let classes = icon.class_list();
            let _ = classes.remove_1(theme.toggled().icon_class());
            let _ = classes.add_1(theme.icon_class());
        }
    }
}
