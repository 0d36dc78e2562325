use crate::components::layout::{LogoutButton, Shell};
use crate::theme::use_theme;
use leptos::prelude::*;
use stockroom::{ClientConfig, Theme};

/// 设置页按钮的文字；导航栏里已有唯一的 `#theme-toggle` 图标按钮
fn switch_label(current: Theme) -> &'static str {
    match current.toggled() {
        Theme::Light => "Switch to light mode",
        Theme::Dark => "Switch to dark mode",
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme = use_theme();
    let config = use_context::<ClientConfig>().unwrap_or_default();

    view! {
        <Shell title="Settings">
            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="card-title">"Appearance"</h2>
                            <p class="text-base-content/70">
                                "Current theme: " {move || theme.current.get().to_string()}
                            </p>
                        </div>
                        <button class="btn btn-sm" on:click=move |_| theme.toggle()>
                            {move || switch_label(theme.current.get())}
                        </button>
                    </div>
                    <div class="divider"></div>
                    <div>
                        <h2 class="card-title">"Server"</h2>
                        <p class="font-mono text-sm">{config.api_base}</p>
                    </div>
                    <div class="divider"></div>
                    <div class="flex items-center justify-between">
                        <h2 class="card-title">"Session"</h2>
                        <LogoutButton />
                    </div>
                </div>
            </div>
        </Shell>
    }
}
