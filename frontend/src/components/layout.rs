//! 页面外框：导航栏、主题切换与注销

use crate::auth::{logout, use_auth};
use crate::theme::use_theme;
use crate::web::TOGGLE_ID;
use crate::web::router::use_router;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom::{AppRoute, Severity};

/// 主题切换按钮，图标为 `#theme-toggle i`
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            id=TOGGLE_ID
            class="btn btn-ghost btn-circle"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            <i class=move || format!("fas {}", theme.current.get().icon_class())></i>
        </button>
    }
}

/// 注销按钮
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        spawn_local(async move {
            if logout(auth).await {
                auth.api().notify("Logged out", Severity::Success);
            }
            router.navigate_to(AppRoute::Login);
        });
    };

    view! {
        <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>
            "Logout"
        </button>
    }
}

/// 受保护页面共用的外框
#[component]
pub fn Shell(
    /// 页面标题
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let current = router.current_route();

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <nav class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1 gap-2">
                    <span class="text-xl font-bold">"Stockroom"</span>
                    <ul class="menu menu-horizontal px-1">
                        {AppRoute::navigation()
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <li>
                                        <a
                                            href=route.to_path()
                                            class:active=move || current.get() == route
                                            on:click=move |ev: MouseEvent| {
                                                ev.prevent_default();
                                                router.navigate_to(route);
                                            }
                                        >
                                            {route.title()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex-none gap-2">
                    <ThemeToggle />
                    <LogoutButton />
                </div>
            </nav>
            <main class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-3xl font-bold">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
