use crate::auth::use_auth;
use crate::components::layout::Shell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom_shared::{LOW_STOCK_THRESHOLD, Product, StockSummary};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = use_auth();
    let products = RwSignal::new(Vec::<Product>::new());

    let api = auth.api();
    spawn_local(async move {
        if let Ok(Some(list)) = api.list_products().await {
            products.set(list);
        }
    });

    let summary = Memo::new(move |_| products.with(|list| StockSummary::from_products(list)));

    view! {
        <Shell title="Reports">
            <div class="stats stats-vertical lg:stats-horizontal w-full shadow">
                <div class="stat">
                    <div class="stat-title">"Products"</div>
                    <div class="stat-value">{move || summary.get().items.to_string()}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Units in stock"</div>
                    <div class="stat-value">{move || summary.get().units.to_string()}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Stock value"</div>
                    <div class="stat-value">{move || format!("{:.2}", summary.get().value)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Low stock"</div>
                    <div class="stat-value text-warning">{move || summary.get().low_stock.to_string()}</div>
                    <div class="stat-desc">{format!("fewer than {} units", LOW_STOCK_THRESHOLD)}</div>
                </div>
            </div>
        </Shell>
    }
}
