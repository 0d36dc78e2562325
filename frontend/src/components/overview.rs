use crate::auth::use_auth;
use crate::components::layout::Shell;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, Default)]
struct Counts {
    products: usize,
    employees: usize,
    deliveries: usize,
}

#[component]
fn StatCard(label: &'static str, value: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 shadow rounded-box">
            <div class="stat-title">{label}</div>
            <div class="stat-value">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
            </div>
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth = use_auth();
    let counts = RwSignal::new(Option::<Counts>::None);

    // 三个列表并发加载
    let api = auth.api();
    spawn_local(async move {
        let (products, employees, deliveries) = futures::join!(
            api.list_products(),
            api.list_employees(),
            api.list_deliveries()
        );
        if let (Ok(Some(p)), Ok(Some(e)), Ok(Some(d))) = (products, employees, deliveries) {
            counts.set(Some(Counts {
                products: p.len(),
                employees: e.len(),
                deliveries: d.len(),
            }));
        }
    });

    let pick = move |f: fn(&Counts) -> usize| Signal::derive(move || counts.get().map(|c| f(&c)));

    view! {
        <Shell title="Overview">
            <div class="stats stats-vertical lg:stats-horizontal w-full">
                <StatCard label="Products" value=pick(|c| c.products) />
                <StatCard label="Employees" value=pick(|c| c.employees) />
                <StatCard label="Deliveries" value=pick(|c| c.deliveries) />
            </div>
            <Show when=move || auth.session.get().and_then(|s| s.username).is_some()>
                <p class="text-base-content/70">
                    "Signed in as "
                    {move || auth.session.get().and_then(|s| s.username).unwrap_or_default()}
                </p>
            </Show>
        </Shell>
    }
}
