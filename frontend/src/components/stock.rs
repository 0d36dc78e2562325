use crate::auth::use_auth;
use crate::components::forms::ProductForm;
use crate::components::layout::Shell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom::Severity;
use stockroom_shared::{LOW_STOCK_THRESHOLD, Product, RecordId};

/// 调整后的库存数量，不会小于 0
fn adjusted_quantity(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta).max(0)
}

#[component]
pub fn StockPage() -> impl IntoView {
    let auth = use_auth();
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let form = ProductForm::new();

    let load_products = move || {
        let api = auth.api();
        loading.set(true);
        spawn_local(async move {
            if let Ok(Some(list)) = api.list_products().await {
                products.set(list);
            }
            loading.set(false);
        });
    };

    // 初始加载
    load_products();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = auth.api();
        let Some(payload) = form.to_payload() else {
            api.notify("Quantity and price must be numbers", Severity::Warning);
            return;
        };
        spawn_local(async move {
            if let Ok(Some(created)) = api.create_product(&payload).await {
                products.update(|list| list.push(created));
                form.reset();
                api.notify("Product added", Severity::Success);
            }
        });
    };

    // 调整库存数量
    let handle_adjust = move |product: Product, delta: i64| {
        let api = auth.api();
        let id = product.id;
        let mut payload = product.base;
        payload.quantity = adjusted_quantity(payload.quantity, delta);
        spawn_local(async move {
            if let Ok(Some(updated)) = api.update_product(id, &payload).await {
                products.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                        *slot = updated;
                    }
                });
            }
        });
    };

    let handle_delete = move |id: RecordId| {
        let api = auth.api();
        spawn_local(async move {
            if let Ok(Some(_)) = api.delete_product(id).await {
                products.update(|list| list.retain(|p| p.id != id));
                api.notify("Product deleted", Severity::Success);
            }
        });
    };

    view! {
        <Shell title="Stock">
            <div class="card bg-base-100 shadow">
                <form class="card-body grid grid-cols-1 md:grid-cols-6 gap-2 items-end" on:submit=on_submit>
                    <input class="input input-bordered md:col-span-2" placeholder="Name" required
                        prop:value=form.name on:input=move |ev| form.name.set(event_target_value(&ev)) />
                    <input class="input input-bordered" placeholder="SKU"
                        prop:value=form.sku on:input=move |ev| form.sku.set(event_target_value(&ev)) />
                    <input class="input input-bordered" placeholder="Category"
                        prop:value=form.category on:input=move |ev| form.category.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="number" min="0" placeholder="Quantity" required
                        prop:value=form.quantity on:input=move |ev| form.quantity.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="number" min="0" step="0.01" placeholder="Price" required
                        prop:value=form.price on:input=move |ev| form.price.set(event_target_value(&ev)) />
                    <button type="submit" class="btn btn-primary md:col-span-6">"Add product"</button>
                </form>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg"></span> }
            >
                <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"SKU"</th>
                                <th>"Category"</th>
                                <th>"Quantity"</th>
                                <th>"Price"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                products
                                    .get()
                                    .into_iter()
                                    .map(|product| {
                                        let id = product.id;
                                        let low = product.base.quantity < LOW_STOCK_THRESHOLD;
                                        let increment = product.clone();
                                        let decrement = product.clone();
                                        view! {
                                            <tr class:text-error=low>
                                                <td>{id.to_string()}</td>
                                                <td>{product.base.name.clone()}</td>
                                                <td>{product.base.sku.clone().unwrap_or_default()}</td>
                                                <td>{product.base.category.clone().unwrap_or_default()}</td>
                                                <td>{product.base.quantity.to_string()}</td>
                                                <td>{format!("{:.2}", product.base.price)}</td>
                                                <td class="flex gap-1">
                                                    <button class="btn btn-xs"
                                                        on:click=move |_| handle_adjust(decrement.clone(), -1)>"-"</button>
                                                    <button class="btn btn-xs"
                                                        on:click=move |_| handle_adjust(increment.clone(), 1)>"+"</button>
                                                    <button class="btn btn-xs btn-error"
                                                        on:click=move |_| handle_delete(id)>"Delete"</button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_quantity_saturates_and_never_goes_negative() {
        assert_eq!(adjusted_quantity(3, 1), 4);
        assert_eq!(adjusted_quantity(0, -1), 0);
        assert_eq!(adjusted_quantity(i64::MAX, 1), i64::MAX);
        assert_eq!(adjusted_quantity(i64::MIN, -1), 0);
    }
}
