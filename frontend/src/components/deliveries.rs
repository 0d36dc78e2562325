use crate::auth::use_auth;
use crate::components::forms::DeliveryForm;
use crate::components::layout::Shell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom::Severity;
use stockroom_shared::date::format_date;
use stockroom_shared::{Delivery, DeliveryStatus, RecordId};

/// 状态对应的 badge 样式
fn status_badge(status: &DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Pending => "badge badge-warning",
        DeliveryStatus::InTransit => "badge badge-info",
        DeliveryStatus::Delivered => "badge badge-success",
        DeliveryStatus::Cancelled => "badge badge-error",
        DeliveryStatus::Other(_) => "badge badge-ghost",
    }
}

#[component]
pub fn DeliveriesPage() -> impl IntoView {
    let auth = use_auth();
    let deliveries = RwSignal::new(Vec::<Delivery>::new());
    let form = DeliveryForm::new();

    let api = auth.api();
    spawn_local(async move {
        if let Ok(Some(list)) = api.list_deliveries().await {
            deliveries.set(list);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = auth.api();
        let Some(payload) = form.to_payload() else {
            api.notify("Product id and quantity must be numbers", Severity::Warning);
            return;
        };
        spawn_local(async move {
            if let Ok(Some(created)) = api.create_delivery(&payload).await {
                deliveries.update(|list| list.push(created));
                form.reset();
                api.notify("Delivery scheduled", Severity::Success);
            }
        });
    };

    let handle_status = move |delivery: Delivery, status: DeliveryStatus| {
        let api = auth.api();
        let id = delivery.id;
        // 未建模的字段随载荷原样写回
        let mut payload = delivery.base;
        payload.status = status;
        spawn_local(async move {
            if let Ok(Some(updated)) = api.update_delivery(id, &payload).await {
                deliveries.update(|list| {
                    if let Some(slot) = list.iter_mut().find(|d| d.id == updated.id) {
                        *slot = updated;
                    }
                });
            }
        });
    };

    let handle_delete = move |id: RecordId| {
        let api = auth.api();
        spawn_local(async move {
            if let Ok(Some(_)) = api.delete_delivery(id).await {
                deliveries.update(|list| list.retain(|d| d.id != id));
                api.notify("Delivery deleted", Severity::Success);
            }
        });
    };

    view! {
        <Shell title="Deliveries">
            <div class="card bg-base-100 shadow">
                <form class="card-body grid grid-cols-1 md:grid-cols-4 gap-2 items-end" on:submit=on_submit>
                    <input class="input input-bordered" placeholder="Supplier" required
                        prop:value=form.supplier on:input=move |ev| form.supplier.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="number" placeholder="Product ID"
                        prop:value=form.product_id on:input=move |ev| form.product_id.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="number" min="1" placeholder="Quantity" required
                        prop:value=form.quantity on:input=move |ev| form.quantity.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="date"
                        prop:value=form.delivery_date on:input=move |ev| form.delivery_date.set(event_target_value(&ev)) />
                    <button type="submit" class="btn btn-primary md:col-span-4">"Schedule delivery"</button>
                </form>
            </div>

            <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Supplier"</th>
                            <th>"Product"</th>
                            <th>"Quantity"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            deliveries
                                .get()
                                .into_iter()
                                .map(|delivery| {
                                    let id = delivery.id;
                                    let status = &delivery.base.status;
                                    let open = status.is_open();
                                    let badge = status_badge(status);
                                    let label = status.label().to_string();
                                    let received = delivery.clone();
                                    let cancelled = delivery.clone();
                                    view! {
                                        <tr>
                                            <td>{id.to_string()}</td>
                                            <td>{delivery.base.supplier.clone()}</td>
                                            <td>{delivery.base.product_id.map(|p| p.to_string()).unwrap_or_default()}</td>
                                            <td>{delivery.base.quantity.to_string()}</td>
                                            <td>{format_date(delivery.base.delivery_date.as_deref())}</td>
                                            <td><span class=badge>{label}</span></td>
                                            <td class="flex gap-1">
                                                <Show when=move || open>
                                                    <button class="btn btn-xs btn-success"
                                                        on:click={
                                                            let received = received.clone();
                                                            move |_| handle_status(received.clone(), DeliveryStatus::Delivered)
                                                        }>"Received"</button>
                                                    <button class="btn btn-xs"
                                                        on:click={
                                                            let cancelled = cancelled.clone();
                                                            move |_| handle_status(cancelled.clone(), DeliveryStatus::Cancelled)
                                                        }>"Cancel"</button>
                                                </Show>
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
        </Shell>
    }
}
