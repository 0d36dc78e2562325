use crate::auth::use_auth;
use crate::components::forms::EmployeeForm;
use crate::components::layout::Shell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stockroom::Severity;
use stockroom_shared::{Employee, RecordId};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let auth = use_auth();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let form = EmployeeForm::new();

    let api = auth.api();
    spawn_local(async move {
        if let Ok(Some(list)) = api.list_employees().await {
            employees.set(list);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = auth.api();
        let payload = form.to_payload();
        spawn_local(async move {
            if let Ok(Some(created)) = api.create_employee(&payload).await {
                employees.update(|list| list.push(created));
                form.reset();
                api.notify("Employee added", Severity::Success);
            }
        });
    };

    let handle_delete = move |id: RecordId| {
        let api = auth.api();
        spawn_local(async move {
            if let Ok(Some(_)) = api.delete_employee(id).await {
                employees.update(|list| list.retain(|e| e.id != id));
                api.notify("Employee removed", Severity::Success);
            }
        });
    };

    view! {
        <Shell title="Employees">
            <div class="card bg-base-100 shadow">
                <form class="card-body grid grid-cols-1 md:grid-cols-4 gap-2 items-end" on:submit=on_submit>
                    <input class="input input-bordered" placeholder="Name" required
                        prop:value=form.name on:input=move |ev| form.name.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="email" placeholder="Email" required
                        prop:value=form.email on:input=move |ev| form.email.set(event_target_value(&ev)) />
                    <input class="input input-bordered" placeholder="Position"
                        prop:value=form.position on:input=move |ev| form.position.set(event_target_value(&ev)) />
                    <input class="input input-bordered" type="tel" placeholder="Phone"
                        prop:value=form.phone on:input=move |ev| form.phone.set(event_target_value(&ev)) />
                    <button type="submit" class="btn btn-primary md:col-span-4">"Add employee"</button>
                </form>
            </div>

            <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Position"</th>
                            <th>"Phone"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|Employee { id, base }| {
                                    view! {
                                        <tr>
                                            <td>{base.name}</td>
                                            <td>{base.email}</td>
                                            <td>{base.position.unwrap_or_default()}</td>
                                            <td>{base.phone.unwrap_or_default()}</td>
                                            <td>
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
