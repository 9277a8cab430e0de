//! Per-page permission grid for one user.
//!
//! Loads `GET /api/user/rights/:id` on open and posts the whole grid back on
//! save. Turning on any capability also grants access to the page.

use leptos::prelude::*;

use crate::actions::Services;
use crate::app::{notify_failure, notify_info, pending, spawn_guarded};
use crate::components::modal::Modal;
use crate::net::types::{PageRight, SaveRightsRequest};
use crate::state::inflight::Operation;
use crate::state::rights::{RightFlag, row_all_checked, set_row, toggle_flag};

#[component]
pub fn UserRightsModal(user_id: i64, user_label: String, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let rights = RwSignal::new(Vec::<PageRight>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let saving = pending(services.inflight, Operation::SaveRights);

    let client = services.api.client();
    leptos::task::spawn_local(async move {
        match client.fetch_user_rights(user_id).await {
            Ok(rows) => rights.set(rows),
            Err(e) => {
                log::warn!("rights for user {user_id} unavailable: {e}");
                error.set(Some(e.user_message("Could not load permissions.")));
            }
        }
        loading.set(false);
    });

    let on_save = move |_| {
        let request = SaveRightsRequest { user_id, rights: rights.get_untracked() };
        let client = services.api.client();
        let notify = services.notify;
        spawn_guarded(services.inflight, Operation::SaveRights, async move {
            match client.save_user_rights(&request).await {
                Ok(()) => {
                    notify_info(notify, "Success", "User permissions updated.");
                    on_close.run(());
                }
                Err(e) => notify_failure(notify, "Error", &e, "Could not save permissions"),
            }
        });
    };

    view! {
        <Modal title=format!("Permissions: {user_label}") on_close=on_close wide=true>
            <Show when=move || error.get().is_some()>
                <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading permissions..."</p> }>
                <div class="data-table__wrap">
                    <table class="data-table rights-table">
                        <thead>
                            <tr>
                                <th>"Page"</th>
                                <th>"All"</th>
                                {RightFlag::ALL.iter().map(|flag| view! { <th>{flag.label()}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rights
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, right)| {
                                        let all = row_all_checked(&right);
                                        view! {
                                            <tr>
                                                <td>{right.page_name.clone()}</td>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=all
                                                        on:change=move |ev| {
                                                            let value = event_target_checked(&ev);
                                                            rights.update(|r| set_row(r, index, value));
                                                        }
                                                    />
                                                </td>
                                                {RightFlag::ALL
                                                    .iter()
                                                    .map(|flag| {
                                                        let flag = *flag;
                                                        view! {
                                                            <td>
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=flag.get(&right)
                                                                    on:change=move |_| rights.update(|r| toggle_flag(r, index, flag))
                                                                />
                                                            </td>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
            <div class="dialog__actions">
                <button type="button" class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="button" class="btn btn--primary" disabled=saving on:click=on_save>
                    {move || if saving() { "Saving..." } else { "Save Permissions" }}
                </button>
            </div>
        </Modal>
    }
}
