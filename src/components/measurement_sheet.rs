//! Per-customer measurement entry panel.
//!
//! There is no endpoint for customer measurements yet: saving keeps the
//! sheet in this panel and confirms with a toast.

use leptos::prelude::*;

use crate::actions::Services;
use crate::app::notify_info;
use crate::net::api::Resource;
use crate::net::types::{Measurement, TailoringItem};
use crate::state::cache::QueryKey;
use crate::state::customers::MeasurementSheet;

#[component]
pub fn MeasurementSheetPanel(customer_name: String, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let measurements = services.list::<Measurement>(Resource::Measurements, QueryKey::Measurements);
    let items = services.list::<TailoringItem>(Resource::TailoringItems, QueryKey::TailoringItems);
    let sheet = RwSignal::new(MeasurementSheet::default());

    let visible = move || {
        let all = measurements.rows.get();
        items.rows.with(|items| sheet.with(|s| s.visible(&all, items)))
    };

    let on_save = move |_| {
        let entries = measurements.rows.with_untracked(|all| sheet.with_untracked(|s| s.entries(all)));
        log::info!("kept {} measurement values locally", entries.len());
        notify_info(services.notify, "Saved", "Measurements saved locally");
        on_close.run(());
    };

    view! {
        <div class="side-panel-backdrop" on:click=move |_| on_close.run(())>
            <aside class="side-panel side-panel--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="side-panel__header">
                    <div>
                        <h2>"Measurements"</h2>
                        <p class="side-panel__subtitle">{customer_name}</p>
                    </div>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <label class="field">
                    <span class="field__label">"Tailoring Item"</span>
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            let item = event_target_value(&ev).parse::<i64>().ok().filter(|id| *id != 0);
                            sheet.update(|s| s.item_filter = item);
                        }
                    >
                        <option value="0">"All measurements"</option>
                        {move || {
                            items
                                .rows
                                .get()
                                .into_iter()
                                .filter(|item| item.is_active)
                                .map(|item| view! { <option value=item.item_id.to_string()>{item.item_name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <Show when=move || measurements.loading.get()>
                    <p class="side-panel__status">"Loading measurements..."</p>
                </Show>
                <table class="data-table data-table--compact">
                    <thead>
                        <tr>
                            <th>"Measurement"</th>
                            <th>"Value"</th>
                            <th>"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|m| {
                                    let id = m.measurement_id;
                                    view! {
                                        <tr>
                                            <td>{m.measurement_name}</td>
                                            <td>
                                                <input
                                                    class="field__input"
                                                    type="number"
                                                    step="0.01"
                                                    placeholder="0.00"
                                                    prop:value=move || sheet.with(|s| s.value(id).to_owned())
                                                    on:input=move |ev| sheet.update(|s| s.set_value(id, event_target_value(&ev)))
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    class="field__input"
                                                    type="text"
                                                    placeholder="Add note..."
                                                    prop:value=move || sheet.with(|s| s.note(id).to_owned())
                                                    on:input=move |ev| sheet.update(|s| s.set_note(id, event_target_value(&ev)))
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <div class="side-panel__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn--primary" on:click=on_save>
                        "Save Measurements"
                    </button>
                </div>
            </aside>
        </div>
    }
}
