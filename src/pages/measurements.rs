//! Measurement master list ordered by display order.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::app_shell::AppShell;
use crate::components::measurement_form::MeasurementDialog;
use crate::components::pager::Pager;
use crate::components::search_input::SearchInput;
use crate::components::status_badge::StatusBadge;
use crate::net::api::Resource;
use crate::net::types::Measurement;
use crate::state::cache::QueryKey;
use crate::state::inflight::Operation;
use crate::state::list::{Pagination, filter_rows, serial, sort_by_display_order};
use crate::state::measurements::{self, MeasurementForm};

#[component]
pub fn MeasurementsPage() -> impl IntoView {
    let services = Services::expect();
    let query = services.list::<Measurement>(Resource::Measurements, QueryKey::Measurements);
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(Pagination::default());
    let editing = RwSignal::new(None::<MeasurementForm>);
    let deleting = pending(services.inflight, Operation::DeleteMeasurement);

    let rows = Memo::new(move |_| {
        let term = search.get();
        let mut rows: Vec<Measurement> =
            query.rows.with(|all| filter_rows(all, &term, measurements::search_fields).into_iter().cloned().collect());
        sort_by_display_order(&mut rows, |m| m.display_order);
        rows
    });
    let total = Signal::derive(move || rows.with(Vec::len));
    let page_rows = move || rows.with(|all| pagination.with(|p| (p.offset(), p.slice(all).to_vec())));

    let on_close = Callback::new(move |()| editing.set(None));

    view! {
        <AppShell title="Measurements">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchInput value=search placeholder="Search measurements..."/>
                    <button class="btn btn--primary" on:click=move |_| editing.set(Some(MeasurementForm::default()))>
                        "+ Add Measurement"
                    </button>
                </div>
                <Show when=move || query.error.get().is_some()>
                    <p class="list-page__error">{move || query.error.get().unwrap_or_default()}</p>
                </Show>
                <div class="data-table__wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"SR"</th>
                                <th>"Image"</th>
                                <th>"Measurement Name"</th>
                                <th>"Order"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if query.loading.get() && rows.with(Vec::is_empty) {
                                    return view! { <tr><td colspan="6">"Loading measurements..."</td></tr> }.into_any();
                                }
                                if rows.with(Vec::is_empty) {
                                    return view! { <tr><td colspan="6">"No measurements found."</td></tr> }.into_any();
                                }
                                let (offset, visible) = page_rows();
                                visible
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, m)| {
                                        let id = m.measurement_id;
                                        let name = m.measurement_name.clone();
                                        let form = MeasurementForm::from_measurement(&m);
                                        view! {
                                            <tr>
                                                <td>{serial(offset + index)}</td>
                                                <td>
                                                    {m.image_url.clone().filter(|u| !u.trim().is_empty()).map(|src| {
                                                        view! { <img class="data-table__thumb" src=src alt=""/> }
                                                    })}
                                                </td>
                                                <td>{m.measurement_name}</td>
                                                <td>{m.display_order}</td>
                                                <td><StatusBadge active=m.is_active/></td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| editing.set(Some(form.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        disabled=deleting
                                                        on:click=move |_| {
                                                            services.delete(actions::MEASUREMENTS, id, &format!("Delete measurement {name}?"));
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
                <Pager pagination=pagination total=total/>
            </section>
            {move || editing.get().map(|form| view! { <MeasurementDialog initial=form on_close=on_close/> })}
        </AppShell>
    }
}
