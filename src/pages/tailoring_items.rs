//! Tailoring items list with linked-measurement counts.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::app_shell::AppShell;
use crate::components::pager::Pager;
use crate::components::search_input::SearchInput;
use crate::components::status_badge::StatusBadge;
use crate::components::tailoring_item_form::TailoringItemDialog;
use crate::net::api::Resource;
use crate::net::types::{Measurement, TailoringItem};
use crate::state::cache::QueryKey;
use crate::state::inflight::Operation;
use crate::state::list::{Pagination, filter_rows, serial, sort_by_display_order};
use crate::state::tailoring::{self, TailoringItemForm, linked_label};

#[component]
pub fn TailoringItemsPage() -> impl IntoView {
    let services = Services::expect();
    let query = services.list::<TailoringItem>(Resource::TailoringItems, QueryKey::TailoringItems);
    let measurements = services.list::<Measurement>(Resource::Measurements, QueryKey::Measurements);
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(Pagination::default());
    let editing = RwSignal::new(None::<TailoringItemForm>);
    let deleting = pending(services.inflight, Operation::DeleteTailoringItem);

    let rows = Memo::new(move |_| {
        let term = search.get();
        let mut rows: Vec<TailoringItem> =
            query.rows.with(|all| filter_rows(all, &term, tailoring::search_fields).into_iter().cloned().collect());
        sort_by_display_order(&mut rows, |item| item.display_order);
        rows
    });
    let total = Signal::derive(move || rows.with(Vec::len));
    let page_rows = move || rows.with(|all| pagination.with(|p| (p.offset(), p.slice(all).to_vec())));
    let master = Signal::derive(move || measurements.rows.get());

    let on_close = Callback::new(move |()| editing.set(None));

    view! {
        <AppShell title="Tailoring Items">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchInput value=search placeholder="Search items..."/>
                    <button class="btn btn--primary" on:click=move |_| editing.set(Some(TailoringItemForm::default()))>
                        "+ Add Item"
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
                                <th>"Item Name"</th>
                                <th>"Code"</th>
                                <th>"Measurements"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if query.loading.get() && rows.with(Vec::is_empty) {
                                    return view! { <tr><td colspan="6">"Loading items..."</td></tr> }.into_any();
                                }
                                if rows.with(Vec::is_empty) {
                                    return view! { <tr><td colspan="6">"No tailoring items found."</td></tr> }.into_any();
                                }
                                let (offset, visible) = page_rows();
                                visible
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        let id = item.item_id;
                                        let name = item.item_name.clone();
                                        let form = TailoringItemForm::from_item(&item);
                                        let linked = linked_label(&item);
                                        view! {
                                            <tr>
                                                <td>{serial(offset + index)}</td>
                                                <td>{item.item_name}</td>
                                                <td>{item.item_code.unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{linked}</td>
                                                <td><StatusBadge active=item.is_active/></td>
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
                                                            services.delete(actions::TAILORING_ITEMS, id, &format!("Delete item {name}?"));
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
            {move || {
                editing
                    .get()
                    .map(|form| view! { <TailoringItemDialog initial=form measurements=master on_close=on_close/> })
            }}
        </AppShell>
    }
}
