//! Customers list with a row action menu, side-panel form and measurement
//! sheet.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::components::app_shell::AppShell;
use crate::components::customer_panel::CustomerPanel;
use crate::components::measurement_sheet::MeasurementSheetPanel;
use crate::components::pager::Pager;
use crate::components::search_input::SearchInput;
use crate::net::api::Resource;
use crate::net::types::Contact;
use crate::state::cache::QueryKey;
use crate::state::customers::{self, CustomerForm, avatar_initial};
use crate::state::list::{Pagination, filter_rows};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let services = Services::expect();
    let query = services.list::<Contact>(Resource::Contacts, QueryKey::Contacts);
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(Pagination::default());
    let panel = RwSignal::new(None::<CustomerForm>);
    let sheet_for = RwSignal::new(None::<String>);
    let menu_for = RwSignal::new(None::<i64>);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        query.rows.with(|rows| filter_rows(rows, &term, customers::search_fields).into_iter().cloned().collect::<Vec<_>>())
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let page_rows = move || filtered.with(|rows| pagination.with(|p| p.slice(rows).to_vec()));

    let close_panel = Callback::new(move |()| panel.set(None));
    let close_sheet = Callback::new(move |()| sheet_for.set(None));

    view! {
        <AppShell title="Customers">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchInput value=search placeholder="Search by name or mobile..."/>
                    <button class="btn btn--primary" on:click=move |_| panel.set(Some(CustomerForm::default()))>
                        "+ New Customer"
                    </button>
                </div>
                <Show when=move || query.error.get().is_some()>
                    <p class="list-page__error">{move || query.error.get().unwrap_or_default()}</p>
                </Show>
                <div class="data-table__wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Customer"</th>
                                <th>"Mobile"</th>
                                <th>"Company"</th>
                                <th>"Type"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if query.loading.get() && total.get() == 0 {
                                    return view! { <tr><td colspan="5">"Loading customers..."</td></tr> }.into_any();
                                }
                                if total.get() == 0 {
                                    return view! { <tr><td colspan="5">"No customers found."</td></tr> }.into_any();
                                }
                                page_rows()
                                    .into_iter()
                                    .map(|contact| {
                                        let id = contact.contact_id;
                                        let form = CustomerForm::from_contact(&contact);
                                        let name = contact.person_name.clone();
                                        let sheet_name = contact.person_name.clone();
                                        view! {
                                            <tr>
                                                <td class="data-table__person">
                                                    <span class="avatar">{avatar_initial(&contact.person_name)}</span>
                                                    <span>{contact.person_name}</span>
                                                </td>
                                                <td>{contact.contact_no}</td>
                                                <td>{contact.company_name}</td>
                                                <td>{contact.contact_type}</td>
                                                <td class="data-table__actions">
                                                    <div class="row-menu">
                                                        <button
                                                            class="btn btn--small row-menu__trigger"
                                                            title="Actions"
                                                            on:click=move |_| {
                                                                menu_for.update(|open| {
                                                                    *open = if *open == Some(id) { None } else { Some(id) };
                                                                });
                                                            }
                                                        >
                                                            "⋯"
                                                        </button>
                                                        <div class="row-menu__items" class:row-menu__items--open=move || menu_for.get() == Some(id)>
                                                            <button
                                                                class="row-menu__item"
                                                                on:click=move |_| {
                                                                    menu_for.set(None);
                                                                    panel.set(Some(form.clone()));
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="row-menu__item"
                                                                on:click=move |_| {
                                                                    menu_for.set(None);
                                                                    sheet_for.set(Some(sheet_name.clone()));
                                                                }
                                                            >
                                                                "Measurements"
                                                            </button>
                                                            <button
                                                                class="row-menu__item row-menu__item--danger"
                                                                on:click=move |_| {
                                                                    menu_for.set(None);
                                                                    services.delete(actions::CUSTOMERS, id, &format!("Delete customer {name}?"));
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </div>
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
            {move || panel.get().map(|form| view! { <CustomerPanel initial=form on_close=close_panel/> })}
            {move || {
                sheet_for.get().map(|name| view! { <MeasurementSheetPanel customer_name=name on_close=close_sheet/> })
            }}
        </AppShell>
    }
}
