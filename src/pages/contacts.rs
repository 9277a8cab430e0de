//! Contacts list with search, paging and the create/edit dialog.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::app_shell::AppShell;
use crate::components::contact_form::ContactDialog;
use crate::components::pager::Pager;
use crate::components::search_input::SearchInput;
use crate::net::api::Resource;
use crate::net::types::Contact;
use crate::state::cache::QueryKey;
use crate::state::contacts::{self, ContactForm};
use crate::state::inflight::Operation;
use crate::state::list::{Pagination, filter_rows};
use crate::util::dates;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let services = Services::expect();
    let query = services.list::<Contact>(Resource::Contacts, QueryKey::Contacts);
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(Pagination::default());
    let editing = RwSignal::new(None::<ContactForm>);
    let deleting = pending(services.inflight, Operation::DeleteContact);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        query.rows.with(|rows| filter_rows(rows, &term, contacts::search_fields).into_iter().cloned().collect::<Vec<_>>())
    });
    let total = Signal::derive(move || filtered.with(Vec::len));
    let page_rows = move || filtered.with(|rows| pagination.with(|p| p.slice(rows).to_vec()));

    let on_close = Callback::new(move |()| editing.set(None));

    view! {
        <AppShell title="Contacts">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchInput value=search placeholder="Search by name, company or phone..."/>
                    <button class="btn btn--primary" on:click=move |_| editing.set(Some(ContactForm::default()))>
                        "+ Add Contact"
                    </button>
                </div>
                <Show when=move || query.error.get().is_some()>
                    <p class="list-page__error">{move || query.error.get().unwrap_or_default()}</p>
                </Show>
                <div class="data-table__wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Company"</th>
                                <th>"Contact No"</th>
                                <th>"Email"</th>
                                <th>"Type"</th>
                                <th>"Birthday"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || { !query.loading.get() || total.get() > 0 }
                                fallback=|| view! { <tr><td colspan="7">"Loading contacts..."</td></tr> }
                            >
                                <Show
                                    when=move || { total.get() > 0 }
                                    fallback=|| view! { <tr><td colspan="7">"No contacts found."</td></tr> }
                                >
                                    {move || {
                                        page_rows()
                                            .into_iter()
                                            .map(|contact| {
                                                let id = contact.contact_id;
                                                let form = ContactForm::from_contact(&contact);
                                                let name = contact.person_name.clone();
                                                view! {
                                                    <tr>
                                                        <td>{contact.person_name}</td>
                                                        <td>{contact.company_name}</td>
                                                        <td>{contact.contact_no}</td>
                                                        <td>{contact.email_id}</td>
                                                        <td>{contact.contact_type}</td>
                                                        <td>{dates::iso_to_input(&contact.birthday)}</td>
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
                                                                    services.delete(actions::CONTACTS, id, &format!("Delete contact {name}?"));
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </Show>
                            </Show>
                        </tbody>
                    </table>
                </div>
                <Pager pagination=pagination total=total/>
            </section>
            {move || editing.get().map(|form| view! { <ContactDialog initial=form on_close=on_close/> })}
        </AppShell>
    }
}
