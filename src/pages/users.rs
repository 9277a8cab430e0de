//! User management: server-paged list, account dialog and rights grid.
//!
//! Unlike the other lists, paging and filtering happen on the server. The
//! list refetches when the page or status filter changes, when a search is
//! submitted, and when a user write invalidates the cache key.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::app_shell::AppShell;
use crate::components::search_input::SearchInput;
use crate::components::status_badge::StatusBadge;
use crate::components::user_form::UserDialog;
use crate::components::user_rights_modal::UserRightsModal;
use crate::net::types::User;
use crate::state::cache::QueryKey;
use crate::state::inflight::Operation;
use crate::state::users::{StatusFilter, UserForm, UserListState, full_name};
use crate::util::dates;

#[component]
pub fn UsersPage() -> impl IntoView {
    let services = Services::expect();
    let list = RwSignal::new(UserListState::default());
    let search_text = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<UserForm>);
    let rights_for = RwSignal::new(None::<(i64, String)>);
    let deleting = pending(services.inflight, Operation::DeleteUser);

    let cache = services.cache;
    let version = Memo::new(move |_| cache.with(|c| c.version(QueryKey::Users)));
    let api = services.api;
    Effect::new(move || {
        let issued = version.get();
        let query = list.with(UserListState::query);
        let client = api.client();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = client.list_users(&query).await;
            let current = list.with_untracked(|l| l.is_current(&query))
                && cache.with_untracked(|c| c.is_current(QueryKey::Users, issued));
            if !current {
                log::debug!("user list: dropped stale page {}", query.page_index);
                return;
            }
            match result {
                Ok(users) => {
                    rows.set(users);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("user list failed: {e}");
                    rows.set(Vec::new());
                    error.set(Some(e.user_message("Failed to load users.")));
                }
            }
            loading.set(false);
        });
    });

    let submit_search = Callback::new(move |()| {
        let term = search_text.get_untracked();
        list.update(|l| {
            l.search = term;
            l.page = 1;
        });
    });

    let on_close = Callback::new(move |()| editing.set(None));
    let close_rights = Callback::new(move |()| rights_for.set(None));

    view! {
        <AppShell title="User Management">
            <section class="list-page">
                <div class="list-page__toolbar">
                    <SearchInput
                        value=search_text
                        placeholder="Search by name, username or mobile..."
                        on_enter=submit_search
                    />
                    <button class="btn" on:click=move |_| submit_search.run(())>
                        "Search"
                    </button>
                    <select
                        class="list-page__filter"
                        prop:value=move || list.with(|l| l.status.value())
                        on:change=move |ev| list.update(|l| l.set_status(StatusFilter::parse(&event_target_value(&ev))))
                    >
                        {StatusFilter::ALL
                            .iter()
                            .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn btn--primary" on:click=move |_| editing.set(Some(UserForm::default()))>
                        "+ Add User"
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="list-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="data-table__wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Mobile"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if loading.get() {
                                    return view! { <tr><td colspan="7">"Loading users..."</td></tr> }.into_any();
                                }
                                if rows.with(Vec::is_empty) {
                                    return view! { <tr><td colspan="7">"No users found."</td></tr> }.into_any();
                                }
                                rows.get()
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.user_id;
                                        let form = UserForm::for_edit(&user);
                                        let name = full_name(&user);
                                        let rights_label = if name.is_empty() { user.user_name.clone() } else { name.clone() };
                                        let delete_label = user.user_name.clone();
                                        view! {
                                            <tr>
                                                <td>{user.user_name}</td>
                                                <td>{name}</td>
                                                <td>{user.email_id}</td>
                                                <td>{user.mobile_no}</td>
                                                <td><StatusBadge active=user.active/></td>
                                                <td>{dates::format_created(user.created_date.as_deref())}</td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| editing.set(Some(form.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| rights_for.set(Some((id, rights_label.clone())))
                                                    >
                                                        "Rights"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        disabled=deleting
                                                        on:click=move |_| {
                                                            services.delete(actions::USERS, id, &format!("Delete user {delete_label}?"));
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
                <div class="pager">
                    <button
                        class="btn pager__prev"
                        disabled=move || list.with(|l| l.page <= 1)
                        on:click=move |_| list.update(UserListState::prev_page)
                    >
                        "Previous"
                    </button>
                    <span class="pager__page">{move || format!("Page {}", list.with(|l| l.page))}</span>
                    <button
                        class="btn pager__next"
                        disabled=move || !UserListState::has_next(rows.with(Vec::len))
                        on:click=move |_| list.update(UserListState::next_page)
                    >
                        "Next"
                    </button>
                </div>
            </section>
            {move || editing.get().map(|form| view! { <UserDialog initial=form on_close=on_close/> })}
            {move || {
                rights_for
                    .get()
                    .map(|(user_id, label)| view! { <UserRightsModal user_id=user_id user_label=label on_close=close_rights/> })
            }}
        </AppShell>
    }
}
