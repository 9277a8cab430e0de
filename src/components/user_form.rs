//! Create/edit dialog for a user account.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::field::{SelectField, TextField, ToggleField, error_of, flag_of, setter, text_of};
use crate::components::modal::Modal;
use crate::net::types::Company;
use crate::state::forms::FieldErrors;
use crate::state::inflight::Operation;
use crate::state::users::UserForm;
use crate::util::dates;

#[component]
pub fn UserDialog(initial: UserForm, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let is_edit = initial.is_edit();
    let title = if is_edit { "Edit User" } else { "Add User" };
    let password_label = if is_edit { "Password (Optional)" } else { "Password" };
    let password_hint = if is_edit { "Unchanged" } else { "" };
    let password_required = !is_edit;
    let created_label = is_edit.then(|| format!("Created {}", dates::format_created(initial.created_date.as_deref())));
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let companies = RwSignal::new(Vec::<Company>::new());
    let loading_companies = RwSignal::new(true);
    let saving = pending(services.inflight, Operation::SaveUser);

    let client = services.api.client();
    leptos::task::spawn_local(async move {
        match client.list_companies().await {
            Ok(rows) => {
                form.update(|f| f.apply_company_default(&rows));
                companies.set(rows);
            }
            Err(e) => log::warn!("company list unavailable: {e}"),
        }
        loading_companies.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(UserForm::validate) {
            Ok(user) => {
                errors.set(FieldErrors::new());
                services.save(actions::USERS, user.user_id, user, on_close);
            }
            Err(found) => errors.set(found),
        }
    };

    let company_value = Signal::derive(move || form.with(|f| f.c_id.to_string()));
    let on_company = Callback::new(move |raw: String| {
        let c_id = raw.parse::<i64>().unwrap_or(0);
        form.update(|f| f.c_id = c_id);
    });

    view! {
        <Modal title=title on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <div class="dialog__grid">
                    <TextField
                        label="Username"
                        required=true
                        readonly=is_edit
                        value=text_of(form, |f| &f.user_name)
                        on_input=setter(form, |f, v| f.user_name = v)
                        error=error_of(errors, "userName")
                    />
                    <TextField
                        label=password_label
                        required=password_required
                        kind="password"
                        placeholder=password_hint
                        value=text_of(form, |f| &f.user_password)
                        on_input=setter(form, |f, v| f.user_password = v)
                        error=error_of(errors, "userPassword")
                    />
                    <TextField
                        label="First Name"
                        required=true
                        value=text_of(form, |f| &f.first_name)
                        on_input=setter(form, |f, v| f.first_name = v)
                        error=error_of(errors, "firstName")
                    />
                    <TextField
                        label="Last Name"
                        required=true
                        value=text_of(form, |f| &f.last_name)
                        on_input=setter(form, |f, v| f.last_name = v)
                        error=error_of(errors, "lastName")
                    />
                    <TextField
                        label="Email"
                        required=true
                        kind="email"
                        value=text_of(form, |f| &f.email_id)
                        on_input=setter(form, |f, v| f.email_id = v)
                        error=error_of(errors, "emailId")
                    />
                    <TextField
                        label="Mobile No"
                        required=true
                        kind="tel"
                        value=text_of(form, |f| &f.mobile_no)
                        on_input=setter(form, |f, v| f.mobile_no = v)
                        error=error_of(errors, "mobileNo")
                    />
                </div>
                {move || {
                    let placeholder = if loading_companies.get() { "Loading Companies..." } else { "Select Company" };
                    let mut options = vec![("0".to_owned(), placeholder.to_owned())];
                    options.extend(companies.get().into_iter().map(|c| (c.c_id.to_string(), c.company_name)));
                    view! {
                        <SelectField
                            label="Assign Company"
                            value=company_value
                            options=options
                            on_change=on_company
                            error=error_of(errors, "cId")
                        />
                    }
                }}
                <div class="dialog__toggles">
                    <ToggleField
                        label="Active"
                        checked=flag_of(form, |f| f.active)
                        on_toggle=setter(form, |f, v| f.active = v)
                    />
                    <ToggleField
                        label="WhatsApp OTP"
                        checked=flag_of(form, |f| f.whatsapp_otp)
                        on_toggle=setter(form, |f, v| f.whatsapp_otp = v)
                    />
                    <ToggleField
                        label="Email OTP"
                        checked=flag_of(form, |f| f.email_otp)
                        on_toggle=setter(form, |f, v| f.email_otp = v)
                    />
                </div>
                {created_label.map(|label| view! { <p class="dialog__meta">{label}</p> })}
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save User" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
