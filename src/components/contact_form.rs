//! Create/edit dialog for a contact.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::field::{SelectField, TextAreaField, TextField, error_of, plain_options, setter, text_of};
use crate::components::modal::Modal;
use crate::state::contacts::{CONTACT_TYPES, ContactForm, LEDGER_OPTIONS};
use crate::state::forms::FieldErrors;
use crate::state::inflight::Operation;
use crate::state::session::SessionState;
use crate::util::dates;

#[component]
pub fn ContactDialog(initial: ContactForm, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let title = if initial.is_edit() { "Edit Contact" } else { "Add Contact" };
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = pending(services.inflight, Operation::SaveContact);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(found) = current.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let user_name = services.session.with_untracked(SessionState::user_name);
        let payload = current.to_payload(&user_name, &dates::now_iso());
        services.save(actions::CONTACTS, current.contact_id, payload, on_close);
    };

    let ledger_options = LEDGER_OPTIONS.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect::<Vec<_>>();

    view! {
        <Modal title=title on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <div class="dialog__grid">
                    <TextField
                        label="Person Name"
                        required=true
                        value=text_of(form, |f| &f.person_name)
                        on_input=setter(form, |f, v| f.person_name = v)
                        error=error_of(errors, "personName")
                    />
                    <TextField
                        label="Contact No"
                        required=true
                        kind="tel"
                        value=text_of(form, |f| &f.contact_no)
                        on_input=setter(form, |f, v| f.contact_no = v)
                        error=error_of(errors, "contactNo")
                    />
                    <TextField
                        label="Email ID"
                        kind="email"
                        value=text_of(form, |f| &f.email_id)
                        on_input=setter(form, |f, v| f.email_id = v)
                    />
                    <TextField
                        label="Birthday"
                        kind="date"
                        value=text_of(form, |f| &f.birthday)
                        on_input=setter(form, |f, v| f.birthday = v)
                    />
                    <TextField
                        label="Company Name"
                        value=text_of(form, |f| &f.company_name)
                        on_input=setter(form, |f, v| f.company_name = v)
                    />
                    <TextField
                        label="Designation"
                        value=text_of(form, |f| &f.designation)
                        on_input=setter(form, |f, v| f.designation = v)
                    />
                    <SelectField
                        label="Contact Type"
                        value=text_of(form, |f| &f.contact_type)
                        options=plain_options(CONTACT_TYPES)
                        on_change=setter(form, |f, v| f.contact_type = v)
                    />
                    <SelectField
                        label="Ledger Account"
                        value=text_of(form, |f| &f.ledger_id)
                        options=ledger_options
                        on_change=setter(form, |f, v| f.ledger_id = v)
                    />
                    <TextField
                        label="Broadcast Name (Whatsapp)"
                        value=text_of(form, |f| &f.broadcast)
                        on_input=setter(form, |f, v| f.broadcast = v)
                    />
                    <TextField
                        label="Remark 1"
                        value=text_of(form, |f| &f.remark1)
                        on_input=setter(form, |f, v| f.remark1 = v)
                    />
                    <TextField
                        label="Remark 2"
                        value=text_of(form, |f| &f.remark2)
                        on_input=setter(form, |f, v| f.remark2 = v)
                    />
                </div>
                <TextAreaField
                    label="Work Notes"
                    value=text_of(form, |f| &f.work_notes)
                    on_input=setter(form, |f, v| f.work_notes = v)
                />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save Contact" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
