//! Side panel for adding or editing a customer.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::field::{SelectField, TextField, error_of, plain_options, setter, text_of};
use crate::state::customers::{CUSTOMER_TYPES, CustomerForm};
use crate::state::forms::FieldErrors;
use crate::state::inflight::Operation;
use crate::util::dates;

#[component]
pub fn CustomerPanel(initial: CustomerForm, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let title = if initial.is_edit() { "Edit Customer" } else { "New Customer" };
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
        services.save(actions::CUSTOMERS, current.contact_id, current.to_payload(&dates::now_iso()), on_close);
    };

    view! {
        <div class="side-panel-backdrop" on:click=move |_| on_close.run(())>
            <aside class="side-panel" on:click=move |ev| ev.stop_propagation()>
                <div class="side-panel__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <form class="side-panel__form" on:submit=on_submit>
                    <TextField
                        label="Customer Name"
                        required=true
                        value=text_of(form, |f| &f.person_name)
                        on_input=setter(form, |f, v| f.person_name = v)
                        error=error_of(errors, "personName")
                    />
                    <TextField
                        label="Mobile Number"
                        required=true
                        kind="tel"
                        value=text_of(form, |f| &f.contact_no)
                        on_input=setter(form, |f, v| f.contact_no = v)
                        error=error_of(errors, "contactNo")
                    />
                    <TextField
                        label="Email Address"
                        kind="email"
                        value=text_of(form, |f| &f.email_id)
                        on_input=setter(form, |f, v| f.email_id = v)
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
                        label="Type"
                        value=text_of(form, |f| &f.contact_type)
                        options=plain_options(CUSTOMER_TYPES)
                        on_change=setter(form, |f, v| f.contact_type = v)
                    />
                    <div class="side-panel__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=saving>
                            {move || if saving() { "Saving..." } else { "Save Customer" }}
                        </button>
                    </div>
                </form>
            </aside>
        </div>
    }
}
