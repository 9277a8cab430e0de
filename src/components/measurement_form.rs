//! Create/edit dialog for a measurement master row.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::field::{TextField, ToggleField, error_of, flag_of, setter, text_of};
use crate::components::modal::Modal;
use crate::state::forms::FieldErrors;
use crate::state::inflight::Operation;
use crate::state::measurements::MeasurementForm;

#[component]
pub fn MeasurementDialog(initial: MeasurementForm, on_close: Callback<()>) -> impl IntoView {
    let services = Services::expect();
    let title = if initial.is_edit() { "Edit Measurement" } else { "Add Measurement" };
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = pending(services.inflight, Operation::SaveMeasurement);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(MeasurementForm::validate) {
            Ok(measurement) => {
                errors.set(FieldErrors::new());
                services.save(actions::MEASUREMENTS, measurement.measurement_id, measurement, on_close);
            }
            Err(found) => errors.set(found),
        }
    };

    let preview = move || form.with(|f| f.preview().map(str::to_owned));

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <TextField
                    label="Measurement Name"
                    required=true
                    placeholder="e.g. Shoulder"
                    value=text_of(form, |f| &f.measurement_name)
                    on_input=setter(form, |f, v| f.measurement_name = v)
                    error=error_of(errors, "measurementName")
                />
                <TextField
                    label="Image URL"
                    kind="url"
                    placeholder="https://..."
                    value=text_of(form, |f| &f.image_url)
                    on_input=setter(form, |f, v| f.image_url = v)
                />
                <Show when=move || preview().is_some()>
                    <img class="dialog__preview" alt="Measurement preview" src=move || preview().unwrap_or_default()/>
                </Show>
                <TextField
                    label="Display Order"
                    kind="number"
                    value=text_of(form, |f| &f.display_order)
                    on_input=setter(form, |f, v| f.display_order = v)
                    error=error_of(errors, "displayOrder")
                />
                <ToggleField
                    label="Active"
                    checked=flag_of(form, |f| f.is_active)
                    on_toggle=setter(form, |f, v| f.is_active = v)
                />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
