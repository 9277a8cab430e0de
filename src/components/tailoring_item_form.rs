//! Create/edit dialog for a tailoring item and its linked measurements.

use leptos::prelude::*;

use crate::actions::{self, Services};
use crate::app::pending;
use crate::components::field::{TextField, ToggleField, error_of, flag_of, setter, text_of};
use crate::components::modal::Modal;
use crate::net::types::Measurement;
use crate::state::forms::FieldErrors;
use crate::state::inflight::Operation;
use crate::state::list::sort_by_display_order;
use crate::state::tailoring::TailoringItemForm;

#[component]
pub fn TailoringItemDialog(
    initial: TailoringItemForm,
    /// Measurement master offered as chips.
    measurements: Signal<Vec<Measurement>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let services = Services::expect();
    let title = if initial.is_edit() { "Edit Tailoring Item" } else { "Add Tailoring Item" };
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = pending(services.inflight, Operation::SaveTailoringItem);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(TailoringItemForm::validate) {
            Ok(item) => {
                errors.set(FieldErrors::new());
                services.save(actions::TAILORING_ITEMS, item.item_id, item, on_close);
            }
            Err(found) => errors.set(found),
        }
    };

    let chips = move || {
        let mut rows: Vec<Measurement> = measurements.get().into_iter().filter(|m| m.is_active).collect();
        sort_by_display_order(&mut rows, |m| m.display_order);
        rows
    };

    view! {
        <Modal title=title on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit>
                <div class="dialog__grid">
                    <TextField
                        label="Item Name"
                        required=true
                        placeholder="e.g. Shirt"
                        value=text_of(form, |f| &f.item_name)
                        on_input=setter(form, |f, v| f.item_name = v)
                        error=error_of(errors, "itemName")
                    />
                    <TextField
                        label="Short Code"
                        placeholder="e.g. SHT"
                        value=text_of(form, |f| &f.item_code)
                        on_input=setter(form, |f, v: String| f.set_code(&v))
                    />
                </div>
                <div class="chips">
                    <span class="field__label">
                        {move || format!("Linked Measurements ({})", form.with(|f| f.measurement_ids.len()))}
                    </span>
                    <div class="chips__list">
                        {move || {
                            chips()
                                .into_iter()
                                .map(|m| {
                                    let id = m.measurement_id;
                                    view! {
                                        <button
                                            type="button"
                                            class="chip"
                                            class:chip--selected=move || form.with(|f| f.is_linked(id))
                                            on:click=move |_| form.update(|f| f.toggle_measurement(id))
                                        >
                                            {m.measurement_name}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
                <div class="dialog__grid">
                    <ToggleField
                        label="Active"
                        checked=flag_of(form, |f| f.is_active)
                        on_toggle=setter(form, |f, v| f.is_active = v)
                    />
                    <TextField
                        label="Display Order"
                        kind="number"
                        value=text_of(form, |f| &f.display_order)
                        on_input=setter(form, |f, v| f.display_order = v)
                        error=error_of(errors, "displayOrder")
                    />
                </div>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save Item" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
