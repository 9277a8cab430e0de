//! Labelled form inputs bound to a form struct held in a signal.
//!
//! Forms keep one `RwSignal<Form>`; [`text_of`] and [`setter`] project a
//! single field out of it so every input is wired the same way.

use leptos::prelude::*;

use crate::state::forms::FieldErrors;

pub fn text_of<F>(form: RwSignal<F>, get: fn(&F) -> &String) -> Signal<String>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| get(f).clone()))
}

pub fn flag_of<F>(form: RwSignal<F>, get: fn(&F) -> bool) -> Signal<bool>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || form.with(get))
}

pub fn setter<F, T>(form: RwSignal<F>, set: fn(&mut F, T)) -> Callback<T>
where
    F: Send + Sync + 'static,
    T: 'static,
{
    Callback::new(move |value| form.update(|f| set(f, value)))
}

pub fn error_of(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
    #[prop(optional, into)] kind: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let message = move || error.and_then(|e| e.get());

    view! {
        <label class="field" class:field--invalid=move || message().is_some()>
            <span class="field__label">
                {label}
                {required.then_some(" *")}
            </span>
            <input
                class="field__input"
                type=kind.unwrap_or_else(|| "text".to_owned())
                placeholder=placeholder.unwrap_or_default()
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <span class="field__error">{move || message().unwrap_or_default()}</span>
        </label>
    }
}

#[component]
pub fn TextAreaField(#[prop(into)] label: String, value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: Signal<String>,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let message = move || error.and_then(|e| e.get());

    view! {
        <label class="field" class:field--invalid=move || message().is_some()>
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <span class="field__error">{move || message().unwrap_or_default()}</span>
        </label>
    }
}

#[component]
pub fn ToggleField(#[prop(into)] label: String, checked: Signal<bool>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <label class="field field--toggle">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="field__label">{label}</span>
        </label>
    }
}

/// `(value, label)` pairs where both are the same text.
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| ((*v).to_owned(), (*v).to_owned())).collect()
}
