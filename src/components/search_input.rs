//! Search box bound to a string signal.

use leptos::prelude::*;

/// Updates `value` as the user types. `on_enter`, when given, fires on the
/// Enter key for screens that search on submit.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] on_enter: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    if let Some(on_enter) = on_enter {
                        ev.prevent_default();
                        on_enter.run(());
                    }
                }
            }
        />
    }
}
