//! Renders the notification queue and expires toasts after a delay.

use leptos::prelude::*;

use crate::state::notify::{Notifications, ToastKind};
#[cfg(feature = "csr")]
use crate::state::notify::TOAST_DURATION_MS;

#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = expect_context::<RwSignal<Notifications>>();

    #[cfg(feature = "csr")]
    {
        let scheduled = StoredValue::new(std::collections::HashSet::<u64>::new());
        Effect::new(move || {
            let ids: Vec<u64> = notify.with(|n| n.toasts.iter().map(|t| t.id).collect());
            for id in ids {
                let fresh = scheduled.try_update_value(|s| s.insert(id)).unwrap_or(false);
                if !fresh {
                    continue;
                }
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                    notify.update(|n| n.dismiss(id));
                    scheduled.update_value(|s| {
                        s.remove(&id);
                    });
                });
            }
        });
    }

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast" class:toast--destructive=toast.kind == ToastKind::Destructive>
                                <div class="toast__body">
                                    <strong class="toast__title">{toast.title}</strong>
                                    <span class="toast__description">{toast.description}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| notify.update(|n| n.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
