//! Toast notifications.
//!
//! Success and failure of every request end up here as a one-shot toast;
//! there is no retry. The queue is capped so a burst of failures cannot
//! cover the page.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

pub const MAX_TOASTS: usize = 3;
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl Notifications {
    /// Queue a toast and return its id. The oldest toast is dropped past
    /// [`MAX_TOASTS`].
    pub fn push(&mut self, title: &str, description: &str, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: title.to_owned(), description: description.to_owned(), kind });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn info(&mut self, title: &str, description: &str) -> u64 {
        self.push(title, description, ToastKind::Info)
    }

    pub fn error(&mut self, title: &str, description: &str) -> u64 {
        log::warn!("{title}: {description}");
        self.push(title, description, ToastKind::Destructive)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
