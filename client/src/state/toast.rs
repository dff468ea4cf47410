//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Forms and the shell produce `Notice` values; `ToastState` assigns ids and
//! keeps a short bounded queue. Auto-dismiss timing lives in the toaster
//! component so this module stays browser-free.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen; older ones are evicted first.
pub const MAX_TOASTS: usize = 3;

/// How long a toast stays up before auto-dismiss, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Destructive => "toast--destructive",
        }
    }
}

/// A user-facing outcome message, before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }

    /// Placeholder-action notice shown by content pages.
    #[must_use]
    pub fn not_implemented(title: impl Into<String>) -> Self {
        Self::info(title, "🚧 This feature isn't implemented yet. Stay tuned! 🚀")
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue `notice` and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, title: notice.title, description: notice.description, variant: notice.variant });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    /// Remove toast `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
