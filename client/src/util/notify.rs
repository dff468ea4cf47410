//! Toast dispatch handle for components.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};

/// Copyable handle onto the shared toast queue.
///
/// Grab it while the component is being built; `expect_context` is not
/// reachable from inside a `spawn_local` task after an await.
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<ToastState>);

impl Notifier {
    pub fn notify(self, notice: Notice) {
        self.0.update(|toasts| {
            toasts.push(notice);
        });
    }
}

/// Notifier bound to the `RwSignal<ToastState>` context provided by `App`.
pub fn use_notifier() -> Notifier {
    Notifier(expect_context::<RwSignal<ToastState>>())
}
