//! Toast notifications.
//!
//! One toast slot shared through Context; the newest toast replaces the
//! previous one and clears itself after three seconds. Every toast carries
//! a generation id so a stale timer never clears a newer toast.

use leptos::prelude::*;
use std::time::Duration;

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    is_error: bool,
}

/// A timer armed for `armed_id` may clear the slot only while that same
/// toast still occupies it.
fn timer_owns_slot(slot: &Option<Toast>, armed_id: u64) -> bool {
    slot.as_ref().is_some_and(|toast| toast.id == armed_id)
}

/// Toast capability handed to action boundaries.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: ReadSignal<Option<Toast>>,
    set_current: WriteSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        let (current, set_current) = signal(None);
        Self {
            current,
            set_current,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), true);
    }

    fn push(&self, message: String, is_error: bool) {
        let mut id = 0;
        self.next_id.update_value(|next| {
            *next += 1;
            id = *next;
        });
        self.set_current.set(Some(Toast {
            id,
            message,
            is_error,
        }));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the notifier provided at the application root.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided at the app root")
}

/// Renders the active toast. Mount once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current;
    let set_current = notifier.set_current;

    // Auto-clear after the lifetime elapses, unless a newer toast has
    // replaced the one this timer was armed for.
    Effect::new(move |_| {
        let Some(armed_id) = current.with(|slot| slot.as_ref().map(|t| t.id)) else {
            return;
        };
        set_timeout(
            move || {
                set_current.update(|slot| {
                    if timer_owns_slot(slot, armed_id) {
                        *slot = None;
                    }
                });
            },
            TOAST_LIFETIME,
        );
    });

    view! {
        <Show when=move || current.with(|slot| slot.is_some())>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = current.with(|slot| slot.as_ref().is_some_and(|t| t.is_error));
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>
                        {move || current.with(|slot| slot.as_ref().map(|t| t.message.clone()).unwrap_or_default())}
                    </span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_leaves_newer_toast_alone() {
        let newer = Some(Toast {
            id: 2,
            message: "Status updated successfully".into(),
            is_error: false,
        });
        // Timer armed for toast 1 fires after toast 2 replaced it.
        assert!(!timer_owns_slot(&newer, 1));
        assert!(timer_owns_slot(&newer, 2));
        assert!(!timer_owns_slot(&None, 1));
    }
}
