//! # Duplicate Submit Guard
//!
//! Tracks which buttons and forms have an action in flight and refuses to
//! start a second one on the same element.
//!
//! ## Lifecycle
//!
//! ```text
//! invoke ──► try_begin ──busy──► None (trigger dropped, nothing runs)
//!               │
//!             idle
//!               ▼
//!        mark busy + lock element
//!               ▼
//!          run action ──► Some(output)
//!               ▼
//!       BusyTicket dropped ──► restore element, mark idle
//! ```
//!
//! The ticket is released on completion, on failure, and when the action's
//! future is dropped mid-flight, so an element can never stay locked after
//! its action is gone.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::ui::element::HeadlessControl;
//! use storefront::ui::submit_guard::{GuardTarget, SubmitGuard};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let guard = Arc::new(SubmitGuard::new());
//! let button = HeadlessControl::button("Pay now");
//!
//! let pay = guard.guard(GuardTarget::Button(button.clone()), "Paying...", |order_id: i64| async move {
//!     Ok::<_, String>(order_id)
//! });
//!
//! assert_eq!(pay.invoke(7).await, Some(Ok(7)));
//! # }
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use super::element::{Control, ElementId, Form};

pub const DEFAULT_LOADING_TEXT: &str = "Processing...";

/// Element an action is bound to.
#[derive(Clone)]
pub enum GuardTarget {
    Button(Arc<dyn Control>),
    Form(Arc<dyn Form>),
}

impl GuardTarget {
    pub fn id(&self) -> ElementId {
        match self {
            GuardTarget::Button(button) => button.id(),
            GuardTarget::Form(form) => form.id(),
        }
    }
}

impl std::fmt::Debug for GuardTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardTarget::Button(button) => f.debug_tuple("Button").field(&button.id()).finish(),
            GuardTarget::Form(form) => f.debug_tuple("Form").field(&form.id()).finish(),
        }
    }
}

struct ButtonSnapshot {
    control: Arc<dyn Control>,
    was_disabled: bool,
    label: String,
}

struct ControlSnapshot {
    control: Arc<dyn Control>,
    was_disabled: bool,
}

/// Busy-set bookkeeping for buttons and forms.
///
/// Presence of an id in a map means an action on that element is in flight.
/// The stored snapshot is what `end` restores.
#[derive(Default)]
pub struct SubmitGuard {
    busy_buttons: Mutex<HashMap<ElementId, ButtonSnapshot>>,
    busy_forms: Mutex<HashMap<ElementId, Vec<ControlSnapshot>>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self, target: &GuardTarget) -> bool {
        match target {
            GuardTarget::Button(button) => !self.busy_buttons.lock().contains_key(&button.id()),
            GuardTarget::Form(form) => !self.busy_forms.lock().contains_key(&form.id()),
        }
    }

    /// Mark `target` busy and lock it. Returns `false`, touching nothing,
    /// if it is already busy.
    ///
    /// A button is disabled and its caption replaced by `loading_text`
    /// ([`DEFAULT_LOADING_TEXT`] when empty). A form disables every
    /// descendant control except hidden inputs.
    pub fn begin(&self, target: &GuardTarget, loading_text: &str) -> bool {
        let loading_text = if loading_text.is_empty() { DEFAULT_LOADING_TEXT } else { loading_text };
        match target {
            GuardTarget::Button(button) => {
                let mut busy = self.busy_buttons.lock();
                if busy.contains_key(&button.id()) {
                    return false;
                }

                let snapshot = ButtonSnapshot {
                    control: Arc::clone(button),
                    was_disabled: button.is_disabled(),
                    label: button.label(),
                };
                button.set_disabled(true);
                button.set_label(loading_text);
                button.set_busy(true);
                busy.insert(button.id(), snapshot);
            }
            GuardTarget::Form(form) => {
                let mut busy = self.busy_forms.lock();
                if busy.contains_key(&form.id()) {
                    return false;
                }

                let snapshots = form
                    .controls()
                    .into_iter()
                    .filter(|control| control.kind().locks_with_form())
                    .map(|control| {
                        let was_disabled = control.is_disabled();
                        control.set_disabled(true);
                        control.set_busy(true);
                        ControlSnapshot {
                            control,
                            was_disabled,
                        }
                    })
                    .collect();
                busy.insert(form.id(), snapshots);
            }
        }

        tracing::debug!(element = ?target, "Submit started");
        true
    }

    /// Clear the busy mark and restore what `begin` changed. No-op when idle.
    pub fn end(&self, target: &GuardTarget) {
        match target {
            GuardTarget::Button(button) => {
                let Some(snapshot) = self.busy_buttons.lock().remove(&button.id()) else {
                    return;
                };
                snapshot.control.set_busy(false);
                snapshot.control.set_disabled(snapshot.was_disabled);
                snapshot.control.set_label(&snapshot.label);
            }
            GuardTarget::Form(form) => {
                let Some(snapshots) = self.busy_forms.lock().remove(&form.id()) else {
                    return;
                };
                for snapshot in snapshots {
                    snapshot.control.set_busy(false);
                    snapshot.control.set_disabled(snapshot.was_disabled);
                }
            }
        }

        tracing::debug!(element = ?target, "Submit finished");
    }

    /// `begin`, returning a ticket that calls `end` on drop.
    pub fn try_begin<'a>(&'a self, target: &GuardTarget, loading_text: &str) -> Option<BusyTicket<'a>> {
        if !self.begin(target, loading_text) {
            tracing::debug!(element = ?target, "Duplicate submit ignored");
            return None;
        }

        Some(BusyTicket {
            guard: self,
            target: target.clone(),
        })
    }

    /// Run `action` once if `target` is idle.
    ///
    /// Returns `None` without calling `action` when another action on the
    /// same element is still in flight.
    pub async fn run<F, Fut>(&self, target: &GuardTarget, loading_text: &str, action: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let _ticket = self.try_begin(target, loading_text)?;
        Some(action().await)
    }

    /// Bind `action` to `target` for repeated triggering.
    pub fn guard<F>(self: &Arc<Self>, target: GuardTarget, loading_text: impl Into<String>, action: F) -> GuardedAction<F> {
        GuardedAction {
            guard: Arc::clone(self),
            target,
            loading_text: loading_text.into(),
            action,
        }
    }
}

/// One in-flight action on one element. Dropping it ends the submit.
#[must_use = "dropping the ticket releases the element immediately"]
pub struct BusyTicket<'a> {
    guard: &'a SubmitGuard,
    target: GuardTarget,
}

impl Drop for BusyTicket<'_> {
    fn drop(&mut self) {
        self.guard.end(&self.target);
    }
}

/// An action wrapped by [`SubmitGuard::guard`].
pub struct GuardedAction<F> {
    guard: Arc<SubmitGuard>,
    target: GuardTarget,
    loading_text: String,
    action: F,
}

impl<F> GuardedAction<F> {
    /// Trigger the action with `args`.
    ///
    /// `None` means the trigger was dropped because the element is busy.
    /// `Some` carries whatever the action produced, including its errors.
    pub async fn invoke<A, Fut>(&self, args: A) -> Option<Fut::Output>
    where
        F: Fn(A) -> Fut,
        Fut: Future,
    {
        let _ticket = self.guard.try_begin(&self.target, &self.loading_text)?;
        Some((self.action)(args).await)
    }

    pub fn target(&self) -> &GuardTarget {
        &self.target
    }

    pub fn is_idle(&self) -> bool {
        self.guard.can_submit(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::element::{ControlKind, HeadlessControl, HeadlessForm};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_button_begin_and_end_restore_label() {
        let guard = SubmitGuard::new();
        let button = HeadlessControl::button("Place order");
        let target = GuardTarget::Button(button.clone());

        assert!(guard.begin(&target, "Placing..."));
        assert!(button.is_disabled());
        assert!(button.is_busy());
        assert_eq!(button.label(), "Placing...");
        assert!(!guard.can_submit(&target));

        guard.end(&target);
        assert!(!button.is_disabled());
        assert!(!button.is_busy());
        assert_eq!(button.label(), "Place order");
        assert!(guard.can_submit(&target));
    }

    #[test]
    fn test_second_begin_is_rejected_without_side_effects() {
        let guard = SubmitGuard::new();
        let button = HeadlessControl::button("Save");
        let target = GuardTarget::Button(button.clone());

        assert!(guard.begin(&target, "Saving..."));
        assert!(!guard.begin(&target, "Other text"));
        assert_eq!(button.label(), "Saving...");

        guard.end(&target);
        assert_eq!(button.label(), "Save");
    }

    #[test]
    fn test_form_lock_skips_hidden_inputs_and_restores_prior_state() {
        let guard = SubmitGuard::new();
        let submit = HeadlessControl::button("Submit");
        let name = HeadlessControl::new(ControlKind::Input { hidden: false }, "");
        let token = HeadlessControl::new(ControlKind::Input { hidden: true }, "");
        let notes = HeadlessControl::new(ControlKind::TextArea, "");
        notes.set_disabled(true);

        let controls: Vec<Arc<dyn Control>> = vec![submit.clone(), name.clone(), token.clone(), notes.clone()];
        let form = HeadlessForm::new(controls);
        let target = GuardTarget::Form(form);

        assert!(guard.begin(&target, DEFAULT_LOADING_TEXT));
        assert!(submit.is_disabled() && submit.is_busy());
        assert!(name.is_disabled() && name.is_busy());
        assert!(!token.is_disabled() && !token.is_busy());
        assert!(notes.is_disabled());
        assert_eq!(submit.label(), "Submit");

        guard.end(&target);
        assert!(!submit.is_disabled());
        assert!(!name.is_disabled());
        assert!(notes.is_disabled(), "control disabled before the submit stays disabled");
        assert!(!name.is_busy());
    }

    #[test]
    fn test_empty_loading_text_uses_default() {
        let guard = SubmitGuard::new();
        let button = HeadlessControl::button("Confirm");
        let target = GuardTarget::Button(button.clone());

        assert!(guard.begin(&target, ""));
        assert_eq!(button.label(), DEFAULT_LOADING_TEXT);
    }

    #[test]
    fn test_end_on_idle_target_is_noop() {
        let guard = SubmitGuard::new();
        let button = HeadlessControl::button("Go");
        let target = GuardTarget::Button(button.clone());

        guard.end(&target);
        assert_eq!(button.label(), "Go");
        assert!(guard.can_submit(&target));
    }

    #[test]
    fn test_recreated_element_is_unguarded() {
        let guard = SubmitGuard::new();
        let old = GuardTarget::Button(HeadlessControl::button("Buy"));
        let fresh = GuardTarget::Button(HeadlessControl::button("Buy"));

        assert!(guard.begin(&old, "Buying..."));
        assert!(guard.can_submit(&fresh));
    }

    #[tokio::test]
    async fn test_rapid_double_trigger_runs_once() {
        let guard = Arc::new(SubmitGuard::new());
        let button = HeadlessControl::button("Pay");
        let runs = Arc::new(AtomicUsize::new(0));

        let action = {
            let runs = Arc::clone(&runs);
            guard.guard(GuardTarget::Button(button.clone()), "Paying...", move |_: ()| {
                let runs = Arc::clone(&runs);
                async move {
                    runs.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    tokio::task::yield_now().await;
                    "paid"
                }
            })
        };

        let (first, second) = tokio::join!(action.invoke(()), action.invoke(()));

        assert_eq!(first, Some("paid"));
        assert_eq!(second, None);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(action.is_idle());
        assert_eq!(button.label(), "Pay");
    }

    #[tokio::test]
    async fn test_failure_propagates_and_releases_element() {
        let guard = Arc::new(SubmitGuard::new());
        let button = HeadlessControl::button("Recharge");
        let target = GuardTarget::Button(button.clone());

        let result = guard
            .run(&target, "Recharging...", || async { Err::<(), _>("insufficient funds") })
            .await;

        assert_eq!(result, Some(Err("insufficient funds")));
        assert!(guard.can_submit(&target));
        assert!(!button.is_disabled());
    }

    #[tokio::test]
    async fn test_dropped_action_releases_element() {
        let guard = Arc::new(SubmitGuard::new());
        let send: Arc<dyn Control> = HeadlessControl::button("Send");
        let form = HeadlessForm::new(vec![send]);
        let target = GuardTarget::Form(form);

        let action = guard.guard(target.clone(), "Sending...", |_: ()| std::future::pending::<()>());
        let outcome = tokio::time::timeout(Duration::from_millis(20), action.invoke(())).await;

        assert!(outcome.is_err(), "pending action should time out");
        assert!(guard.can_submit(&target));
    }

    #[tokio::test]
    async fn test_sequential_invocations_each_run() {
        let guard = Arc::new(SubmitGuard::new());
        let action = guard.guard(
            GuardTarget::Button(HeadlessControl::button("Add")),
            DEFAULT_LOADING_TEXT,
            |qty: u32| async move { qty * 2 },
        );

        assert_eq!(action.invoke(1).await, Some(2));
        assert_eq!(action.invoke(3).await, Some(6));
    }
}
