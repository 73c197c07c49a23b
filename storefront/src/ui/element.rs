//! # Guard Elements
//!
//! The page elements that [`SubmitGuard`](super::submit_guard::SubmitGuard)
//! locks while an action is in flight.
//!
//! A browser front end implements [`Control`] and [`Form`] over its DOM
//! handles; [`HeadlessControl`] and [`HeadlessForm`] are the in-memory
//! versions used by tests and non-graphical callers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a page element.
///
/// Ids are never reused, so a form torn down and rendered again gets a new
/// id and starts out unguarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    Input { hidden: bool },
    Select,
    TextArea,
}

impl ControlKind {
    /// Whether locking the surrounding form disables this control.
    pub fn locks_with_form(&self) -> bool {
        !matches!(self, ControlKind::Input { hidden: true })
    }
}

/// A single interactive element: button, input, select, or textarea.
pub trait Control: Send + Sync {
    fn id(&self) -> ElementId;
    fn kind(&self) -> ControlKind;
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    /// Visible text (a button's caption)
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    /// Toggle the visual busy marker (spinner class)
    fn set_busy(&self, busy: bool);
}

/// A form and its descendant controls.
pub trait Form: Send + Sync {
    fn id(&self) -> ElementId;
    fn controls(&self) -> Vec<Arc<dyn Control>>;
}

#[derive(Debug, Clone, Default)]
struct ControlState {
    disabled: bool,
    label: String,
    busy: bool,
}

/// In-memory control.
#[derive(Debug)]
pub struct HeadlessControl {
    id: ElementId,
    kind: ControlKind,
    state: Mutex<ControlState>,
}

impl HeadlessControl {
    pub fn new(kind: ControlKind, label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: ElementId::next(),
            kind,
            state: Mutex::new(ControlState {
                label: label.into(),
                ..Default::default()
            }),
        })
    }

    pub fn button(label: impl Into<String>) -> Arc<Self> {
        Self::new(ControlKind::Button, label)
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().busy
    }
}

impl Control for HeadlessControl {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ControlKind {
        self.kind
    }

    fn is_disabled(&self) -> bool {
        self.state.lock().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.lock().disabled = disabled;
    }

    fn label(&self) -> String {
        self.state.lock().label.clone()
    }

    fn set_label(&self, label: &str) {
        self.state.lock().label = label.to_string();
    }

    fn set_busy(&self, busy: bool) {
        self.state.lock().busy = busy;
    }
}

/// In-memory form holding a fixed list of controls.
pub struct HeadlessForm {
    id: ElementId,
    controls: Vec<Arc<dyn Control>>,
}

impl HeadlessForm {
    pub fn new(controls: Vec<Arc<dyn Control>>) -> Arc<Self> {
        Arc::new(Self {
            id: ElementId::next(),
            controls,
        })
    }
}

impl Form for HeadlessForm {
    fn id(&self) -> ElementId {
        self.id
    }

    fn controls(&self) -> Vec<Arc<dyn Control>> {
        self.controls.clone()
    }
}
