//! # UI Plumbing
//!
//! Page-level state shared by every screen of the storefront.
//!
//! ```text
//! ui/
//! ├── overlay.rs       - LoadingIndicator: ref-counted blocking spinner
//! ├── element.rs       - Control / Form seams and headless implementations
//! └── submit_guard.rs  - SubmitGuard: one in-flight action per button or form
//! ```
//!
//! Both services are constructed once per page session and injected where
//! needed; neither is a global.

pub mod element;
pub mod overlay;
pub mod submit_guard;

pub use element::{Control, ControlKind, ElementId, Form, HeadlessControl, HeadlessForm};
pub use overlay::{set_button_loading, ButtonLoading, HeadlessOverlay, LoadingIndicator, LoadingTicket, OverlaySurface};
pub use submit_guard::{BusyTicket, GuardTarget, GuardedAction, SubmitGuard};
