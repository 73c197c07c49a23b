//! # Loading Overlay
//!
//! Process-wide blocking spinner with a reference count.
//!
//! Every in-flight request that wants the overlay calls [`LoadingIndicator::show`]
//! and later [`LoadingIndicator::hide`]. The overlay is visible exactly while
//! the count is above zero. Only the message passed on the 0 → 1 transition
//! is displayed; later overlapping calls keep the text already on screen.
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront::ui::overlay::{HeadlessOverlay, LoadingIndicator};
//!
//! let surface = Arc::new(HeadlessOverlay::default());
//! let loading = LoadingIndicator::new(surface.clone());
//!
//! loading.show("Logging in...");
//! loading.show("Loading cart...");
//! assert_eq!(surface.message().as_deref(), Some("Logging in..."));
//!
//! loading.hide();
//! assert!(surface.is_visible());
//! loading.hide();
//! assert!(!surface.is_visible());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use super::element::Control;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Where the overlay is drawn.
///
/// Called only by [`LoadingIndicator`], and only on count transitions
/// (0 → 1 renders, 1 → 0 clears). Implementations must not call back into
/// the indicator.
pub trait OverlaySurface: Send + Sync {
    fn render(&self, message: &str);
    fn clear(&self);
}

/// In-memory overlay surface.
#[derive(Debug, Default)]
pub struct HeadlessOverlay {
    state: Mutex<Option<String>>,
}

impl HeadlessOverlay {
    pub fn is_visible(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Text currently shown, `None` while hidden
    pub fn message(&self) -> Option<String> {
        self.state.lock().clone()
    }
}

impl OverlaySurface for HeadlessOverlay {
    fn render(&self, message: &str) {
        tracing::debug!(message, "Overlay shown");
        *self.state.lock() = Some(message.to_string());
    }

    fn clear(&self) {
        tracing::debug!("Overlay hidden");
        *self.state.lock() = None;
    }
}

/// Reference-counted overlay controller.
pub struct LoadingIndicator {
    active: Mutex<usize>,
    surface: Arc<dyn OverlaySurface>,
}

impl LoadingIndicator {
    pub fn new(surface: Arc<dyn OverlaySurface>) -> Self {
        Self {
            active: Mutex::new(0),
            surface,
        }
    }

    /// Indicator backed by a fresh [`HeadlessOverlay`].
    pub fn headless() -> Self {
        Self::new(Arc::new(HeadlessOverlay::default()))
    }

    /// An empty `message` shows [`DEFAULT_LOADING_MESSAGE`].
    pub fn show(&self, message: &str) {
        let mut active = self.active.lock();
        *active += 1;
        if *active == 1 {
            let message = if message.is_empty() { DEFAULT_LOADING_MESSAGE } else { message };
            self.surface.render(message);
        }
    }

    /// Extra calls beyond the matching `show`s are ignored.
    pub fn hide(&self) {
        let mut active = self.active.lock();
        if *active == 0 {
            return;
        }
        *active -= 1;
        if *active == 0 {
            self.surface.clear();
        }
    }

    /// `show(message)` now, `hide()` when the ticket drops.
    pub fn begin(self: &Arc<Self>, message: &str) -> LoadingTicket {
        self.show(message);
        LoadingTicket {
            indicator: Arc::clone(self),
        }
    }

    pub fn active_count(&self) -> usize {
        *self.active.lock()
    }

    pub fn is_visible(&self) -> bool {
        self.active_count() > 0
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::headless()
    }
}

/// Holds one overlay reference; releases it on drop.
#[must_use = "dropping the ticket hides the overlay immediately"]
pub struct LoadingTicket {
    indicator: Arc<LoadingIndicator>,
}

impl Drop for LoadingTicket {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Put one button into its loading look without the submit guard.
///
/// The button is disabled and marked busy; its caption is untouched until
/// the returned handle finishes. A non-empty `original_label` is what gets
/// restored, otherwise the caption the button had when loading began.
pub fn set_button_loading(button: Arc<dyn Control>, original_label: &str) -> ButtonLoading {
    let restore_label = if original_label.is_empty() {
        button.label()
    } else {
        original_label.to_string()
    };
    button.set_busy(true);
    button.set_disabled(true);

    ButtonLoading {
        button: Some(button),
        restore_label,
    }
}

/// Handle returned by [`set_button_loading`]. Finishing or dropping it
/// re-enables the button and restores its caption.
#[must_use = "dropping the handle ends the loading state immediately"]
pub struct ButtonLoading {
    button: Option<Arc<dyn Control>>,
    restore_label: String,
}

impl ButtonLoading {
    pub fn finish(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(button) = self.button.take() {
            button.set_busy(false);
            button.set_disabled(false);
            button.set_label(&self.restore_label);
        }
    }
}

impl Drop for ButtonLoading {
    fn drop(&mut self) {
        self.restore();
    }
}
