// src/notify.rs

//! User-facing failure notification.
//!
//! The launcher's parent is typically windowless (double-clicked bootstrap
//! stub), so fatal failures are shown in a modal dialog rather than only on
//! a console nobody sees.

use tracing::error;

/// Blocking, user-visible alert. Implementations must not return before the
/// user has had a chance to see the message.
pub trait Notifier: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Modal error dialog via the platform's native message box.
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, title: &str, message: &str) {
        // Also mirrored to the log in case dialogs are unavailable.
        error!(title = title, "{message}");
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
