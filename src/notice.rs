//! Blocking user-facing notices.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Surfaces a message the visitor must acknowledge.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// [`Notifier`] backed by `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("notice dropped: no window: {message}");
                return;
            };
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("notice failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("notice: {message}");
        }
    }
}
