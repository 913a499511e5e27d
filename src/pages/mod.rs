//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads [`crate::app::Services`] from context and delegates every
//! decision to `flow`. Controls keep the ids and class names of the earlier
//! static markup so existing stylesheets still apply.

pub mod dashboard;
pub mod history;
pub mod landing;
