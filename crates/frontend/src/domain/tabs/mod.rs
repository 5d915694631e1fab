//! Tab management: the named records behind the admin page's navigation.
//!
//! The backend owns the tab list; this module only turns clicks on the
//! server-rendered controls into mutation requests and reloads the page on
//! success.

pub mod api;
pub mod controls;
