//! Foundation types for termfolio.
//!
//! Shared by every termfolio crate: the error type, hex color parsing used by
//! the theme store, and the site configuration loaded by the front end.

pub mod color;
pub mod config;
pub mod error;
