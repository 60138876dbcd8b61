//! Shared, platform-independent types for the dieta tabs page.
//!
//! Everything here is plain Rust so it can be unit tested without a browser.

pub mod tabs;
