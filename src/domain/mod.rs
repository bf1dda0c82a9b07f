//! Domain rules: untrusted-text sanitization.

pub mod sanitize;

pub use sanitize::sanitize;
