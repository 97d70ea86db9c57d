// Console layer - renders core results as text for stdout.

#[path = "formatter.rs"]
pub mod formatter;

pub use formatter::write_listing;
