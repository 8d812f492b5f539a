// Internal shared utilities

pub mod error;
