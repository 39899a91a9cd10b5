//! Utility helpers shared by the GUI and the CLI

pub mod format;

pub use format::{format_byte_rate, format_bytes};
