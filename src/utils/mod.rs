pub mod format;

pub use format::{capitalize, format_dex_number, format_height, format_weight};
