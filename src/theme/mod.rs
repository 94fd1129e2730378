//! Theme for the Folio shell.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
