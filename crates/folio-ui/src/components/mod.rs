//! Reusable UI components for the portfolio shell
//!
//! All components lean on the global stylesheet's class hooks; they own
//! behavior and markup, never inline style.

mod button;
mod input;
mod project_card;

pub use button::*;
pub use input::*;
pub use project_card::*;
