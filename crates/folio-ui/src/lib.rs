//! Folio UI Components
//!
//! This crate provides the small reusable Dioxus pieces shared by the
//! portfolio shell: buttons, form fields, and project cards.
//!
//! ## Design Philosophy
//!
//! Quiet gallery aesthetic:
//! - **Ink (#14161a)**: Background darkness, the gallery wall
//! - **Bone (#ece8e1)**: Primary text and headings
//! - **Ochre (#d08c2e)**: Accents, active nav, focus rings
//! - Panels are full-bleed overlays that fade over the hero, never
//!   windows floating above it.

pub mod components;

pub use components::*;
