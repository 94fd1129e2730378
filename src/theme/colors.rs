//! Color constants for the quiet gallery palette.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK: &str = "#14161a";
pub const INK_RAISED: &str = "#1b1e24";
pub const INK_BORDER: &str = "#2a2e36";

// === BONE (Text) ===
pub const BONE: &str = "#ece8e1";
pub const BONE_SECONDARY: &str = "rgba(236, 232, 225, 0.72)";
pub const BONE_MUTED: &str = "rgba(236, 232, 225, 0.48)";

// === OCHRE (Accents) ===
pub const OCHRE: &str = "#d08c2e";
pub const OCHRE_GLOW: &str = "rgba(208, 140, 46, 0.35)";

// === SEMANTIC ===
pub const PROBLEM: &str = "#e2634f";
