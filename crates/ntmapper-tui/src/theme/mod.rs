//! Centralized theme system.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Icon slots with Unicode and Nerd Font variants

pub mod icons;
pub mod palette;
pub mod styles;
