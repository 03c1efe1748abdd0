//! Spatial geometry for patch tiling
//!
//! This module contains the geometry both transforms share:
//! - Padding arithmetic and reflective boundary extension
//! - Sliding-window grid layout and coverage

/// Padding calculation and reflective padding
pub mod padding;
/// Window grid layout and patch geometry
pub mod windows;

pub use padding::{PaddingInfo, padded_size};
pub use windows::{PatchGeometry, WindowGrid};
