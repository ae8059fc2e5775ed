//! Shared gesture constants for swipe-to-reveal rows.
//!
//! Values are in logical pixels, the same unit the platform adapters report
//! (`clientX` on the web). Rows that need different values should build a
//! [`SwipeConfig`](crate::SwipeConfig) instead of editing these.

/// Minimum horizontal travel, in logical pixels, for a drag to count as a swipe.
///
/// The comparison is strict: a drag of exactly this distance in either
/// direction is not a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Width of the action panel revealed by a left swipe.
///
/// An open row is rendered shifted left by this amount so the panel
/// (e.g. a Remove button) becomes visible.
pub const REVEAL_PANEL_WIDTH: f32 = 80.0;
