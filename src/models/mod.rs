//! Data models for colors, color families and family filters.
//!
//! Models are independent of palette generation and CLI logic.

pub mod color_registry;
pub mod family_filter;
pub mod rgb;

// Re-export all model types
pub use color_registry::{family, find_closest_color_name, ColorEntry, ColorFamily, ColorRegistry};
pub use family_filter::FamilyFilter;
pub use rgb::{color_distance, hex_to_rgb, rgb_to_hex, shift_hue, Hls, RgbColor};
