// TabDeck - ui/theme.rs
//
// Colour scheme for message levels and tab handles.
// No dependencies on app state or business logic.

use crate::core::model::MessageLevel;
use egui::Color32;

/// Colour for a message level badge.
pub fn level_colour(level: &MessageLevel) -> Color32 {
    match level {
        MessageLevel::Error => Color32::from_rgb(220, 38, 38),   // Red 600
        MessageLevel::Warning => Color32::from_rgb(217, 119, 6), // Amber 600
        MessageLevel::Info => Color32::from_rgb(107, 114, 128),  // Gray 500
    }
}

/// Subtle background tint for a message row.
pub fn level_bg_colour(level: &MessageLevel) -> Option<Color32> {
    match level {
        MessageLevel::Error => Some(Color32::from_rgba_premultiplied(220, 38, 38, 20)),
        MessageLevel::Warning => Some(Color32::from_rgba_premultiplied(217, 119, 6, 15)),
        MessageLevel::Info => None,
    }
}

/// Tab handle fills.
pub const TAB_ACTIVE_BG: Color32 = Color32::from_rgb(55, 65, 81); // Gray 700
pub const TAB_HOVER_BG: Color32 = Color32::from_rgb(45, 53, 67);
pub const TAB_INACTIVE_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800

/// Tab title text.
pub const TAB_TEXT: Color32 = Color32::from_rgb(229, 231, 235); // Gray 200
pub const TAB_TEXT_INACTIVE: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Drop indicator line during a tab drag.
pub const DROP_INDICATOR: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Thumbnail placeholder fill in the preview popup and tall tabs.
pub const THUMBNAIL_PLACEHOLDER: Color32 = Color32::from_rgb(75, 85, 99); // Gray 600
