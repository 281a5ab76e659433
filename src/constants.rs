// src/constants.rs

pub const UI_SPACING: f32 = 10.0; // Spacing between UI elements
pub const UI_PADDING: f32 = 3.0; // Padding inside UI elements

// Range every tweakable value is displayed and clamped within.
pub const VALUE_MIN: f32 = 1.0;
pub const VALUE_MAX: f32 = 100.0;

// Controls the dimensions of the slider editor.
pub const PANEL_HEIGHT: f32 = 200.0;
pub const SLIDER_WIDTH: f32 = 240.0;
pub const SLIDER_LABEL_WIDTH: f32 = 120.0;

pub const TOP_BAR_HEIGHT: f32 = 30.0;

// Constants for the demo window
pub const WINDOW_WIDTH: f32 = 480.0;
pub const WINDOW_HEIGHT: f32 = 480.0;

pub const LABEL_FONT_SIZE: f32 = 14.0;
