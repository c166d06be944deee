//! Color palette for dialogs
//!
//! Muted accents on a dark surface. Each modal kind gets a border, title and
//! button shade; the Save/Cancel pair uses fixed colors regardless of kind.

use ratatui::style::Color;

// Backdrop and surface
pub const BACKDROP: Color = Color::Rgb(12, 12, 16);
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);
pub const BUTTON_TEXT: Color = Color::Rgb(245, 245, 250);

// Success
pub const SUCCESS_BORDER: Color = Color::Rgb(120, 180, 120);
pub const SUCCESS_TITLE: Color = Color::Rgb(150, 210, 150);
pub const SUCCESS_BUTTON: Color = Color::Rgb(70, 130, 70);

// Error
pub const ERROR_BORDER: Color = Color::Rgb(200, 100, 100);
pub const ERROR_TITLE: Color = Color::Rgb(230, 130, 130);
pub const ERROR_BUTTON: Color = Color::Rgb(160, 60, 60);

// Warning
pub const WARNING_BORDER: Color = Color::Rgb(200, 160, 80);
pub const WARNING_TITLE: Color = Color::Rgb(230, 190, 110);
pub const WARNING_BUTTON: Color = Color::Rgb(150, 110, 40);

// Info
pub const INFO_BORDER: Color = Color::Rgb(100, 140, 200);
pub const INFO_TITLE: Color = Color::Rgb(130, 170, 230);
pub const INFO_BUTTON: Color = Color::Rgb(60, 100, 170);

// Action buttons
pub const SAVE_BUTTON: Color = Color::Rgb(70, 130, 70);
pub const CANCEL_BUTTON: Color = Color::Rgb(90, 95, 110);
