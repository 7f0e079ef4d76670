//! Color themes.
//!
//! The session core only emits semantic (text, kind) pairs; colors are
//! applied at the rendering edge from an explicit theme value.

use ratatui::style::Color;

pub struct Theme {
    // Base colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_dim: Color,
    pub bg_highlight: Color,

    // File status colors
    pub file_new: Color,
    pub file_modified: Color,
    pub file_deleted: Color,
    pub file_renamed: Color,

    // Diff colors
    pub diff_add: Color,
    pub diff_del: Color,
    pub diff_hunk_header: Color,

    // UI element colors
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub status_bar_bg: Color,
    pub current_branch: Color,
    pub commit_hash: Color,
    pub selection_mark: Color,

    // Message badge colors
    pub message_info_fg: Color,
    pub message_info_bg: Color,
    pub message_warning_fg: Color,
    pub message_warning_bg: Color,
    pub message_error_fg: Color,
    pub message_error_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            fg_primary: Color::White,
            fg_secondary: Color::Rgb(210, 210, 210),
            fg_dim: Color::Rgb(150, 150, 150),
            bg_highlight: Color::Rgb(70, 70, 70),

            file_new: Color::Rgb(80, 220, 120),
            file_modified: Color::Rgb(255, 210, 90),
            file_deleted: Color::Rgb(240, 90, 90),
            file_renamed: Color::Rgb(255, 140, 220),

            diff_add: Color::Rgb(80, 220, 120),
            diff_del: Color::Rgb(240, 90, 90),
            diff_hunk_header: Color::Rgb(90, 200, 255),

            border_focused: Color::Rgb(90, 200, 255),
            border_unfocused: Color::Rgb(110, 110, 110),
            status_bar_bg: Color::Rgb(30, 30, 30),
            current_branch: Color::Rgb(80, 220, 120),
            commit_hash: Color::Rgb(255, 210, 90),
            selection_mark: Color::Rgb(90, 220, 240),

            message_info_fg: Color::Black,
            message_info_bg: Color::Cyan,
            message_warning_fg: Color::Black,
            message_warning_bg: Color::Rgb(255, 210, 90),
            message_error_fg: Color::White,
            message_error_bg: Color::Rgb(240, 90, 90),
        }
    }

    pub fn light() -> Self {
        Self {
            fg_primary: Color::Black,
            fg_secondary: Color::Rgb(60, 60, 60),
            fg_dim: Color::Rgb(120, 120, 120),
            bg_highlight: Color::Rgb(215, 215, 215),

            file_new: Color::Rgb(0, 130, 50),
            file_modified: Color::Rgb(160, 110, 0),
            file_deleted: Color::Rgb(180, 30, 30),
            file_renamed: Color::Rgb(150, 40, 130),

            diff_add: Color::Rgb(0, 130, 50),
            diff_del: Color::Rgb(180, 30, 30),
            diff_hunk_header: Color::Rgb(20, 105, 180),

            border_focused: Color::Rgb(20, 105, 180),
            border_unfocused: Color::Rgb(150, 150, 150),
            status_bar_bg: Color::Rgb(230, 230, 230),
            current_branch: Color::Rgb(0, 130, 50),
            commit_hash: Color::Rgb(160, 110, 0),
            selection_mark: Color::Rgb(0, 120, 140),

            message_info_fg: Color::White,
            message_info_bg: Color::Rgb(20, 105, 180),
            message_warning_fg: Color::Black,
            message_warning_bg: Color::Rgb(235, 200, 100),
            message_error_fg: Color::White,
            message_error_bg: Color::Rgb(180, 30, 30),
        }
    }

    /// Look up a theme by config name; unknown names fall back to dark.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }
}
