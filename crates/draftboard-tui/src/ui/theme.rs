//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Draftboard color palette
pub struct Theme {
    // Primary branding colors
    pub turf: Color,
    pub chalk: Color,
    pub night: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - field green
            turf: Color::Rgb(46, 125, 50),    // #2E7D32
            chalk: Color::Rgb(245, 245, 245), // #F5F5F5
            night: Color::Rgb(24, 24, 24),    // #181818

            // Status colors
            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            warning: Color::Rgb(255, 152, 0), // #FF9800 - Orange
            danger: Color::Rgb(244, 67, 54),  // #F44336 - Red

            // UI elements
            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(102, 187, 106), // #66BB6A
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(55, 71, 79),         // #37474F
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.chalk).add_modifier(Modifier::BOLD)
    }

    /// Get header badge style
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.night)
            .bg(self.turf)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected button on a destructive dialog
    pub fn danger_selected(&self) -> Style {
        Style::default()
            .fg(self.chalk)
            .bg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get selection/highlight style
    pub fn selection(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.chalk)
            .add_modifier(Modifier::BOLD)
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            self.selection()
        } else {
            self.text()
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            ..Self::default()
        }
    }
}
