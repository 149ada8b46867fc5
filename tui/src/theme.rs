//! Color theme and glyphs for Folio TUI.
//!
//! Dark and light palettes follow the page's slate/blue scheme; high contrast
//! replaces both with the terminal's named colors.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::{Theme, UiOptions};

/// Slate and blue color constants.
mod colors {
    use super::Color;

    // === Dark backgrounds ===
    pub const SLATE_950: Color = Color::Rgb(2, 6, 23);
    pub const SLATE_900: Color = Color::Rgb(15, 23, 42);
    pub const SLATE_800: Color = Color::Rgb(30, 41, 59);
    pub const SLATE_700: Color = Color::Rgb(51, 65, 85);

    // === Light backgrounds ===
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const SLATE_50: Color = Color::Rgb(248, 250, 252);
    pub const SLATE_100: Color = Color::Rgb(241, 245, 249);
    pub const SLATE_200: Color = Color::Rgb(226, 232, 240);

    // === Text ===
    pub const SLATE_300: Color = Color::Rgb(203, 213, 225);
    pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
    pub const SLATE_500: Color = Color::Rgb(100, 116, 139);
    pub const SLATE_600: Color = Color::Rgb(71, 85, 105);

    // === Accents ===
    pub const BLUE_400: Color = Color::Rgb(96, 165, 250);
    pub const BLUE_600: Color = Color::Rgb(37, 99, 235);
    pub const CYAN_400: Color = Color::Rgb(34, 211, 238);
    pub const CYAN_600: Color = Color::Rgb(8, 145, 178);
    pub const GREEN_400: Color = Color::Rgb(74, 222, 128);
    pub const GREEN_600: Color = Color::Rgb(22, 163, 74);
    pub const RED_400: Color = Color::Rgb(248, 113, 113);
    pub const RED_600: Color = Color::Rgb(220, 38, 38);
    pub const AMBER_400: Color = Color::Rgb(251, 191, 36);
    pub const AMBER_600: Color = Color::Rgb(217, 119, 6);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::SLATE_950,
            bg_panel: colors::SLATE_900,
            bg_highlight: colors::SLATE_800,
            border: colors::SLATE_700,
            text_primary: colors::SLATE_50,
            text_secondary: colors::SLATE_300,
            text_muted: colors::SLATE_400,
            primary: colors::BLUE_400,
            accent: colors::CYAN_400,
            success: colors::GREEN_400,
            warning: colors::AMBER_400,
            error: colors::RED_400,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::WHITE,
            bg_panel: colors::SLATE_50,
            bg_highlight: colors::SLATE_100,
            border: colors::SLATE_200,
            text_primary: colors::SLATE_900,
            text_secondary: colors::SLATE_600,
            text_muted: colors::SLATE_500,
            primary: colors::BLUE_600,
            accent: colors::CYAN_600,
            success: colors::GREEN_600,
            warning: colors::AMBER_600,
            error: colors::RED_600,
        }
    }

    #[must_use]
    pub fn high_contrast(theme: Theme) -> Self {
        let (bg, fg) = match theme {
            Theme::Dark => (Color::Black, Color::White),
            Theme::Light => (Color::White, Color::Black),
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: Color::DarkGray,
            border: Color::Gray,
            text_primary: fg,
            text_secondary: fg,
            text_muted: Color::Gray,
            primary: Color::Blue,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast(options.theme);
    }
    match options.theme {
        Theme::Dark => Palette::dark(),
        Theme::Light => Palette::light(),
    }
}

/// ASCII/Unicode glyphs for icons and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub nav_active: &'static str,
    pub nav_inactive: &'static str,
    pub arrow_right: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub link: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub timeline: &'static str,
    pub rule: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub cursor: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            nav_active: ">",
            nav_inactive: " ",
            arrow_right: "->",
            arrow_up: "^",
            arrow_down: "v",
            link: "@",
            check: "OK",
            cross: "!",
            timeline: "|",
            rule: "-",
            track: "|",
            thumb: "#",
            cursor: "_",
            theme_dark: "dark",
            theme_light: "light",
        }
    } else {
        Glyphs {
            bullet: "•",
            nav_active: "▸",
            nav_inactive: " ",
            arrow_right: "→",
            arrow_up: "↑",
            arrow_down: "↓",
            link: "↗",
            check: "✓",
            cross: "✗",
            timeline: "│",
            rule: "─",
            track: "│",
            thumb: "█",
            cursor: "▏",
            theme_dark: "☾",
            theme_light: "☀",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn eyebrow(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default().fg(palette.primary).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn field_error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette, enabled: bool) -> Style {
        let style = Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD);
        if enabled {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }
}
