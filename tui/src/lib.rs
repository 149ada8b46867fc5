//! TUI rendering for Folio using ratatui.
//!
//! Each frame lays the five sections out as one scrolling page, reports the
//! measured extents back to the engine, then paints the visible slice.

mod form;
mod input;
mod sections;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use folio_engine::{
    App, InputMode, PageLayout, SectionExtent, SectionId, SectionLayout, Theme, content,
};

/// Terminals at least this wide get the side rail instead of the bottom bar.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;
const NAV_RAIL_WIDTH: u16 = 18;
const PAGE_PADDING: u16 = 2;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let [body, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    // The page runs the tracker, so navigation is drawn after it.
    if body.width >= WIDE_LAYOUT_MIN_WIDTH {
        let [rail, page] =
            Layout::horizontal([Constraint::Length(NAV_RAIL_WIDTH), Constraint::Min(1)])
                .areas(body);
        draw_page(frame, app, page, &palette, &glyphs);
        draw_nav_rail(frame, app, rail, &palette, &glyphs);
    } else {
        let [page, bar] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);
        draw_page(frame, app, page, &palette, &glyphs);
        draw_nav_bar(frame, app, bar, &palette);
    }

    draw_status_bar(frame, app, status, &palette);
}

fn wrapped_height(lines: &[Line], width: u16) -> u32 {
    if lines.is_empty() {
        return 0;
    }
    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u32::try_from(rows).unwrap_or(u32::MAX)
}

fn draw_page(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let [text_area, scrollbar_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let text_area = text_area.inner(Margin {
        horizontal: PAGE_PADDING,
        vertical: 0,
    });
    let viewport = u32::from(text_area.height);
    let width = text_area.width;

    // Every section fills at least one screen.
    let views = SectionId::ALL.map(|section| sections::section_lines(section, app, palette, glyphs));
    let heights = views
        .each_ref()
        .map(|lines| wrapped_height(lines, width).max(viewport));
    let footer = sections::footer_lines(palette, glyphs);
    let footer_height = wrapped_height(&footer, width);

    app.set_layout(PageLayout::stacked(heights, footer_height), viewport);
    let offset = app.scroll_offset();

    for (section, lines) in SectionId::ALL.into_iter().zip(views) {
        if let Some(extent) = app.layout().extent(section) {
            draw_slice(frame, lines, extent, offset, text_area);
        }
    }
    let footer_top = app.layout().total_height().saturating_sub(footer_height);
    draw_slice(
        frame,
        footer,
        SectionExtent::new(footer_top, footer_height),
        offset,
        text_area,
    );

    let max_scroll = app.max_scroll();
    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        // content_length = scrollable range (max_scroll), not total rows
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(offset as usize);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// Paints the part of `extent` that falls inside the viewport.
fn draw_slice(
    frame: &mut Frame,
    lines: Vec<Line<'static>>,
    extent: SectionExtent,
    offset: u32,
    area: Rect,
) {
    let view_bottom = offset.saturating_add(u32::from(area.height));
    let start = extent.top.max(offset);
    let end = extent.bottom().min(view_bottom);
    if start >= end {
        return;
    }

    let rect = Rect {
        x: area.x,
        y: area.y + (start - offset) as u16,
        width: area.width,
        height: (end - start) as u16,
    };
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll_rows(start - extent.top), 0));
    frame.render_widget(paragraph, rect);
}

/// Rows to skip inside a section; ratatui scrolls by `u16`.
fn scroll_rows(rows: u32) -> u16 {
    u16::try_from(rows).unwrap_or_else(|_| {
        tracing::debug!(rows, "Section scroll exceeds u16; capping");
        u16::MAX
    })
}

fn draw_nav_rail(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!(" {}", content::OWNER),
            styles::heading(palette),
        )),
        Line::default(),
    ];

    for item in app.nav_items() {
        let (marker, style) = if item.active {
            (glyphs.nav_active, styles::nav_active(palette))
        } else {
            (glyphs.nav_inactive, styles::nav_inactive(palette))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), styles::eyebrow(palette)),
            Span::styled(format!("{} {}", item.label, item.name), style),
        ]));
    }

    let (theme_glyph, theme_name) = match app.ui_options().theme {
        Theme::Dark => (glyphs.theme_dark, "dark"),
        Theme::Light => (glyphs.theme_light, "light"),
    };
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" t ", styles::key_highlight(palette)),
        Span::styled(format!("{theme_glyph} {theme_name}"), styles::muted(palette)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Compact navigation for narrow terminals: only the active entry shows its name.
fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = Vec::new();
    for item in app.nav_items() {
        if item.active {
            spans.push(Span::styled(
                format!(" {} {} ", item.label, item.name),
                styles::nav_active(palette),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", item.label),
                styles::nav_inactive(palette),
            ));
        }
    }
    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(bar, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let (mode, mode_style, hints): (&str, Style, &[(&str, &str)]) = match app.input_mode() {
        InputMode::Browse => (
            " BROWSE ",
            styles::nav_active(palette),
            &[
                ("j/k", "scroll"),
                ("1-5", "jump"),
                ("c", "contact"),
                ("t", "theme"),
                ("q", "quit"),
            ],
        ),
        InputMode::Compose => (
            " COMPOSE ",
            Style::default()
                .fg(palette.bg)
                .bg(palette.success),
            &[
                ("Tab", "next field"),
                ("Ctrl+S", "send"),
                ("Ctrl+U", "clear"),
                ("Esc", "back"),
            ],
        ),
    };

    let mut spans = vec![Span::styled(mode, mode_style), Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
