//! Contact form rendering.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_core::MESSAGE_MAX_LEN;
use folio_engine::{App, FormField, InputMode, SubmitStatus};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn form_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let composing = app.input_mode() == InputMode::Compose;
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let focused = composing && app.focused_field() == field;
        let error = app.validation_errors().get(field);
        field_lines(app, field, focused, error, palette, glyphs, &mut lines);
    }

    lines.push(submit_line(app, composing, palette));
    if let Some(banner) = app.submit_status().banner() {
        let (glyph, color) = match app.submit_status() {
            SubmitStatus::Sent => (glyphs.check, palette.success),
            _ => (glyphs.cross, palette.error),
        };
        lines.push(Line::from(Span::styled(
            format!("{glyph} {banner}"),
            Style::default().fg(color),
        )));
    }
    lines
}

fn field_lines(
    app: &App,
    field: FormField,
    focused: bool,
    error: Option<&'static str>,
    palette: &Palette,
    glyphs: &Glyphs,
    lines: &mut Vec<Line<'static>>,
) {
    let marker = if focused {
        glyphs.nav_active
    } else {
        glyphs.nav_inactive
    };
    let label_style = if error.is_some() {
        styles::field_error(palette).add_modifier(Modifier::BOLD)
    } else if focused {
        styles::eyebrow(palette)
    } else {
        styles::heading(palette)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), styles::eyebrow(palette)),
        Span::styled(field.label(), label_style),
    ]));

    let bar_style = Style::default().fg(if focused {
        palette.primary
    } else if error.is_some() {
        palette.error
    } else {
        palette.border
    });
    let bar = format!("  {} ", glyphs.timeline);
    let value = app.form().field(field);

    if value.is_empty() {
        let mut spans = vec![Span::styled(bar, bar_style)];
        if focused {
            spans.push(Span::styled(glyphs.cursor, Style::default().fg(palette.primary)));
        }
        spans.push(Span::styled(field.placeholder(), styles::muted(palette)));
        lines.push(Line::from(spans));
    } else {
        let rows: Vec<&str> = value.split('\n').collect();
        let last = rows.len() - 1;
        for (index, row) in rows.into_iter().enumerate() {
            let mut spans = vec![
                Span::styled(bar.clone(), bar_style),
                Span::styled(row.to_string(), Style::default().fg(palette.text_primary)),
            ];
            if focused && index == last {
                spans.push(Span::styled(glyphs.cursor, Style::default().fg(palette.primary)));
            }
            lines.push(Line::from(spans));
        }
    }

    if field == FormField::Message {
        lines.push(Line::from(Span::styled(
            format!("  {}/{MESSAGE_MAX_LEN}", app.contact().message_len()),
            styles::muted(palette),
        )));
    }
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            styles::field_error(palette),
        )));
    }
    lines.push(Line::default());
}

fn submit_line(app: &App, composing: bool, palette: &Palette) -> Line<'static> {
    let status = app.submit_status();
    let button = Span::styled(
        format!("[ {} ]", status.button_label()),
        styles::button(palette, !app.is_submitting()),
    );
    let hint = if composing {
        "  Ctrl+S to send, Esc to leave the form"
    } else {
        "  press c to write a message"
    };
    Line::from(vec![button, Span::styled(hint, styles::key_hint(palette))])
}
