//! Rendering tests: full frames drawn into a virtual terminal.


use folio_engine::{App, FormField, SectionId, SectionLayout, Theme, UiOptions};
use folio_tui::{Palette, draw};
use ratatui::Terminal;

use vt100_backend::{VT100Backend, rgb};

fn app_with(options: UiOptions) -> App {
    App::with_dispatcher(None, options, "Adrian")
}

fn ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    }
}

fn terminal(width: u16, height: u16) -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(width, height)).expect("terminal")
}

fn render(terminal: &mut Terminal<VT100Backend>, app: &mut App) {
    terminal.draw(|frame| draw(frame, app)).expect("draw");
}

#[test]
fn wide_frame_opens_on_the_hero() {
    let mut terminal = terminal(100, 30);
    let mut app = app_with(UiOptions::default());
    render(&mut terminal, &mut app);

    let screen = terminal.backend().contents();
    assert!(screen.contains("Hello, I'm"));
    assert!(screen.contains("Adrian Tayeh"));
    assert_eq!(app.active_section(), SectionId::Hero);

    let hero = app.layout().extent(SectionId::Hero).expect("hero laid out");
    assert!(hero.height >= app.viewport_height());
}

#[test]
fn rail_highlights_the_tracked_section() {
    let mut terminal = terminal(100, 30);
    let mut app = app_with(ascii());
    render(&mut terminal, &mut app);

    app.navigate_to(SectionId::Projects);
    render(&mut terminal, &mut app);
    assert_eq!(app.active_section(), SectionId::Projects);

    let backend = terminal.backend();
    let dark = Palette::dark();

    let row = backend.find_row("02 Projects").expect("projects entry");
    let col = backend.find_col(row, "02 Projects").unwrap();
    assert_eq!(backend.bg_at(row, col), Some(rgb(dark.primary)));

    let row = backend.find_row("01 Home").expect("home entry");
    let col = backend.find_col(row, "01 Home").unwrap();
    assert_eq!(backend.bg_at(row, col), Some(rgb(dark.bg_panel)));
}

#[test]
fn narrow_frame_uses_the_bottom_bar() {
    let mut terminal = terminal(60, 24);
    let mut app = app_with(UiOptions::default());
    render(&mut terminal, &mut app);

    let backend = terminal.backend();
    insta::assert_snapshot!(backend.row(22).trim(), @"01 Home  02  03  04  05");
    insta::assert_snapshot!(
        backend.row(23).trim(),
        @"BROWSE  j/k scroll  1-5 jump  c contact  t theme  q quit"
    );
}

#[test]
fn empty_submit_shows_every_field_error() {
    let mut terminal = terminal(100, 30);
    let mut app = app_with(ascii());
    render(&mut terminal, &mut app);

    app.enter_compose();
    app.submit();
    render(&mut terminal, &mut app);

    let screen = terminal.backend().contents();
    assert!(screen.contains("Name is required"));
    assert!(screen.contains("Email is required"));
    assert!(screen.contains("Message is required"));
    assert!(screen.contains(&format!("> {}", FormField::Name.label())));
    assert!(terminal.backend().find_row("COMPOSE").is_some());
}

#[test]
fn failed_send_offers_a_retry() {
    let mut terminal = terminal(100, 30);
    let mut app = app_with(UiOptions::default());
    render(&mut terminal, &mut app);

    app.enter_compose();
    app.insert_text("Ada");
    app.focus_next();
    app.insert_text("ada@example.com");
    app.focus_next();
    app.insert_text("Hello");
    render(&mut terminal, &mut app);
    assert!(terminal.backend().contents().contains("5/1000"));

    app.insert_text(" there, Adrian!");
    app.submit();
    render(&mut terminal, &mut app);

    let screen = terminal.backend().contents();
    assert!(screen.contains("[ Try Again ]"));
    assert!(screen.contains("Sorry, there was an error"));
    assert_eq!(app.form().name, "Ada");
}

#[test]
fn theme_toggle_repaints_the_background() {
    let mut terminal = terminal(100, 30);
    let mut app = app_with(UiOptions::default());
    render(&mut terminal, &mut app);
    assert_eq!(
        terminal.backend().bg_at(12, 95),
        Some(rgb(Palette::dark().bg))
    );

    app.toggle_theme();
    render(&mut terminal, &mut app);
    assert_eq!(app.ui_options().theme, Theme::Light);
    assert_eq!(
        terminal.backend().bg_at(12, 95),
        Some(rgb(Palette::light().bg))
    );
}
