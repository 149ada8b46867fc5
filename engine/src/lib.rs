//! Core engine for Folio - page state and the contact form lifecycle.
//!
//! This crate contains the App state without TUI dependencies. The renderer
//! measures the page and hands the result back through [`App::set_layout`];
//! every scroll change then re-runs the active-section tracker.

use std::sync::Arc;
use std::time::Instant;

pub use folio_core::{ActiveSection, NavItem, PageLayout, SectionLayout, content, nav_items};
pub use folio_mail::{EmailJsClient, EmailJsSettings, MailDispatcher, MailError, TemplateParams};
pub use folio_types::ui::{InputMode, Theme, UiOptions};
pub use folio_types::{
    ContactForm, FormField, SectionExtent, SectionId, SubmitStatus, TimelineEntry,
    ValidationErrors,
};

mod config;
mod contact;

pub use config::{AppConfig, ConfigError, DEFAULT_TO_NAME, EmailJsConfig, FolioConfig};
pub use contact::{ContactController, STATUS_RESET_AFTER, SubmitOutcome};

/// Viewport over the laid-out page.
#[derive(Debug, Clone, Default)]
struct Viewport {
    layout: PageLayout,
    height: u32,
    offset: u32,
    mounted: bool,
}

impl Viewport {
    fn max_offset(&self) -> u32 {
        self.layout.total_height().saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[derive(Debug)]
pub struct App {
    viewport: Viewport,
    active: ActiveSection,
    input_mode: InputMode,
    contact: ContactController,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    /// Builds the app from loaded config. Mail is disabled when EmailJS is
    /// not fully configured.
    pub fn new(config: Option<&FolioConfig>) -> Self {
        let ui_options = FolioConfig::ui_options(config);
        let to_name = FolioConfig::to_name(config);

        let dispatcher: Option<Arc<dyn MailDispatcher>> =
            match FolioConfig::emailjs_settings(config) {
                Some(settings) => match EmailJsClient::new(settings) {
                    Ok(client) => {
                        tracing::info!(endpoint = client.endpoint(), "EmailJS configured");
                        Some(Arc::new(client))
                    }
                    Err(err) => {
                        tracing::warn!("EmailJS disabled: {err}");
                        None
                    }
                },
                None => {
                    tracing::warn!("EmailJS is not configured; the contact form cannot send");
                    None
                }
            };

        Self::with_dispatcher(dispatcher, ui_options, to_name)
    }

    pub fn with_dispatcher(
        dispatcher: Option<Arc<dyn MailDispatcher>>,
        ui_options: UiOptions,
        to_name: impl Into<String>,
    ) -> Self {
        Self {
            viewport: Viewport::default(),
            active: ActiveSection::default(),
            input_mode: InputMode::default(),
            contact: ContactController::new(dispatcher, to_name),
            ui_options,
            should_quit: false,
        }
    }

    // ========================================================================
    // Viewport and tracker
    // ========================================================================

    /// Installs a fresh measurement of the page.
    ///
    /// The first call mounts the page and runs the tracker once; later calls
    /// re-run it only when the layout or viewport actually changed.
    pub fn set_layout(&mut self, layout: PageLayout, viewport_height: u32) {
        let changed = !self.viewport.mounted
            || self.viewport.layout != layout
            || self.viewport.height != viewport_height;
        if !changed {
            return;
        }
        if !self.viewport.mounted {
            tracing::debug!(viewport_height, "Page layout mounted");
        }
        self.viewport.layout = layout;
        self.viewport.height = viewport_height;
        self.viewport.mounted = true;
        self.viewport.clamp();
        self.track();
    }

    fn track(&mut self) -> SectionId {
        if !self.viewport.mounted {
            return self.active.get();
        }
        self.active
            .track(self.viewport.offset, self.viewport.height, &self.viewport.layout)
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.viewport.layout
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.viewport.offset
    }

    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport.height
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.viewport.max_offset()
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.active.get()
    }

    #[must_use]
    pub fn nav_items(&self) -> [NavItem; SectionId::ALL.len()] {
        nav_items(self.active.get())
    }

    /// Sets the scroll offset (clamped) and runs the tracker.
    pub fn scroll_to(&mut self, offset: u32) {
        self.viewport.offset = offset;
        self.viewport.clamp();
        self.track();
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.viewport.offset).saturating_add(delta);
        let target = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        self.scroll_to(target);
    }

    pub fn scroll_line_up(&mut self) {
        self.scroll_by(-1);
    }

    pub fn scroll_line_down(&mut self) {
        self.scroll_by(1);
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_by(-i64::from(self.page_step()));
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_by(i64::from(self.page_step()));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(u32::MAX);
    }

    fn page_step(&self) -> u32 {
        self.viewport.height.saturating_sub(2).max(1)
    }

    /// Scrolls so `section` starts at the top of the viewport.
    ///
    /// The active section follows from the tracker, so near the end of the
    /// page it can differ from `section` when the page cannot scroll far
    /// enough.
    pub fn navigate_to(&mut self, section: SectionId) {
        match self.viewport.layout.top_of(section) {
            Some(top) => {
                tracing::debug!(%section, top, "Navigating to section");
                self.scroll_to(top);
            }
            None => tracing::debug!(%section, "Navigation target not laid out"),
        }
    }

    /// Next section after the active one; no-op on the last.
    pub fn navigate_next(&mut self) {
        if let Some(section) = self.active.get().next() {
            self.navigate_to(section);
        }
    }

    pub fn navigate_prev(&mut self) {
        if let Some(section) = self.active.get().prev() {
            self.navigate_to(section);
        }
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Jumps to the contact section and focuses the first field.
    pub fn enter_compose(&mut self) {
        self.navigate_to(SectionId::Contact);
        self.contact.focus(FormField::Name);
        self.input_mode = InputMode::Compose;
    }

    pub fn exit_compose(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    #[must_use]
    pub fn contact(&self) -> &ContactController {
        &self.contact
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        self.contact.form()
    }

    #[must_use]
    pub fn validation_errors(&self) -> &ValidationErrors {
        self.contact.errors()
    }

    #[must_use]
    pub fn focused_field(&self) -> FormField {
        self.contact.focused()
    }

    pub fn focus_next(&mut self) {
        self.contact.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.contact.focus_prev();
    }

    pub fn insert_char(&mut self, c: char) {
        self.contact.insert_char(c);
    }

    pub fn insert_text(&mut self, text: &str) {
        self.contact.insert_text(text);
    }

    pub fn backspace(&mut self) {
        self.contact.backspace();
    }

    pub fn clear_field(&mut self) {
        self.contact.clear_field();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(Instant::now())
    }

    pub fn submit_at(&mut self, now: Instant) -> SubmitOutcome {
        self.contact.submit(now)
    }

    #[must_use]
    pub fn submit_status(&self) -> SubmitStatus {
        self.contact.status()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.contact.is_submitting()
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Called once per frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.contact.poll(now);
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn toggle_theme(&mut self) {
        self.ui_options.theme = self.ui_options.theme.toggled();
        tracing::debug!(theme = ?self.ui_options.theme, "Theme toggled");
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
