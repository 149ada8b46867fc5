//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod content;
mod form;
pub mod ui;

pub use content::{ContactDetail, Project, SocialLink, StackCategory, TimelineEntry};
pub use form::{ContactForm, FormField, SubmitStatus, ValidationErrors};

use std::fmt;

// ============================================================================
// Sections
// ============================================================================

/// A named region of the page.
///
/// The variant order is the declaration order used for navigation and for
/// active-section tie-breaking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Hero,
    Projects,
    Stack,
    About,
    Contact,
}

impl SectionId {
    /// All sections in declaration order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Projects,
        SectionId::Stack,
        SectionId::About,
        SectionId::Contact,
    ];

    /// Stable identifier, the anchor name of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Projects => "projects",
            SectionId::Stack => "stack",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn order_index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::Projects => 1,
            SectionId::Stack => 2,
            SectionId::About => 3,
            SectionId::Contact => 4,
        }
    }

    /// Two-digit label shown in the navigation rail.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "01",
            SectionId::Projects => "02",
            SectionId::Stack => "03",
            SectionId::About => "04",
            SectionId::Contact => "05",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Projects => "Projects",
            SectionId::Stack => "Stack",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    /// Section at a declaration index, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.order_index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.order_index()
            .checked_sub(1)
            .and_then(Self::from_index)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Vertical extent of a section, in page rows from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionExtent {
    pub top: u32,
    pub height: u32,
}

impl SectionExtent {
    #[must_use]
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// First row past the section.
    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Half-open membership: `top <= row < top + height`.
    #[must_use]
    pub const fn contains(self, row: u32) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_matches_index() {
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.order_index(), index);
            assert_eq!(SectionId::from_index(index), Some(section));
        }
        assert_eq!(SectionId::from_index(5), None);
    }

    #[test]
    fn display_uses_anchor_id() {
        assert_eq!(SectionId::Projects.to_string(), "projects");
        assert_eq!(SectionId::About.to_string(), "about");
    }

    #[test]
    fn next_and_prev_stop_at_ends() {
        assert_eq!(SectionId::Hero.prev(), None);
        assert_eq!(SectionId::Hero.next(), Some(SectionId::Projects));
        assert_eq!(SectionId::Contact.next(), None);
        assert_eq!(SectionId::Contact.prev(), Some(SectionId::About));
    }

    #[test]
    fn extent_is_half_open() {
        let extent = SectionExtent::new(10, 5);
        assert!(!extent.contains(9));
        assert!(extent.contains(10));
        assert!(extent.contains(14));
        assert!(!extent.contains(15));
        assert!(!SectionExtent::new(3, 0).contains(3));
    }
}
