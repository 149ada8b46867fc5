//! Core domain logic for Folio.
//!
//! This crate holds the pure pieces of the page: the active-section tracker,
//! contact form validation, the navigation indicator mapping, and the static
//! content the section views render. Nothing here performs IO.

pub mod content;
pub mod navigation;
pub mod scroll;
pub mod validation;

pub use navigation::{NavItem, nav_items};
pub use scroll::{ActiveSection, PageLayout, SectionLayout, active_section_at, midpoint};
pub use validation::{
    MESSAGE_MAX_LEN, has_validation_errors, utf16_len, validate_contact_form,
};
