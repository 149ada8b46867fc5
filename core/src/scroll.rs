//! Active-section tracking.
//!
//! The page is a vertical stack of sections measured in page rows. A section
//! is active when its extent contains the viewport midpoint,
//! `scroll_offset + viewport_height / 2`. Sections are tested in declaration
//! order and the first hit wins, so overlapping extents resolve to the
//! earlier section.
//!
//! Layout is supplied through [`SectionLayout`]; a section the layout does not
//! know about is simply not a candidate for that lookup.

use folio_types::{SectionExtent, SectionId};

/// Source of section extents, usually the renderer's last measurement.
pub trait SectionLayout {
    fn extent(&self, section: SectionId) -> Option<SectionExtent>;
}

impl SectionLayout for [(SectionId, SectionExtent)] {
    fn extent(&self, section: SectionId) -> Option<SectionExtent> {
        self.iter()
            .find(|(id, _)| *id == section)
            .map(|(_, extent)| *extent)
    }
}

impl<const N: usize> SectionLayout for [(SectionId, SectionExtent); N] {
    fn extent(&self, section: SectionId) -> Option<SectionExtent> {
        self.as_slice().extent(section)
    }
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn extent(&self, section: SectionId) -> Option<SectionExtent> {
        (**self).extent(section)
    }
}

/// Per-section extent table for one rendering of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    extents: [Option<SectionExtent>; SectionId::ALL.len()],
    /// Rows after the last section (footer).
    trailer: u32,
}

impl PageLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks sections top to bottom in declaration order.
    #[must_use]
    pub fn stacked(heights: [u32; SectionId::ALL.len()], trailer: u32) -> Self {
        let mut layout = Self::new();
        let mut top = 0u32;
        for (section, height) in SectionId::ALL.into_iter().zip(heights) {
            layout.set(section, SectionExtent::new(top, height));
            top = top.saturating_add(height);
        }
        layout.trailer = trailer;
        layout
    }

    pub fn set(&mut self, section: SectionId, extent: SectionExtent) {
        self.extents[section.order_index()] = Some(extent);
    }

    pub fn remove(&mut self, section: SectionId) {
        self.extents[section.order_index()] = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.iter().all(Option::is_none)
    }

    /// Total page height in rows, including the trailer.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.extents
            .iter()
            .flatten()
            .map(|extent| extent.bottom())
            .max()
            .unwrap_or(0)
            .saturating_add(self.trailer)
    }

    #[must_use]
    pub fn top_of(&self, section: SectionId) -> Option<u32> {
        self.extent(section).map(|extent| extent.top)
    }
}

impl SectionLayout for PageLayout {
    fn extent(&self, section: SectionId) -> Option<SectionExtent> {
        self.extents[section.order_index()]
    }
}

/// Row probed by the tracker.
///
/// Integer halving is exact for half-open integer extents: `floor(x)` lies in
/// `[top, bottom)` iff `x` does.
#[must_use]
pub const fn midpoint(scroll_offset: u32, viewport_height: u32) -> u32 {
    scroll_offset.saturating_add(viewport_height / 2)
}

/// First section in declaration order whose extent contains the midpoint.
#[must_use]
pub fn active_section_at<L: SectionLayout + ?Sized>(
    scroll_offset: u32,
    viewport_height: u32,
    layout: &L,
) -> Option<SectionId> {
    let probe = midpoint(scroll_offset, viewport_height);
    SectionId::ALL.into_iter().find(|section| {
        layout
            .extent(*section)
            .is_some_and(|extent| extent.contains(probe))
    })
}

/// Owned "active section" cell.
///
/// Only [`ActiveSection::track`] writes it. When nothing matches, the previous
/// value stays, so the cell never goes back to an empty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    #[must_use]
    pub const fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub const fn get(self) -> SectionId {
        self.current
    }

    pub fn track<L: SectionLayout + ?Sized>(
        &mut self,
        scroll_offset: u32,
        viewport_height: u32,
        layout: &L,
    ) -> SectionId {
        match active_section_at(scroll_offset, viewport_height, layout) {
            Some(section) if section != self.current => {
                tracing::debug!(from = %self.current, to = %section, "Active section changed");
                self.current = section;
            }
            Some(_) => {}
            None => {
                tracing::trace!(
                    scroll_offset,
                    viewport_height,
                    kept = %self.current,
                    "No section at viewport midpoint"
                );
            }
        }
        self.current
    }
}
