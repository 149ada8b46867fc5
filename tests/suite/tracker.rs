//! Active-section tracking through the public layout types.

use folio_core::{ActiveSection, PageLayout, active_section_at};
use folio_types::{SectionExtent, SectionId};

#[test]
fn slice_layout_can_omit_sections() {
    let layout = [
        (SectionId::Projects, SectionExtent::new(0, 50)),
        (SectionId::Contact, SectionExtent::new(50, 50)),
    ];
    assert_eq!(active_section_at(0, 40, &layout[..]), Some(SectionId::Projects));
    assert_eq!(active_section_at(40, 40, &layout[..]), Some(SectionId::Contact));
    assert_eq!(active_section_at(90, 40, &layout[..]), None);
}

#[test]
fn overlap_resolves_to_earlier_declared_section() {
    // Declared out of order on purpose: lookup follows section order, not slice order.
    let layout = [
        (SectionId::About, SectionExtent::new(0, 100)),
        (SectionId::Stack, SectionExtent::new(40, 20)),
    ];
    assert_eq!(active_section_at(30, 40, &layout[..]), Some(SectionId::Stack));
    assert_eq!(active_section_at(50, 40, &layout[..]), Some(SectionId::About));
}

#[test]
fn gap_keeps_previous_value() {
    let mut layout = PageLayout::new();
    layout.set(SectionId::Hero, SectionExtent::new(0, 30));
    layout.set(SectionId::Projects, SectionExtent::new(60, 30));

    let mut active = ActiveSection::default();
    assert_eq!(active.track(50, 20, &layout), SectionId::Projects);
    // midpoint = 25 + 20 = 45, inside the gap
    assert_eq!(active.track(25, 40, &layout), SectionId::Projects);
    assert_eq!(active.track(0, 20, &layout), SectionId::Hero);
}

#[test]
fn removed_section_is_skipped() {
    let mut layout = PageLayout::stacked([20; 5], 0);
    layout.remove(SectionId::Stack);
    let mut active = ActiveSection::new(SectionId::Projects);
    // midpoint = 50, where stack used to be
    assert_eq!(active.track(40, 20, &layout), SectionId::Projects);
    assert!(!layout.is_empty());
}
