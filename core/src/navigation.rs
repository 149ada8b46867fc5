//! Navigation indicator: which nav entry is highlighted.

use folio_types::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// One entry per section in declaration order; exactly one is active.
#[must_use]
pub fn nav_items(active: SectionId) -> [NavItem; SectionId::ALL.len()] {
    SectionId::ALL.map(|section| NavItem {
        section,
        label: section.nav_label(),
        name: section.display_name(),
        active: section == active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_item_is_active() {
        for active in SectionId::ALL {
            let items = nav_items(active);
            let highlighted: Vec<_> = items.iter().filter(|item| item.active).collect();
            assert_eq!(highlighted.len(), 1);
            assert_eq!(highlighted[0].section, active);
        }
    }

    #[test]
    fn labels_follow_declaration_order() {
        let labels: Vec<_> = nav_items(SectionId::Hero)
            .iter()
            .map(|item| (item.label, item.name))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("01", "Home"),
                ("02", "Projects"),
                ("03", "Stack"),
                ("04", "About"),
                ("05", "Contact"),
            ]
        );
    }
}
