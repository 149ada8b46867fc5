//! Static content records for the section views.

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repository: &'static str,
    pub live: Option<&'static str>,
}

/// A group of technologies in the stack section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// One entry of the experience or education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    /// `mailto:`/`tel:` target, when the value is actionable.
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}
