//! Section views of the page, built as wrapped text.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use folio_engine::{App, SectionId, TimelineEntry, content};

use crate::form::form_lines;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn section_lines(
    section: SectionId,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    match section {
        SectionId::Hero => hero(palette, glyphs),
        SectionId::Projects => projects(palette, glyphs),
        SectionId::Stack => stack(palette, glyphs),
        SectionId::About => about(palette, glyphs),
        SectionId::Contact => contact(app, palette, glyphs),
    }
}

pub(crate) fn footer_lines(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(glyphs.rule.repeat(40), styles::muted(palette))),
        Line::from(Span::styled(content::FOOTER_COPYRIGHT, styles::muted(palette))),
        Line::from(Span::styled(content::FOOTER_CREDITS, styles::muted(palette))),
    ]
}

fn blank() -> Line<'static> {
    Line::default()
}

/// `02 ── Featured Work`
fn section_heading(
    section: SectionId,
    heading: &'static str,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(section.nav_label(), styles::eyebrow(palette)),
        Span::styled(format!(" {} ", glyphs.rule.repeat(2)), styles::muted(palette)),
        Span::styled(heading, styles::heading(palette)),
    ])
}

fn subheading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        styles::heading(palette).add_modifier(Modifier::UNDERLINED),
    ))
}

fn paragraph(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, styles::body(palette)))
}

fn link_line(label: &'static str, href: &'static str, palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", glyphs.link), styles::muted(palette)),
        Span::styled(format!("{label}: "), styles::body(palette)),
        Span::styled(href, styles::link(palette)),
    ])
}

fn hero(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        blank(),
        Line::from(Span::styled(content::GREETING, styles::eyebrow(palette))),
        Line::from(Span::styled(
            content::OWNER,
            styles::heading(palette).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            content::ROLE,
            Style::default().fg(palette.accent),
        )),
        blank(),
        paragraph(content::TAGLINE, palette),
        blank(),
        Line::from(vec![
            Span::styled("[w]", styles::key_highlight(palette)),
            Span::styled(
                format!(" View my work {}", glyphs.arrow_right),
                styles::heading(palette),
            ),
            Span::raw("    "),
            Span::styled("[c]", styles::key_highlight(palette)),
            Span::styled(" Get In Touch", styles::heading(palette)),
        ]),
        blank(),
    ];
    lines.extend(
        content::SOCIAL_LINKS
            .iter()
            .map(|link| link_line(link.label, link.href, palette, glyphs)),
    );
    lines.push(blank());
    lines.push(Line::from(Span::styled(
        format!("{} scroll", glyphs.arrow_down),
        styles::muted(palette),
    )));
    lines
}

fn projects(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading(SectionId::Projects, content::PROJECTS_HEADING, palette, glyphs),
        paragraph(content::PROJECTS_INTRO, palette),
        blank(),
    ];

    for project in content::PROJECTS {
        lines.push(Line::from(Span::styled(
            project.title,
            styles::heading(palette),
        )));
        lines.push(paragraph(project.description, palette));

        let mut tags = Vec::with_capacity(project.tags.len() * 2);
        for tag in project.tags {
            tags.push(Span::styled(format!(" {tag} "), styles::tag(palette)));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));

        lines.push(link_line("Code", project.repository, palette, glyphs));
        if let Some(live) = project.live {
            lines.push(link_line("Live", live, palette, glyphs));
        }
        lines.push(blank());
    }
    lines
}

fn stack(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading(SectionId::Stack, content::STACK_HEADING, palette, glyphs),
        paragraph(content::STACK_INTRO, palette),
        blank(),
    ];

    for category in content::STACK {
        lines.push(subheading(category.name, palette));
        let mut items = Vec::with_capacity(category.items.len() * 2);
        for item in category.items {
            items.push(Span::styled(format!("{} ", glyphs.bullet), styles::muted(palette)));
            items.push(Span::styled(format!("{item}   "), styles::body(palette)));
        }
        lines.push(Line::from(items));
        lines.push(blank());
    }
    lines
}

fn timeline(
    entries: &'static [TimelineEntry],
    palette: &Palette,
    glyphs: &Glyphs,
    lines: &mut Vec<Line<'static>>,
) {
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.timeline), Style::default().fg(palette.primary)),
            Span::styled(entry.title, styles::heading(palette)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.timeline), Style::default().fg(palette.primary)),
            Span::styled(entry.organization, Style::default().fg(palette.accent)),
            Span::styled(format!("  {}", entry.period), styles::muted(palette)),
        ]));
        lines.push(paragraph(entry.description, palette));
        lines.push(blank());
    }
}

fn about(palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading(SectionId::About, content::ABOUT_HEADING, palette, glyphs),
        blank(),
    ];

    for story in content::STORY {
        lines.push(paragraph(*story, palette));
        lines.push(blank());
    }

    lines.push(subheading("Key Achievements", palette));
    for achievement in content::ACHIEVEMENTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.check), Style::default().fg(palette.success)),
            Span::styled(*achievement, styles::body(palette)),
        ]));
    }
    lines.push(blank());

    lines.push(subheading("Experience", palette));
    timeline(content::EXPERIENCE, palette, glyphs, &mut lines);

    lines.push(subheading("Education", palette));
    timeline(content::EDUCATION, palette, glyphs, &mut lines);
    lines
}

fn contact(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_heading(SectionId::Contact, content::CONTACT_HEADING, palette, glyphs),
        paragraph(content::CONTACT_INTRO, palette),
        blank(),
    ];

    lines.extend(form_lines(app, palette, glyphs));
    lines.push(blank());

    lines.push(subheading("Contact Information", palette));
    for detail in content::CONTACT_DETAILS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", detail.label), styles::muted(palette)),
            Span::styled(
                detail.value,
                if detail.href.is_some() {
                    styles::link(palette)
                } else {
                    styles::body(palette)
                },
            ),
        ]));
    }
    lines.push(blank());

    lines.push(subheading("Follow Me", palette));
    lines.extend(
        content::SOCIAL_LINKS
            .iter()
            .map(|link| link_line(link.label, link.href, palette, glyphs)),
    );
    lines.push(blank());

    lines.push(Line::from(Span::styled(
        content::AVAILABILITY_HEADING,
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(paragraph(content::AVAILABILITY, palette));
    lines
}
