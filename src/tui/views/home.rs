//! # Home View
//!
//! The hero: greeting, headline, summary, social links, call-to-action
//! buttons, and the portrait. Entrance is a strict timeline — section
//! fade, heading, subtitle, description, then the social row cascading
//! in while the portrait slides in from the right, overlapping the tail
//! of the sequence by a second. The name picks up its accent tint late,
//! after the heading has settled.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::anim::{
    AnimationDescriptor, Ease, HoverSpec, Sequence, StyleState, TargetId, TriggerBinder,
};
use crate::core::content::Portfolio;
use crate::tui::views::{ACCENT, ACCENT_ALT, HitKind, HitZone, MUTED, Stack, TEXT, hover_style};

pub const SECTION: TargetId = TargetId(10);
pub const HEADING: TargetId = TargetId(11);
pub const SUBTITLE: TargetId = TargetId(12);
pub const DESCRIPTION: TargetId = TargetId(13);
pub const PORTRAIT: TargetId = TargetId(14);
pub const NAME_TINT: TargetId = TargetId(15);

const SOCIAL_BASE: u16 = 16;

pub fn social_target(index: usize) -> TargetId {
    TargetId(SOCIAL_BASE + index as u16)
}

const PORTRAIT_ART: &str = "\
  ╭────────────╮
  │   ______   │
  │  /      \\  │
  │ | ()  () | │
  │ |   __   | │
  │  \\ \\__/ /  │
  │   \\____/   │
  │  _/    \\_  │
  │ /  A.R.  \\ │
  ╰────────────╯";

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    let socials: Vec<TargetId> = (0..portfolio.socials.len()).map(social_target).collect();
    Sequence::new()
        .then(
            AnimationDescriptor::from_to(SECTION, StyleState::hidden(), StyleState::VISIBLE)
                .duration(0.5),
        )
        .then(
            AnimationDescriptor::from_to(
                HEADING,
                StyleState::hidden().with_dy(2.0),
                StyleState::VISIBLE,
            )
            .duration(0.8),
        )
        .then(
            AnimationDescriptor::from_to(
                SUBTITLE,
                StyleState::hidden().with_dy(1.0),
                StyleState::VISIBLE,
            )
            .duration(0.6),
        )
        .then(
            AnimationDescriptor::from_to(
                DESCRIPTION,
                StyleState::hidden().with_dy(1.0),
                StyleState::VISIBLE,
            )
            .duration(0.8),
        )
        .then(
            AnimationDescriptor::group(socials, StyleState::hidden().with_dy(1.0), StyleState::VISIBLE)
                .duration(0.6)
                .stagger(0.15),
        )
        // The portrait starts a second before the social cascade finishes.
        .then_offset(
            -1.0,
            AnimationDescriptor::from_to(
                PORTRAIT,
                StyleState::hidden().with_dx(6.0),
                StyleState::VISIBLE,
            )
            .duration(1.0),
        )
        // Late accent tint on the name, independent of the timeline head.
        .also(
            AnimationDescriptor::from_to(NAME_TINT, StyleState::hidden(), StyleState::VISIBLE)
                .duration(1.5)
                .delay(1.0)
                .ease(Ease::InOutCubic),
        )
        .build()
}

pub fn hover_specs(portfolio: &Portfolio) -> Vec<HoverSpec> {
    (0..portfolio.socials.len())
        .map(|i| HoverSpec::new(social_target(i)))
        .collect()
}

pub fn render(
    stack: &mut Stack<'_>,
    zones: &mut Vec<HitZone>,
    portfolio: &Portfolio,
    binder: &TriggerBinder,
    now: f32,
) {
    let profile = &portfolio.profile;

    stack.set_section(SECTION);
    stack.gap(1);

    // Greeting with the late-tinted name.
    let name_style = if binder.style(NAME_TINT, now).opacity > 0.5 {
        Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    };
    stack.push(
        Some(HEADING),
        Paragraph::new(Line::from(vec![
            Span::styled("Hi, I'm ", Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(profile.name.clone(), name_style),
        ])),
    );
    stack.gap(1);

    stack.push(
        Some(SUBTITLE),
        Paragraph::new(Span::styled(
            profile.headline.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    );
    stack.gap(1);

    // Summary on the left, portrait on the right.
    let rects = stack.row(
        vec![
            (
                Some(DESCRIPTION),
                Paragraph::new(Span::styled(profile.summary.clone(), Style::default().fg(TEXT)))
                    .wrap(Wrap { trim: true }),
            ),
            (
                Some(PORTRAIT),
                Paragraph::new(PORTRAIT_ART)
                    .style(Style::default().fg(ACCENT))
                    .alignment(Alignment::Center),
            ),
        ],
        false,
    );
    debug_assert_eq!(rects.len(), 2);
    stack.gap(1);

    // Social chips, one zone each.
    let chips: Vec<_> = portfolio
        .socials
        .iter()
        .enumerate()
        .map(|(i, social)| {
            let level = binder.hover_level(social_target(i), now);
            let style = hover_style(Style::default().fg(TEXT), level);
            (
                Some(social_target(i)),
                Paragraph::new(Span::styled(format!("[ {} ]", social.label), style))
                    .alignment(Alignment::Center),
            )
        })
        .collect();
    let chip_rects = stack.row(chips, false);
    for (i, rect) in chip_rects.into_iter().enumerate() {
        zones.push(HitZone {
            rect,
            kind: HitKind::Link(portfolio.socials[i].url.clone()),
            hover: Some(social_target(i)),
        });
    }
    stack.gap(2);

    // Call-to-action buttons.
    let buttons = stack.row(
        vec![
            (
                None,
                Paragraph::new(Span::styled(
                    "[ View Projects ]",
                    Style::default().fg(TEXT).bg(ACCENT_ALT).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            ),
            (
                None,
                Paragraph::new(Span::styled(
                    "[ Download CV ]",
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            ),
        ],
        false,
    );
    zones.push(HitZone {
        rect: buttons[0],
        kind: HitKind::Route("/projects"),
        hover: None,
    });
    zones.push(HitZone {
        rect: buttons[1],
        kind: HitKind::DownloadCv,
        hover: None,
    });
    stack.gap(1);

    stack.push(
        None,
        Paragraph::new(Span::styled(
            "p: view projects   d: download cv",
            Style::default().fg(MUTED),
        )),
    );
    stack.gap(1);
}
