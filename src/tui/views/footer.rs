//! # Footer
//!
//! Persistent bottom chrome, rendered inside the scroll content so it
//! scrolls into view below whichever route is mounted. The content block
//! rises when it enters the viewport and the link grid cascades in with
//! an overshoot; the brand mark pulses continuously. Link hovers are
//! bound in the chrome binder, which releases them — the source's
//! footnote-worthy bug of removing listeners with fresh anonymous
//! callbacks is exactly what the binder design retires.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::anim::{AnimationDescriptor, Ease, HoverSpec, StyleState, TargetId, TriggerBinder};
use crate::core::content::Portfolio;
use crate::tui::views::{ACCENT, HitKind, HitZone, MUTED, Stack, TEXT, hover_style};

pub const CONTENT: TargetId = TargetId(80);
pub const BRAND: TargetId = TargetId(88);

const LINK_BASE: u16 = 81;
const SOCIAL_BASE: u16 = 89;

pub fn link_target(index: usize) -> TargetId {
    TargetId(LINK_BASE + index as u16)
}

pub fn social_target(index: usize) -> TargetId {
    TargetId(SOCIAL_BASE + index as u16)
}

/// Seconds per half pulse of the brand mark (scale up, then back).
const PULSE_PERIOD: f32 = 1.5;

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    let links: Vec<TargetId> = (0..portfolio.footer_links.len()).map(link_target).collect();
    vec![
        AnimationDescriptor::from_to(
            CONTENT,
            StyleState::hidden().with_dy(2.0),
            StyleState::VISIBLE,
        )
        .duration(1.0)
        .ease(Ease::OutCubic)
        .on_scroll(0.9),
        AnimationDescriptor::group(links, StyleState::hidden().with_dy(1.0), StyleState::VISIBLE)
            .duration(0.6)
            .stagger(0.1)
            .ease(Ease::OutBack)
            .on_scroll(0.85),
    ]
}

pub fn hover_specs(portfolio: &Portfolio) -> Vec<HoverSpec> {
    let links = (0..portfolio.footer_links.len()).map(|i| HoverSpec::new(link_target(i)));
    let socials = (0..portfolio.footer_socials.len()).map(|i| HoverSpec::new(social_target(i)));
    links.chain(socials).collect()
}

/// The continuous yoyo level of the brand pulse, 0..1.
pub fn pulse_level(now: f32) -> f32 {
    let phase = (now / PULSE_PERIOD) % 2.0;
    let t = if phase > 1.0 { 2.0 - phase } else { phase };
    Ease::InOutSine.apply(t)
}

pub fn render(
    stack: &mut Stack<'_>,
    zones: &mut Vec<HitZone>,
    portfolio: &Portfolio,
    binder: &TriggerBinder,
    now: f32,
) {
    stack.gap(1);
    // The divider is the footer's top edge: CONTENT anchors its scroll
    // trigger here and the whole block shares the rise.
    stack.push(
        Some(CONTENT),
        Paragraph::new(Span::styled("─".repeat(stack.width() as usize), Style::default().fg(MUTED))),
    );
    stack.gap(1);

    // Brand mark with the continuous pulse.
    let brand_style = if pulse_level(now) > 0.5 {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    stack.push(
        Some(BRAND),
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("AR", brand_style),
                Span::styled("JUN", Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                portfolio.profile.tagline.clone(),
                Style::default().fg(MUTED),
            )),
        ]),
    );
    stack.gap(1);

    // Link grid, 4 per row like the source's md layout.
    let cells: Vec<_> = portfolio
        .footer_links
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            let level = binder.hover_level(link_target(i), now);
            let style = hover_style(Style::default().fg(TEXT), level);
            (
                Some(link_target(i)),
                Paragraph::new(Span::styled(*label, style)).alignment(Alignment::Center),
            )
        })
        .collect();
    let rects = stack.grid(4, cells, false);
    for (i, rect) in rects.into_iter().enumerate() {
        zones.push(HitZone {
            rect,
            kind: HitKind::Route(portfolio.footer_links[i].1),
            hover: Some(link_target(i)),
        });
    }

    stack.push(
        None,
        Paragraph::new(Span::styled(
            "· ".repeat((stack.width() / 2) as usize),
            Style::default().fg(MUTED).add_modifier(Modifier::DIM),
        )),
    );
    stack.gap(1);

    // Copyright left, social row right — flattened to two stacked lines.
    stack.push(
        Some(CONTENT),
        Paragraph::new(Line::from(vec![
            Span::styled("All Rights Reserved by ", Style::default().fg(MUTED)),
            Span::styled("Arjun", Style::default().fg(ACCENT)),
        ]))
        .wrap(Wrap { trim: true }),
    );

    let socials: Vec<_> = portfolio
        .footer_socials
        .iter()
        .enumerate()
        .map(|(i, social)| {
            let level = binder.hover_level(social_target(i), now);
            let style = hover_style(Style::default().fg(MUTED), level);
            (
                Some(social_target(i)),
                Paragraph::new(Span::styled(format!("[ {} ]", social.label), style))
                    .alignment(Alignment::Center),
            )
        })
        .collect();
    let rects = stack.row(socials, false);
    for (i, rect) in rects.into_iter().enumerate() {
        zones.push(HitZone {
            rect,
            kind: HitKind::Link(portfolio.footer_socials[i].url.clone()),
            hover: Some(social_target(i)),
        });
    }
    stack.gap(1);
}
