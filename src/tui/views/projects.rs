//! # Projects View
//!
//! The title lands on mount; the project cards wait for the scroll
//! threshold and then cascade in with an overshoot ease. Hovering a card
//! lifts it (bright border, bold title) the way the source raised cards
//! on mouseenter — and the hover binding is released with the view, not
//! leaked.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::anim::{AnimationDescriptor, Ease, HoverSpec, StyleState, TargetId, TriggerBinder};
use crate::core::content::Portfolio;
use crate::tui::markdown;
use crate::tui::views::{ACCENT, ACCENT_ALT, HitKind, HitZone, MUTED, Stack, TEXT};

pub const TITLE: TargetId = TargetId(30);

const CARD_BASE: u16 = 31;

pub fn card_target(index: usize) -> TargetId {
    TargetId(CARD_BASE + index as u16)
}

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    let cards: Vec<TargetId> = (0..portfolio.projects.len()).map(card_target).collect();
    vec![
        AnimationDescriptor::from_to(
            TITLE,
            StyleState::hidden().with_dy(-2.0),
            StyleState::VISIBLE,
        )
        .duration(1.0),
        AnimationDescriptor::group(cards, StyleState::hidden().with_dy(5.0), StyleState::VISIBLE)
            .duration(0.8)
            .stagger(0.2)
            .ease(Ease::OutBack)
            .on_scroll(0.7),
    ]
}

pub fn hover_specs(portfolio: &Portfolio) -> Vec<HoverSpec> {
    (0..portfolio.projects.len())
        .map(|i| HoverSpec::new(card_target(i)))
        .collect()
}

pub fn render(
    stack: &mut Stack<'_>,
    zones: &mut Vec<HitZone>,
    portfolio: &Portfolio,
    binder: &TriggerBinder,
    now: f32,
) {
    stack.gap(1);
    stack.push(
        Some(TITLE),
        Paragraph::new(Span::styled(
            "Projects",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    stack.gap(2);

    let cards: Vec<_> = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let hovered = binder.hover_level(card_target(i), now) > 0.5;
            let border_style = if hovered {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(MUTED)
            };
            let title_style = if hovered {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
            };

            let mut text = vec![
                Line::from(Span::styled(project.title.clone(), title_style)),
                Line::from(Span::styled(
                    format!(" {} ", project.tag),
                    Style::default().fg(TEXT).bg(ACCENT_ALT),
                )),
            ];
            text.extend(markdown::render(&project.description, TEXT).lines);
            (
                Some(card_target(i)),
                Paragraph::new(text)
                    .block(Block::bordered().border_style(border_style))
                    .wrap(Wrap { trim: true }),
            )
        })
        .collect();

    let rects = stack.grid(2, cards, true);
    for (i, rect) in rects.into_iter().enumerate() {
        zones.push(HitZone {
            rect,
            kind: HitKind::Card,
            hover: Some(card_target(i)),
        });
    }
}
