//! # About View
//!
//! "What I Do": a heading and four stack-discipline cards. Both are
//! scroll-triggered — the heading drops in when the section reaches the
//! upper viewport, the cards rise in a 0.2s cascade shortly after.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::anim::{AnimationDescriptor, HoverSpec, StyleState, TargetId, TriggerBinder};
use crate::core::content::Portfolio;
use crate::tui::views::{ACCENT, ACCENT_ALT, HitKind, HitZone, Stack, TEXT};

pub const HEADING: TargetId = TargetId(20);

const CARD_BASE: u16 = 21;

pub fn card_target(index: usize) -> TargetId {
    TargetId(CARD_BASE + index as u16)
}

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    let cards: Vec<TargetId> = (0..portfolio.about_cards.len()).map(card_target).collect();
    vec![
        AnimationDescriptor::from_to(
            HEADING,
            StyleState::hidden().with_dy(-2.0),
            StyleState::VISIBLE,
        )
        .duration(1.0)
        .on_scroll(0.8),
        AnimationDescriptor::group(cards, StyleState::hidden().with_dy(4.0), StyleState::VISIBLE)
            .duration(0.8)
            .stagger(0.2)
            .on_scroll(0.7),
    ]
}

pub fn hover_specs(portfolio: &Portfolio) -> Vec<HoverSpec> {
    (0..portfolio.about_cards.len())
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
        Some(HEADING),
        Paragraph::new(Span::styled(
            "What I Do",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    stack.gap(2);

    let cards: Vec<_> = portfolio
        .about_cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let hovered = binder.hover_level(card_target(i), now) > 0.5;
            let border_style = if hovered {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(ACCENT_ALT).add_modifier(Modifier::DIM)
            };
            let text = vec![
                Line::from(Span::styled(
                    format!("({})", card.initial),
                    Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                Line::default(),
                Line::from(Span::styled(
                    card.title,
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                Line::default(),
                Line::from(Span::styled(card.body, Style::default().fg(TEXT))),
            ];
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
