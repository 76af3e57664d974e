//! # Skills View
//!
//! Everything here is scroll-triggered: the section fade, the title, the
//! blurb sliding in from the left, and the 4-wide grid of skill tiles
//! popping in with a tight 0.1s stagger and a slight overshoot.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::anim::{AnimationDescriptor, Ease, StyleState, TargetId, TriggerBinder};
use crate::core::content::Portfolio;
use crate::tui::views::{ACCENT, MUTED, Stack, TEXT};

pub const SECTION: TargetId = TargetId(40);
pub const TITLE: TargetId = TargetId(41);
pub const BLURB: TargetId = TargetId(42);

const TILE_BASE: u16 = 43;

pub fn tile_target(index: usize) -> TargetId {
    TargetId(TILE_BASE + index as u16)
}

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    let tiles: Vec<TargetId> = (0..portfolio.skills.len()).map(tile_target).collect();
    vec![
        AnimationDescriptor::from_to(SECTION, StyleState::hidden(), StyleState::VISIBLE)
            .duration(1.0)
            .on_scroll(0.95),
        AnimationDescriptor::from_to(
            TITLE,
            StyleState::hidden().with_dy(-2.0),
            StyleState::VISIBLE,
        )
        .duration(0.8)
        .on_scroll(0.9),
        AnimationDescriptor::from_to(
            BLURB,
            StyleState::hidden().with_dx(-3.0),
            StyleState::VISIBLE,
        )
        .duration(0.8)
        .delay(0.3)
        .on_scroll(0.9),
        AnimationDescriptor::group(
            tiles,
            StyleState::hidden().with_dy(1.0).with_scale(0.9),
            StyleState::VISIBLE,
        )
        .duration(0.5)
        .stagger(0.1)
        .ease(Ease::OutBack)
        .on_scroll(0.9),
    ]
}

pub fn render(
    stack: &mut Stack<'_>,
    portfolio: &Portfolio,
    binder: &TriggerBinder,
    now: f32,
) {
    stack.set_section(SECTION);
    stack.gap(1);

    stack.push(
        Some(TITLE),
        Paragraph::new(Span::styled(
            "My Technical Skills",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    stack.gap(2);

    stack.push(
        Some(BLURB),
        Paragraph::new(vec![
            Line::from(Span::styled(
                portfolio.profile.headline.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                portfolio.skills_blurb.clone(),
                Style::default().fg(TEXT),
            )),
        ])
        .wrap(Wrap { trim: true }),
    );
    stack.gap(2);

    let tiles: Vec<_> = portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let text = vec![
                Line::from(Span::raw(skill.glyph.clone())).alignment(Alignment::Center),
                Line::from(Span::styled(
                    skill.name.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            ];
            (
                Some(tile_target(i)),
                Paragraph::new(text)
                    .block(Block::bordered().border_style(Style::default().fg(MUTED))),
            )
        })
        .collect();
    stack.grid(4, tiles, true);

    stack.gap(1);
    stack.push(
        None,
        Paragraph::new(Span::styled(
            "Constantly learning and adapting to new technologies to deliver the best solutions.",
            Style::default().fg(TEXT),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
    );
}
