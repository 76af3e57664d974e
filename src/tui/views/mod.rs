//! # Route Views
//!
//! One module per routed view plus the persistent chrome (navbar, footer).
//! Views are pure rendering units: given the portfolio content and the
//! mounted binder, each builds a [`Stack`] of widgets for the scrollable
//! content area, declares its animation descriptors once per mount, and
//! records hit zones for mouse interaction. No view owns core state.
//!
//! ## Target id ranges
//!
//! Ids only need to be unique within a mount, but giving each module its
//! own range keeps the chrome binder (navbar + footer, mounted once) from
//! colliding with the per-route binder:
//!
//! ```text
//! navbar   1..=9      home   10..=19    about  20..=29
//! projects 30..=39    skills 40..=59    contact 60..=79
//! footer   80..=99
//! ```

pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod projects;
pub mod skills;

use std::collections::HashMap;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::ScrollView;

use crate::anim::{StyleState, TargetId, TriggerBinder};

pub use contact::FormField;

// Palette shared by every view: the source's cyan/pink on dark scheme.
pub const ACCENT: Color = Color::Cyan;
pub const ACCENT_ALT: Color = Color::Magenta;
pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::DarkGray;

/// What a mouse hit means. Zones are recorded by views in content
/// coordinates and by the chrome in screen coordinates; `ui::hit_test`
/// translates between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitKind {
    /// Navigate to a declared path.
    Route(&'static str),
    /// Surface an outbound URL in the status line.
    Link(String),
    /// Copy the configured resume file into the working directory.
    DownloadCv,
    /// Toggle the nav menu overlay.
    MenuToggle,
    /// Focus a contact form field.
    Field(FormField),
    /// Hover-only zone (project/about cards).
    Card,
}

#[derive(Debug, Clone)]
pub struct HitZone {
    pub rect: Rect,
    pub kind: HitKind,
    /// Hover binding driven while the pointer is inside the zone.
    pub hover: Option<TargetId>,
}

/// Layout produced by one render pass over the scroll content: target
/// positions (top row, content coordinates) feed scroll-trigger
/// evaluation, `height` sizes the scroll view.
#[derive(Debug, Default, Clone)]
pub struct ViewLayout {
    pub positions: HashMap<TargetId, u16>,
    pub height: u16,
}

struct StackItem<'a> {
    target: Option<TargetId>,
    paragraph: Paragraph<'a>,
    rect: Rect,
}

/// A render-scoped vertical layout builder for scrollable content.
///
/// Views push widgets top to bottom (full-width blocks, even-width rows,
/// or grids of cards); the stack records each widget's rect, then
/// `finish` samples the binder and renders everything into the scroll
/// view — shifted by the sampled offset, dimmed or skipped by the sampled
/// opacity. The stack is rebuilt every frame and never outlives one; the
/// positions it reports are what arm the scroll triggers.
pub struct Stack<'a> {
    width: u16,
    cursor: u16,
    section: Option<TargetId>,
    items: Vec<StackItem<'a>>,
}

impl<'a> Stack<'a> {
    pub fn new(width: u16) -> Self {
        Stack {
            width,
            cursor: 0,
            section: None,
            items: Vec::new(),
        }
    }

    /// Bind a section-level target: its sampled opacity composes over
    /// every item in the stack (the source's whole-`<section>` fades).
    /// The section's scroll position is the top of the content.
    pub fn set_section(&mut self, target: TargetId) {
        self.section = Some(target);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Content height accumulated so far.
    pub fn height(&self) -> u16 {
        self.cursor
    }

    /// Vertical breathing room.
    pub fn gap(&mut self, rows: u16) {
        self.cursor += rows;
    }

    /// Full-width block. Returns its rect in content coordinates.
    pub fn push(&mut self, target: Option<TargetId>, paragraph: Paragraph<'a>) -> Rect {
        let height = paragraph.line_count(self.width) as u16;
        self.place(target, paragraph, Rect::new(0, self.cursor, self.width, height))
    }

    /// Full-width bordered block; the border rows are part of the
    /// reported height.
    pub fn push_card(&mut self, target: Option<TargetId>, paragraph: Paragraph<'a>) -> Rect {
        let inner = self.width.saturating_sub(2);
        let height = paragraph.line_count(inner) as u16;
        self.place(target, paragraph, Rect::new(0, self.cursor, self.width, height))
    }

    /// A row of equal-width cells separated by a 2-cell gutter. Cell
    /// heights are equalized to the tallest. `bordered` switches the
    /// height measurement to account for block borders.
    pub fn row(
        &mut self,
        cells: Vec<(Option<TargetId>, Paragraph<'a>)>,
        bordered: bool,
    ) -> Vec<Rect> {
        if cells.is_empty() {
            return Vec::new();
        }
        let n = cells.len() as u16;
        let gutter = 2u16;
        let cell_w = self.width.saturating_sub(gutter * (n - 1)) / n;
        let measure_w = if bordered {
            cell_w.saturating_sub(2)
        } else {
            cell_w
        };
        let height = cells
            .iter()
            .map(|(_, p)| p.line_count(measure_w) as u16)
            .max()
            .unwrap_or(0);

        let y = self.cursor;
        let mut rects = Vec::new();
        for (i, (target, paragraph)) in cells.into_iter().enumerate() {
            let x = (cell_w + gutter) * i as u16;
            let rect = Rect::new(x, y, cell_w, height);
            self.items.push(StackItem {
                target,
                paragraph,
                rect,
            });
            rects.push(rect);
        }
        self.cursor = y + height;
        rects
    }

    /// Grid of cards, `cols` per row, row by row.
    pub fn grid(
        &mut self,
        cols: usize,
        cells: Vec<(Option<TargetId>, Paragraph<'a>)>,
        bordered: bool,
    ) -> Vec<Rect> {
        let mut rects = Vec::new();
        let mut cells = cells;
        while !cells.is_empty() {
            let take = cells.len().min(cols);
            let row: Vec<_> = cells.drain(..take).collect();
            rects.extend(self.row(row, bordered));
            self.gap(1);
        }
        rects
    }

    fn place(
        &mut self,
        target: Option<TargetId>,
        paragraph: Paragraph<'a>,
        rect: Rect,
    ) -> Rect {
        self.items.push(StackItem {
            target,
            paragraph,
            rect,
        });
        self.cursor = rect.y + rect.height;
        rect
    }

    /// Sample the binders and render everything into the scroll view.
    ///
    /// Multiple binders compose (the per-route binder and the persistent
    /// chrome binder share one content stack); a binder that doesn't know
    /// a target answers with the resting state, so composition is the
    /// identity for it.
    pub fn finish(
        self,
        sv: &mut ScrollView,
        binders: &[&TriggerBinder],
        now: f32,
    ) -> ViewLayout {
        let mut layout = ViewLayout {
            positions: HashMap::new(),
            height: self.cursor,
        };
        if let Some(t) = self.section {
            layout.positions.insert(t, 0);
        }
        for item in &self.items {
            if let Some(t) = item.target {
                // first binding wins for grouped rows sharing a target
                layout.positions.entry(t).or_insert(item.rect.y);
            }
        }
        let section_opacity = self
            .section
            .map(|t| sample(binders, t, now).opacity)
            .unwrap_or(1.0);
        for item in self.items {
            let mut style = match item.target {
                Some(t) => sample(binders, t, now),
                None => StyleState::VISIBLE,
            };
            style.opacity *= section_opacity;
            if style.opacity < 0.05 {
                continue;
            }
            let rect = shift_rect(item.rect, style, layout.height);
            let widget = if style.opacity < 0.55 {
                item.paragraph
                    .style(Style::default().add_modifier(Modifier::DIM))
            } else {
                item.paragraph
            };
            sv.render_widget(widget, rect);
        }
        layout
    }
}

/// Compose a target's style across binders: opacities and scales
/// multiply, offsets add.
fn sample(binders: &[&TriggerBinder], target: TargetId, now: f32) -> StyleState {
    let mut out = StyleState::VISIBLE;
    for binder in binders {
        let s = binder.style(target, now);
        out.opacity *= s.opacity;
        out.scale *= s.scale;
        out.dx += s.dx;
        out.dy += s.dy;
    }
    out
}

/// Apply the sampled dx/dy offset, clamped to the content area.
fn shift_rect(rect: Rect, style: StyleState, content_height: u16) -> Rect {
    let x = (rect.x as f32 + style.dx).round().max(0.0) as u16;
    let max_y = content_height.saturating_sub(1);
    let y = ((rect.y as f32 + style.dy).round().max(0.0) as u16).min(max_y);
    Rect::new(x, y, rect.width, rect.height)
}

/// Blend toward the accent as a hover level rises; used by link rows
/// instead of a continuous color fade, which terminal cells can't do.
pub fn hover_style(base: Style, level: f32) -> Style {
    if level > 0.5 {
        base.fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::AnimationDescriptor;
    use ratatui::layout::Size;

    #[test]
    fn test_stack_positions_accumulate() {
        let mut stack = Stack::new(40);
        let a = stack.push(Some(TargetId(1)), Paragraph::new("one line"));
        stack.gap(2);
        let b = stack.push(Some(TargetId(2)), Paragraph::new("another"));
        assert_eq!(a.y, 0);
        assert_eq!(b.y, a.height + 2);
    }

    #[test]
    fn test_finish_reports_positions_and_height() {
        let mut stack = Stack::new(40);
        stack.push(Some(TargetId(1)), Paragraph::new("x"));
        stack.gap(3);
        stack.push(Some(TargetId(2)), Paragraph::new("y"));
        let height = 5; // 1 + 3 + 1
        let mut sv = ScrollView::new(Size::new(40, height));
        let binder = TriggerBinder::new();
        let layout = stack.finish(&mut sv, &[&binder], 0.0);
        assert_eq!(layout.height, height as u16);
        assert_eq!(layout.positions[&TargetId(1)], 0);
        assert_eq!(layout.positions[&TargetId(2)], 4);
    }

    #[test]
    fn test_hidden_targets_are_not_rendered() {
        let d = AnimationDescriptor::from_to(
            TargetId(1),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(1.0)
        .on_scroll(0.7);
        let binder = TriggerBinder::mount(vec![d], vec![], 0.0, false);

        let mut stack = Stack::new(20);
        stack.push(Some(TargetId(1)), Paragraph::new("SECRET"));

        let backend = ratatui::backend::TestBackend::new(20, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut scroll_state = tui_scrollview::ScrollViewState::default();
        terminal
            .draw(|f| {
                let mut sv = ScrollView::new(Size::new(20, 1));
                stack.finish(&mut sv, &[&binder], 0.0);
                f.render_stateful_widget(sv, f.area(), &mut scroll_state);
            })
            .unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!rendered.contains("SECRET"));
    }

    #[test]
    fn test_row_splits_width_evenly() {
        let mut stack = Stack::new(42);
        let rects = stack.row(
            vec![
                (None, Paragraph::new("a")),
                (None, Paragraph::new("b")),
                (None, Paragraph::new("c")),
            ],
            false,
        );
        assert_eq!(rects.len(), 3);
        // 42 - 2 gutters of 2 = 38 / 3 = 12
        assert!(rects.iter().all(|r| r.width == 12));
        assert!(rects[1].x >= rects[0].x + rects[0].width + 2);
    }
}
