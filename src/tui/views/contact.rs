//! # Contact View
//!
//! "Get In Touch": a three-field form and a contact-info panel. The form
//! collects name/email/message with focus traversal and text editing but
//! defines no submission handler — the Send control is inert by design.
//! Entrances are all scroll-triggered with staged delays: section fade,
//! heading rise, form from the left, info from the right, then the info
//! rows cascading in.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::anim::{AnimationDescriptor, StyleState, TargetId, TriggerBinder};
use crate::core::content::Portfolio;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::views::{ACCENT, HitKind, HitZone, MUTED, Stack, TEXT};

pub const SECTION: TargetId = TargetId(60);
pub const HEADING: TargetId = TargetId(61);
pub const FORM: TargetId = TargetId(62);
pub const INFO: TargetId = TargetId(63);

const ITEM_BASE: u16 = 64;

pub fn item_target(index: usize) -> TargetId {
    TargetId(ITEM_BASE + index as u16)
}

/// Rows the message field shows, matching the source's `rows={5}`.
const MESSAGE_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "John Doe",
            FormField::Email => "john@example.com",
            FormField::Message => "Tell me about your project...",
        }
    }
}

/// Emitted when the form gives up focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Dismissed,
}

/// Local editing state for the contact form. Persisted in `TuiState`, not
/// in core — the form never submits anywhere.
#[derive(Debug, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Option<FormField>,
}

impl ContactFormState {
    pub fn focus_first(&mut self) {
        self.focus = Some(FormField::Name);
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focus = Some(field);
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    fn buffer(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }
}

impl EventHandler for ContactFormState {
    type Event = FormEvent;

    /// Consumes events while a field is focused. `Esc` releases focus;
    /// `Tab`/`BackTab` traverse; `Enter` inserts a newline in the message
    /// field only.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        let field = self.focus?;
        match event {
            TuiEvent::Escape => {
                self.focus = None;
                return Some(FormEvent::Dismissed);
            }
            TuiEvent::Tab => self.focus = Some(field.next()),
            TuiEvent::BackTab => self.focus = Some(field.prev()),
            TuiEvent::InputChar(c) => self.buffer_mut(field).push(*c),
            TuiEvent::Backspace => {
                self.buffer_mut(field).pop();
            }
            TuiEvent::Enter => {
                if field == FormField::Message {
                    self.message.push('\n');
                }
            }
            _ => {}
        }
        None
    }
}

pub fn descriptors(portfolio: &Portfolio) -> Vec<AnimationDescriptor> {
    // The availability block joins the item cascade, as the source's
    // accumulator collected it alongside the contact rows.
    let items: Vec<TargetId> = (0..portfolio.contact_items.len() + 1)
        .map(item_target)
        .collect();
    vec![
        AnimationDescriptor::from_to(SECTION, StyleState::hidden(), StyleState::VISIBLE)
            .duration(1.0)
            .on_scroll(0.95),
        AnimationDescriptor::from_to(
            HEADING,
            StyleState::hidden().with_dy(2.0),
            StyleState::VISIBLE,
        )
        .duration(0.8)
        .delay(0.3)
        .on_scroll(0.9),
        AnimationDescriptor::from_to(FORM, StyleState::hidden().with_dx(-3.0), StyleState::VISIBLE)
            .duration(0.8)
            .delay(0.5)
            .on_scroll(0.9),
        AnimationDescriptor::from_to(INFO, StyleState::hidden().with_dx(3.0), StyleState::VISIBLE)
            .duration(0.8)
            .delay(0.7)
            .on_scroll(0.9),
        AnimationDescriptor::group(items, StyleState::hidden().with_dy(1.0), StyleState::VISIBLE)
            .duration(0.6)
            .stagger(0.2)
            .delay(0.9)
            .on_scroll(0.9),
    ]
}

/// Single-line field display: keep the tail that fits, so the cursor end
/// of a long value stays visible.
fn tail_display(value: &str, width: u16) -> String {
    let budget = width.saturating_sub(1) as usize;
    let mut out = value;
    while UnicodeWidthStr::width(out) > budget {
        let mut chars = out.chars();
        chars.next();
        out = chars.as_str();
    }
    out.to_string()
}

fn field_paragraph<'a>(
    form: &ContactFormState,
    field: FormField,
    width: u16,
) -> Paragraph<'a> {
    let focused = form.focus == Some(field);
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    };
    let value = form.buffer(field);

    let mut lines: Vec<Line<'_>> = if value.is_empty() && !focused {
        vec![Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))]
    } else if field == FormField::Message {
        let wrapped = textwrap::wrap(value, width.saturating_sub(3) as usize);
        let start = wrapped.len().saturating_sub(MESSAGE_ROWS);
        wrapped[start..]
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(TEXT))))
            .collect()
    } else {
        vec![Line::from(Span::styled(
            tail_display(value, width.saturating_sub(3)),
            Style::default().fg(TEXT),
        ))]
    };

    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    if field == FormField::Message {
        while lines.len() < MESSAGE_ROWS {
            lines.push(Line::default());
        }
    }

    Paragraph::new(lines).block(
        Block::bordered()
            .title(field.label())
            .border_style(border_style)
            .title_style(border_style),
    )
}

pub fn render(
    stack: &mut Stack<'_>,
    zones: &mut Vec<HitZone>,
    portfolio: &Portfolio,
    form: &ContactFormState,
    binder: &TriggerBinder,
    now: f32,
) {
    stack.set_section(SECTION);
    stack.gap(1);

    stack.push(
        Some(HEADING),
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Get In Touch",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                "Have a project in mind? Let's discuss how I can help bring your ideas \
                 to life with MERN stack development.",
                Style::default().fg(TEXT),
            ))
            .alignment(Alignment::Center),
        ])
        .wrap(Wrap { trim: true }),
    );
    stack.gap(2);

    // The form column. All fields share the FORM target so the whole
    // column slides in from the left as one.
    let width = stack.width();
    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let rect = stack.push_card(Some(FORM), field_paragraph(form, field, width));
        zones.push(HitZone {
            rect,
            kind: HitKind::Field(field),
            hover: None,
        });
        stack.gap(1);
    }
    // No submission endpoint exists; the control renders but does nothing.
    stack.push(
        Some(FORM),
        Paragraph::new(Span::styled(
            "[ Send Message ]",
            Style::default().fg(TEXT).bg(MUTED).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    stack.gap(2);

    // Info panel.
    stack.push(
        Some(INFO),
        Paragraph::new(Span::styled(
            "Contact Information",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
    );
    stack.gap(1);

    for (i, item) in portfolio.contact_items.iter().enumerate() {
        let rect = stack.push(
            Some(item_target(i)),
            Paragraph::new(vec![
                Line::from(Span::styled(
                    item.label,
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    item.value.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
                )),
            ]),
        );
        zones.push(HitZone {
            rect,
            kind: HitKind::Link(item.url.clone()),
            hover: None,
        });
        stack.gap(1);
    }

    let mut avail = vec![Line::from(Span::styled(
        "Available For",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))];
    for entry in &portfolio.available_for {
        avail.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(ratatui::style::Color::Green)),
            Span::styled(*entry, Style::default().fg(TEXT)),
        ]));
    }
    stack.push(
        Some(item_target(portfolio.contact_items.len())),
        Paragraph::new(avail),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = ContactFormState::default();
        form.focus_first();
        assert_eq!(form.focus, Some(FormField::Name));
        form.handle_event(&TuiEvent::Tab);
        assert_eq!(form.focus, Some(FormField::Email));
        form.handle_event(&TuiEvent::Tab);
        assert_eq!(form.focus, Some(FormField::Message));
        form.handle_event(&TuiEvent::Tab);
        assert_eq!(form.focus, Some(FormField::Name));
        form.handle_event(&TuiEvent::BackTab);
        assert_eq!(form.focus, Some(FormField::Message));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = ContactFormState::default();
        form.focus_field(FormField::Email);
        for c in "a@b.io".chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
        assert_eq!(form.email, "a@b.io");
        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.email, "a@b.i");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_enter_only_breaks_lines_in_message() {
        let mut form = ContactFormState::default();
        form.focus_field(FormField::Name);
        form.handle_event(&TuiEvent::Enter);
        assert!(form.name.is_empty());
        form.focus_field(FormField::Message);
        form.handle_event(&TuiEvent::Enter);
        assert_eq!(form.message, "\n");
    }

    #[test]
    fn test_escape_releases_focus() {
        let mut form = ContactFormState::default();
        form.focus_first();
        let event = form.handle_event(&TuiEvent::Escape);
        assert_eq!(event, Some(FormEvent::Dismissed));
        assert_eq!(form.focus, None);
        // Unfocused form ignores further events
        assert!(form.handle_event(&TuiEvent::InputChar('x')).is_none());
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_tail_display_keeps_the_end_of_long_values() {
        let shown = tail_display("abcdefghij", 6);
        assert_eq!(shown, "fghij");
        assert_eq!(tail_display("short", 10), "short");
    }

    #[test]
    fn test_item_cascade_includes_availability_block() {
        let portfolio = Portfolio::default();
        let descriptors = descriptors(&portfolio);
        let cascade = descriptors.last().unwrap();
        assert_eq!(cascade.targets.len(), portfolio.contact_items.len() + 1);
    }
}
