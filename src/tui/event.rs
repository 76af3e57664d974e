use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events. Kept low-level: the run loop decides what a
/// key means based on the current mode (browsing vs. editing a form field).
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of mode.
    ForceQuit,
    InputChar(char),
    Backspace,
    Enter,
    Escape,
    Tab,
    BackTab,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    let Ok(raw) = event::read() else {
        return None;
    };
    match raw {
        Event::Key(key) if key.is_press() => match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
            (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
            (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
            (_, KeyCode::Enter) => Some(TuiEvent::Enter),
            (_, KeyCode::Esc) => Some(TuiEvent::Escape),
            (_, KeyCode::Tab) => Some(TuiEvent::Tab),
            (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
            (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
            (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
            (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
            (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
            (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
            (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse.column, mouse.row)),
            MouseEventKind::Down(_) => Some(TuiEvent::MouseClick(mouse.column, mouse.row)),
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
