//! Input mapping from terminal events to game actions.
//!
//! The mouse reports button press and release, so it maps directly onto the
//! flap control. Keyboards only report releases when the terminal supports
//! keyboard enhancement; otherwise [`FlapHold`] treats a flap key as held
//! through the OS repeat delay and then until auto-repeat stops refreshing it.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Which device drove a flap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapSource {
    Key,
    Mouse,
}

/// A terminal event translated into a game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    FlapStart(FlapSource),
    FlapEnd(FlapSource),
    /// Start a fresh run (the restart control).
    Restart,
    Quit,
    Ignored,
}

fn is_flap_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W')
    )
}

fn map_key(key: &KeyEvent) -> GameInput {
    if is_flap_key(key.code) {
        return match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => GameInput::FlapStart(FlapSource::Key),
            KeyEventKind::Release => GameInput::FlapEnd(FlapSource::Key),
        };
    }

    if key.kind != KeyEventKind::Press {
        return GameInput::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => GameInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Ignored,
    }
}

/// Translate one terminal event.
pub fn map_event(event: &Event) -> GameInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => GameInput::FlapStart(FlapSource::Mouse),
            MouseEventKind::Up(MouseButton::Left) => GameInput::FlapEnd(FlapSource::Mouse),
            _ => GameInput::Ignored,
        },
        _ => GameInput::Ignored,
    }
}

/// Synthesizes key releases for terminals that never report them.
///
/// A fresh press stays held for `repeat_delay`, long enough for the first
/// auto-repeat to arrive; every repeat after that extends the hold by `hold`.
#[derive(Debug)]
pub struct FlapHold {
    hold: Duration,
    repeat_delay: Duration,
    releases_reported: bool,
    /// Time of the latest press or repeat, and whether a repeat has been seen.
    held: Option<(Instant, bool)>,
}

impl FlapHold {
    pub fn new(hold: Duration, repeat_delay: Duration, releases_reported: bool) -> Self {
        Self {
            hold,
            repeat_delay,
            releases_reported,
            held: None,
        }
    }

    /// A flap key press or auto-repeat arrived.
    pub fn press(&mut self, now: Instant) {
        let repeating = self.held.is_some();
        self.held = Some((now, repeating));
    }

    pub fn release(&mut self) {
        self.held = None;
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    fn deadline(&self) -> Option<Instant> {
        if self.releases_reported {
            return None;
        }
        self.held.map(|(pressed, repeating)| {
            pressed + if repeating { self.hold } else { self.repeat_delay }
        })
    }

    /// True exactly once when a held key should count as released.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.held = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the held key expires, for the host's poll timeout.
    pub fn time_until_expiry(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
