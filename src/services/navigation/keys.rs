use super::{Direction, NavCommand};

/// Keys the month grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Space,
}

impl Key {
    /// Parse a DOM-style key name ("ArrowLeft", "PageUp", " ", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            _ => return None,
        };
        Some(key)
    }

    /// Command bound to this key. Shift turns page keys into year steps.
    pub fn command(self, shift: bool) -> NavCommand {
        use Direction::{Backward, Forward};

        match self {
            Key::ArrowLeft => NavCommand::StepDay(Backward),
            Key::ArrowRight => NavCommand::StepDay(Forward),
            Key::ArrowUp => NavCommand::StepWeek(Backward),
            Key::ArrowDown => NavCommand::StepWeek(Forward),
            Key::PageUp if shift => NavCommand::StepYear(Backward),
            Key::PageUp => NavCommand::StepMonth(Backward),
            Key::PageDown if shift => NavCommand::StepYear(Forward),
            Key::PageDown => NavCommand::StepMonth(Forward),
            Key::Home => NavCommand::WeekStart,
            Key::End => NavCommand::WeekEnd,
            Key::Enter | Key::Space => NavCommand::Commit,
        }
    }
}
