use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    ToggleCounts,
    Restart,
    Quit,
    SpeedUp,
    SlowDown,
}

pub(crate) fn command_for_key(code: KeyCode, mods: KeyModifiers) -> Option<Command> {
    // Raw mode delivers Ctrl+C as an ordinary key, so it quits like 'q'.
    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match code {
        KeyCode::Char('n') => Some(Command::ToggleCounts),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('+') => Some(Command::SpeedUp),
        KeyCode::Char('-') => Some(Command::SlowDown),
        _ => None,
    }
}

// Resize events are ignored; geometry is re-read only at restart.
pub(crate) fn command_for_event(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(k) if matches!(k.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            command_for_key(k.code, k.modifiers)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    #[test]
    fn test_command_bytes_map() {
        let cases = [
            ('n', Command::ToggleCounts),
            ('r', Command::Restart),
            ('q', Command::Quit),
            ('+', Command::SpeedUp),
            ('-', Command::SlowDown),
        ];
        for (ch, expected) in cases {
            assert_eq!(
                command_for_key(KeyCode::Char(ch), KeyModifiers::NONE),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(command_for_key(KeyCode::Char('x'), KeyModifiers::NONE), None);
        assert_eq!(command_for_key(KeyCode::Enter, KeyModifiers::NONE), None);
        assert_eq!(command_for_key(KeyCode::Esc, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(
            command_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Command::Quit)
        );
        // Plain 'c' does nothing.
        assert_eq!(command_for_key(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_key_release_and_resize_are_filtered() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_event(&Event::Key(release)), None);
        assert_eq!(command_for_event(&Event::Resize(80, 24)), None);

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(command_for_event(&Event::Key(press)), Some(Command::Quit));
    }
}
