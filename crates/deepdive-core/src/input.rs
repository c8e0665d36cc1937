/// Discrete navigation input, independent of the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Forward,
    Backward,
    Left,
    Right,
    Reset,
    AuxiliaryToggle,
    Key(char),
}

/// Map a `KeyboardEvent.key` value plus modifier state to an input event.
#[inline]
pub fn event_for_key(key: &str, shift: bool, ctrl: bool) -> Option<InputEvent> {
    match key {
        "ArrowUp" if shift || ctrl => Some(InputEvent::AuxiliaryToggle),
        "ArrowUp" => Some(InputEvent::Forward),
        "ArrowDown" => Some(InputEvent::Backward),
        "ArrowLeft" => Some(InputEvent::Left),
        "ArrowRight" => Some(InputEvent::Right),
        " " => Some(InputEvent::Reset),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(InputEvent::Key(c)),
                _ => None,
            }
        }
    }
}

/// Whether the browser's default action (scrolling) should be suppressed.
#[inline]
pub fn consumes_default(event: InputEvent) -> bool {
    !matches!(event, InputEvent::Key(_))
}
