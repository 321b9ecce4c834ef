use crate::types::Binding;
use global_hotkey::hotkey::{Code, Modifiers};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseBindingError {
    #[error("Empty binding")]
    Empty,
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Binding has no non-modifier key")]
    MissingKey,
    #[error("Invalid binding format: {0}")]
    InvalidFormat(String),
}

/// Parse a `"Command+Shift+Space"`-style combination into a [`Binding`].
///
/// Modifier names are case-insensitive and accept the usual aliases
/// (`cmd`, `option`, `ctrl`, ...). Exactly one non-modifier key is required.
pub fn parse_binding(input: &str) -> Result<Binding, ParseBindingError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseBindingError::Empty);
    }

    let mut modifiers = Modifiers::empty();
    let mut code: Option<Code> = None;

    for token in input.split('+').map(|t| t.trim()) {
        if token.is_empty() {
            return Err(ParseBindingError::InvalidFormat(input.to_string()));
        }

        if let Some(modifier) = parse_modifier_name(token) {
            modifiers |= modifier;
            continue;
        }

        let key = parse_key_name(token)?;
        if code.replace(key).is_some() {
            return Err(ParseBindingError::InvalidFormat(input.to_string()));
        }
    }

    match code {
        Some(code) => Ok(Binding::new(code, modifiers)),
        None => Err(ParseBindingError::MissingKey),
    }
}

fn parse_modifier_name(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "command" | "cmd" | "meta" | "super" => Some(Modifiers::META),
        "shift" => Some(Modifiers::SHIFT),
        "option" | "opt" | "alt" => Some(Modifiers::ALT),
        "control" | "ctrl" => Some(Modifiers::CONTROL),
        _ => None,
    }
}

fn parse_key_name(token: &str) -> Result<Code, ParseBindingError> {
    let lower = token.to_ascii_lowercase();

    if lower.len() == 1 {
        let c = lower.chars().next().unwrap_or_default();
        if let Some(code) = letter_code(c).or_else(|| digit_code(c)) {
            return Ok(code);
        }
    }

    let code = match lower.as_str() {
        "space" => Code::Space,
        "left" | "arrowleft" => Code::ArrowLeft,
        "right" | "arrowright" => Code::ArrowRight,
        "up" | "arrowup" => Code::ArrowUp,
        "down" | "arrowdown" => Code::ArrowDown,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "escape" | "esc" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" => Code::Delete,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        _ => return Err(ParseBindingError::UnknownKey(token.to_string())),
    };

    Ok(code)
}

fn letter_code(c: char) -> Option<Code> {
    let code = match c {
        'a' => Code::KeyA,
        'b' => Code::KeyB,
        'c' => Code::KeyC,
        'd' => Code::KeyD,
        'e' => Code::KeyE,
        'f' => Code::KeyF,
        'g' => Code::KeyG,
        'h' => Code::KeyH,
        'i' => Code::KeyI,
        'j' => Code::KeyJ,
        'k' => Code::KeyK,
        'l' => Code::KeyL,
        'm' => Code::KeyM,
        'n' => Code::KeyN,
        'o' => Code::KeyO,
        'p' => Code::KeyP,
        'q' => Code::KeyQ,
        'r' => Code::KeyR,
        's' => Code::KeyS,
        't' => Code::KeyT,
        'u' => Code::KeyU,
        'v' => Code::KeyV,
        'w' => Code::KeyW,
        'x' => Code::KeyX,
        'y' => Code::KeyY,
        'z' => Code::KeyZ,
        _ => return None,
    };
    Some(code)
}

fn digit_code(c: char) -> Option<Code> {
    let code = match c {
        '0' => Code::Digit0,
        '1' => Code::Digit1,
        '2' => Code::Digit2,
        '3' => Code::Digit3,
        '4' => Code::Digit4,
        '5' => Code::Digit5,
        '6' => Code::Digit6,
        '7' => Code::Digit7,
        '8' => Code::Digit8,
        '9' => Code::Digit9,
        _ => return None,
    };
    Some(code)
}
