use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaAction {
    PlayPause,
    PreviousTrack,
    NextTrack,
    SkipBackward,
    SkipForward,
}

impl MediaAction {
    pub const ALL: [MediaAction; 5] = [
        MediaAction::PlayPause,
        MediaAction::PreviousTrack,
        MediaAction::NextTrack,
        MediaAction::SkipBackward,
        MediaAction::SkipForward,
    ];

    /// Identifier accepted at boundary crossings, matched verbatim.
    pub fn identifier(&self) -> &'static str {
        match self {
            MediaAction::PlayPause => "playPause",
            MediaAction::PreviousTrack => "previousTrack",
            MediaAction::NextTrack => "nextTrack",
            MediaAction::SkipBackward => "skipBackward",
            MediaAction::SkipForward => "skipForward",
        }
    }

    /// Exact-match lookup over the closed identifier set. No trimming,
    /// no case folding.
    pub fn from_identifier(identifier: &str) -> Option<MediaAction> {
        match identifier {
            "playPause" => Some(MediaAction::PlayPause),
            "previousTrack" => Some(MediaAction::PreviousTrack),
            "nextTrack" => Some(MediaAction::NextTrack),
            "skipBackward" => Some(MediaAction::SkipBackward),
            "skipForward" => Some(MediaAction::SkipForward),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaAction::PlayPause => "Play / Pause",
            MediaAction::PreviousTrack => "Previous Track",
            MediaAction::NextTrack => "Next Track",
            MediaAction::SkipBackward => "Skip Backward",
            MediaAction::SkipForward => "Skip Forward",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Key combination for one action: key code plus modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub code: Code,
    pub modifiers: Modifiers,
}

impl Binding {
    pub fn new(code: Code, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn hotkey(&self) -> HotKey {
        HotKey::new(Some(self.modifiers), self.code)
    }

    /// Id the capture library hands back in its events for this combination.
    pub fn registration_id(&self) -> u32 {
        self.hotkey().id()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(Modifiers::META) {
            write!(f, "Command+")?;
        }
        if self.modifiers.contains(Modifiers::CONTROL) {
            write!(f, "Control+")?;
        }
        if self.modifiers.contains(Modifiers::ALT) {
            write!(f, "Option+")?;
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            write!(f, "Shift+")?;
        }

        let code = format!("{:?}", self.code);
        let label = code
            .strip_prefix("Key")
            .or_else(|| code.strip_prefix("Digit"))
            .unwrap_or(&code);
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Compiled-in default combination for an action.
pub fn default_binding(action: MediaAction) -> Binding {
    match action {
        MediaAction::PlayPause => {
            Binding::new(Code::Space, Modifiers::META | Modifiers::SHIFT)
        }
        MediaAction::PreviousTrack => {
            Binding::new(Code::ArrowLeft, Modifiers::META | Modifiers::SHIFT)
        }
        MediaAction::NextTrack => {
            Binding::new(Code::ArrowRight, Modifiers::META | Modifiers::SHIFT)
        }
        MediaAction::SkipBackward => {
            Binding::new(Code::ArrowLeft, Modifiers::META | Modifiers::ALT)
        }
        MediaAction::SkipForward => {
            Binding::new(Code::ArrowRight, Modifiers::META | Modifiers::ALT)
        }
    }
}
