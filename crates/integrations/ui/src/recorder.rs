use global_hotkey::hotkey::{Code, Modifiers};
use shortcut_bridge::{Binding, MediaAction, ShortcutService};
use std::rc::Rc;

/// Build a recorder widget for the action named by `identifier`.
///
/// The identifier is matched verbatim against the closed action set;
/// an unrecognized identifier is logged and yields `None`. Must be called
/// on the UI-owning thread.
pub fn create_recorder_for_identifier(
    identifier: &str,
    service: Rc<ShortcutService>,
) -> Option<BindingRecorder> {
    #[cfg(target_os = "macos")]
    if !crate::macos::is_main_thread() {
        log::warn!("Recorder for '{}' created off the main thread", identifier);
    }

    log::info!("Creating binding recorder for '{}'", identifier);

    let Some(action) = MediaAction::from_identifier(identifier) else {
        log::warn!("Unknown shortcut identifier: '{}'", identifier);
        return None;
    };

    Some(BindingRecorder::new(action, service))
}

enum CaptureOutcome {
    Pending,
    Cancelled,
    Captured(Binding),
}

/// Interactive key-combination capture for one action. Click to arm,
/// press the new combination, Escape cancels. Writes the captured
/// combination straight through the service.
pub struct BindingRecorder {
    action: MediaAction,
    service: Rc<ShortcutService>,
    capturing: bool,
    error: Option<String>,
}

impl BindingRecorder {
    fn new(action: MediaAction, service: Rc<ShortcutService>) -> Self {
        Self {
            action,
            service,
            capturing: false,
            error: None,
        }
    }

    pub fn action(&self) -> MediaAction {
        self.action
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let label = if self.capturing {
            "Press new shortcut...".to_string()
        } else {
            self.service.binding(self.action).to_string()
        };

        if ui.button(label).clicked() {
            self.capturing = !self.capturing;
            self.error = None;
        }

        if self.capturing {
            match Self::poll_capture(ui) {
                CaptureOutcome::Pending => {}
                CaptureOutcome::Cancelled => self.capturing = false,
                CaptureOutcome::Captured(binding) => {
                    match self.service.rebind(self.action, binding) {
                        Ok(()) => self.error = None,
                        Err(e) => {
                            log::warn!("Rebind of {:?} rejected: {}", self.action, e);
                            self.error = Some(e.to_string());
                        }
                    }
                    self.capturing = false;
                }
            }
        }

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }
    }

    fn poll_capture(ui: &egui::Ui) -> CaptureOutcome {
        ui.input(|input| {
            for event in &input.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    if *key == egui::Key::Escape {
                        return CaptureOutcome::Cancelled;
                    }
                    if let Some(binding) = binding_from_egui(*key, *modifiers) {
                        return CaptureOutcome::Captured(binding);
                    }
                }
            }
            CaptureOutcome::Pending
        })
    }
}

fn binding_from_egui(key: egui::Key, modifiers: egui::Modifiers) -> Option<Binding> {
    let code = code_from_egui(key)?;

    let mut mods = Modifiers::empty();
    if modifiers.mac_cmd {
        mods |= Modifiers::META;
    }
    if modifiers.ctrl {
        mods |= Modifiers::CONTROL;
    }
    if modifiers.alt {
        mods |= Modifiers::ALT;
    }
    if modifiers.shift {
        mods |= Modifiers::SHIFT;
    }

    Some(Binding::new(code, mods))
}

fn code_from_egui(key: egui::Key) -> Option<Code> {
    use egui::Key;

    let code = match key {
        Key::Space => Code::Space,
        Key::ArrowLeft => Code::ArrowLeft,
        Key::ArrowRight => Code::ArrowRight,
        Key::ArrowUp => Code::ArrowUp,
        Key::ArrowDown => Code::ArrowDown,
        Key::Enter => Code::Enter,
        Key::Tab => Code::Tab,
        Key::Backspace => Code::Backspace,
        Key::Delete => Code::Delete,
        Key::Home => Code::Home,
        Key::End => Code::End,
        Key::PageUp => Code::PageUp,
        Key::PageDown => Code::PageDown,
        Key::A => Code::KeyA,
        Key::B => Code::KeyB,
        Key::C => Code::KeyC,
        Key::D => Code::KeyD,
        Key::E => Code::KeyE,
        Key::F => Code::KeyF,
        Key::G => Code::KeyG,
        Key::H => Code::KeyH,
        Key::I => Code::KeyI,
        Key::J => Code::KeyJ,
        Key::K => Code::KeyK,
        Key::L => Code::KeyL,
        Key::M => Code::KeyM,
        Key::N => Code::KeyN,
        Key::O => Code::KeyO,
        Key::P => Code::KeyP,
        Key::Q => Code::KeyQ,
        Key::R => Code::KeyR,
        Key::S => Code::KeyS,
        Key::T => Code::KeyT,
        Key::U => Code::KeyU,
        Key::V => Code::KeyV,
        Key::W => Code::KeyW,
        Key::X => Code::KeyX,
        Key::Y => Code::KeyY,
        Key::Z => Code::KeyZ,
        Key::Num0 => Code::Digit0,
        Key::Num1 => Code::Digit1,
        Key::Num2 => Code::Digit2,
        Key::Num3 => Code::Digit3,
        Key::Num4 => Code::Digit4,
        Key::Num5 => Code::Digit5,
        Key::Num6 => Code::Digit6,
        Key::Num7 => Code::Digit7,
        Key::Num8 => Code::Digit8,
        Key::Num9 => Code::Digit9,
        Key::F1 => Code::F1,
        Key::F2 => Code::F2,
        Key::F3 => Code::F3,
        Key::F4 => Code::F4,
        Key::F5 => Code::F5,
        Key::F6 => Code::F6,
        Key::F7 => Code::F7,
        Key::F8 => Code::F8,
        Key::F9 => Code::F9,
        Key::F10 => Code::F10,
        Key::F11 => Code::F11,
        Key::F12 => Code::F12,
        _ => return None,
    };

    Some(code)
}
