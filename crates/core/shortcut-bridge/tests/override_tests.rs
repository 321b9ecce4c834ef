use global_hotkey::hotkey::{Code, Modifiers};
use shortcut_bridge::{default_binding, initial_bindings, Binding, MediaAction};

mod tests {
    use super::*;

    #[test]
    fn test_initial_bindings_default_without_overrides() {
        let config = config::Config::new_for_test(None, None, None, None, None);

        let bindings = initial_bindings(&config);

        for (i, action) in MediaAction::ALL.into_iter().enumerate() {
            assert_eq!(bindings[i], default_binding(action));
        }
    }

    #[test]
    fn test_initial_bindings_apply_configured_overrides() {
        let config = test_utils::initialize_for_test(
            Some("Command+Option+P".to_string()),
            None,
            None,
            None,
            Some("Control+Shift+F".to_string()),
        );

        let bindings = initial_bindings(&config);

        assert_eq!(
            bindings[0],
            Binding::new(Code::KeyP, Modifiers::META | Modifiers::ALT)
        );
        assert_eq!(bindings[1], default_binding(MediaAction::PreviousTrack));
        assert_eq!(bindings[2], default_binding(MediaAction::NextTrack));
        assert_eq!(bindings[3], default_binding(MediaAction::SkipBackward));
        assert_eq!(
            bindings[4],
            Binding::new(Code::KeyF, Modifiers::CONTROL | Modifiers::SHIFT)
        );
    }

    #[test]
    fn test_malformed_override_falls_back_to_default() {
        let config = config::Config::new_for_test(
            Some("Command+NotAKey".to_string()),
            Some("Command+Shift".to_string()),
            None,
            None,
            None,
        );

        let bindings = initial_bindings(&config);

        assert_eq!(bindings[0], default_binding(MediaAction::PlayPause));
        assert_eq!(bindings[1], default_binding(MediaAction::PreviousTrack));
    }
}
