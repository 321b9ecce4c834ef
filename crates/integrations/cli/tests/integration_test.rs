mod mocks;

use mocks::MockBackend;
use shortcut_bridge::{
    default_binding, ActionCallbacks, KeyState, MediaAction, ShortcutService,
};
use std::sync::Arc;
use trackctl_cli::Transport;

fn transport_callbacks(transport: &Arc<Transport>) -> ActionCallbacks {
    let play_pause = transport.clone();
    let previous = transport.clone();
    let next = transport.clone();
    let backward = transport.clone();
    let forward = transport.clone();

    ActionCallbacks {
        play_pause: Box::new(move || play_pause.toggle_play_pause()),
        previous_track: Box::new(move || previous.previous_track()),
        next_track: Box::new(move || next.next_track()),
        skip_backward: Box::new(move || backward.skip_backward()),
        skip_forward: Box::new(move || forward.skip_forward()),
    }
}

fn registered_service(transport: &Arc<Transport>) -> ShortcutService {
    let service = ShortcutService::new(Box::new(MockBackend::new()));
    service
        .setup_global_shortcuts(transport_callbacks(transport))
        .expect("setup should succeed against the mock backend");
    service
}

fn key_up(service: &ShortcutService, action: MediaAction) {
    service
        .dispatcher()
        .handle_event(default_binding(action).registration_id(), KeyState::Released);
}

mod tests {
    use super::*;

    #[test]
    fn test_play_pause_shortcut_toggles_transport() {
        let transport = Arc::new(Transport::new(15, 30));
        let service = registered_service(&transport);

        assert!(!transport.is_playing());

        key_up(&service, MediaAction::PlayPause);
        assert!(transport.is_playing());

        key_up(&service, MediaAction::PlayPause);
        assert!(!transport.is_playing());
    }

    #[test]
    fn test_skip_shortcuts_move_position_by_configured_durations() {
        let transport = Arc::new(Transport::new(15, 30));
        let service = registered_service(&transport);

        key_up(&service, MediaAction::SkipForward);
        key_up(&service, MediaAction::SkipForward);
        assert_eq!(transport.position_secs(), 60);

        key_up(&service, MediaAction::SkipBackward);
        assert_eq!(transport.position_secs(), 45);
    }

    #[test]
    fn test_skip_backward_saturates_at_track_start() {
        let transport = Arc::new(Transport::new(15, 30));
        let service = registered_service(&transport);

        key_up(&service, MediaAction::SkipBackward);
        assert_eq!(transport.position_secs(), 0);
    }

    #[test]
    fn test_track_change_rewinds_position() {
        let transport = Arc::new(Transport::new(15, 30));
        let service = registered_service(&transport);

        key_up(&service, MediaAction::SkipForward);
        assert_eq!(transport.position_secs(), 30);

        key_up(&service, MediaAction::NextTrack);
        assert_eq!(transport.position_secs(), 0);

        key_up(&service, MediaAction::SkipForward);
        key_up(&service, MediaAction::PreviousTrack);
        assert_eq!(transport.position_secs(), 0);
    }

    #[test]
    fn test_key_down_leaves_transport_untouched() {
        let transport = Arc::new(Transport::new(15, 30));
        let service = registered_service(&transport);

        service.dispatcher().handle_event(
            default_binding(MediaAction::PlayPause).registration_id(),
            KeyState::Pressed,
        );

        assert!(!transport.is_playing());
        assert_eq!(transport.position_secs(), 0);
    }
}
