use clap::Parser;
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();

#[derive(Parser, Debug, Clone)]
#[command(name = "trackctl")]
#[command(about = "Global media playback shortcuts for the desktop", long_about = None)]
#[command(version)]
pub struct Config {
    #[arg(short = 'd', long, env = "TRACKCTL_DEBUG", help = "Enable debug mode")]
    pub debug: bool,

    #[arg(
        long = "play-pause-keys",
        env = "TRACKCTL_PLAY_PAUSE_KEYS",
        help = "Key combination for play/pause (default: Command+Shift+Space)"
    )]
    pub play_pause_keys: Option<String>,

    #[arg(
        long = "previous-track-keys",
        env = "TRACKCTL_PREVIOUS_TRACK_KEYS",
        help = "Key combination for previous track (default: Command+Shift+Left)"
    )]
    pub previous_track_keys: Option<String>,

    #[arg(
        long = "next-track-keys",
        env = "TRACKCTL_NEXT_TRACK_KEYS",
        help = "Key combination for next track (default: Command+Shift+Right)"
    )]
    pub next_track_keys: Option<String>,

    #[arg(
        long = "skip-backward-keys",
        env = "TRACKCTL_SKIP_BACKWARD_KEYS",
        help = "Key combination for skip backward (default: Command+Option+Left)"
    )]
    pub skip_backward_keys: Option<String>,

    #[arg(
        long = "skip-forward-keys",
        env = "TRACKCTL_SKIP_FORWARD_KEYS",
        help = "Key combination for skip forward (default: Command+Option+Right)"
    )]
    pub skip_forward_keys: Option<String>,

    #[arg(
        long = "skip-backward-secs",
        env = "TRACKCTL_SKIP_BACKWARD_SECS",
        default_value_t = 15,
        help = "Seconds to jump on skip backward"
    )]
    pub skip_backward_secs: u64,

    #[arg(
        long = "skip-forward-secs",
        env = "TRACKCTL_SKIP_FORWARD_SECS",
        default_value_t = 30,
        help = "Seconds to jump on skip forward"
    )]
    pub skip_forward_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let _ = dotenv::dotenv();
        Config::parse()
    }

    pub fn initialize() -> Arc<Config> {
        let config = Arc::new(Self::new());
        let _ = CONFIG.set(config.clone());
        config
    }

    pub fn global() -> Arc<Config> {
        CONFIG.get_or_init(|| Arc::new(Self::new())).clone()
    }

    pub fn new_for_test(
        play_pause_keys: Option<String>,
        previous_track_keys: Option<String>,
        next_track_keys: Option<String>,
        skip_backward_keys: Option<String>,
        skip_forward_keys: Option<String>,
    ) -> Self {
        Self {
            debug: false,
            play_pause_keys,
            previous_track_keys,
            next_track_keys,
            skip_backward_keys,
            skip_forward_keys,
            skip_backward_secs: 15,
            skip_forward_secs: 30,
        }
    }

    pub fn set_global_for_test(config: Arc<Config>) -> Result<(), Arc<Config>> {
        CONFIG.set(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new_for_test(None, None, None, None, None);

        assert!(!config.debug);
        assert_eq!(config.skip_backward_secs, 15);
        assert_eq!(config.skip_forward_secs, 30);
        assert!(config.play_pause_keys.is_none());
        assert!(config.skip_forward_keys.is_none());
    }

    #[test]
    fn test_config_carries_key_overrides() {
        let config = Config::new_for_test(
            Some("Command+Option+P".to_string()),
            None,
            None,
            None,
            Some("Control+Shift+Right".to_string()),
        );

        assert_eq!(config.play_pause_keys.as_deref(), Some("Command+Option+P"));
        assert!(config.previous_track_keys.is_none());
        assert_eq!(
            config.skip_forward_keys.as_deref(),
            Some("Control+Shift+Right")
        );
    }
}
