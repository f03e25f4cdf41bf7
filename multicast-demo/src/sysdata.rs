//! System mode state
//!
//! Holds the current system mode and notifies subscribers through the
//! [`ModeChanged`] event every time a mode is set.

use multicast::multicast;
use serde::{Deserialize, Serialize};
use std::fmt;

/// System operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Starting = 0,
    Normal = 1,
    Alarm = 2,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Starting => write!(f, "starting"),
            Mode::Normal => write!(f, "normal"),
            Mode::Alarm => write!(f, "alarm"),
        }
    }
}

multicast! {
    /// Fired after the system mode is set; up to 3 subscribers
    pub struct ModeChanged(mode: Mode) [3];
}

/// Mode publisher
#[derive(Debug, Default)]
pub struct SysData {
    mode: Mode,
    mode_changed: ModeChanged,
}

impl SysData {
    /// Create the publisher in [`Mode::Starting`] with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `mode` and notify every subscriber
    ///
    /// Subscribers are notified even when the mode did not change.
    pub fn set_mode(&mut self, mode: Mode) {
        log::info!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.mode_changed.invoke(self.mode);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Event for subscribers that want mode change notifications
    pub fn mode_changed(&self) -> &ModeChanged {
        &self.mode_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn take_seen() -> Vec<String> {
        SEEN.with(|seen| seen.take())
    }

    fn h1(mode: Mode) {
        SEEN.with(|seen| seen.borrow_mut().push(format!("h1 {}", mode)));
    }

    fn h2(mode: Mode) {
        SEEN.with(|seen| seen.borrow_mut().push(format!("h2 {}", mode)));
    }

    #[test]
    fn test_starts_in_starting_mode() {
        let sys = SysData::new();
        assert_eq!(sys.mode(), Mode::Starting);
        assert!(sys.mode_changed().is_empty());
        assert_eq!(ModeChanged::CAPACITY, 3);
    }

    #[test]
    fn test_mode_change_notification_sequence() {
        let mut sys = SysData::new();
        sys.mode_changed().register(h1).unwrap();
        sys.mode_changed().register(h2).unwrap();

        sys.set_mode(Mode::Normal);
        assert_eq!(sys.mode(), Mode::Normal);
        assert_eq!(take_seen(), vec!["h1 normal", "h2 normal"]);

        assert!(sys.mode_changed().unregister(h1));
        assert!(!sys.mode_changed().unregister(h1));

        sys.set_mode(Mode::Alarm);
        assert_eq!(take_seen(), vec!["h2 alarm"]);
    }

    #[test]
    fn test_set_same_mode_still_notifies() {
        let mut sys = SysData::new();
        sys.mode_changed().register(h1).unwrap();
        sys.set_mode(Mode::Starting);
        assert_eq!(take_seen(), vec!["h1 starting"]);
    }

    #[test]
    fn test_mode_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            modes: Vec<Mode>,
        }

        let parsed: Wrapper = toml::from_str(r#"modes = ["starting", "normal", "alarm"]"#).unwrap();
        assert_eq!(parsed.modes, vec![Mode::Starting, Mode::Normal, Mode::Alarm]);
        assert_eq!(Mode::Alarm as u8, 2);
    }
}
