use std::fmt;
use std::sync::Mutex;

/// Light or dark rendering of every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide display mode. Starts light on every launch and is never
/// written anywhere.
#[derive(Debug, Default)]
pub struct DisplayModeController {
    mode: Mutex<DisplayMode>,
}

impl DisplayModeController {
    pub fn current(&self) -> DisplayMode {
        match self.mode.lock() {
            Ok(mode) => *mode,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&self) -> DisplayMode {
        let mut mode = match self.mode.lock() {
            Ok(mode) => mode,
            Err(poisoned) => poisoned.into_inner(),
        };
        *mode = mode.toggled();
        *mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(DisplayModeController::default().current(), DisplayMode::Light);
    }

    #[test]
    fn toggle_alternates() {
        let ctl = DisplayModeController::default();
        assert_eq!(ctl.toggle(), DisplayMode::Dark);
        assert_eq!(ctl.current(), DisplayMode::Dark);
        assert_eq!(ctl.toggle(), DisplayMode::Light);
    }
}
