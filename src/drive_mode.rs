//! The operator's choice between robot-centric and field-centric driving.

extern crate alloc;
use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DriveMode {
    RobotCentric,
    #[default]
    FieldCentric,
}

impl DriveMode {
    pub const fn label(self) -> &'static str {
        match self {
            DriveMode::RobotCentric => "Robot-Centric",
            DriveMode::FieldCentric => "Field-Centric",
        }
    }

    pub const fn is_field_centric(self) -> bool {
        matches!(self, DriveMode::FieldCentric)
    }

    pub const fn other(self) -> Self {
        match self {
            DriveMode::RobotCentric => DriveMode::FieldCentric,
            DriveMode::FieldCentric => DriveMode::RobotCentric,
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown drive mode `{0}`")]
pub struct ParseDriveModeError(String);

impl FromStr for DriveMode {
    type Err = ParseDriveModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [DriveMode::RobotCentric, DriveMode::FieldCentric]
            .into_iter()
            .find(|mode| {
                let short = match mode {
                    DriveMode::RobotCentric => "robot",
                    DriveMode::FieldCentric => "field",
                };
                s.eq_ignore_ascii_case(mode.label()) || s.eq_ignore_ascii_case(short)
            })
            .ok_or_else(|| ParseDriveModeError(s.to_string()))
    }
}

/// Two-option chooser shown to the operator.
#[derive(Copy, Clone, Debug)]
pub struct DriveModeSelector {
    default: DriveMode,
    selected: DriveMode,
}

impl Default for DriveModeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveModeSelector {
    pub fn new() -> Self {
        Self {
            default: DriveMode::FieldCentric,
            selected: DriveMode::FieldCentric,
        }
    }

    /// Options in the order they are offered, with their labels.
    pub fn options(&self) -> [(&'static str, DriveMode); 2] {
        [
            (DriveMode::RobotCentric.label(), DriveMode::RobotCentric),
            (DriveMode::FieldCentric.label(), DriveMode::FieldCentric),
        ]
    }

    pub fn default_mode(&self) -> DriveMode {
        self.default
    }

    pub fn selected(&self) -> DriveMode {
        self.selected
    }

    pub fn select(&mut self, mode: DriveMode) {
        self.selected = mode;
    }

    pub fn toggle(&mut self) -> DriveMode {
        self.selected = self.selected.other();
        self.selected
    }

    /// Restores a saved selection. Unknown text selects the default and
    /// hands back the parse error.
    pub fn restore(&mut self, saved: &str) -> Result<DriveMode, ParseDriveModeError> {
        match saved.parse() {
            Ok(mode) => {
                self.selected = mode;
                Ok(mode)
            }
            Err(e) => {
                self.selected = self.default;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_field_centric() {
        let selector = DriveModeSelector::new();
        assert_eq!(selector.selected(), DriveMode::FieldCentric);
        assert_eq!(selector.default_mode(), DriveMode::FieldCentric);
        assert_eq!(DriveMode::default(), DriveMode::FieldCentric);
    }

    #[test]
    fn parses_labels_and_short_names() {
        assert_eq!("Robot-Centric".parse(), Ok(DriveMode::RobotCentric));
        assert_eq!("field-centric\n".parse(), Ok(DriveMode::FieldCentric));
        assert_eq!("ROBOT".parse(), Ok(DriveMode::RobotCentric));
        assert_eq!(
            "tank".parse::<DriveMode>(),
            Err(ParseDriveModeError("tank".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_label() {
        for mode in [DriveMode::RobotCentric, DriveMode::FieldCentric] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn toggle_flips_between_options() {
        let mut selector = DriveModeSelector::new();
        assert_eq!(selector.toggle(), DriveMode::RobotCentric);
        assert_eq!(selector.toggle(), DriveMode::FieldCentric);
    }

    #[test]
    fn select_sets_the_mode_and_keeps_the_default() {
        let mut selector = DriveModeSelector::new();
        selector.select(DriveMode::RobotCentric);
        assert_eq!(selector.selected(), DriveMode::RobotCentric);
        assert_eq!(selector.default_mode(), DriveMode::FieldCentric);

        // selecting the current mode is a no-op
        selector.select(DriveMode::RobotCentric);
        assert_eq!(selector.selected(), DriveMode::RobotCentric);

        assert!(selector.restore("nonsense").is_err());
        assert_eq!(selector.selected(), DriveMode::FieldCentric);
    }

    #[test]
    fn stepping_through_options_with_select_matches_toggle() {
        let mut stepped = DriveModeSelector::new();
        let mut toggled = DriveModeSelector::new();
        for _ in 0..3 {
            let options = stepped.options();
            let current = options
                .iter()
                .position(|&(_, mode)| mode == stepped.selected())
                .unwrap();
            stepped.select(options[(current + 1) % options.len()].1);
            assert_eq!(stepped.selected(), toggled.toggle());
        }
    }

    #[test]
    fn restore_falls_back_to_default() {
        let mut selector = DriveModeSelector::new();
        assert_eq!(selector.restore("Robot-Centric"), Ok(DriveMode::RobotCentric));
        assert_eq!(selector.selected(), DriveMode::RobotCentric);

        assert!(selector.restore("").is_err());
        assert_eq!(selector.selected(), DriveMode::FieldCentric);
    }

    #[test]
    fn options_list_robot_centric_first() {
        let labels = DriveModeSelector::new().options().map(|(label, _)| label);
        assert_eq!(labels, ["Robot-Centric", "Field-Centric"]);
    }
}
