//! Joystick model the teleop logic reads.
//!
//! Axes follow flight-stick conventions: `y` is positive when the stick is
//! pulled toward the driver and `throttle` runs from -1 at the bottom of its
//! travel to +1 at the top. Buttons are numbered from 1.

/// Eight-way point-of-view hat.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Pov {
    #[default]
    Centered,
    /// Degrees clockwise from forward, a multiple of 45 below 360.
    Angle(u16),
}

impl Pov {
    /// Decodes a four-way directional pad. Opposing presses cancel out.
    pub fn from_dpad(up: bool, right: bool, down: bool, left: bool) -> Self {
        let vertical = up as i8 - down as i8;
        let horizontal = right as i8 - left as i8;
        match (vertical, horizontal) {
            (1, 0) => Pov::Angle(0),
            (1, 1) => Pov::Angle(45),
            (0, 1) => Pov::Angle(90),
            (-1, 1) => Pov::Angle(135),
            (-1, 0) => Pov::Angle(180),
            (-1, -1) => Pov::Angle(225),
            (0, -1) => Pov::Angle(270),
            (1, -1) => Pov::Angle(315),
            _ => Pov::Centered,
        }
    }

    /// Angle in degrees, or -1 when centered.
    pub fn degrees(self) -> i32 {
        match self {
            Pov::Centered => -1,
            Pov::Angle(angle) => angle as i32,
        }
    }

    pub fn angle(self) -> Option<f64> {
        match self {
            Pov::Centered => None,
            Pov::Angle(angle) => Some(angle as f64),
        }
    }
}

/// A joystick button number, 1 through 12.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Button(u8);

impl Button {
    /// Buttons on the flight stick.
    pub const COUNT: u8 = 12;

    pub const fn new(number: u8) -> Self {
        assert!(number >= 1 && number <= Self::COUNT, "button numbers run from 1 to 12");
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    const fn mask(self) -> u16 {
        1 << (self.0 - 1)
    }
}

/// The set of buttons held during one cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonSet(u16);

impl ButtonSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    pub const fn is_pressed(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<T: IntoIterator<Item = Button>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), ButtonSet::with)
    }
}

/// One cycle's worth of joystick input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct JoystickState {
    pub x: f64,
    pub y: f64,
    pub twist: f64,
    pub throttle: f64,
    pub pov: Pov,
    pub buttons: ButtonSet,
}

impl JoystickState {
    /// Maps the throttle lever onto `[0, 1]`.
    pub fn speed_multiplier(&self) -> f64 {
        (self.throttle + 1.0) / 2.0
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.buttons.is_pressed(button)
    }
}
