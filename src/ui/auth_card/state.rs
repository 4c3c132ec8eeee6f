//! Auth card value types
//!
//! Mode, roles, PIN digits and focus targets

use thiserror::Error;

/// Number of PIN slots.
pub const PIN_LENGTH: usize = 3;

/// Which form variant is displayed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, strum::Display, clap::ValueEnum)]
pub enum Mode {
    #[default]
    #[strum(to_string = "signup")]
    #[value(name = "signup")]
    SignUp,
    #[strum(to_string = "login")]
    #[value(name = "login")]
    Login,
}

impl Mode {
    pub fn heading(self) -> &'static str {
        match self {
            Mode::SignUp => "Create Account",
            Mode::Login => "Welcome Back",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::SignUp => "SignUp",
            Mode::Login => "Log In",
        }
    }

    /// Label on the tab that switches to this mode.
    pub fn tab_label(self) -> &'static str {
        match self {
            Mode::SignUp => "Create Account",
            Mode::Login => "Log In",
        }
    }

    pub fn shows_confirm_password(self) -> bool {
        self == Mode::SignUp
    }
}

/// Roles offered by the selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, clap::ValueEnum)]
pub enum Role {
    Administration,
    Owner,
    Instructor,
    Student,
}

impl Role {
    /// Menu order.
    pub const ALL: [Role; 4] = [
        Role::Administration,
        Role::Owner,
        Role::Instructor,
        Role::Student,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    /// Anything other than nothing or one ASCII digit.
    #[error("PIN slots accept a single digit, got {0:?}")]
    NotADigit(String),

    #[error("PIN slot {0} does not exist")]
    SlotOutOfRange(usize),
}

/// Parses the raw value of a PIN slot: empty clears, one digit fills.
pub fn parse_pin_value(raw: &str) -> Result<Option<char>, PinError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) if c.is_ascii_digit() => Ok(Some(c)),
        _ => Err(PinError::NotADigit(raw.to_string())),
    }
}

/// The three PIN slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinDigits([Option<char>; PIN_LENGTH]);

impl PinDigits {
    pub fn slots(&self) -> [Option<char>; PIN_LENGTH] {
        self.0
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Stores `raw` in slot `index`, leaving the digits untouched on error.
    pub fn set(&mut self, index: usize, raw: &str) -> Result<Option<char>, PinError> {
        let value = parse_pin_value(raw)?;
        let slot = self
            .0
            .get_mut(index)
            .ok_or(PinError::SlotOutOfRange(index))?;
        *slot = value;
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.0 = [None; PIN_LENGTH];
    }
}

/// Control receiving keyboard input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Back,
    RoleSelector,
    Pin(usize),
    Email,
    Password,
    ConfirmPassword,
    Submit,
    Tab(Mode),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Pin(0)
    }
}

impl Focus {
    /// Tab order for the given mode.
    pub fn order(mode: Mode) -> Vec<Focus> {
        let mut order = vec![
            Focus::Back,
            Focus::RoleSelector,
            Focus::Pin(0),
            Focus::Pin(1),
            Focus::Pin(2),
            Focus::Email,
            Focus::Password,
        ];
        if mode.shows_confirm_password() {
            order.push(Focus::ConfirmPassword);
        }
        order.extend([
            Focus::Submit,
            Focus::Tab(Mode::SignUp),
            Focus::Tab(Mode::Login),
        ]);
        order
    }

    pub fn next(self, mode: Mode) -> Focus {
        Self::step(self, mode, 1)
    }

    pub fn previous(self, mode: Mode) -> Focus {
        let len = Self::order(mode).len();
        Self::step(self, mode, len - 1)
    }

    fn step(self, mode: Mode, by: usize) -> Focus {
        let order = Self::order(mode);
        match order.iter().position(|f| *f == self) {
            Some(i) => order[(i + by) % order.len()],
            None => Focus::default(),
        }
    }
}
