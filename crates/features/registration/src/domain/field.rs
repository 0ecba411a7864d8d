use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The four inputs of the registration form, in render and validation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirm,
}

impl Field {
    /// Wire name of the field, also used as the DOM id of its input.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Username",
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::PasswordConfirm => "Confirm password",
        }
    }

    /// Password inputs are masked.
    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirm)
    }

    #[must_use]
    pub const fn input_type(self) -> &'static str {
        if self.is_masked() { "password" } else { "text" }
    }
}
