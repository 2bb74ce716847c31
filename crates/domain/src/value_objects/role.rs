//! Account role value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The kind of account a session belongs to
///
/// Serialized with the backend's wire names (`DRIVER`, `NORMAL_USER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A driver; confined to the driver area
    Driver,
    /// A rider (the dispatcher account is also a rider)
    NormalUser,
}

impl Role {
    /// Wire name of the role
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driver => "DRIVER",
            Self::NormalUser => "NORMAL_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DRIVER" => Ok(Self::Driver),
            "NORMAL_USER" | "RIDER" => Ok(Self::NormalUser),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_serde() {
        assert_eq!(serde_json::to_string(&Role::Driver).unwrap(), "\"DRIVER\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"NORMAL_USER\"").unwrap(),
            Role::NormalUser
        );
    }

    #[test]
    fn from_str_accepts_wire_names_case_insensitive() {
        assert_eq!("driver".parse::<Role>().unwrap(), Role::Driver);
        assert_eq!("NORMAL_USER".parse::<Role>().unwrap(), Role::NormalUser);
        assert_eq!("rider".parse::<Role>().unwrap(), Role::NormalUser);
    }

    #[test]
    fn from_str_rejects_unknown_role() {
        assert!(matches!(
            "ADMIN".parse::<Role>(),
            Err(DomainError::InvalidRole(_))
        ));
    }
}
