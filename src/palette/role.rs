//! Semantic color roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The semantic purpose of a palette color.
///
/// Every [`ColorTable`](super::ColorTable) holds exactly one color per role, so
/// a lookup by role can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Text,
    Background,
    Tint,
    Icon,
    TabIconDefault,
    TabIconSelected,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Text,
        ColorRole::Background,
        ColorRole::Tint,
        ColorRole::Icon,
        ColorRole::TabIconDefault,
        ColorRole::TabIconSelected,
    ];

    /// The key used for this role in palette files.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Text => "text",
            ColorRole::Background => "background",
            ColorRole::Tint => "tint",
            ColorRole::Icon => "icon",
            ColorRole::TabIconDefault => "tabIconDefault",
            ColorRole::TabIconSelected => "tabIconSelected",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| format!("unknown color role '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.name().parse::<ColorRole>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role() {
        let err = "accent".parse::<ColorRole>().unwrap_err();
        assert!(err.contains("accent"));
    }
}
