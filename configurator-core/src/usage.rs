//! Usage categories a shopper can ask the configurator for.
//!
//! The enum offers compile-time safety for weight and threshold lookups.
//! Parsing is case-insensitive and understands a handful of storefront
//! aliases, including the French labels used on the site.
//!
//! # Examples
//! ```
//! use configurator_core::Usage;
//!
//! assert_eq!("Gaming".parse::<Usage>(), Ok(Usage::Gaming));
//! assert_eq!("bureautique".parse::<Usage>(), Ok(Usage::Office));
//! assert_eq!(Usage::Creative.to_string(), "creative");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the shopper intends to do with the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Usage {
    /// Games and other GPU-heavy workloads.
    Gaming,
    /// Documents, browsing and video calls.
    Office,
    /// Photo, video and design work.
    Creative,
}

impl Usage {
    /// Every usage, in declaration order.
    pub const ALL: [Self; 3] = [Self::Gaming, Self::Office, Self::Creative];

    /// Return the canonical lowercase name.
    ///
    /// Product categories and tags are compared against this name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Office => "office",
            Self::Creative => "creative",
        }
    }

    fn from_alias(raw: &str) -> Option<Self> {
        match raw {
            "gaming" | "gamer" | "jeu" | "jeux" => Some(Self::Gaming),
            "office" | "work" | "business" | "bureautique" | "student" => Some(Self::Office),
            "creative" | "design" | "video" | "editing" | "creation" | "création" => {
                Some(Self::Creative)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::from_alias(&normalised).ok_or_else(|| format!("unknown usage '{s}'"))
    }
}
