//! Recognised hardware attributes and their values.
//!
//! Catalogue records carry a closed set of numeric attributes. Keys outside
//! [`SpecKey`] are rejected when a record is decoded, so a typo in the
//! catalogue surfaces as a data fault instead of a silently ignored spec.
//!
//! # Examples
//! ```
//! use configurator_core::{SpecKey, Specs};
//!
//! let specs = Specs::new().with(SpecKey::Ram, 16);
//! assert_eq!(specs.get(SpecKey::Ram), Some(16));
//! assert_eq!(SpecKey::GpuMemory.as_str(), "gpuMemory");
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A hardware attribute the engine knows how to compare.
///
/// Values are unsigned integers in the unit reported by [`SpecKey::unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SpecKey {
    /// System memory in gigabytes.
    Ram,
    /// Primary storage capacity in gigabytes.
    Storage,
    /// Physical CPU core count.
    CpuCores,
    /// CPU base clock in megahertz.
    CpuClock,
    /// Dedicated graphics memory in gigabytes.
    GpuMemory,
}

impl SpecKey {
    /// Every recognised key, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Ram,
        Self::Storage,
        Self::CpuCores,
        Self::CpuClock,
        Self::GpuMemory,
    ];

    /// Return the wire name of the key.
    ///
    /// # Examples
    /// ```
    /// use configurator_core::SpecKey;
    ///
    /// assert_eq!(SpecKey::CpuCores.as_str(), "cpuCores");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::CpuCores => "cpuCores",
            Self::CpuClock => "cpuClock",
            Self::GpuMemory => "gpuMemory",
        }
    }

    /// Human-readable label used in pros and cons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ram => "RAM",
            Self::Storage => "storage",
            Self::CpuCores => "CPU cores",
            Self::CpuClock => "CPU clock",
            Self::GpuMemory => "graphics memory",
        }
    }

    /// Unit suffix for values of this key. Empty for plain counts.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Ram | Self::Storage | Self::GpuMemory => "GB",
            Self::CpuClock => "MHz",
            Self::CpuCores => "",
        }
    }

    /// Format `value` with this key's unit and label, e.g. `16 GB RAM`.
    #[must_use]
    pub fn describe(self, value: u32) -> String {
        let unit = self.unit();
        if unit.is_empty() {
            format!("{value} {}", self.label())
        } else {
            format!("{value} {unit} {}", self.label())
        }
    }
}

impl std::fmt::Display for SpecKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpecKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown spec key '{s}'"))
    }
}

/// Numeric attributes of a product keyed by [`SpecKey`].
///
/// A missing key means the catalogue does not list the attribute. It never
/// counts as meeting a threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Specs {
    values: BTreeMap<SpecKey, u32>,
}

impl Specs {
    /// Construct an empty set of specs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, if listed.
    #[must_use]
    pub fn get(&self, key: SpecKey) -> Option<u32> {
        self.values.get(&key).copied()
    }

    /// Insert or replace the value for `key`.
    pub fn set(&mut self, key: SpecKey, value: u32) {
        self.values.insert(key, value);
    }

    /// Add a value while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: SpecKey, value: u32) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate over listed attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (SpecKey, u32)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    /// Report whether no attributes are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(SpecKey, u32)> for Specs {
    fn from_iter<I: IntoIterator<Item = (SpecKey, u32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
