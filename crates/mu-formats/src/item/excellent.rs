//! Excellent option bits

use std::fmt;

/// A single excellent bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExcellentOption {
    /// Mana recovered on hit (bit 0)
    ManaPerHit,
    /// Life recovered on hit (bit 1)
    HealthPerHit,
    /// Extra damage percent (bit 2)
    DamagePercent,
    /// Attack / movement speed (bit 3)
    Speed,
    /// Excellent damage rate (bit 4)
    Rate,
    /// Zen drop increase (bit 5)
    ZenDrop,
}

impl ExcellentOption {
    /// All options in increasing bit order
    pub const ALL: [Self; 6] = [
        Self::ManaPerHit,
        Self::HealthPerHit,
        Self::DamagePercent,
        Self::Speed,
        Self::Rate,
        Self::ZenDrop,
    ];

    /// Bit mask of the option within the excellent byte
    pub const fn mask(self) -> u8 {
        match self {
            Self::ManaPerHit => 0x01,
            Self::HealthPerHit => 0x02,
            Self::DamagePercent => 0x04,
            Self::Speed => 0x08,
            Self::Rate => 0x10,
            Self::ZenDrop => 0x20,
        }
    }

    /// Short label shown in item tooltips
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManaPerHit => "MP/8",
            Self::HealthPerHit => "HP/8",
            Self::DamagePercent => "Dmg%",
            Self::Speed => "Speed",
            Self::Rate => "Rate",
            Self::ZenDrop => "Zen",
        }
    }
}

impl fmt::Display for ExcellentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six excellent option bits of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExcellentOptions(u8);

impl ExcellentOptions {
    /// Bits that carry options
    pub const MASK: u8 = 0x3F;

    /// Take the option bits from an excellent byte, ignoring the upper two bits
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte & Self::MASK)
    }

    /// Raw option bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether any option is set
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Check a single option
    pub const fn has(self, option: ExcellentOption) -> bool {
        self.0 & option.mask() != 0
    }

    /// Set options in increasing bit order
    pub fn iter(self) -> impl Iterator<Item = ExcellentOption> {
        ExcellentOption::ALL
            .into_iter()
            .filter(move |&option| self.has(option))
    }

    /// Labels of the set options in increasing bit order
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(ExcellentOption::name).collect()
    }
}

/// Labels for every option bit set in `byte`, in increasing bit order.
pub fn parse_excellent_options(byte: u8) -> Vec<&'static str> {
    ExcellentOptions::from_byte(byte).names()
}
