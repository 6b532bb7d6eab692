//! Item attribute bit projection

use super::excellent::ExcellentOptions;

// Byte offsets within an item span
const OPTION_BYTE: usize = 1;
const EXCELLENT_BYTE: usize = 3;
const ANCIENT_BYTE: usize = 4;
const GROUP_BYTE: usize = 5;
const SOCKET_START: usize = 7;
const SOCKET_END: usize = 12;

/// Shortest span that carries attributes
pub const MIN_ITEM_SPAN: usize = 3;

/// Item table key: group and index within the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    /// Item group (weapons, armour pieces, jewels, ...)
    pub group: u8,
    /// Index within the group
    pub index: u16,
}

/// Read-only view of the attribute bits in an item span.
///
/// ```text
/// byte 1: [skill:1][level:4][luck:1][option:2]
/// byte 3: [-:1][option+4:1][excellent:6]
/// byte 4: [-:4][ancient:4]
/// ```
///
/// Every accessor re-reads the borrowed bytes. Spans shorter than three bytes
/// decode as an empty item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAttributeBits<'a> {
    bytes: &'a [u8],
}

impl<'a> ItemAttributeBits<'a> {
    /// Wrap an item span
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Underlying span
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    fn byte(&self, index: usize) -> u8 {
        if self.bytes.len() < MIN_ITEM_SPAN {
            return 0;
        }
        self.bytes.get(index).copied().unwrap_or(0)
    }

    /// Enhancement level, 0..=15
    pub fn level(&self) -> u8 {
        (self.byte(OPTION_BYTE) >> 3) & 0x0F
    }

    /// Item carries its weapon skill
    pub fn has_skill(&self) -> bool {
        self.byte(OPTION_BYTE) & 0x80 != 0
    }

    /// Item carries luck
    pub fn has_luck(&self) -> bool {
        self.byte(OPTION_BYTE) & 0x04 != 0
    }

    /// Additional option level, 0..=7
    ///
    /// The low two bits sit in byte 1; the third comes from bit 6 of the
    /// excellent byte.
    pub fn option_level(&self) -> u8 {
        let low = self.byte(OPTION_BYTE) & 0x03;
        if self.byte(EXCELLENT_BYTE) & 0x40 != 0 {
            low | 0b100
        } else {
            low
        }
    }

    /// Excellent option bits
    pub fn excellent_options(&self) -> ExcellentOptions {
        ExcellentOptions::from_byte(self.byte(EXCELLENT_BYTE))
    }

    /// Any excellent option is set
    pub fn is_excellent(&self) -> bool {
        self.excellent_options().any()
    }

    /// Ancient set bits are non-zero
    pub fn is_ancient(&self) -> bool {
        self.byte(ANCIENT_BYTE) & 0x0F != 0
    }

    /// Skill, luck or an additional option is present
    pub fn has_blue_options(&self) -> bool {
        self.has_skill() || self.has_luck() || self.option_level() > 0
    }

    /// Group and index of the item, when the span is long enough
    pub fn item_key(&self) -> Option<ItemKey> {
        if self.bytes.len() <= GROUP_BYTE {
            return None;
        }
        Some(ItemKey {
            group: self.bytes[GROUP_BYTE] >> 4,
            index: u16::from(self.bytes[0]),
        })
    }

    /// Socket slot bytes of a full item span (empty when absent)
    pub fn socket_bytes(&self) -> &'a [u8] {
        let end = self.bytes.len().min(SOCKET_END);
        self.bytes.get(SOCKET_START..end).unwrap_or_default()
    }

    /// Copy the decoded values out of the span
    pub fn details(&self) -> ItemDetails {
        ItemDetails {
            level: self.level(),
            has_skill: self.has_skill(),
            has_luck: self.has_luck(),
            option_level: self.option_level(),
            is_excellent: self.is_excellent(),
            is_ancient: self.is_ancient(),
        }
    }
}

/// Decode the attribute bits of an item span.
pub const fn decode(bytes: &[u8]) -> ItemAttributeBits<'_> {
    ItemAttributeBits::new(bytes)
}

/// Snapshot of the attribute bits, detached from the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemDetails {
    /// Enhancement level
    pub level: u8,
    /// Weapon skill present
    pub has_skill: bool,
    /// Luck present
    pub has_luck: bool,
    /// Additional option level
    pub option_level: u8,
    /// Any excellent option set
    pub is_excellent: bool,
    /// Ancient set item
    pub is_ancient: bool,
}

impl ItemDetails {
    /// Skill, luck or an additional option is present
    pub const fn has_blue_options(&self) -> bool {
        self.has_skill || self.has_luck || self.option_level > 0
    }
}

/// Tooltip label for a socket slot byte
pub fn format_socket_option(socket: u8) -> String {
    format!("S:{socket}")
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_flag_only() {
        let bits = decode(&[0, 0b1000_0000, 0]);
        assert!(bits.has_skill());
        assert_eq!(bits.level(), 0);
        assert!(!bits.has_luck());
        assert!(bits.has_blue_options());
    }

    #[test]
    fn test_max_level() {
        assert_eq!(decode(&[0, 0b0111_1000, 0]).level(), 15);
    }

    #[test]
    fn test_luck_and_option_bits() {
        let bits = decode(&[0, 0b0000_0111, 0]);
        assert!(bits.has_luck());
        assert_eq!(bits.option_level(), 3);
        assert!(!bits.has_skill());
    }

    #[test]
    fn test_option_carry_from_excellent_byte() {
        let bits = decode(&[0, 0b0000_0001, 0, 0b0100_0000]);
        assert_eq!(bits.option_level(), 5);
        assert!(!bits.is_excellent());
    }

    #[test]
    fn test_excellent_and_ancient() {
        let bits = decode(&[0, 0, 0, 0b0000_0101, 0x05]);
        assert!(bits.is_excellent());
        assert_eq!(bits.excellent_options().names(), vec!["MP/8", "Dmg%"]);
        assert!(bits.is_ancient());

        assert!(!decode(&[0, 0, 0, 0, 0xF0]).is_ancient());
    }

    #[test]
    fn test_short_span_is_empty() {
        for span in [&[][..], &[0xFFu8][..], &[0xFF, 0xFF][..]] {
            let bits = decode(span);
            assert_eq!(bits.details(), ItemDetails::default());
            assert!(!bits.has_blue_options());
            assert_eq!(bits.item_key(), None);
        }
    }

    #[test]
    fn test_missing_trailing_bytes_read_as_zero() {
        let bits = decode(&[0, 0b1111_1111, 0]);
        assert_eq!(bits.level(), 15);
        assert_eq!(bits.option_level(), 3);
        assert!(!bits.is_excellent());
        assert!(!bits.is_ancient());
    }

    #[test]
    fn test_item_key() {
        let bits = decode(&[12, 0, 0, 0, 0, 0x70]);
        assert_eq!(bits.item_key(), Some(ItemKey { group: 7, index: 12 }));
        assert_eq!(decode(&[12, 0, 0, 0, 0]).item_key(), None);
    }

    #[test]
    fn test_socket_bytes() {
        let full = [0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5];
        assert_eq!(decode(&full).socket_bytes(), &[1, 2, 3, 4, 5]);
        assert!(decode(&full[..6]).socket_bytes().is_empty());
        assert_eq!(decode(&full[..9]).socket_bytes(), &[1, 2]);
        assert_eq!(format_socket_option(17), "S:17");
    }

    #[test]
    fn test_details_snapshot() {
        let details = decode(&[0, 0b1010_1100, 0, 0x41, 0x01]).details();
        assert_eq!(
            details,
            ItemDetails {
                level: 5,
                has_skill: true,
                has_luck: true,
                option_level: 4,
                is_excellent: true,
                is_ancient: true,
            }
        );
        assert!(details.has_blue_options());
    }
}
