//! Item attribute bits
//!
//! ```rust
//! use mu_formats::item;
//!
//! let bits = item::decode(&[0x0C, 0b1011_1100, 0x22, 0x08, 0x00]);
//! assert_eq!(bits.level(), 7);
//! assert!(bits.has_skill() && bits.has_luck());
//! assert_eq!(bits.excellent_options().names(), vec!["Speed"]);
//! ```

mod attributes;
mod excellent;

pub use attributes::{
    ItemAttributeBits, ItemDetails, ItemKey, MIN_ITEM_SPAN, decode, format_socket_option,
};
pub use excellent::{ExcellentOption, ExcellentOptions, parse_excellent_options};
