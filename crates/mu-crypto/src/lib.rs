//! Cryptographic primitives for MU client asset containers
//!
//! Every encrypted asset the client ships (BMD record tables, language packs,
//! some texture wrappers) is protected by the same position-keyed XOR stream.
//! This crate provides that transform and its well known key constants.
//!
//! # Examples
//!
//! ```
//! use mu_crypto::xor3::{self, BMD_EXTRA_KEY};
//!
//! let plain = b"Twisting Slash";
//! let cipher = xor3::decrypt(plain, BMD_EXTRA_KEY);
//! assert_eq!(xor3::decrypt(&cipher, BMD_EXTRA_KEY), plain);
//! ```

#![warn(missing_docs)]

pub mod xor3;

pub use xor3::{BMD_EXTRA_KEY, XOR3_KEY, Xor3Cipher, decrypt};
