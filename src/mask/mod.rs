//! Text masks
//!
//! A mask is a token sequence of literals and placeholder slots. [`apply`]
//! turns raw input into display text and [`extract_raw`] goes back; for input
//! made of acceptable characters the two round-trip.
//!
//! # Example
//!
//! ```ignore
//! let phone = Mask::parse("(999) 999-9999");
//! let shown = phone.apply("5551234567", '_', true);
//! assert_eq!(shown.formatted, "(555) 123-4567");
//! assert_eq!(phone.extract_raw(&shown.formatted), "5551234567");
//! ```

pub mod codec;
pub mod input;
pub mod token;

pub use codec::{apply, extract_raw, Masked, DEFAULT_MASK_CHAR};
pub use input::MaskedInput;
pub use token::{CharClass, Mask, MaskSyntax, MaskToken, Placeholder};
