//! The Wideint crate is a library of fixed-width 256-bit and 512-bit signed
//! and unsigned integers.
//!
//! Every width is an instance of [`Int`], a stack-allocated array of 64-bit
//! limbs with a compile-time signedness flag. The arithmetic mirrors the
//! standard library's primitive integers: `checked_*`, `wrapping_*`,
//! `saturating_*`, and `overflowing_*` variants, plus `try_*` variants that
//! return an [`ArithmeticError`]. Operators panic on overflow.
//!
//! ```
//! use wideint::{I256, U256};
//!
//! let big = U256::MAX;
//! assert_eq!(big.checked_add(U256::ONE), None);
//! assert_eq!(big.wrapping_add(U256::ONE), U256::ZERO);
//!
//! let negative: I256 = "-12345678901234567890123456789".parse().unwrap();
//! assert_eq!(negative.to_string(), "-12345678901234567890123456789");
//! ```



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

pub mod calculator;
mod codec;
mod conv;
mod errors;
mod fmt;
mod int;
mod interop;
mod parse;



//		Packages																										

pub use conv::{SaturatingFrom, SaturatingInto, TruncatingFrom, TruncatingInto};
pub use errors::{ArithmeticError, ArithmeticOperation, ConversionError};
pub use fmt::{FormattableInteger, MAX_PRECISION, count_decimal_digits, count_radix_digits, to_decimal_digits, to_radix_digits};
pub use int::{I256, I512, Int, MAX_LIMBS, SInt, U256, U512, UInt};
pub use parse::NumberStyles;
