//! Contains error types used throughout the library.



//		Packages																										

use core::fmt::{Display, Formatter, self};
use thiserror::Error as ThisError;



//		Enums																											

//		ArithmeticError															
/// Represents all possible failures of checked arithmetic.
///
/// These are returned by the `try_*` family of methods. The `checked_*`
/// methods collapse them into [`None`], and the operators panic with the
/// matching message.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor was zero.
	#[error("Attempt to divide by zero")]
	DivideByZero,

	/// The result of the operation cannot be represented in the type.
	#[error("Arithmetic operation resulted in an overflow: {0}")]
	Overflow(ArithmeticOperation),
}

//		ArithmeticOperation														
/// The operation that triggered an [`ArithmeticError::Overflow`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ArithmeticOperation {
	/// Addition, including increment.
	Addition,

	/// Subtraction, including decrement.
	Subtraction,

	/// Multiplication, including exponentiation.
	Multiplication,

	/// Division or remainder.
	Division,

	/// Negation, including absolute value.
	Negation,
}

//󰭅		Display																	
impl Display for ArithmeticOperation {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			Self::Addition       => "addition",
			Self::Subtraction    => "subtraction",
			Self::Multiplication => "multiplication",
			Self::Division       => "division",
			Self::Negation       => "negation",
		})
	}
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
///
/// This covers conversions between numeric kinds, reading from bytes, and
/// parsing or formatting text.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The destination buffer cannot hold the full width of the value.
	#[error("Buffer too small: {needed} bytes needed, {actual} available")]
	BufferTooSmall {
		/// The number of bytes the value occupies.
		needed: usize,
		/// The number of bytes the buffer provides.
		actual: usize,
	},

	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The value is not a valid Unicode scalar value.
	#[error("Invalid code point: {0:#x}")]
	InvalidCodePoint(u32),

	/// The incoming value is not a valid integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The format specifier is not understood.
	#[error("Invalid format specifier: {0}")]
	InvalidFormat(String),

	/// The incoming value is not a valid integer.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),

	/// The incoming floating-point value is NaN or infinite.
	#[error("Value is not finite")]
	NotFinite,

	/// There is no defined mapping between the two kinds.
	#[error("Unsupported conversion from {from} to {to}")]
	UnsupportedConversion {
		/// The source kind.
		from: String,
		/// The destination kind.
		to:   String,
	},

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
