//! Text parsing in decimal, hexadecimal, octal, binary, and arbitrary radix.

#![allow(clippy::arithmetic_side_effects, reason = "Flag arithmetic on plain bit masks")]



//		Modules																											

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::Int,
};
use core::{
	ops::{BitOr, BitOrAssign},
	str::FromStr,
};



//		Structs																											

//		NumberStyles															
/// Flags that control which syntax [`Int::parse_with_style()`] accepts.
///
/// Individual flags combine with `|`. The composite styles cover the common
/// cases:
///
///   - [`INTEGER`](NumberStyles::INTEGER): surrounding whitespace and a
///     leading sign, with decimal digits.
///   - [`HEX_NUMBER`](NumberStyles::HEX_NUMBER): surrounding whitespace and
///     hexadecimal digits, read as a raw bit pattern.
///   - [`BINARY_NUMBER`](NumberStyles::BINARY_NUMBER): surrounding whitespace
///     and binary digits, read as a raw bit pattern.
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NumberStyles(u32);

//󰭅		NumberStyles															
impl NumberStyles {
	/// No surrounding syntax, only decimal digits.
	pub const NONE:                   Self = Self(0);

	/// Leading whitespace is ignored.
	pub const ALLOW_LEADING_WHITE:    Self = Self(1);

	/// Trailing whitespace is ignored.
	pub const ALLOW_TRAILING_WHITE:   Self = Self(1 << 1_u32);

	/// A single leading `+` or `-` is accepted.
	pub const ALLOW_LEADING_SIGN:     Self = Self(1 << 2_u32);

	/// Commas are accepted between decimal digits as group separators.
	pub const ALLOW_THOUSANDS:        Self = Self(1 << 3_u32);

	/// The digits are hexadecimal and form a raw bit pattern.
	pub const ALLOW_HEX_SPECIFIER:    Self = Self(1 << 4_u32);

	/// The digits are binary and form a raw bit pattern.
	pub const ALLOW_BINARY_SPECIFIER: Self = Self(1 << 5_u32);

	/// Whitespace on either side.
	pub const WHITESPACE:             Self = Self(Self::ALLOW_LEADING_WHITE.0 | Self::ALLOW_TRAILING_WHITE.0);

	/// Whitespace and a leading sign around decimal digits.
	pub const INTEGER:                Self = Self(Self::WHITESPACE.0 | Self::ALLOW_LEADING_SIGN.0);

	/// Whitespace around hexadecimal digits.
	pub const HEX_NUMBER:             Self = Self(Self::WHITESPACE.0 | Self::ALLOW_HEX_SPECIFIER.0);

	/// Whitespace around binary digits.
	pub const BINARY_NUMBER:          Self = Self(Self::WHITESPACE.0 | Self::ALLOW_BINARY_SPECIFIER.0);

	//		contains															
	/// Determines if every flag in `other` is set.
	#[must_use]
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}
}

//󰭅		BitOr																	
impl BitOr for NumberStyles {
	type Output = Self;

	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		Self(self.0 | rhs.0)
	}
}

//󰭅		BitOrAssign																
impl BitOrAssign for NumberStyles {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}



//		Parsing																											

//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		from_str_radix														
	/// Parses a string in the given radix, like the primitive integers'
	/// `from_str_radix()`.
	///
	/// An optional single `+` or `-` may precede the digits. Letters are
	/// accepted in either case.
	///
	/// # Parameters
	///
	/// * `s`     - The string to parse.
	/// * `radix` - The radix, from 2 to 36.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidFormat`] if the radix is out of range,
	/// [`ConversionError::EmptyValue`] if there are no digits,
	/// [`ConversionError::InvalidDigit`] or [`ConversionError::InvalidRadix`]
	/// for a bad digit, and [`ConversionError::ValueTooLarge`] or
	/// [`ConversionError::ValueIsNegative`] if the value does not fit.
	///
	pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ConversionError> {
		let radix = u8::try_from(radix)
			.ok()
			.filter(|radix| (2..=36).contains(radix))
			.ok_or_else(|| ConversionError::InvalidFormat(format!("radix {radix}")))?;
		let (negative, digits) = split_sign(s);
		Self::with_sign(accumulate(digits, radix, |_| false)?, negative)
	}

	//		parse																
	/// Parses a string into this integer type.
	///
	/// This is the same as using [`str::parse()`].
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// If the number is invalid, an error will be returned.
	///
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		s.parse()
	}

	//		parse_with_style													
	/// Parses a string with explicit control over the accepted syntax.
	///
	/// Decimal input is a signed magnitude. Hexadecimal and binary input is a
	/// raw bit pattern with no sign, so for signed types a full-width pattern
	/// with the top bit set is negative.
	///
	/// # Parameters
	///
	/// * `s`     - The string to parse.
	/// * `style` - The syntax to accept.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::EmptyValue`] if there are no digits,
	/// [`ConversionError::InvalidDigit`] or [`ConversionError::InvalidRadix`]
	/// for a bad character, and [`ConversionError::ValueTooLarge`] or
	/// [`ConversionError::ValueIsNegative`] if the value does not fit.
	///
	pub fn parse_with_style(s: &str, style: NumberStyles) -> Result<Self, ConversionError> {
		let mut text = s;
		if style.contains(NumberStyles::ALLOW_LEADING_WHITE) {
			text = text.trim_start();
		}
		if style.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
			text = text.trim_end();
		}
		if text.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		if style.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
			return Ok(Self(accumulate_bits(text, 4)?.0));
		}
		if style.contains(NumberStyles::ALLOW_BINARY_SPECIFIER) {
			return Ok(Self(accumulate_bits(text, 1)?.0));
		}

		let (negative, digits) = if style.contains(NumberStyles::ALLOW_LEADING_SIGN) {
			split_sign(text)
		} else {
			(false, text)
		};
		let thousands = style.contains(NumberStyles::ALLOW_THOUSANDS);
		Self::with_sign(accumulate(digits, 10, |c| thousands && c == ',')?, negative)
	}

	//		Private methods														

	//		with_sign															
	/// Applies a sign to a parsed magnitude, checking the range.
	fn with_sign(magnitude: Int<LIMBS, false>, negative: bool) -> Result<Self, ConversionError> {
		let value = Self(magnitude.0);
		if !negative || magnitude.is_zero() {
			return if SIGNED && value.is_negative() { Err(ConversionError::ValueTooLarge) } else { Ok(value) };
		}
		if !SIGNED {
			return Err(ConversionError::ValueIsNegative);
		}
		//	Only a magnitude of exactly 2^(BITS-1) stays negative when negated
		let negated = value.wrapping_neg();
		if negated.is_negative() { Ok(negated) } else { Err(ConversionError::ValueTooLarge) }
	}
}

//󰭅		FromStr																	
impl<const LIMBS: usize, const SIGNED: bool> FromStr for Int<LIMBS, SIGNED> {
	type Err = ConversionError;

	//		from_str															
	/// Parses surrounding whitespace, an optional sign, an optional `0x`, `0o`,
	/// or `0b` prefix, and digits with optional `_` separators.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		let (negative, without_sign) = split_sign(trimmed);

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (without_base, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(without_sign, 10)
			}
		;

		Self::with_sign(accumulate(without_base, radix, |c| c == '_')?, negative)
	}
}



//		Functions																										

//		accumulate																
/// Accumulates digits into an unsigned magnitude by multiply-then-add,
/// failing as soon as the value no longer fits.
///
/// # Parameters
///
/// * `digits` - The digits to read, most significant first.
/// * `radix`  - The radix of the digits.
/// * `skip`   - Which separator characters to ignore once a digit has been
///              seen.
///
fn accumulate<const LIMBS: usize>(
	digits: &str,
	radix:  u8,
	skip:   impl Fn(char) -> bool,
) -> Result<Int<LIMBS, false>, ConversionError> {
	let base       = Int::<LIMBS, false>::from_u64(u64::from(radix));
	let mut value  = Int::<LIMBS, false>::ZERO;
	let mut any    = false;
	for c in digits.chars() {
		if any && skip(c) {
			continue;
		}
		let digit = digit_value(c, radix)?;
		value     = value
			.checked_mul(base)
			.and_then(|v| v.checked_add(Int::from_u64(u64::from(digit))))
			.ok_or(ConversionError::ValueTooLarge)?;
		any       = true;
	}
	if any { Ok(value) } else { Err(ConversionError::EmptyValue) }
}

//		accumulate_bits															
/// Accumulates digits of a power-of-two radix into a raw bit pattern,
/// failing if any set bit would be shifted out.
///
/// # Parameters
///
/// * `digits` - The digits to read, most significant first.
/// * `shift`  - The number of bits per digit: 1 or 4.
///
fn accumulate_bits<const LIMBS: usize>(digits: &str, shift: u32) -> Result<Int<LIMBS, false>, ConversionError> {
	let radix     = 1_u8 << shift;
	let mut value = Int::<LIMBS, false>::ZERO;
	for c in digits.chars() {
		let digit = digit_value(c, radix)?;
		if value.leading_zeros() < shift {
			return Err(ConversionError::ValueTooLarge);
		}
		value = (value << shift) | Int::from_u64(u64::from(digit));
	}
	Ok(value)
}

//		digit_value																
/// The value of a single digit, accepting letters in either case.
fn digit_value(c: char, radix: u8) -> Result<u8, ConversionError> {
	#[expect(clippy::cast_possible_truncation, reason = "Digits in radix 36 are below 36")]
	let digit = c.to_digit(36).ok_or(ConversionError::InvalidDigit(c))? as u8;
	if digit >= radix {
		return Err(ConversionError::InvalidRadix(c, radix));
	}
	Ok(digit)
}

//		split_sign																
/// Strips a single leading `+` or `-`, reporting whether it was negative.
fn split_sign(s: &str) -> (bool, &str) {
	if let Some(rest) = s.strip_prefix('-') {
		(true, rest)
	} else {
		(false, s.strip_prefix('+').unwrap_or(s))
	}
}
