//! Text formatting in decimal, hexadecimal, octal, and binary.
//!
//! The digit algorithms are written once against [`FormattableInteger`] and
//! shared by every unsigned [`Int`] width, as well as by [`u64`] and [`u128`].
//! Signed values are formatted through their unsigned magnitude or bit
//! pattern.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Digit buffers are sized from the digit count before being filled"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Digit positions are bounded by the digit count")]
#![allow(clippy::cast_possible_truncation, reason = "Remainders below 100 fit in a byte")]



//		Modules																											

#[cfg(test)]
#[path = "tests/fmt.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::Int,
};
use core::fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self};



//		Constants																										

/// Every two-digit decimal pair, in order, so that `n` is at `2 * n`.
const DIGIT_PAIRS: &[u8; 200] = b"\
	0001020304050607080910111213141516171819\
	2021222324252627282930313233343536373839\
	4041424344454647484950515253545556575859\
	6061626364656667686970717273747576777879\
	8081828384858687888990919293949596979899";

/// The largest digit count accepted by [`Int::format()`].
pub const MAX_PRECISION: usize = 999_999_999;

/// Digits for bases up to sixteen.
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Digits for bases up to sixteen, in upper case.
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The powers `10^(2^k)` that fit in 512 bits, as little-endian limbs.
const POWERS_OF_TEN: [[u64; 8]; 8] = [
	[0x0000_0000_0000_000A, 0, 0, 0, 0, 0, 0, 0],
	[0x0000_0000_0000_0064, 0, 0, 0, 0, 0, 0, 0],
	[0x0000_0000_0000_2710, 0, 0, 0, 0, 0, 0, 0],
	[0x0000_0000_05F5_E100, 0, 0, 0, 0, 0, 0, 0],
	[0x0023_86F2_6FC1_0000, 0, 0, 0, 0, 0, 0, 0],
	[0x85AC_EF81_0000_0000, 0x0000_04EE_2D6D_415B, 0, 0, 0, 0, 0, 0],
	[0, 0x6E38_ED64_BF6A_1F01, 0xE93F_F9F4_DAA7_97ED, 0x0000_0000_0018_4F03, 0, 0, 0, 0],
	[
		0,
		0,
		0x03DF_9909_2E95_3E01,
		0x2374_E42F_0F15_38FD,
		0xC404_DC08_D3CF_F5EC,
		0xA633_7F19_BCCD_B0DA,
		0x0000_024E_E91F_2603,
		0,
	],
];

/// The bit length of each entry in [`POWERS_OF_TEN`].
const POWER_OF_TEN_BITS: [u32; 8] = [4, 7, 14, 27, 54, 107, 213, 426];



//		Traits																											

//§		FormattableInteger														
/// An unsigned integer that the shared digit algorithms can format.
///
/// Implementors provide the base constants, the powers of ten used for
/// counting decimal digits, and unsigned division.
///
pub trait FormattableInteger: Copy + Ord {
	/// The width in bits.
	const BITS: u32;

	/// The value `10`, the decimal base.
	const TEN: Self;

	/// The value `100`, the square of the decimal base.
	const HUNDRED: Self;

	/// The number of decimal digits in the largest value.
	const MAX_DECIMAL_DIGITS: usize;

	/// How many of the powers `10^(2^k)` fit in the type.
	const DECIMAL_POWER_COUNT: usize;

	//		decimal_power														
	/// Returns `10^(2^k)`.
	///
	/// # Parameters
	///
	/// * `k` - The index of the power, less than
	///         [`DECIMAL_POWER_COUNT`](FormattableInteger::DECIMAL_POWER_COUNT).
	///
	fn decimal_power(k: usize) -> Self;

	//		div_rem																
	/// Unsigned division by a non-zero divisor, returning the quotient and
	/// remainder.
	fn div_rem(self, rhs: Self) -> (Self, Self);

	//		leading_zeros														
	/// The number of leading zero bits.
	fn leading_zeros(self) -> u32;

	//		low_byte															
	/// The least-significant eight bits.
	fn low_byte(self) -> u8;

	//		shr_bits															
	/// Logical shift right by fewer than [`BITS`](FormattableInteger::BITS)
	/// bits.
	#[must_use]
	fn shr_bits(self, n: u32) -> Self;
}

//󰭅		FormattableInteger: u64													
impl FormattableInteger for u64 {
	const BITS:                u32   = Self::BITS;
	const TEN:                 Self  = 10;
	const HUNDRED:             Self  = 100;
	const MAX_DECIMAL_DIGITS:  usize = 20;
	const DECIMAL_POWER_COUNT: usize = 5;

	//		decimal_power														
	fn decimal_power(k: usize) -> Self {
		POWERS_OF_TEN[k][0]
	}

	//		div_rem																
	#[expect(clippy::integer_division, reason = "Integer division is the operation being performed")]
	fn div_rem(self, rhs: Self) -> (Self, Self) {
		(self / rhs, self % rhs)
	}

	//		leading_zeros														
	fn leading_zeros(self) -> u32 {
		Self::leading_zeros(self)
	}

	//		low_byte															
	fn low_byte(self) -> u8 {
		self as u8
	}

	//		shr_bits															
	fn shr_bits(self, n: u32) -> Self {
		self >> n
	}
}

//󰭅		FormattableInteger: u128												
impl FormattableInteger for u128 {
	const BITS:                u32   = Self::BITS;
	const TEN:                 Self  = 10;
	const HUNDRED:             Self  = 100;
	const MAX_DECIMAL_DIGITS:  usize = 39;
	const DECIMAL_POWER_COUNT: usize = 6;

	//		decimal_power														
	fn decimal_power(k: usize) -> Self {
		(u128::from(POWERS_OF_TEN[k][1]) << 64_u32) | u128::from(POWERS_OF_TEN[k][0])
	}

	//		div_rem																
	#[expect(clippy::integer_division, reason = "Integer division is the operation being performed")]
	fn div_rem(self, rhs: Self) -> (Self, Self) {
		(self / rhs, self % rhs)
	}

	//		leading_zeros														
	fn leading_zeros(self) -> u32 {
		Self::leading_zeros(self)
	}

	//		low_byte															
	fn low_byte(self) -> u8 {
		self as u8
	}

	//		shr_bits															
	fn shr_bits(self, n: u32) -> Self {
		self >> n
	}
}

//󰭅		FormattableInteger: Int													
impl<const LIMBS: usize> FormattableInteger for Int<LIMBS, false> {
	const BITS:    u32  = Self::BITS;
	const TEN:     Self = Self::from_u64(10);
	const HUNDRED: Self = Self::from_u64(100);

	//	log10(2) is just over 0.30103
	#[expect(clippy::integer_division, reason = "Rounding down is intended")]
	const MAX_DECIMAL_DIGITS:  usize = (LIMBS * 64 * 30_103) / 100_000 + 1;

	const DECIMAL_POWER_COUNT: usize = {
		let mut count = 0;
		while count < POWER_OF_TEN_BITS.len() && POWER_OF_TEN_BITS[count] <= Self::BITS {
			count += 1;
		}
		count
	};

	//		decimal_power														
	fn decimal_power(k: usize) -> Self {
		let mut limbs = [0; LIMBS];
		limbs.copy_from_slice(&POWERS_OF_TEN[k][..LIMBS]);
		Self::from_limbs(limbs)
	}

	//		div_rem																
	fn div_rem(self, rhs: Self) -> (Self, Self) {
		self.div_rem_unsigned(rhs)
	}

	//		leading_zeros														
	fn leading_zeros(self) -> u32 {
		Self::leading_zeros(self)
	}

	//		low_byte															
	fn low_byte(self) -> u8 {
		self.0[0] as u8
	}

	//		shr_bits															
	fn shr_bits(self, n: u32) -> Self {
		self.shift_right(n, 0)
	}
}



//		Functions																										

//		count_decimal_digits													
/// Counts the decimal digits of a value, with zero having one digit.
///
/// Divides out the powers `10^(2^k)` from the largest down, so each power is
/// used at most once and the count is assembled in binary.
///
pub fn count_decimal_digits<T: FormattableInteger>(value: T) -> usize {
	let mut digits = 1;
	let mut rest   = value;
	for k in (0..T::DECIMAL_POWER_COUNT).rev() {
		let power = T::decimal_power(k);
		if rest >= power {
			rest    = rest.div_rem(power).0;
			digits += 1 << k;
		}
	}
	digits
}

//		count_radix_digits														
/// Counts the digits of a value in a power-of-two base, with zero having one
/// digit.
///
/// # Parameters
///
/// * `value` - The value to count the digits of.
/// * `shift` - The number of bits per digit.
///
pub fn count_radix_digits<T: FormattableInteger>(value: T, shift: u32) -> usize {
	let bits = T::BITS - value.leading_zeros();
	(bits.div_ceil(shift).max(1)) as usize
}

//		to_decimal_digits														
/// Renders a value in decimal, zero-padded to at least `min_digits`.
///
/// Fills a buffer of [`MAX_DECIMAL_DIGITS`](FormattableInteger::MAX_DECIMAL_DIGITS)
/// from the right, two digits per division.
///
pub fn to_decimal_digits<T: FormattableInteger>(value: T, min_digits: usize) -> String {
	let width      = T::MAX_DECIMAL_DIGITS.max(min_digits);
	let mut buffer = vec![b'0'; width];
	let mut next   = width;
	let mut rest   = value;
	while rest >= T::HUNDRED {
		let (quotient, remainder) = rest.div_rem(T::HUNDRED);
		let pair                  = usize::from(remainder.low_byte()) * 2;
		buffer[next - 2..next].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
		next                     -= 2;
		rest                      = quotient;
	}
	if rest >= T::TEN {
		let pair = usize::from(rest.low_byte()) * 2;
		buffer[next - 2..next].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
		next    -= 2;
	} else {
		buffer[next - 1]  = b'0' + rest.low_byte();
		next             -= 1;
	}
	//	Unused leading zeros are dropped unless the padding needs them
	buffer[next.min(width - min_digits)..].iter().copied().map(char::from).collect()
}

//		to_radix_digits															
/// Renders a value in a power-of-two base, zero-padded to at least
/// `min_digits`.
///
/// # Parameters
///
/// * `value`      - The value to render.
/// * `shift`      - The number of bits per digit: 1, 3, or 4.
/// * `upper`      - Whether to use upper-case letters.
/// * `min_digits` - The minimum number of digits to produce.
///
pub fn to_radix_digits<T: FormattableInteger>(value: T, shift: u32, upper: bool, min_digits: usize) -> String {
	let count   = count_radix_digits(value, shift);
	let digits  = if upper { UPPER_DIGITS } else { LOWER_DIGITS };
	let mask    = (1_u8 << shift) - 1;
	let width   = count.max(min_digits);
	let mut out = String::with_capacity(width);
	for _ in count..width {
		out.push('0');
	}
	for i in (0..count).rev() {
		//	The top digit may hold fewer than `shift` bits
		let digit = value.shr_bits(i as u32 * shift).low_byte() & mask;
		out.push(char::from(digits[usize::from(digit)]));
	}
	out
}



//		Formatting																										

//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		format																
	/// Formats the value according to a format specifier.
	///
	/// The specifier is a letter optionally followed by a minimum number of
	/// digits, which are zero-padded:
	///
	///   - `D` or `d` for decimal, which is also used for an empty specifier.
	///     Negative values are prefixed with `-`.
	///   - `X` or `x` for hexadecimal, in upper or lower case.
	///   - `B` or `b` for binary.
	///
	/// Hexadecimal and binary show the two's complement bit pattern of
	/// negative values.
	///
	/// # Parameters
	///
	/// * `spec` - The format specifier, e.g. `"X64"`.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::InvalidFormat`] if the letter is not one of
	/// the above, or if the digit count is not a number or exceeds
	/// [`MAX_PRECISION`].
	///
	pub fn format(&self, spec: &str) -> Result<String, ConversionError> {
		let mut chars  = spec.chars();
		let letter     = chars.next().unwrap_or('D');
		let precision  = chars.as_str();
		let min_digits = if precision.is_empty() {
			0
		} else {
			precision.parse::<usize>()
				.ok()
				.filter(|&digits| digits <= MAX_PRECISION)
				.ok_or_else(|| ConversionError::InvalidFormat(spec.to_owned()))?
		};
		let bits = self.cast_unsigned();
		match letter {
			'D' | 'd' => {
				let digits = to_decimal_digits(self.unsigned_abs(), min_digits);
				Ok(if self.is_negative() { format!("-{digits}") } else { digits })
			}
			'X' => Ok(to_radix_digits(bits, 4, true,  min_digits)),
			'x' => Ok(to_radix_digits(bits, 4, false, min_digits)),
			'B' | 'b' => Ok(to_radix_digits(bits, 1, false, min_digits)),
			_         => Err(ConversionError::InvalidFormat(spec.to_owned())),
		}
	}
}

//󰭅		Binary																	
impl<const LIMBS: usize, const SIGNED: bool> Binary for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &to_radix_digits(self.cast_unsigned(), 1, false, 0))
	}
}

//󰭅		Debug																	
impl<const LIMBS: usize, const SIGNED: bool> Debug for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(self, f)
	}
}

//󰭅		Display																	
impl<const LIMBS: usize, const SIGNED: bool> Display for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &to_decimal_digits(self.unsigned_abs(), 0))
	}
}

//󰭅		LowerHex																
impl<const LIMBS: usize, const SIGNED: bool> LowerHex for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &to_radix_digits(self.cast_unsigned(), 4, false, 0))
	}
}

//󰭅		Octal																	
impl<const LIMBS: usize, const SIGNED: bool> Octal for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0o", &to_radix_digits(self.cast_unsigned(), 3, false, 0))
	}
}

//󰭅		UpperHex																
impl<const LIMBS: usize, const SIGNED: bool> UpperHex for Int<LIMBS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &to_radix_digits(self.cast_unsigned(), 4, true, 0))
	}
}
