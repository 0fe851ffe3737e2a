//! Conversions between integer widths and to and from the primitive types.
//!
//! Every conversion comes in three policies:
//!
//!   1. Checked, through [`TryFrom`] and [`checked_cast()`](Int::checked_cast()),
//!      which fails if the value cannot be represented exactly.
//!   2. Saturating, through [`SaturatingFrom`] and
//!      [`saturating_cast()`](Int::saturating_cast()), which clamps to the
//!      destination's bounds.
//!   3. Truncating, through [`TruncatingFrom`] and
//!      [`truncating_cast()`](Int::truncating_cast()), which keeps the
//!      low-order bits like an `as` cast.
//!
//! Primitive integers pass through a 128-bit [`Int`] on their way in or out,
//! so every primitive shares the same width logic.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]
#![allow(
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	reason = "Truncating conversions are the point of this module"
)]
#![allow(trivial_numeric_casts, reason = "The 128-bit primitives cast to themselves")]



//		Modules																											

#[cfg(test)]
#[path = "tests/conv.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::Int,
};



//		Traits																											

//§		SaturatingFrom															
/// Conversion that clamps out-of-range values to the destination's bounds.
///
/// NaN converts to zero.
///
pub trait SaturatingFrom<T>: Sized {
	//		saturating_from														
	/// Converts `value`, saturating at the numeric bounds of `Self`.
	#[must_use]
	fn saturating_from(value: T) -> Self;
}

//§		SaturatingInto															
/// The reciprocal of [`SaturatingFrom`], implemented automatically.
pub trait SaturatingInto<T>: Sized {
	//		saturating_into														
	/// Converts `self`, saturating at the numeric bounds of `T`.
	#[must_use]
	fn saturating_into(self) -> T;
}

//§		TruncatingFrom															
/// Conversion that keeps only the low-order bits that fit, wrapping silently.
///
/// Between integers this behaves like an `as` cast. From floating-point
/// values it behaves like saturation, as the `as` cast does.
///
pub trait TruncatingFrom<T>: Sized {
	//		truncating_from														
	/// Converts `value`, discarding the bits that do not fit.
	#[must_use]
	fn truncating_from(value: T) -> Self;
}

//§		TruncatingInto															
/// The reciprocal of [`TruncatingFrom`], implemented automatically.
pub trait TruncatingInto<T>: Sized {
	//		truncating_into														
	/// Converts `self`, discarding the bits that do not fit in `T`.
	#[must_use]
	fn truncating_into(self) -> T;
}

//󰭅		SaturatingInto															
impl<T, U: SaturatingFrom<T>> SaturatingInto<U> for T {
	//		saturating_into														
	fn saturating_into(self) -> U {
		U::saturating_from(self)
	}
}

//󰭅		TruncatingInto															
impl<T, U: TruncatingFrom<T>> TruncatingInto<U> for T {
	//		truncating_into														
	fn truncating_into(self) -> U {
		U::truncating_from(self)
	}
}



//		Casts																											

//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		checked_cast														
	/// Converts to another width and signedness, failing if the value does not
	/// fit.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::ValueIsNegative`] if a negative value is cast
	/// to an unsigned type, and [`ConversionError::ValueTooLarge`] for any
	/// other value outside the destination's range.
	///
	pub fn checked_cast<const L2: usize, const S2: bool>(self) -> Result<Int<L2, S2>, ConversionError> {
		let cast = self.truncating_cast::<L2, S2>();
		if cast.truncating_cast::<LIMBS, SIGNED>() == self && cast.is_negative() == self.is_negative() {
			Ok(cast)
		} else if self.is_negative() && !S2 {
			Err(ConversionError::ValueIsNegative)
		} else {
			Err(ConversionError::ValueTooLarge)
		}
	}

	//		saturating_cast														
	/// Converts to another width and signedness, clamping to the destination's
	/// bounds.
	#[must_use]
	pub fn saturating_cast<const L2: usize, const S2: bool>(self) -> Int<L2, S2> {
		self.checked_cast().unwrap_or(if self.is_negative() { Int::MIN } else { Int::MAX })
	}

	//		truncating_cast														
	/// Converts to another width and signedness, keeping the low-order bits.
	///
	/// Widening sign-extends signed sources and zero-extends unsigned ones.
	/// Narrowing drops the high limbs.
	///
	#[must_use]
	pub const fn truncating_cast<const L2: usize, const S2: bool>(self) -> Int<L2, S2> {
		let mut limbs = [self.sign_limb(); L2];
		let mut i     = 0;
		while i < LIMBS && i < L2 {
			limbs[i] = self.0[i];
			i       += 1;
		}
		Int::from_limbs(limbs)
	}

	//		checked_from_f64													
	/// Truncates toward zero, then checks the range.
	fn checked_from_f64(value: f64) -> Result<Self, ConversionError> {
		if !value.is_finite() {
			return Err(ConversionError::NotFinite);
		}
		let magnitude = Int::<LIMBS, false>::float_magnitude(value.abs().trunc())
			.ok_or(ConversionError::ValueTooLarge)?;
		if magnitude.is_zero() {
			return Ok(Self::ZERO);
		}
		let result = Self(magnitude.0);
		match (SIGNED, value.is_sign_negative()) {
			(false, true)  => Err(ConversionError::ValueIsNegative),
			(false, false) => Ok(result),
			(true,  false) => if result.is_negative() { Err(ConversionError::ValueTooLarge) } else { Ok(result) },
			//	Only a magnitude of exactly 2^(BITS-1) stays negative when negated
			(true,  true)  => {
				let negated = result.wrapping_neg();
				if negated.is_negative() { Ok(negated) } else { Err(ConversionError::ValueTooLarge) }
			}
		}
	}

	//		saturating_from_f64													
	/// NaN goes to zero, everything else clamps.
	fn saturating_from_f64(value: f64) -> Self {
		if value.is_nan() {
			return Self::ZERO;
		}
		Self::checked_from_f64(value).unwrap_or(if value.is_sign_negative() { Self::MIN } else { Self::MAX })
	}

	//		to_f64																
	/// Rounds to the nearest `f64`, ties to even.
	fn to_f64(self) -> f64 {
		let (top, shift) = self.unsigned_abs().float_parts();
		//	A shift beyond 448 cannot happen for 512 bits, so the scale is finite
		let magnitude    = (top as f64) * f64::from_bits((u64::from(shift) + 1023) << 52_u32);
		if self.is_negative() { -magnitude } else { magnitude }
	}

	//		to_f32																
	/// Rounds to the nearest `f32`, ties to even, overflowing to infinity.
	fn to_f32(self) -> f32 {
		let (top, shift) = self.unsigned_abs().float_parts();
		let magnitude    = if shift > 127 {
			f32::INFINITY
		} else {
			(top as f32) * f32::from_bits((shift + 127) << 23_u32)
		};
		if self.is_negative() { -magnitude } else { magnitude }
	}
}

//󰭅		Int<LIMBS, false>														
impl<const LIMBS: usize> Int<LIMBS, false> {
	//		float_magnitude														
	/// Builds the magnitude of a finite, non-negative, integral float directly
	/// from its exponent and significand bits.
	///
	/// Returns [`None`] if the magnitude needs more than [`BITS`](Int::BITS)
	/// bits.
	///
	fn float_magnitude(value: f64) -> Option<Self> {
		if value < 1.0 {
			return Some(Self::ZERO);
		}
		let bits     = value.to_bits();
		let exponent = ((bits >> 52_u32) & 0x7FF) as i32 - 1075;
		let mantissa = (bits & ((1 << 52_u32) - 1)) | (1 << 52_u32);
		if exponent < 0 {
			//	Integral values never shift out set bits
			return Some(Self::from_u64(mantissa >> exponent.unsigned_abs()));
		}
		let exponent = exponent.unsigned_abs();
		if exponent + 53 > Self::BITS {
			return None;
		}
		Some(Self::from_u64(mantissa).shift_left(exponent))
	}

	//		float_parts															
	/// Splits the value into its top 64 bits and the shift that scales them
	/// back.
	///
	/// Any set bits below the top 64 are folded into the lowest bit, which is
	/// enough for the float conversion to round correctly since neither float
	/// type keeps more than 53 of them.
	///
	fn float_parts(self) -> (u64, u32) {
		let length = Self::BITS - self.leading_zeros();
		if length <= 64 {
			return (self.0[0], 0);
		}
		let shift  = length - 64;
		let sticky = self.trailing_zeros() < shift;
		(self.shift_right(shift, 0).0[0] | u64::from(sticky), shift)
	}
}



//		Implementations: floats																							

//󰭅		TryFrom: f64 -> Int														
impl<const LIMBS: usize, const SIGNED: bool> TryFrom<f64> for Int<LIMBS, SIGNED> {
	type Error = ConversionError;

	//		try_from															
	fn try_from(value: f64) -> Result<Self, Self::Error> {
		Self::checked_from_f64(value)
	}
}

//󰭅		TryFrom: f32 -> Int														
impl<const LIMBS: usize, const SIGNED: bool> TryFrom<f32> for Int<LIMBS, SIGNED> {
	type Error = ConversionError;

	//		try_from															
	fn try_from(value: f32) -> Result<Self, Self::Error> {
		Self::checked_from_f64(f64::from(value))
	}
}

//󰭅		TryFrom: Int -> f64														
impl<const LIMBS: usize, const SIGNED: bool> TryFrom<Int<LIMBS, SIGNED>> for f64 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(value: Int<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
		let result = value.to_f64();
		if result.is_infinite() { Err(ConversionError::ValueTooLarge) } else { Ok(result) }
	}
}

//󰭅		TryFrom: Int -> f32														
impl<const LIMBS: usize, const SIGNED: bool> TryFrom<Int<LIMBS, SIGNED>> for f32 {
	type Error = ConversionError;

	//		try_from															
	fn try_from(value: Int<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
		let result = value.to_f32();
		if result.is_infinite() { Err(ConversionError::ValueTooLarge) } else { Ok(result) }
	}
}

//󰭅		SaturatingFrom: f64 -> Int												
impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<f64> for Int<LIMBS, SIGNED> {
	//		saturating_from														
	fn saturating_from(value: f64) -> Self {
		Self::saturating_from_f64(value)
	}
}

//󰭅		SaturatingFrom: f32 -> Int												
impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<f32> for Int<LIMBS, SIGNED> {
	//		saturating_from														
	fn saturating_from(value: f32) -> Self {
		Self::saturating_from_f64(f64::from(value))
	}
}

//󰭅		SaturatingFrom: Int -> f64												
impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<Int<LIMBS, SIGNED>> for f64 {
	//		saturating_from														
	fn saturating_from(value: Int<LIMBS, SIGNED>) -> Self {
		value.to_f64().clamp(Self::MIN, Self::MAX)
	}
}

//󰭅		SaturatingFrom: Int -> f32												
impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<Int<LIMBS, SIGNED>> for f32 {
	//		saturating_from														
	fn saturating_from(value: Int<LIMBS, SIGNED>) -> Self {
		value.to_f32().clamp(Self::MIN, Self::MAX)
	}
}

//󰭅		TruncatingFrom: f64 -> Int												
impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<f64> for Int<LIMBS, SIGNED> {
	//		truncating_from														
	fn truncating_from(value: f64) -> Self {
		Self::saturating_from_f64(value)
	}
}

//󰭅		TruncatingFrom: f32 -> Int												
impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<f32> for Int<LIMBS, SIGNED> {
	//		truncating_from														
	fn truncating_from(value: f32) -> Self {
		Self::saturating_from_f64(f64::from(value))
	}
}

//󰭅		TruncatingFrom: Int -> f64												
impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<Int<LIMBS, SIGNED>> for f64 {
	//		truncating_from														
	fn truncating_from(value: Int<LIMBS, SIGNED>) -> Self {
		value.to_f64()
	}
}

//󰭅		TruncatingFrom: Int -> f32												
impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<Int<LIMBS, SIGNED>> for f32 {
	//		truncating_from														
	fn truncating_from(value: Int<LIMBS, SIGNED>) -> Self {
		value.to_f32()
	}
}



//		Implementations: char																							

//󰭅		From: char -> Int														
impl<const LIMBS: usize, const SIGNED: bool> From<char> for Int<LIMBS, SIGNED> {
	//		from																
	fn from(value: char) -> Self {
		Self::from_u64(u64::from(value))
	}
}

//󰭅		SaturatingFrom: char -> Int												
impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<char> for Int<LIMBS, SIGNED> {
	//		saturating_from														
	fn saturating_from(value: char) -> Self {
		Self::from(value)
	}
}

//󰭅		TruncatingFrom: char -> Int												
impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<char> for Int<LIMBS, SIGNED> {
	//		truncating_from														
	fn truncating_from(value: char) -> Self {
		Self::from(value)
	}
}

//󰭅		TryFrom: Int -> char													
impl<const LIMBS: usize, const SIGNED: bool> TryFrom<Int<LIMBS, SIGNED>> for char {
	type Error = ConversionError;

	//		try_from															
	fn try_from(value: Int<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
		let code = u32::try_from(value)?;
		Self::from_u32(code).ok_or(ConversionError::InvalidCodePoint(code))
	}
}



//		Implementations: primitive integers																				

//		signed_primitive														
/// Implements the conversion matrix for a signed primitive, bridged through
/// `Int<2, true>`.
macro_rules! signed_primitive {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: $t -> Int												
		impl<const LIMBS: usize, const SIGNED: bool> TryFrom<$t> for Int<LIMBS, SIGNED> {
			type Error = ConversionError;

			//		try_from													
			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Int::<2, true>::from_i128_bits(value as i128).checked_cast()
			}
		}

		//󰭅		TryFrom: Int -> $t												
		impl<const LIMBS: usize, const SIGNED: bool> TryFrom<Int<LIMBS, SIGNED>> for $t {
			type Error = ConversionError;

			//		try_from													
			fn try_from(value: Int<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
				let wide = value.checked_cast::<2, true>()?.low_u128() as i128;
				Self::try_from(wide).map_err(|_| ConversionError::ValueTooLarge)
			}
		}

		//󰭅		SaturatingFrom: $t -> Int										
		impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<$t> for Int<LIMBS, SIGNED> {
			//		saturating_from												
			fn saturating_from(value: $t) -> Self {
				Int::<2, true>::from_i128_bits(value as i128).saturating_cast()
			}
		}

		//󰭅		SaturatingFrom: Int -> $t										
		impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<Int<LIMBS, SIGNED>> for $t {
			//		saturating_from												
			fn saturating_from(value: Int<LIMBS, SIGNED>) -> Self {
				Self::try_from(value).unwrap_or(if value.is_negative() { Self::MIN } else { Self::MAX })
			}
		}

		//󰭅		TruncatingFrom: $t -> Int										
		impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<$t> for Int<LIMBS, SIGNED> {
			//		truncating_from												
			fn truncating_from(value: $t) -> Self {
				Int::<2, true>::from_i128_bits(value as i128).truncating_cast()
			}
		}

		//󰭅		TruncatingFrom: Int -> $t										
		impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<Int<LIMBS, SIGNED>> for $t {
			//		truncating_from												
			fn truncating_from(value: Int<LIMBS, SIGNED>) -> Self {
				value.low_u128() as Self
			}
		}
	)*};
}

//		unsigned_primitive														
/// Implements the conversion matrix for an unsigned primitive, bridged
/// through `Int<2, false>`.
macro_rules! unsigned_primitive {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: $t -> Int												
		impl<const LIMBS: usize, const SIGNED: bool> TryFrom<$t> for Int<LIMBS, SIGNED> {
			type Error = ConversionError;

			//		try_from													
			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Int::<2, false>::from_u128_bits(value as u128).checked_cast()
			}
		}

		//󰭅		TryFrom: Int -> $t												
		impl<const LIMBS: usize, const SIGNED: bool> TryFrom<Int<LIMBS, SIGNED>> for $t {
			type Error = ConversionError;

			//		try_from													
			fn try_from(value: Int<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
				let wide = value.checked_cast::<2, false>()?.low_u128();
				Self::try_from(wide).map_err(|_| ConversionError::ValueTooLarge)
			}
		}

		//󰭅		SaturatingFrom: $t -> Int										
		impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<$t> for Int<LIMBS, SIGNED> {
			//		saturating_from												
			fn saturating_from(value: $t) -> Self {
				Int::<2, false>::from_u128_bits(value as u128).saturating_cast()
			}
		}

		//󰭅		SaturatingFrom: Int -> $t										
		impl<const LIMBS: usize, const SIGNED: bool> SaturatingFrom<Int<LIMBS, SIGNED>> for $t {
			//		saturating_from												
			fn saturating_from(value: Int<LIMBS, SIGNED>) -> Self {
				Self::try_from(value).unwrap_or(if value.is_negative() { Self::MIN } else { Self::MAX })
			}
		}

		//󰭅		TruncatingFrom: $t -> Int										
		impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<$t> for Int<LIMBS, SIGNED> {
			//		truncating_from												
			fn truncating_from(value: $t) -> Self {
				Int::<2, false>::from_u128_bits(value as u128).truncating_cast()
			}
		}

		//󰭅		TruncatingFrom: Int -> $t										
		impl<const LIMBS: usize, const SIGNED: bool> TruncatingFrom<Int<LIMBS, SIGNED>> for $t {
			//		truncating_from												
			fn truncating_from(value: Int<LIMBS, SIGNED>) -> Self {
				value.low_u128() as Self
			}
		}
	)*};
}

signed_primitive!(i8, i16, i32, i64, i128, isize);
unsigned_primitive!(u8, u16, u32, u64, u128, usize);
