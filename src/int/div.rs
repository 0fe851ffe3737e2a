//! Quotient and remainder, truncating toward zero.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "../tests/int/div.rs"]
mod tests;



//		Packages																										

use super::Int;
use crate::{
	calculator,
	errors::{ArithmeticError, ArithmeticOperation},
};
use core::cmp::Ordering;



//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		checked_div															
	/// Checked integer division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs == 0` or the division
	/// results in overflow, which only happens for [`MIN`](Int::MIN) divided by
	/// `-1`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		self.try_div_rem(rhs).ok().map(|(quotient, _)| quotient)
	}

	//		checked_div_rem														
	/// Checked combined quotient and remainder.
	///
	/// Returns [`None`] under the same conditions as
	/// [`checked_div()`](Int::checked_div()).
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div_rem(self, rhs: Self) -> Option<(Self, Self)> {
		self.try_div_rem(rhs).ok()
	}

	//		checked_rem															
	/// Checked integer remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs == 0` or the division
	/// results in overflow.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		self.try_div_rem(rhs).ok().map(|(_, remainder)| remainder)
	}

	//		div_rem																
	/// Computes the quotient and remainder together.
	///
	/// The quotient truncates toward zero, and the remainder takes the sign of
	/// the dividend, so `quotient * rhs + remainder == self` always holds.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero, or on overflow.
	///
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn div_rem(self, rhs: Self) -> (Self, Self) {
		match self.try_div_rem(rhs) {
			Ok(result)                        => result,
			Err(ArithmeticError::DivideByZero) => panic!("Attempt to divide by zero"),
			Err(_)                            => panic!("Attempt to divide overflowed"),
		}
	}

	//		overflowing_div														
	/// Overflowing division.
	///
	/// Computes `self / rhs`, returning a tuple of the quotient and a boolean
	/// indicating whether an arithmetic overflow occurred. If an overflow would
	/// occur then `self` is returned.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
		if self.is_division_overflow(rhs) {
			(self, true)
		} else {
			(self.wrapping_div(rhs), false)
		}
	}

	//		overflowing_rem														
	/// Overflowing remainder.
	///
	/// Computes `self % rhs`, returning a tuple of the remainder and a boolean
	/// indicating whether an arithmetic overflow occurred. If an overflow would
	/// occur then `0` is returned.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
		(self.wrapping_rem(rhs), self.is_division_overflow(rhs))
	}

	//		saturating_div														
	/// Saturating integer division.
	///
	/// Computes `self / rhs`, saturating at the numeric bounds instead of
	/// overflowing, so [`MIN`](Int::MIN) divided by `-1` gives
	/// [`MAX`](Int::MAX).
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn saturating_div(self, rhs: Self) -> Self {
		if self.is_division_overflow(rhs) {
			Self::MAX
		} else {
			self.wrapping_div(rhs)
		}
	}

	//		try_div																
	/// Checked division that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero, and
	/// [`ArithmeticError::Overflow`] for [`MIN`](Int::MIN) divided by `-1`.
	///
	pub fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
		self.try_div_rem(rhs).map(|(quotient, _)| quotient)
	}

	//		try_div_rem															
	/// Checked combined quotient and remainder that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero, and
	/// [`ArithmeticError::Overflow`] for [`MIN`](Int::MIN) divided by `-1`.
	///
	pub fn try_div_rem(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivideByZero);
		}
		if self.is_division_overflow(rhs) {
			return Err(ArithmeticError::Overflow(ArithmeticOperation::Division));
		}
		Ok(self.div_rem_nonzero(rhs))
	}

	//		try_rem																
	/// Checked remainder that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivideByZero`] if `rhs` is zero, and
	/// [`ArithmeticError::Overflow`] for [`MIN`](Int::MIN) divided by `-1`.
	///
	pub fn try_rem(self, rhs: Self) -> Result<Self, ArithmeticError> {
		self.try_div_rem(rhs).map(|(_, remainder)| remainder)
	}

	//		wrapping_div														
	/// Wrapping integer division.
	///
	/// Computes `self / rhs`, wrapping around at the boundary of the type. The
	/// only case where wrapping occurs is [`MIN`](Int::MIN) divided by `-1`,
	/// which gives [`MIN`](Int::MIN).
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn wrapping_div(self, rhs: Self) -> Self {
		if rhs.is_zero() {
			panic!("Attempt to divide by zero");
		}
		self.div_rem_nonzero(rhs).0
	}

	//		wrapping_rem														
	/// Wrapping integer remainder.
	///
	/// Computes `self % rhs`, wrapping around at the boundary of the type. For
	/// [`MIN`](Int::MIN) divided by `-1` this gives `0`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn wrapping_rem(self, rhs: Self) -> Self {
		if rhs.is_zero() {
			panic!("Attempt to calculate remainder with a divisor of zero");
		}
		self.div_rem_nonzero(rhs).1
	}

	//		Private methods														

	//		div_rem_nonzero														
	/// Divides by a non-zero divisor, wrapping on overflow.
	///
	/// Signed values are divided as magnitudes. The quotient is negated when
	/// the signs differ, and the remainder takes the sign of the dividend.
	///
	fn div_rem_nonzero(self, rhs: Self) -> (Self, Self) {
		let (quotient, remainder) = self.unsigned_abs().div_rem_unsigned(rhs.unsigned_abs());
		let quotient              = Self(quotient.0);
		let remainder             = Self(remainder.0);
		(
			if self.is_negative() != rhs.is_negative() { quotient.wrapping_neg()  } else { quotient  },
			if self.is_negative()                      { remainder.wrapping_neg() } else { remainder },
		)
	}

	//		is_division_overflow												
	/// Whether this is the one signed division that overflows:
	/// [`MIN`](Int::MIN) divided by `-1`.
	fn is_division_overflow(self, rhs: Self) -> bool {
		SIGNED && self == Self::MIN && rhs.0.iter().all(|&limb| limb == u64::MAX)
	}
}

//󰭅		Int<LIMBS, false>														
impl<const LIMBS: usize> Int<LIMBS, false> {
	//		div_rem_unsigned													
	/// Unsigned division by a non-zero divisor.
	///
	/// Picks the cheapest path that fits the operands: a single-limb divisor,
	/// native 128-bit division, a narrower 256-bit division, an early exit when
	/// the divisor is not smaller than the dividend, and long division
	/// otherwise.
	///
	pub(crate) fn div_rem_unsigned(self, rhs: Self) -> (Self, Self) {
		let left_len  = self.significant_limbs();
		let right_len = rhs.significant_limbs();

		if right_len == 1 {
			let mut quotient = [0; LIMBS];
			let remainder    = calculator::div_rem_limb(&self.0, rhs.0[0], &mut quotient);
			return (Self(quotient), Self::from_u64(remainder));
		}

		if left_len <= 2 && right_len <= 2 {
			let (left, right) = (self.low_u128(), rhs.low_u128());
			#[expect(clippy::integer_division, reason = "Integer division is the operation being performed")]
			let quotient      = left / right;
			return (Self::from_u128_bits(quotient), Self::from_u128_bits(left % right));
		}

		if LIMBS > 4 && left_len <= 4 && right_len <= 4 {
			let (quotient, remainder) = narrow(self).div_rem_unsigned(narrow(rhs));
			return (widen(quotient), widen(remainder));
		}

		match rhs.cmp_unsigned(&self) {
			Ordering::Equal   => return (Self::ONE, Self::ZERO),
			Ordering::Greater => return (Self::ZERO, self),
			Ordering::Less    => {}
		}

		let mut quotient  = [0; LIMBS];
		let mut remainder = [0; LIMBS];
		calculator::div_rem(
			&self.0[..left_len],
			&rhs.0[..right_len],
			&mut quotient,
			&mut remainder,
		);
		(Self(quotient), Self(remainder))
	}
}



//		Functions																										

//		narrow																	
/// Keeps the low four limbs of a value known to fit in them.
fn narrow<const LIMBS: usize>(value: Int<LIMBS, false>) -> Int<4, false> {
	let mut limbs = [0; 4];
	for (out, &limb) in limbs.iter_mut().zip(&value.0) {
		*out = limb;
	}
	Int(limbs)
}

//		widen																	
/// Zero-extends a four-limb value.
fn widen<const LIMBS: usize>(value: Int<4, false>) -> Int<LIMBS, false> {
	let mut limbs = [0; LIMBS];
	for (out, &limb) in limbs.iter_mut().zip(&value.0) {
		*out = limb;
	}
	Int(limbs)
}
