//! Carry and borrow propagating addition, subtraction, and negation.

#![allow(clippy::indexing_slicing, reason = "We always know the size")]



//		Modules																											

#[cfg(test)]
#[path = "../tests/int/add.rs"]
mod tests;



//		Packages																										

use super::Int;
use crate::errors::{ArithmeticError, ArithmeticOperation};
use core::cmp::Ordering;



//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		abs																	
	/// Computes the absolute value.
	///
	/// # Panics
	///
	/// Panics if `self` is [`MIN`](Int::MIN) for a signed type, as there is no
	/// positive counterpart.
	///
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn abs(self) -> Self {
		self.checked_abs().expect("Attempt to negate overflowed")
	}

	//		checked_abs															
	/// Checked absolute value.
	///
	/// Returns [`None`] for [`MIN`](Int::MIN) of a signed type.
	///
	#[must_use]
	pub const fn checked_abs(self) -> Option<Self> {
		if self.is_negative() { self.checked_neg() } else { Some(self) }
	}

	//		checked_add															
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn checked_add(self, rhs: Self) -> Option<Self> {
		match self.overflowing_add(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_copysign													
	/// Checked sign copy.
	///
	/// Returns a value with the magnitude of `self` and the sign of `sign`,
	/// or [`None`] if that value cannot be represented. This happens only for
	/// [`MIN`](Int::MIN) with a non-negative `sign`. Unsigned values are
	/// returned unchanged.
	///
	/// # Parameters
	///
	/// * `sign` - The value whose sign is copied.
	///
	#[must_use]
	pub const fn checked_copysign(self, sign: Self) -> Option<Self> {
		if self.is_negative() == sign.is_negative() { Some(self) } else { self.checked_neg() }
	}

	//		checked_decrement													
	/// Checked decrement, i.e. `self - 1`.
	#[must_use]
	pub const fn checked_decrement(self) -> Option<Self> {
		self.checked_sub(Self::ONE)
	}

	//		checked_increment													
	/// Checked increment, i.e. `self + 1`.
	#[must_use]
	pub const fn checked_increment(self) -> Option<Self> {
		self.checked_add(Self::ONE)
	}

	//		checked_neg															
	/// Checked negation.
	///
	/// Computes `-self`, returning [`None`] if the result cannot be
	/// represented. For signed types this happens only for
	/// [`MIN`](Int::MIN); for unsigned types it happens for every non-zero
	/// value.
	///
	#[must_use]
	pub const fn checked_neg(self) -> Option<Self> {
		match self.overflowing_neg() {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_sub															
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
		match self.overflowing_sub(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		copysign															
	/// Returns a value with the magnitude of `self` and the sign of `sign`.
	///
	/// # Parameters
	///
	/// * `sign` - The value whose sign is copied.
	///
	/// # Panics
	///
	/// Panics if `self` is [`MIN`](Int::MIN) and `sign` is not negative.
	///
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn copysign(self, sign: Self) -> Self {
		self.checked_copysign(sign).expect("Attempt to negate overflowed")
	}

	//		decrement															
	/// Wrapping decrement, i.e. `self - 1` with wraparound at
	/// [`MIN`](Int::MIN).
	#[must_use]
	pub const fn decrement(self) -> Self {
		self.wrapping_sub(Self::ONE)
	}

	//		increment															
	/// Wrapping increment, i.e. `self + 1` with wraparound at
	/// [`MAX`](Int::MAX).
	#[must_use]
	pub const fn increment(self) -> Self {
		self.wrapping_add(Self::ONE)
	}

	//		max_magnitude														
	/// Returns whichever of `self` and `other` has the greater absolute value.
	///
	/// When the magnitudes are equal the non-negative value is returned.
	/// [`MIN`](Int::MIN) has the greatest magnitude of any signed value.
	///
	/// # Parameters
	///
	/// * `other` - The value to compare against.
	///
	#[must_use]
	pub fn max_magnitude(self, other: Self) -> Self {
		match self.unsigned_abs().cmp(&other.unsigned_abs()) {
			Ordering::Greater => self,
			Ordering::Less    => other,
			Ordering::Equal   => if self.is_negative() { other } else { self },
		}
	}

	//		min_magnitude														
	/// Returns whichever of `self` and `other` has the smaller absolute value.
	///
	/// When the magnitudes are equal the negative value is returned.
	///
	/// # Parameters
	///
	/// * `other` - The value to compare against.
	///
	#[must_use]
	pub fn min_magnitude(self, other: Self) -> Self {
		match self.unsigned_abs().cmp(&other.unsigned_abs()) {
			Ordering::Less    => self,
			Ordering::Greater => other,
			Ordering::Equal   => if self.is_negative() { self } else { other },
		}
	}

	//		overflowing_add														
	/// Overflowing addition.
	///
	/// Computes `self + rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	///
	/// For unsigned types the overflow is the carry out of the top limb. For
	/// signed types it is set when both operands share a sign and the result's
	/// sign differs.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
		let (result, carry) = self.carrying_add(rhs);
		if SIGNED {
			let sign = self.is_negative();
			(result, sign == rhs.is_negative() && sign != result.is_negative())
		} else {
			(result, carry)
		}
	}

	//		overflowing_neg														
	/// Overflowing negation.
	///
	/// Computes `0 - self`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	///
	#[must_use]
	pub const fn overflowing_neg(self) -> (Self, bool) {
		Self::ZERO.overflowing_sub(self)
	}

	//		overflowing_sub														
	/// Overflowing subtraction.
	///
	/// Computes `self - rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	///
	/// For unsigned types the overflow is the borrow out of the top limb. For
	/// signed types it is set when the operands have different signs and the
	/// result's sign differs from `self`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
		let (result, borrow) = self.borrowing_sub(rhs);
		if SIGNED {
			let sign = self.is_negative();
			(result, sign != rhs.is_negative() && sign != result.is_negative())
		} else {
			(result, borrow)
		}
	}

	//		saturating_add														
	/// Saturating addition.
	///
	/// Computes `self + rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn saturating_add(self, rhs: Self) -> Self {
		match self.overflowing_add(rhs) {
			(result, false) => result,
			//	Overflow can only happen towards the sign of the operands
			(_,      true)  => if rhs.is_negative() { Self::MIN } else { Self::MAX },
		}
	}

	//		saturating_neg														
	/// Saturating negation.
	///
	/// Signed [`MIN`](Int::MIN) saturates to [`MAX`](Int::MAX), and every
	/// unsigned value saturates to zero.
	///
	#[must_use]
	pub const fn saturating_neg(self) -> Self {
		match self.overflowing_neg() {
			(result, false)  => result,
			(_,      true)   => if SIGNED { Self::MAX } else { Self::ZERO },
		}
	}

	//		saturating_sub														
	/// Saturating subtraction.
	///
	/// Computes `self - rhs`, saturating at the numeric bounds instead of
	/// overflowing.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn saturating_sub(self, rhs: Self) -> Self {
		match self.overflowing_sub(rhs) {
			(result, false) => result,
			(_,      true)  => if SIGNED && !rhs.is_negative() { Self::MIN }
				else if SIGNED { Self::MAX }
				else { Self::ZERO },
		}
	}

	//		try_add																
	/// Checked addition that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result cannot be
	/// represented.
	///
	pub const fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
		match self.checked_add(rhs) {
			Some(result) => Ok(result),
			None         => Err(ArithmeticError::Overflow(ArithmeticOperation::Addition)),
		}
	}

	//		try_neg																
	/// Checked negation that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result cannot be
	/// represented.
	///
	pub const fn try_neg(self) -> Result<Self, ArithmeticError> {
		match self.checked_neg() {
			Some(result) => Ok(result),
			None         => Err(ArithmeticError::Overflow(ArithmeticOperation::Negation)),
		}
	}

	//		try_sub																
	/// Checked subtraction that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result cannot be
	/// represented.
	///
	pub const fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
		match self.checked_sub(rhs) {
			Some(result) => Ok(result),
			None         => Err(ArithmeticError::Overflow(ArithmeticOperation::Subtraction)),
		}
	}

	//		unsigned_abs														
	/// Computes the absolute value as an unsigned integer of the same width.
	///
	/// This never overflows: signed [`MIN`](Int::MIN) maps to `MAX + 1` of the
	/// signed type, which the unsigned type can hold.
	///
	#[must_use]
	pub const fn unsigned_abs(self) -> Int<LIMBS, false> {
		if self.is_negative() {
			self.wrapping_neg().cast_unsigned()
		} else {
			self.cast_unsigned()
		}
	}

	//		wrapping_abs														
	/// Wrapping absolute value, where signed [`MIN`](Int::MIN) maps to itself.
	#[must_use]
	pub const fn wrapping_abs(self) -> Self {
		if self.is_negative() { self.wrapping_neg() } else { self }
	}

	//		wrapping_add														
	/// Wrapping addition.
	///
	/// Computes `self + rhs`, wrapping around at the boundary of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub const fn wrapping_add(self, rhs: Self) -> Self {
		self.carrying_add(rhs).0
	}

	//		wrapping_neg														
	/// Wrapping negation, i.e. `0 - self` modulo the width.
	#[must_use]
	pub const fn wrapping_neg(self) -> Self {
		Self::ZERO.wrapping_sub(self)
	}

	//		wrapping_sub														
	/// Wrapping subtraction.
	///
	/// Computes `self - rhs`, wrapping around at the boundary of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub const fn wrapping_sub(self, rhs: Self) -> Self {
		self.borrowing_sub(rhs).0
	}

	//		Private methods														

	//		borrowing_sub														
	/// Subtracts limb by limb, returning the result and the final borrow.
	///
	/// A limb borrows when its difference comes out larger than the left
	/// operand's limb.
	///
	pub(crate) const fn borrowing_sub(self, rhs: Self) -> (Self, bool) {
		let mut result = [0; LIMBS];
		let mut borrow = 0_u64;
		let mut i      = 0;
		while i < LIMBS {
			let left  = self.0[i];
			let diff  = left.wrapping_sub(rhs.0[i]);
			let out   = diff.wrapping_sub(borrow);
			borrow    = (diff > left || (borrow == 1 && out == u64::MAX)) as u64;
			result[i] = out;
			i        += 1;
		}
		(Self(result), borrow != 0)
	}

	//		carrying_add														
	/// Adds limb by limb, returning the result and the final carry.
	///
	/// A limb carries when its sum comes out smaller than the left operand's
	/// limb.
	///
	pub(crate) const fn carrying_add(self, rhs: Self) -> (Self, bool) {
		let mut result = [0; LIMBS];
		let mut carry  = 0_u64;
		let mut i      = 0;
		while i < LIMBS {
			let left  = self.0[i];
			let sum   = left.wrapping_add(rhs.0[i]);
			let out   = sum.wrapping_add(carry);
			carry     = (sum < left || (carry == 1 && out == 0)) as u64;
			result[i] = out;
			i        += 1;
		}
		(Self(result), carry != 0)
	}
}
