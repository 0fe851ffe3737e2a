//! Widening, overflow-checked, and power multiplication.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]
#![allow(clippy::cast_possible_truncation, reason = "Splitting double-limb values into limbs")]



//		Modules																											

#[cfg(test)]
#[path = "../tests/int/mul.rs"]
mod tests;



//		Packages																										

use super::{Int, MAX_LIMBS};
use crate::{
	calculator,
	errors::{ArithmeticError, ArithmeticOperation},
};



//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		checked_mul															
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		match self.overflowing_mul(rhs) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		checked_pow															
	/// Checked exponentiation.
	///
	/// Computes `self.pow(exp)`, returning [`None`] if overflow occurred.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent to raise `self` to.
	///
	#[must_use]
	pub fn checked_pow(self, exp: u32) -> Option<Self> {
		match self.overflowing_pow(exp) {
			(result, false) => Some(result),
			(_,      true)  => None,
		}
	}

	//		overflowing_mul														
	/// Overflowing multiplication.
	///
	/// Computes `self * rhs`, returning a tuple of the wrapped result and a
	/// boolean indicating whether an arithmetic overflow occurred.
	///
	/// The result overflowed exactly when the upper half of the full product is
	/// not simply the sign extension of the lower half.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
		let (low, high) = self.widening_mul(rhs);
		let result      = Self(low.0);
		let extension   = result.sign_limb();
		(result, high.0.iter().any(|&limb| limb != extension))
	}

	//		overflowing_pow														
	/// Overflowing exponentiation.
	///
	/// Computes `self.pow(exp)` by repeated squaring, returning a tuple of the
	/// wrapped result and a boolean indicating whether an arithmetic overflow
	/// occurred at any step.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent to raise `self` to.
	///
	#[must_use]
	pub fn overflowing_pow(self, mut exp: u32) -> (Self, bool) {
		let mut base     = self;
		let mut result   = Self::ONE;
		let mut overflow = false;
		while exp > 0 {
			if exp & 1 == 1 {
				let (product, o) = result.overflowing_mul(base);
				result           = product;
				overflow        |= o;
			}
			exp >>= 1_u32;
			//	Only square when another multiplication will use it
			if exp > 0 {
				let (square, o) = base.overflowing_mul(base);
				base            = square;
				overflow       |= o;
			}
		}
		(result, overflow)
	}

	//		pow																	
	/// Raises `self` to the power of `exp`.
	///
	/// # Panics
	///
	/// Panics if the result overflows.
	///
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn pow(self, exp: u32) -> Self {
		self.checked_pow(exp).expect("Attempt to multiply overflowed")
	}

	//		saturating_mul														
	/// Saturating multiplication.
	///
	/// Computes `self * rhs`, saturating at the numeric bounds instead of
	/// overflowing. The bound is chosen by the sign the true product would
	/// have.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn saturating_mul(self, rhs: Self) -> Self {
		match self.overflowing_mul(rhs) {
			(result, false) => result,
			(_,      true)  => if self.is_negative() == rhs.is_negative() { Self::MAX } else { Self::MIN },
		}
	}

	//		saturating_pow														
	/// Saturating exponentiation.
	///
	/// Computes `self.pow(exp)`, saturating at the numeric bounds instead of
	/// overflowing. A negative base with an odd exponent saturates to
	/// [`MIN`](Int::MIN).
	///
	/// # Parameters
	///
	/// * `exp` - The exponent to raise `self` to.
	///
	#[must_use]
	pub fn saturating_pow(self, exp: u32) -> Self {
		match self.overflowing_pow(exp) {
			(result, false) => result,
			(_,      true)  => if self.is_negative() && exp & 1 == 1 { Self::MIN } else { Self::MAX },
		}
	}

	//		try_mul																
	/// Checked multiplication that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result cannot be
	/// represented.
	///
	pub fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
		self.checked_mul(rhs).ok_or(ArithmeticError::Overflow(ArithmeticOperation::Multiplication))
	}

	//		try_pow																
	/// Checked exponentiation that reports the failure.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result cannot be
	/// represented.
	///
	pub fn try_pow(self, exp: u32) -> Result<Self, ArithmeticError> {
		self.checked_pow(exp).ok_or(ArithmeticError::Overflow(ArithmeticOperation::Multiplication))
	}

	//		widening_mul														
	/// Computes the full double-width product.
	///
	/// Returns the lower half, which is always unsigned, and the upper half,
	/// which carries the sign of the product for signed types. Together they
	/// hold the exact result, so this never overflows.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	/// # Examples
	///
	/// ```
	/// use wideint::U256;
	///
	/// let (low, high) = U256::MAX.widening_mul(U256::from_u64(2));
	/// assert_eq!(high, U256::ONE);
	/// assert_eq!(low,  U256::MAX - U256::ONE);
	/// ```
	///
	#[must_use]
	pub fn widening_mul(self, rhs: Self) -> (Int<LIMBS, false>, Self) {
		let (low, high) = multiply_limbs(&self.0, &rhs.0);
		let mut high    = Self(high);
		//	The unsigned product of the bit patterns over-counts by 2^BITS times
		//	each negative operand's partner
		if self.is_negative() {
			high = high.wrapping_sub(rhs);
		}
		if rhs.is_negative() {
			high = high.wrapping_sub(self);
		}
		(Int(low), high)
	}

	//		wrapping_mul														
	/// Wrapping multiplication.
	///
	/// Computes `self * rhs`, wrapping around at the boundary of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn wrapping_mul(self, rhs: Self) -> Self {
		let mut product = [0_u64; MAX_LIMBS];
		calculator::multiply(
			calculator::significant(&self.0),
			calculator::significant(&rhs.0),
			&mut product[..LIMBS],
		);
		let mut limbs = [0; LIMBS];
		limbs.copy_from_slice(&product[..LIMBS]);
		Self(limbs)
	}

	//		wrapping_pow														
	/// Wrapping exponentiation.
	///
	/// Computes `self.pow(exp)`, wrapping around at the boundary of the type.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent to raise `self` to.
	///
	#[must_use]
	pub fn wrapping_pow(self, exp: u32) -> Self {
		self.overflowing_pow(exp).0
	}
}



//		Functions																										

//		multiply_limbs															
/// Multiplies two limb arrays as unsigned values, returning the lower and
/// upper halves of the full product.
///
/// Single-limb operands avoid the general schoolbook loop.
///
fn multiply_limbs<const LIMBS: usize>(left: &[u64; LIMBS], right: &[u64; LIMBS]) -> ([u64; LIMBS], [u64; LIMBS]) {
	let mut product = [0_u64; 2 * MAX_LIMBS];
	let a           = calculator::significant(left);
	let b           = calculator::significant(right);
	match (a, b) {
		([], _) | (_, []) => {}
		(&[x], &[y])      => {
			let p      = u128::from(x) * u128::from(y);
			product[0] = p as u64;
			product[1] = (p >> 64_u32) as u64;
		}
		(_, &[y])         => {
			let carry        = calculator::multiply_limb(a, y, &mut product);
			product[a.len()] = carry;
		}
		(&[x], _)         => {
			let carry        = calculator::multiply_limb(b, x, &mut product);
			product[b.len()] = carry;
		}
		_                 => calculator::multiply(a, b, &mut product[..a.len() + b.len()]),
	}
	let mut low  = [0; LIMBS];
	let mut high = [0; LIMBS];
	low.copy_from_slice(&product[..LIMBS]);
	high.copy_from_slice(&product[LIMBS..2 * LIMBS]);
	(low, high)
}
