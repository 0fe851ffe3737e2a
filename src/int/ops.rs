//! Operator trait implementations.
//!
//! The arithmetic operators panic on overflow in every build profile, using
//! the same checks as the `checked_*` methods. Bitwise operators work limb by
//! limb, and shift amounts are reduced modulo the bit width.

#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "../tests/int/ops.rs"]
mod tests;



//		Packages																										

use super::Int;
use core::{
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
};
use crate::errors::ArithmeticError;



//󰭅		Add																		
impl<const LIMBS: usize, const SIGNED: bool> Add for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		add																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.checked_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign																
impl<const LIMBS: usize, const SIGNED: bool> AddAssign for Int<LIMBS, SIGNED> {
	//		add_assign															
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd																	
impl<const LIMBS: usize, const SIGNED: bool> BitAnd for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		self.and_limbs(rhs)
	}
}

//󰭅		BitAndAssign															
impl<const LIMBS: usize, const SIGNED: bool> BitAndAssign for Int<LIMBS, SIGNED> {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr																	
impl<const LIMBS: usize, const SIGNED: bool> BitOr for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		self.or_limbs(rhs)
	}
}

//󰭅		BitOrAssign																
impl<const LIMBS: usize, const SIGNED: bool> BitOrAssign for Int<LIMBS, SIGNED> {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor																	
impl<const LIMBS: usize, const SIGNED: bool> BitXor for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		self.xor_limbs(rhs)
	}
}

//󰭅		BitXorAssign															
impl<const LIMBS: usize, const SIGNED: bool> BitXorAssign for Int<LIMBS, SIGNED> {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Div																		
impl<const LIMBS: usize, const SIGNED: bool> Div for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		div																	
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		match self.try_div(rhs) {
			Ok(quotient)                       => quotient,
			Err(ArithmeticError::DivideByZero) => panic!("Attempt to divide by zero"),
			Err(_)                             => panic!("Attempt to divide overflowed"),
		}
	}
}

//󰭅		DivAssign																
impl<const LIMBS: usize, const SIGNED: bool> DivAssign for Int<LIMBS, SIGNED> {
	//		div_assign															
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		Mul																		
impl<const LIMBS: usize, const SIGNED: bool> Mul for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		mul																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.checked_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign																
impl<const LIMBS: usize, const SIGNED: bool> MulAssign for Int<LIMBS, SIGNED> {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg																		
impl<const LIMBS: usize, const SIGNED: bool> Neg for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		neg																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn neg(self) -> Self::Output {
		self.checked_neg().expect("Attempt to negate overflowed")
	}
}

//󰭅		Not																		
impl<const LIMBS: usize, const SIGNED: bool> Not for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		not																	
	fn not(self) -> Self::Output {
		self.not_limbs()
	}
}

//󰭅		Product																	
impl<const LIMBS: usize, const SIGNED: bool> Product for Int<LIMBS, SIGNED> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

//󰭅		Product<&>																
impl<'a, const LIMBS: usize, const SIGNED: bool> Product<&'a Self> for Int<LIMBS, SIGNED> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ONE, |acc, &x| acc * x)
	}
}

//󰭅		Rem																		
impl<const LIMBS: usize, const SIGNED: bool> Rem for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		rem																	
	#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		match self.try_rem(rhs) {
			Ok(remainder)                      => remainder,
			Err(ArithmeticError::DivideByZero) => panic!("Attempt to calculate remainder with a divisor of zero"),
			Err(_)                             => panic!("Attempt to calculate remainder overflowed"),
		}
	}
}

//󰭅		RemAssign																
impl<const LIMBS: usize, const SIGNED: bool> RemAssign for Int<LIMBS, SIGNED> {
	//		rem_assign															
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Shl																		
impl<const LIMBS: usize, const SIGNED: bool> Shl<u32> for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		shl																	
	fn shl(self, rhs: u32) -> Self::Output {
		self.wrapping_shl(rhs)
	}
}

//󰭅		ShlAssign																
impl<const LIMBS: usize, const SIGNED: bool> ShlAssign<u32> for Int<LIMBS, SIGNED> {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr																		
impl<const LIMBS: usize, const SIGNED: bool> Shr<u32> for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		shr																	
	fn shr(self, rhs: u32) -> Self::Output {
		self.wrapping_shr(rhs)
	}
}

//󰭅		ShrAssign																
impl<const LIMBS: usize, const SIGNED: bool> ShrAssign<u32> for Int<LIMBS, SIGNED> {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub																		
impl<const LIMBS: usize, const SIGNED: bool> Sub for Int<LIMBS, SIGNED> {
	type Output = Self;

	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign																
impl<const LIMBS: usize, const SIGNED: bool> SubAssign for Int<LIMBS, SIGNED> {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum																		
impl<const LIMBS: usize, const SIGNED: bool> Sum for Int<LIMBS, SIGNED> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a, const LIMBS: usize, const SIGNED: bool> Sum<&'a Self> for Int<LIMBS, SIGNED> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ZERO, |acc, &x| acc + x)
	}
}
