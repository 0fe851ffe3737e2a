//! Bit counting, bit access, shifts, and rotations.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "../tests/int/bits.rs"]
mod tests;



//		Packages																										

use super::Int;
use core::ops::{Bound, RangeBounds};



//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		bit																	
	/// Gets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub const fn bit(self, pos: u32) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		(self.0[(pos >> 6_u32) as usize] >> (pos & 63)) & 1 == 1
	}

	//		bits																
	/// Returns the bits in the specified range as a [`Vec`] of booleans.
	///
	/// Returns an empty [`Vec`] if the range is invalid or out of bounds.
	///
	/// # Parameters
	///
	/// * `range` - The range of bits to get, where `0` is the least-significant
	///             bit. The range is end-exclusive, like all Rust ranges.
	///
	#[must_use]
	pub fn bits<R: RangeBounds<u32>>(&self, range: R) -> Vec<bool> {
		let start = match range.start_bound() {
			Bound::Included(&n) => n,
			Bound::Excluded(&n) => n.saturating_add(1),
			Bound::Unbounded    => 0,
		};
		let end   = match range.end_bound() {
			Bound::Included(&n) => n.saturating_add(1),
			Bound::Excluded(&n) => n,
			Bound::Unbounded    => Self::BITS,
		};

		if start >= Self::BITS || end > Self::BITS || start >= end {
			return Vec::new();
		}
		(start..end).map(|pos| self.bit(pos)).collect()
	}

	//		checked_ilog2														
	/// Base-2 logarithm, rounded down.
	///
	/// Returns [`None`] if the value is zero or negative.
	///
	#[must_use]
	pub const fn checked_ilog2(self) -> Option<u32> {
		if self.is_negative() || self.is_zero() {
			None
		} else {
			Some(Self::BITS - 1 - self.leading_zeros())
		}
	}

	//		checked_shl															
	/// Checked shift left.
	///
	/// Returns [`None`] if `n` is not less than the bit width, rather than
	/// reducing it.
	///
	#[must_use]
	pub const fn checked_shl(self, n: u32) -> Option<Self> {
		if n < Self::BITS { Some(self.shift_left(n)) } else { None }
	}

	//		checked_shr															
	/// Checked shift right.
	///
	/// Returns [`None`] if `n` is not less than the bit width, rather than
	/// reducing it. The shift is arithmetic for signed types.
	///
	#[must_use]
	pub const fn checked_shr(self, n: u32) -> Option<Self> {
		if n < Self::BITS { Some(self.shift_right(n, self.sign_limb())) } else { None }
	}

	//		count_ones															
	/// Returns the number of ones in the binary representation.
	#[must_use]
	pub const fn count_ones(self) -> u32 {
		let mut count = 0;
		let mut i     = 0;
		while i < LIMBS {
			count += self.0[i].count_ones();
			i     += 1;
		}
		count
	}

	//		count_zeros															
	/// Returns the number of zeros in the binary representation.
	#[must_use]
	pub const fn count_zeros(self) -> u32 {
		Self::BITS - self.count_ones()
	}

	//		ilog2																
	/// Base-2 logarithm, rounded down.
	///
	/// # Panics
	///
	/// Panics if the value is zero or negative.
	///
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	#[must_use]
	pub fn ilog2(self) -> u32 {
		self.checked_ilog2().expect("Argument of integer logarithm must be positive")
	}

	//		is_even																
	/// Determines if the value is even.
	#[must_use]
	pub const fn is_even(self) -> bool {
		self.0[0] & 1 == 0
	}

	//		is_odd																
	/// Determines if the value is odd.
	#[must_use]
	pub const fn is_odd(self) -> bool {
		!self.is_even()
	}

	//		is_power_of_two														
	/// Determines if the value is a positive power of two.
	#[must_use]
	pub const fn is_power_of_two(self) -> bool {
		!self.is_negative() && self.count_ones() == 1
	}

	//		leading_ones														
	/// Returns the number of leading ones in the binary representation.
	#[must_use]
	pub const fn leading_ones(self) -> u32 {
		self.not_limbs().leading_zeros()
	}

	//		leading_zeros														
	/// Returns the number of leading zeros in the binary representation.
	///
	/// Zero has [`BITS`](Int::BITS) leading zeros.
	///
	#[must_use]
	pub const fn leading_zeros(self) -> u32 {
		let mut count = 0;
		let mut i     = LIMBS;
		while i > 0 {
			i -= 1;
			let zeros = self.0[i].leading_zeros();
			count    += zeros;
			if zeros < 64 {
				break;
			}
		}
		count
	}

	//		logical_shr															
	/// Logical shift right.
	///
	/// Shifts in zeros from the top regardless of signedness. The shift amount
	/// is reduced modulo the bit width.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to shift by.
	///
	#[must_use]
	pub const fn logical_shr(self, n: u32) -> Self {
		self.shift_right(n % Self::BITS, 0)
	}

	//		reverse_bits														
	/// Reverses the order of bits in the integer.
	///
	/// The least-significant bit becomes the most-significant bit, and so on.
	///
	#[must_use]
	pub const fn reverse_bits(self) -> Self {
		let mut out = [0; LIMBS];
		let mut i   = 0;
		while i < LIMBS {
			out[LIMBS - 1 - i] = self.0[i].reverse_bits();
			i                 += 1;
		}
		Self(out)
	}

	//		rotate_left															
	/// Rotates the bits of the value to the left.
	///
	/// The `n` most-significant bits are moved to the `n` least-significant
	/// bits, and the rest are moved to the left. The rotation amount is reduced
	/// modulo the bit width.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub const fn rotate_left(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}
		self.shift_left(shift).or_limbs(self.shift_right(Self::BITS - shift, 0))
	}

	//		rotate_right														
	/// Rotates the bits of the value to the right.
	///
	/// The `n` least-significant bits are moved to the `n` most-significant
	/// bits, and the rest are moved to the right. The rotation amount is
	/// reduced modulo the bit width.
	///
	/// # Parameters
	///
	/// * `n` - The number of bits to rotate by.
	///
	#[must_use]
	pub const fn rotate_right(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}
		self.shift_right(shift, 0).or_limbs(self.shift_left(Self::BITS - shift))
	}

	//		set_bit																
	/// Sets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range, in which case nothing
	/// is changed.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	///
	pub fn set_bit(&mut self, pos: u32, value: bool) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		let mask = 1_u64 << (pos & 63);
		let limb = (pos >> 6_u32) as usize;
		if value {
			self.0[limb] |= mask;
		} else {
			self.0[limb] &= !mask;
		}
		true
	}

	//		shortest_bit_length													
	/// The number of bits needed to represent the value in the current
	/// signedness, excluding redundant leading sign bits.
	///
	/// For non-negative values this is the position of the highest set bit
	/// plus one, so zero needs no bits. For negative values it is one more
	/// than the bit length of the complement, so `-1` needs one bit.
	///
	#[must_use]
	pub const fn shortest_bit_length(self) -> u32 {
		if self.is_negative() {
			Self::BITS + 1 - self.not_limbs().leading_zeros()
		} else {
			Self::BITS - self.leading_zeros()
		}
	}

	//		swap_bytes															
	/// Reverses the byte order of the integer.
	#[must_use]
	pub const fn swap_bytes(self) -> Self {
		let mut out = [0; LIMBS];
		let mut i   = 0;
		while i < LIMBS {
			out[LIMBS - 1 - i] = self.0[i].swap_bytes();
			i                 += 1;
		}
		Self(out)
	}

	//		trailing_ones														
	/// Returns the number of trailing ones in the binary representation.
	#[must_use]
	pub const fn trailing_ones(self) -> u32 {
		self.not_limbs().trailing_zeros()
	}

	//		trailing_zeros														
	/// Returns the number of trailing zeros in the binary representation.
	///
	/// Zero has [`BITS`](Int::BITS) trailing zeros.
	///
	#[must_use]
	pub const fn trailing_zeros(self) -> u32 {
		let mut count = 0;
		let mut i     = 0;
		while i < LIMBS {
			let zeros = self.0[i].trailing_zeros();
			count    += zeros;
			if zeros < 64 {
				break;
			}
			i += 1;
		}
		count
	}

	//		with_bit															
	/// Returns a copy with a specific bit set or cleared.
	///
	/// Out-of-range positions leave the value unchanged.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit, where `0` is the least-significant
	///             bit.
	/// * `value` - The value to set the bit to.
	///
	#[must_use]
	pub fn with_bit(mut self, pos: u32, value: bool) -> Self {
		let _ = self.set_bit(pos, value);
		self
	}

	//		wrapping_shl														
	/// Shift left with the amount reduced modulo the bit width.
	///
	/// This is what the `<<` operator does.
	///
	#[must_use]
	pub const fn wrapping_shl(self, n: u32) -> Self {
		self.shift_left(n % Self::BITS)
	}

	//		wrapping_shr														
	/// Shift right with the amount reduced modulo the bit width.
	///
	/// This is what the `>>` operator does. The shift is arithmetic for signed
	/// types, so the sign bit is copied in from the top.
	///
	#[must_use]
	pub const fn wrapping_shr(self, n: u32) -> Self {
		self.shift_right(n % Self::BITS, self.sign_limb())
	}

	//		Private methods														

	//		and_limbs															
	/// Limb-wise AND.
	pub(crate) const fn and_limbs(self, rhs: Self) -> Self {
		let mut out = self.0;
		let mut i   = 0;
		while i < LIMBS {
			out[i] &= rhs.0[i];
			i      += 1;
		}
		Self(out)
	}

	//		not_limbs															
	/// Limb-wise complement.
	pub(crate) const fn not_limbs(self) -> Self {
		let mut out = self.0;
		let mut i   = 0;
		while i < LIMBS {
			out[i] = !out[i];
			i     += 1;
		}
		Self(out)
	}

	//		or_limbs															
	/// Limb-wise OR.
	pub(crate) const fn or_limbs(self, rhs: Self) -> Self {
		let mut out = self.0;
		let mut i   = 0;
		while i < LIMBS {
			out[i] |= rhs.0[i];
			i      += 1;
		}
		Self(out)
	}

	//		shift_left															
	/// Shifts left by `n` bits, where `n` is less than the bit width.
	///
	/// The shift splits into a whole-limb offset and a bit offset within the
	/// limb, with the bits that cross a limb boundary carried from below.
	///
	pub(crate) const fn shift_left(self, n: u32) -> Self {
		let limbs   = (n >> 6_u32) as usize;
		let bits    = n & 63;
		let mut out = [0; LIMBS];
		let mut i   = LIMBS;
		while i > limbs {
			i          -= 1;
			let src     = i - limbs;
			let mut val = self.0[src] << bits;
			if bits > 0 && src > 0 {
				val |= self.0[src - 1] >> (64 - bits);
			}
			out[i] = val;
		}
		Self(out)
	}

	//		shift_right															
	/// Shifts right by `n` bits, where `n` is less than the bit width.
	///
	/// Vacated limbs are filled with `fill`, which is zero for a logical shift
	/// and the sign limb for an arithmetic one.
	///
	pub(crate) const fn shift_right(self, n: u32, fill: u64) -> Self {
		let limbs   = (n >> 6_u32) as usize;
		let bits    = n & 63;
		let mut out = [0; LIMBS];
		let mut i   = 0;
		while i < LIMBS {
			let src  = i + limbs;
			let low  = if src     < LIMBS { self.0[src]     } else { fill };
			let high = if src + 1 < LIMBS { self.0[src + 1] } else { fill };
			out[i]   = if bits == 0 { low } else { (low >> bits) | (high << (64 - bits)) };
			i       += 1;
		}
		Self(out)
	}

	//		xor_limbs															
	/// Limb-wise XOR.
	pub(crate) const fn xor_limbs(self, rhs: Self) -> Self {
		let mut out = self.0;
		let mut i   = 0;
		while i < LIMBS {
			out[i] ^= rhs.0[i];
			i      += 1;
		}
		Self(out)
	}
}
