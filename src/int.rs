//! Fixed-width multi-limb integer type.

//	These lint checks are unnecessary in this module because:
//	  1. We're working with fixed-size arrays where we know the size at compile
//	     time.
//	  2. All our indexing is based on the LIMBS constant which is tied to the
//	     type's size, and the size is asserted at compile time.
//	  3. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	This lint check is unnecessary in this module because these arithmetic
//	operations are actually essential parts of our logic. We want to emulate
//	the Rust standard library behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

mod add;
mod bits;
mod div;
mod mul;
mod ops;

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use core::cmp::Ordering;



//		Constants																										

/// The largest number of limbs an [`Int`] can use.
///
/// Widening multiplication and division use scratch buffers sized from this.
///
pub const MAX_LIMBS: usize = 8;



//		Type aliases																									

/// Type alias for signed integers, for convenience.
pub type SInt<const LIMBS: usize> = Int<LIMBS, true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt<const LIMBS: usize> = Int<LIMBS, false>;

/// A 256-bit unsigned integer.
pub type U256 = Int<4, false>;

/// A 256-bit signed integer.
pub type I256 = Int<4, true>;

/// A 512-bit unsigned integer.
pub type U512 = Int<8, false>;

/// A 512-bit signed integer.
pub type I512 = Int<8, true>;



//		Structs																											

//		Int																		
/// A fixed-width integer made of 64-bit limbs.
///
/// This type provides an integer that is wider than the standard Rust integer
/// types, and which can be signed or unsigned. It behaves like the native
/// fixed-width integers in every respect apart from its width.
///
/// # Type parameters
///
/// * `LIMBS`  - The number of 64-bit limbs used to represent the integer. The
///              bit width is `LIMBS * 64`, and between 1 and [`MAX_LIMBS`]
///              limbs are supported.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// The commonly used widths are available as [`U256`], [`I256`], [`U512`],
/// and [`I512`].
///
/// # Arithmetic
///
/// This type implements the standard arithmetic operations with three
/// overflow policies, following standard Rust integer naming:
///
///   1. Checked arithmetic, through the `checked_*` methods (returning
///      [`Option`]) and the `try_*` methods (returning a
///      [`Result`] that distinguishes overflow from division by zero).
///   2. Saturating arithmetic, through the `saturating_*` methods, which clamp
///      to [`MIN`](Int::MIN) or [`MAX`](Int::MAX).
///   3. Wrapping (truncating) arithmetic, through the `wrapping_*` methods,
///      which keep only the low-order bits.
///
/// The arithmetic operators panic on overflow and on division by zero, in all
/// build profiles. Shift and rotate amounts are always reduced modulo the bit
/// width, so shifting never panics.
///
/// # Conversion
///
/// This type can be converted to and from all the primitive integer types,
/// [`char`], [`f32`], and [`f64`], through [`TryFrom`] (checked), and
/// through the [`SaturatingFrom`](crate::SaturatingFrom) and
/// [`TruncatingFrom`](crate::TruncatingFrom) traits. Conversions between
/// [`Int`] widths and signedness are available through
/// [`checked_cast()`](Int::checked_cast()),
/// [`saturating_cast()`](Int::saturating_cast()), and
/// [`truncating_cast()`](Int::truncating_cast()).
///
/// # Internal representation
///
/// The value is stored as an array of 64-bit limbs in little-endian order
/// (least significant limb first). Every bit pattern is a valid value, and
/// signed values use two's complement, so signed and unsigned integers of the
/// same width share an identical layout. Switching between them with
/// [`cast_signed()`](Int::cast_signed()) and
/// [`cast_unsigned()`](Int::cast_unsigned()) is a pure reinterpretation.
///
/// For example, the 256-bit value `2^64 + 5`:
///
/// ```text
/// Limb 0:    0x0000_0000_0000_0005   LSB
/// Limb 1:    0x0000_0000_0000_0001
/// Limb 2:    0x0000_0000_0000_0000
/// Limb 3:    0x0000_0000_0000_0000   MSB
/// ```
///
/// Conversion methods that deal with raw bytes (like
/// [`to_le_vec()`](Int::to_le_vec()) and [`to_be_vec()`](Int::to_be_vec()))
/// handle the byte ordering explicitly, and never depend on the memory layout
/// of the platform.
///
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Int<const LIMBS: usize, const SIGNED: bool>(pub(crate) [u64; LIMBS]);

//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		Public constants													
	/// Number of bits used for storage.
	#[expect(clippy::cast_possible_truncation, reason = "At most MAX_LIMBS * 64 bits")]
	pub const BITS:  u32 = (LIMBS * 64) as u32;

	/// Number of bytes used for storage.
	pub const BYTES: usize = LIMBS * 8;

	/// The value `0`.
	pub const ZERO: Self = Self([0; LIMBS]);

	/// The value `1`.
	pub const ONE: Self = {
		let mut limbs = [0; LIMBS];
		limbs[0]      = 1;
		Self(limbs)
	};

	/// The maximum value.
	pub const MAX: Self = {
		let mut limbs = [u64::MAX; LIMBS];
		if SIGNED {
			limbs[LIMBS - 1] = i64::MAX as u64;
		}
		Self(limbs)
	};

	/// The minimum value.
	pub const MIN: Self = {
		let mut limbs = [0; LIMBS];
		if SIGNED {
			limbs[LIMBS - 1] = 1 << 63_u32;
		}
		Self(limbs)
	};

	//		Private constants													
	/// Compile-time guard on the supported widths.
	pub(crate) const VALID: () = assert!(LIMBS > 0 && LIMBS <= MAX_LIMBS, "Int supports between 1 and 8 limbs");

	//		Constructors														

	//		from_limbs															
	/// Creates a new [`Int`] from limbs, least significant first.
	///
	/// Every bit pattern is valid, so this cannot fail.
	///
	/// # Parameters
	///
	/// * `limbs` - The limbs, with the least significant at index `0`.
	///
	#[must_use]
	pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
		let () = Self::VALID;
		Self(limbs)
	}

	//		from_limbs_be														
	/// Creates a new [`Int`] from limbs, most significant first.
	///
	/// This reads in the same order the value would be written down, which is
	/// convenient for literals.
	///
	/// # Parameters
	///
	/// * `limbs` - The limbs, with the most significant at index `0`.
	///
	#[must_use]
	pub const fn from_limbs_be(limbs: [u64; LIMBS]) -> Self {
		let mut out = [0; LIMBS];
		let mut i   = 0;
		while i < LIMBS {
			out[i] = limbs[LIMBS - 1 - i];
			i     += 1;
		}
		Self::from_limbs(out)
	}

	//		from_u64															
	/// Creates a new [`Int`] from an unsigned 64-bit value.
	///
	/// The value is zero-extended, so it is lossless for every width above 64
	/// bits. This is usable in constant contexts.
	///
	#[must_use]
	pub const fn from_u64(value: u64) -> Self {
		let mut limbs = [0; LIMBS];
		limbs[0]      = value;
		Self::from_limbs(limbs)
	}

	//		Public methods														

	//		as_limbs															
	/// Represents the internal value as a slice-able array of limbs, least
	/// significant first.
	#[must_use]
	pub const fn as_limbs(&self) -> &[u64; LIMBS] {
		&self.0
	}

	//		cast_signed															
	/// Reinterprets the bits as a signed integer of the same width.
	#[must_use]
	pub const fn cast_signed(self) -> Int<LIMBS, true> {
		Int(self.0)
	}

	//		cast_unsigned														
	/// Reinterprets the bits as an unsigned integer of the same width.
	#[must_use]
	pub const fn cast_unsigned(self) -> Int<LIMBS, false> {
		Int(self.0)
	}

	//		into_limbs															
	/// Consumes the value and returns its limbs, least significant first.
	#[must_use]
	pub const fn into_limbs(self) -> [u64; LIMBS] {
		self.0
	}

	//		is_negative															
	/// Determines if the value is negative.
	///
	/// Always `false` for unsigned integers.
	///
	#[must_use]
	pub const fn is_negative(self) -> bool {
		SIGNED && (self.0[LIMBS - 1] >> 63_u32) == 1
	}

	//		is_positive															
	/// Determines if the value is strictly greater than zero.
	#[must_use]
	pub const fn is_positive(self) -> bool {
		!self.is_negative() && !self.is_zero()
	}

	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(self) -> bool {
		let mut i = 0;
		while i < LIMBS {
			if self.0[i] != 0 {
				return false;
			}
			i += 1;
		}
		true
	}

	//		limb																
	/// Gets a single limb, where `0` is the least significant.
	///
	/// Returns [`None`] if the index is out of range.
	///
	#[must_use]
	pub fn limb(self, index: usize) -> Option<u64> {
		self.0.get(index).copied()
	}

	//		signum																
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	///
	/// For unsigned integers this is `0` or `1`.
	///
	#[must_use]
	pub const fn signum(self) -> Self {
		if self.is_negative() {
			Self([u64::MAX; LIMBS])
		} else if self.is_zero() {
			Self::ZERO
		} else {
			Self::ONE
		}
	}

	//		Private methods														

	//		cmp_unsigned														
	/// Compares the bit patterns as unsigned magnitudes, most significant limb
	/// first.
	pub(crate) const fn cmp_unsigned(&self, other: &Self) -> Ordering {
		let mut i = LIMBS;
		while i > 0 {
			i -= 1;
			if self.0[i] != other.0[i] {
				return if self.0[i] < other.0[i] { Ordering::Less } else { Ordering::Greater };
			}
		}
		Ordering::Equal
	}

	//		from_i128_bits														
	/// Sign-extends (or truncates) a 128-bit two's-complement value into this
	/// width.
	pub(crate) const fn from_i128_bits(value: i128) -> Self {
		let fill      = if value < 0 { u64::MAX } else { 0 };
		let mut limbs = [fill; LIMBS];
		limbs[0]      = value as u64;
		if LIMBS > 1 {
			limbs[1] = (value >> 64_u32) as u64;
		}
		Self::from_limbs(limbs)
	}

	//		from_u128_bits														
	/// Zero-extends (or truncates) a 128-bit value into this width.
	pub(crate) const fn from_u128_bits(value: u128) -> Self {
		let mut limbs = [0; LIMBS];
		limbs[0]      = value as u64;
		if LIMBS > 1 {
			limbs[1] = (value >> 64_u32) as u64;
		}
		Self::from_limbs(limbs)
	}

	//		low_u128															
	/// The low 128 bits of the value.
	pub(crate) const fn low_u128(self) -> u128 {
		let high = if LIMBS > 1 { self.0[1] } else if self.is_negative() { u64::MAX } else { 0 };
		((high as u128) << 64_u32) | self.0[0] as u128
	}

	//		sign_limb															
	/// A limb filled with copies of the sign bit: all ones when negative, zero
	/// otherwise.
	pub(crate) const fn sign_limb(self) -> u64 {
		if self.is_negative() { u64::MAX } else { 0 }
	}

	//		significant_limbs													
	/// The number of limbs up to and including the most significant non-zero
	/// limb.
	pub(crate) const fn significant_limbs(self) -> usize {
		let mut i = LIMBS;
		while i > 0 && self.0[i - 1] == 0 {
			i -= 1;
		}
		i
	}
}

//󰭅		Int<LIMBS, true>														
impl<const LIMBS: usize> Int<LIMBS, true> {
	/// The value `-1`, with every bit set.
	pub const NEG_ONE: Self = Self([u64::MAX; LIMBS]);
}

//󰭅		Int<4, false>															
impl Int<4, false> {
	//		from_halves															
	/// Creates a 256-bit value from its upper and lower 128-bit halves.
	#[must_use]
	pub const fn from_halves(upper: u128, lower: u128) -> Self {
		Self([lower as u64, (lower >> 64_u32) as u64, upper as u64, (upper >> 64_u32) as u64])
	}

	//		lower																
	/// The lower 128 bits.
	#[must_use]
	pub const fn lower(self) -> u128 {
		((self.0[1] as u128) << 64_u32) | self.0[0] as u128
	}

	//		upper																
	/// The upper 128 bits.
	#[must_use]
	pub const fn upper(self) -> u128 {
		((self.0[3] as u128) << 64_u32) | self.0[2] as u128
	}
}

//󰭅		Int<4, true>															
impl Int<4, true> {
	//		from_halves															
	/// Creates a 256-bit value from its signed upper and unsigned lower
	/// 128-bit halves.
	#[must_use]
	pub const fn from_halves(upper: i128, lower: u128) -> Self {
		Int::<4, false>::from_halves(upper as u128, lower).cast_signed()
	}

	//		lower																
	/// The lower 128 bits, which carry no sign.
	#[must_use]
	pub const fn lower(self) -> u128 {
		self.cast_unsigned().lower()
	}

	//		upper																
	/// The upper 128 bits, which carry the sign.
	#[must_use]
	pub const fn upper(self) -> i128 {
		self.cast_unsigned().upper() as i128
	}
}

//󰭅		Int<8, SIGNED>															
impl<const SIGNED: bool> Int<8, SIGNED> {
	//		from_halves															
	/// Creates a 512-bit value from its upper and lower 256-bit halves.
	///
	/// The upper half carries the signedness of the result, and the lower half
	/// is always unsigned.
	///
	#[must_use]
	pub const fn from_halves(upper: Int<4, SIGNED>, lower: Int<4, false>) -> Self {
		let (u, l) = (upper.0, lower.0);
		Self([l[0], l[1], l[2], l[3], u[0], u[1], u[2], u[3]])
	}

	//		lower																
	/// The lower 256 bits, which carry no sign.
	#[must_use]
	pub const fn lower(self) -> Int<4, false> {
		Int([self.0[0], self.0[1], self.0[2], self.0[3]])
	}

	//		upper																
	/// The upper 256 bits, which carry the sign for signed values.
	#[must_use]
	pub const fn upper(self) -> Int<4, SIGNED> {
		Int([self.0[4], self.0[5], self.0[6], self.0[7]])
	}
}

//󰭅		Default																	
impl<const LIMBS: usize, const SIGNED: bool> Default for Int<LIMBS, SIGNED> {
	//		default																
	fn default() -> Self {
		Self::ZERO
	}
}

//󰭅		Ord																		
impl<const LIMBS: usize, const SIGNED: bool> Ord for Int<LIMBS, SIGNED> {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		//	Differing signs decide immediately, otherwise the two's complement
		//	patterns order the same way as unsigned magnitudes
		match (self.is_negative(), other.is_negative()) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			_             => self.cmp_unsigned(other),
		}
	}
}

//󰭅		PartialOrd																
impl<const LIMBS: usize, const SIGNED: bool> PartialOrd for Int<LIMBS, SIGNED> {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
