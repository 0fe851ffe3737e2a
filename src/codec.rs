//! Big-endian and little-endian byte serialisation.
//!
//! The byte image is always exactly [`BYTES`](Int::BYTES) long and is
//! produced from the limbs explicitly, so it never depends on the memory
//! layout of the platform.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are bounded by the lengths checked beforehand"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Index arithmetic within known bounds")]



//		Modules																											

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::Int,
};



//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		byte_count															
	/// The number of bytes written by the `try_write_*` methods, which is
	/// always the full width.
	#[must_use]
	pub const fn byte_count(&self) -> usize {
		Self::BYTES
	}

	//		from_be_bytes														
	/// Creates an [`Int`] from a big-endian byte slice of exactly
	/// [`BYTES`](Int::BYTES) bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`Int`] from.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::BufferTooSmall`] if there are too few bytes,
	/// and [`ConversionError::ValueTooLarge`] if there are too many.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		Self::check_exact_length(bytes.len())?;
		Ok(Self::assemble(|i| bytes[Self::BYTES - 1 - i], 0))
	}

	//		from_le_bytes														
	/// Creates an [`Int`] from a little-endian byte slice of exactly
	/// [`BYTES`](Int::BYTES) bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`Int`] from.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::BufferTooSmall`] if there are too few bytes,
	/// and [`ConversionError::ValueTooLarge`] if there are too many.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		Self::check_exact_length(bytes.len())?;
		Ok(Self::assemble(|i| bytes[i], 0))
	}

	//		to_be_vec															
	/// Returns the bytes in big-endian order.
	#[must_use]
	pub fn to_be_vec(&self) -> Vec<u8> {
		self.0.iter().rev().flat_map(|limb| limb.to_be_bytes()).collect()
	}

	//		to_le_vec															
	/// Returns the bytes in little-endian order.
	#[must_use]
	pub fn to_le_vec(&self) -> Vec<u8> {
		self.0.iter().flat_map(|limb| limb.to_le_bytes()).collect()
	}

	//		try_read_be_bytes													
	/// Reads a big-endian byte slice of any length.
	///
	/// Shorter input is extended to the full width: with zeros when
	/// `is_unsigned` is set, and with copies of its top bit otherwise. Longer
	/// input is accepted when the extra leading bytes are redundant.
	///
	/// # Parameters
	///
	/// * `bytes`       - The big-endian bytes to read.
	/// * `is_unsigned` - Whether the bytes hold an unsigned value.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::ValueIsNegative`] if the bytes hold a
	/// negative value and the destination is unsigned, and
	/// [`ConversionError::ValueTooLarge`] if the value does not fit.
	///
	pub fn try_read_be_bytes(bytes: &[u8], is_unsigned: bool) -> Result<Self, ConversionError> {
		let len = bytes.len();
		Self::read_bytes(len, |i| bytes[len - 1 - i], is_unsigned)
	}

	//		try_read_le_bytes													
	/// Reads a little-endian byte slice of any length.
	///
	/// Shorter input is extended to the full width: with zeros when
	/// `is_unsigned` is set, and with copies of its top bit otherwise. Longer
	/// input is accepted when the extra trailing bytes are redundant.
	///
	/// # Parameters
	///
	/// * `bytes`       - The little-endian bytes to read.
	/// * `is_unsigned` - Whether the bytes hold an unsigned value.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::ValueIsNegative`] if the bytes hold a
	/// negative value and the destination is unsigned, and
	/// [`ConversionError::ValueTooLarge`] if the value does not fit.
	///
	pub fn try_read_le_bytes(bytes: &[u8], is_unsigned: bool) -> Result<Self, ConversionError> {
		Self::read_bytes(bytes.len(), |i| bytes[i], is_unsigned)
	}

	//		try_write_be_bytes													
	/// Writes the full-width big-endian image to the start of `dest`.
	///
	/// Returns the number of bytes written. Nothing is written on failure.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::BufferTooSmall`] if `dest` is shorter than
	/// [`BYTES`](Int::BYTES).
	///
	pub fn try_write_be_bytes(&self, dest: &mut [u8]) -> Result<usize, ConversionError> {
		let out = Self::writable(dest)?;
		for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter().rev()) {
			chunk.copy_from_slice(&limb.to_be_bytes());
		}
		Ok(Self::BYTES)
	}

	//		try_write_le_bytes													
	/// Writes the full-width little-endian image to the start of `dest`.
	///
	/// Returns the number of bytes written. Nothing is written on failure.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::BufferTooSmall`] if `dest` is shorter than
	/// [`BYTES`](Int::BYTES).
	///
	pub fn try_write_le_bytes(&self, dest: &mut [u8]) -> Result<usize, ConversionError> {
		let out = Self::writable(dest)?;
		for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
			chunk.copy_from_slice(&limb.to_le_bytes());
		}
		Ok(Self::BYTES)
	}

	//		Private methods														

	//		assemble															
	/// Builds the limbs from a byte source indexed from the least-significant
	/// byte, padding past the source with `fill`.
	fn assemble(byte: impl Fn(usize) -> u8, fill: u8) -> Self {
		Self::assemble_from(Self::BYTES, byte, fill)
	}

	//		assemble_from														
	/// As [`assemble()`](Self::assemble()), but only reads the first `len`
	/// bytes from the source.
	fn assemble_from(len: usize, byte: impl Fn(usize) -> u8, fill: u8) -> Self {
		let mut limbs = [0_u64; LIMBS];
		for i in 0..Self::BYTES {
			let value       = if i < len { byte(i) } else { fill };
			limbs[i >> 3_u32] |= u64::from(value) << ((i & 7) * 8);
		}
		Self(limbs)
	}

	//		check_exact_length													
	/// Ensures a slice holds exactly the full width.
	const fn check_exact_length(len: usize) -> Result<(), ConversionError> {
		if len < Self::BYTES {
			Err(ConversionError::BufferTooSmall { needed: Self::BYTES, actual: len })
		} else if len > Self::BYTES {
			Err(ConversionError::ValueTooLarge)
		} else {
			Ok(())
		}
	}

	//		read_bytes															
	/// Reads `len` bytes, indexed from the least significant, applying the
	/// extension and range rules for this destination type.
	fn read_bytes(len: usize, byte: impl Fn(usize) -> u8, is_unsigned: bool) -> Result<Self, ConversionError> {
		if len == 0 {
			return Ok(Self::ZERO);
		}
		let top_set = byte(len - 1) & 0x80 != 0;
		let fill    = if SIGNED {
			let is_unsigned = is_unsigned || !top_set;
			//	A full-width unsigned value with the top bit set cannot be signed
			if is_unsigned && top_set && len >= Self::BYTES {
				return Err(ConversionError::ValueTooLarge);
			}
			let fill = if is_unsigned { 0x00 } else { 0xFF };
			if len > Self::BYTES {
				let kept_negative = byte(Self::BYTES - 1) & 0x80 != 0;
				if (Self::BYTES..len).any(|i| byte(i) != fill) || kept_negative == is_unsigned {
					return Err(ConversionError::ValueTooLarge);
				}
			}
			fill
		} else {
			if !is_unsigned && top_set {
				return Err(ConversionError::ValueIsNegative);
			}
			if (Self::BYTES..len).any(|i| byte(i) != 0) {
				return Err(ConversionError::ValueTooLarge);
			}
			0x00
		};
		Ok(Self::assemble_from(len, byte, fill))
	}

	//		writable															
	/// The leading full-width part of `dest`, if it is long enough.
	fn writable(dest: &mut [u8]) -> Result<&mut [u8], ConversionError> {
		let actual = dest.len();
		dest.get_mut(..Self::BYTES).ok_or(ConversionError::BufferTooSmall { needed: Self::BYTES, actual })
	}
}
