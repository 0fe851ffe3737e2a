//! Arithmetic kernels over little-endian `u64` limb slices.
//!
//! These are the multi-limb slow paths shared by every [`Int`](crate::Int)
//! width. All slices hold the least-significant limb first. Division inputs
//! must be trimmed so that their most-significant limb is non-zero, which is
//! what [`significant()`] produces.

//	Every index in this module is bounded by a length checked on entry, and the
//	wrapping behaviour of limb arithmetic is the point of the exercise.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Limb indices are bounded by the slice lengths asserted on entry"
)]

//	Truncation to the low limb of a u128 product is how carries are split off.
#![allow(clippy::cast_possible_truncation, reason = "Splitting double-limb values into limbs")]



//		Modules																											

#[cfg(test)]
#[path = "tests/calculator.rs"]
mod tests;



//		Functions																										

//		significant																
/// Trims leading (most-significant) zero limbs.
///
/// Zero trims down to an empty slice.
///
#[must_use]
pub fn significant(limbs: &[u64]) -> &[u64] {
	let len = limbs.iter().rposition(|&limb| limb != 0).map_or(0, |pos| pos + 1);
	&limbs[..len]
}

//		multiply_limb															
/// Multiplies a limb span by a single limb.
///
/// Writes `left.len()` limbs into `bits` and returns the carry-out limb.
///
/// # Parameters
///
/// * `left`  - The multiplicand.
/// * `right` - The single-limb multiplier.
/// * `bits`  - The output buffer, at least as long as `left`.
///
/// # Panics
///
/// Panics if `bits` is shorter than `left`.
///
pub fn multiply_limb(left: &[u64], right: u64, bits: &mut [u64]) -> u64 {
	assert!(bits.len() >= left.len(), "Output buffer is shorter than the multiplicand");
	let mut carry = 0_u64;
	for (out, &limb) in bits.iter_mut().zip(left) {
		let product = u128::from(limb) * u128::from(right) + u128::from(carry);
		*out        = product as u64;
		carry       = (product >> 64_u32) as u64;
	}
	carry
}

//		multiply																
/// Schoolbook multiplication of two limb spans.
///
/// The buffer is cleared first. If it is shorter than
/// `left.len() + right.len()` the product is truncated to the buffer length,
/// which gives wrapping multiplication for free.
///
/// # Parameters
///
/// * `left`  - The multiplicand.
/// * `right` - The multiplier.
/// * `bits`  - The output buffer.
///
pub fn multiply(left: &[u64], right: &[u64], bits: &mut [u64]) {
	bits.fill(0);
	for (i, &a) in left.iter().enumerate() {
		if a == 0 || i >= bits.len() {
			continue;
		}
		let mut carry = 0_u64;
		for (j, &b) in right.iter().enumerate() {
			let k = i + j;
			if k >= bits.len() {
				carry = 0;
				break;
			}
			let t   = u128::from(a) * u128::from(b) + u128::from(bits[k]) + u128::from(carry);
			bits[k] = t as u64;
			carry   = (t >> 64_u32) as u64;
		}
		let k = i + right.len();
		if k < bits.len() {
			bits[k] = carry;
		}
	}
}

//		div_rem_limb															
/// Short division of a limb span by a single limb.
///
/// Returns the remainder. Runs in time linear in the dividend length.
///
/// # Parameters
///
/// * `left`     - The dividend.
/// * `divisor`  - The non-zero single-limb divisor.
/// * `quotient` - The output buffer, at least as long as `left`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
pub fn div_rem_limb(left: &[u64], divisor: u64, quotient: &mut [u64]) -> u64 {
	assert!(divisor != 0,                     "Attempt to divide by zero");
	assert!(quotient.len() >= left.len(),     "Quotient buffer is shorter than the dividend");
	quotient.fill(0);
	let divisor   = u128::from(divisor);
	let mut carry = 0_u128;
	for i in (0..left.len()).rev() {
		let value   = (carry << 64_u32) | u128::from(left[i]);
		#[expect(clippy::integer_division, reason = "Integer division is the operation being performed")]
		let digit   = value / divisor;
		quotient[i] = digit as u64;
		carry       = value % divisor;
	}
	carry as u64
}

//		div_rem																	
/// Long division of two trimmed limb spans (Knuth, algorithm D).
///
/// The divisor is normalised so its top bit is set, each quotient limb is
/// estimated from the top two dividend limbs and corrected at most twice,
/// and the remainder is shifted back at the end.
///
/// # Parameters
///
/// * `left`      - The dividend. Must not be shorter than `right`.
/// * `right`     - The divisor, with a non-zero most-significant limb.
/// * `quotient`  - The output buffer for the quotient, at least
///                 `left.len() - right.len() + 1` limbs long.
/// * `remainder` - The output buffer for the remainder, at least
///                 `right.len()` limbs long.
///
/// # Panics
///
/// Panics if the divisor is empty or has a zero top limb, or if the buffers
/// are too short.
///
pub fn div_rem(left: &[u64], right: &[u64], quotient: &mut [u64], remainder: &mut [u64]) {
	let n = right.len();
	assert!(n > 0 && right[n - 1] != 0, "Divisor must be trimmed and non-zero");
	assert!(left.len() >= n,            "Dividend must not be shorter than the divisor");
	let m = left.len() - n;
	assert!(quotient.len()  > m,        "Quotient buffer too short");
	assert!(remainder.len() >= n,       "Remainder buffer too short");
	quotient.fill(0);
	remainder.fill(0);

	if n == 1 {
		remainder[0] = div_rem_limb(left, right[0], quotient);
		return;
	}

	//	Normalise so the divisor's top bit is set
	let shift  = right[n - 1].leading_zeros();
	let v      = shift_left(right, shift, n);
	let mut u  = shift_left(left,  shift, left.len() + 1);
	let v_top  = u128::from(v[n - 1]);
	let v_next = u128::from(v[n - 2]);

	for j in (0..=m).rev() {
		//	Estimate the quotient limb from the top two limbs of the window
		let numerator = (u128::from(u[j + n]) << 64_u32) | u128::from(u[j + n - 1]);
		#[expect(clippy::integer_division, reason = "Integer division is the operation being performed")]
		let mut q_hat = numerator / v_top;
		let mut r_hat = numerator % v_top;
		while q_hat > u128::from(u64::MAX) || q_hat * v_next > ((r_hat << 64_u32) | u128::from(u[j + n - 2])) {
			q_hat -= 1;
			r_hat += v_top;
			if r_hat > u128::from(u64::MAX) {
				break;
			}
		}

		//	Multiply and subtract
		let mut carry  = 0_u128;
		let mut borrow = false;
		for i in 0..n {
			let product   = q_hat * u128::from(v[i]) + carry;
			carry         = product >> 64_u32;
			let (t, b1)   = u[i + j].overflowing_sub(product as u64);
			let (t, b2)   = t.overflowing_sub(u64::from(borrow));
			u[i + j]      = t;
			borrow        = b1 || b2;
		}
		let (t, b1) = u[j + n].overflowing_sub(carry as u64);
		let (t, b2) = t.overflowing_sub(u64::from(borrow));
		u[j + n]    = t;

		//	The estimate was one too large, so add the divisor back
		if b1 || b2 {
			q_hat         -= 1;
			let mut carry  = false;
			for i in 0..n {
				let (s, c1) = u[i + j].overflowing_add(v[i]);
				let (s, c2) = s.overflowing_add(u64::from(carry));
				u[i + j]    = s;
				carry       = c1 || c2;
			}
			u[j + n] = u[j + n].wrapping_add(u64::from(carry));
		}

		quotient[j] = q_hat as u64;
	}

	//	Denormalise the remainder
	for i in 0..n {
		remainder[i] = if shift == 0 {
			u[i]
		} else {
			(u[i] >> shift) | (u[i + 1] << (64 - shift))
		};
	}
}

//		make_twos_complement													
/// Negates a limb span in place, modulo its own width.
///
/// Complements and increments limbs while the increment still carries, then
/// only complements the rest.
///
pub fn make_twos_complement(d: &mut [u64]) {
	let mut carry = true;
	for limb in d.iter_mut() {
		if carry {
			*limb = (!*limb).wrapping_add(1);
			carry = *limb == 0;
		} else {
			*limb = !*limb;
		}
	}
}

//		shift_left																
/// Copies a limb span into a new buffer of `len` limbs, shifted left by
/// fewer than 64 bits.
fn shift_left(limbs: &[u64], shift: u32, len: usize) -> Vec<u64> {
	let mut out = vec![0_u64; len];
	for (i, &limb) in limbs.iter().enumerate() {
		out[i] |= limb << shift;
		if shift > 0 && i + 1 < len {
			out[i + 1] = limb >> (64 - shift);
		}
	}
	out
}
