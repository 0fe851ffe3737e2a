//		Packages																										

use super::*;
use crate::int::{
	I256, I512, U256, U512,
	tests::{in_range, random, to_big, wrap},
};
use claims::{assert_err_eq, assert_none, assert_ok_eq, assert_some_eq};
use rand::{Rng, SeedableRng, rngs::StdRng};



//		Tests																											

mod public_methods {
	use super::*;

	//		checked_mul															
	#[test]
	fn checked_mul() {
		assert_some_eq!(U256::from_u64(6).checked_mul(U256::from_u64(7)), U256::from_u64(42));
		assert_some_eq!(I256::NEG_ONE.checked_mul(I256::MAX),             I256::MIN.increment());
		assert_some_eq!(I256::MIN.checked_mul(I256::ONE),                 I256::MIN);
		assert_none!(U256::MAX.checked_mul(U256::from_u64(2)));
		assert_none!(I256::MIN.checked_mul(I256::NEG_ONE));
		assert_none!((I512::ONE << 256).checked_mul(I512::ONE << 255));
	}

	//		checked_pow															
	#[test]
	fn checked_pow() {
		assert_some_eq!(U256::from_u64(2).checked_pow(255),         U256::ONE << 255);
		assert_some_eq!(I256::from_i128_bits(-2).checked_pow(255),  I256::MIN);
		assert_some_eq!(U256::ZERO.checked_pow(0),                  U256::ONE);
		assert_some_eq!(U512::from_u64(10).checked_pow(154),        U512::parse(&format!("1{}", "0".repeat(154))).unwrap());
		assert_none!(U256::from_u64(2).checked_pow(256));
		assert_none!(I256::from_u64(2).checked_pow(255));
		assert_none!(I256::from_i128_bits(-2).checked_pow(256));
	}

	//		overflowing_mul														
	#[test]
	fn overflowing_mul__edges() {
		assert_eq!(U256::MAX.overflowing_mul(U256::MAX), (U256::ONE,  true));
		assert_eq!(I256::MIN.overflowing_mul(I256::NEG_ONE), (I256::MIN, true));
		assert_eq!(I256::NEG_ONE.overflowing_mul(I256::NEG_ONE), (I256::ONE, false));
		assert_eq!(U512::ZERO.overflowing_mul(U512::MAX), (U512::ZERO, false));
	}
	#[test]
	fn overflowing_mul__matches_bigint() {
		let mut rng = StdRng::seed_from_u64(0x1111);
		for _ in 0..1000 {
			check_mul::<4, false>(random(&mut rng), random(&mut rng));
			check_mul::<4, true>(random(&mut rng),  random(&mut rng));
			check_mul::<8, false>(random(&mut rng), random(&mut rng));
			check_mul::<8, true>(random(&mut rng),  random(&mut rng));
		}
	}

	//		overflowing_pow														
	#[test]
	fn overflowing_pow() {
		assert_eq!(U256::from_u64(2).overflowing_pow(256), (U256::ZERO, true));
		assert_eq!(U256::from_u64(3).overflowing_pow(2),   (U256::from_u64(9), false));
		assert_eq!(I256::NEG_ONE.overflowing_pow(u32::MAX), (I256::NEG_ONE, false));
	}
	#[test]
	fn overflowing_pow__matches_bigint() {
		let mut rng = StdRng::seed_from_u64(0x90);
		for _ in 0..300 {
			let base: I256 = I256::from_i128_bits(rng.gen_range(-1000..1000));
			let exp        = rng.gen_range(0..120_u32);
			let exact      = to_big(base).pow(exp);
			let (result, overflow) = base.overflowing_pow(exp);
			assert_eq!(to_big(result), wrap::<4, true>(&exact));
			assert_eq!(overflow,       !in_range::<4, true>(&exact));
		}
	}

	//		pow																	
	#[test]
	fn pow() {
		assert_eq!(I512::from_i128_bits(-3).pow(3), I512::from_i128_bits(-27));
		assert_eq!(U256::from_u64(7).pow(1),        U256::from_u64(7));
	}
	#[test]
	#[should_panic(expected = "Attempt to multiply overflowed")]
	fn pow__overflow() {
		let _ = U256::from_u64(2).pow(256);
	}

	//		saturating_mul														
	#[test]
	fn saturating_mul() {
		assert_eq!(U256::MAX.saturating_mul(U256::from_u64(2)),     U256::MAX);
		assert_eq!(I256::MAX.saturating_mul(I256::from_u64(2)),     I256::MAX);
		assert_eq!(I256::MIN.saturating_mul(I256::from_u64(2)),     I256::MIN);
		assert_eq!(I256::MIN.saturating_mul(I256::NEG_ONE),         I256::MAX);
		assert_eq!(I256::MAX.saturating_mul(I256::from_i128_bits(-2)), I256::MIN);
		assert_eq!(I256::from_u64(3).saturating_mul(I256::from_u64(4)), I256::from_u64(12));
	}

	//		saturating_pow														
	#[test]
	fn saturating_pow() {
		assert_eq!(U256::from_u64(2).saturating_pow(300),        U256::MAX);
		assert_eq!(I256::from_i128_bits(-2).saturating_pow(257), I256::MIN);
		assert_eq!(I256::from_i128_bits(-2).saturating_pow(256), I256::MAX);
		assert_eq!(I256::from_u64(2).saturating_pow(10),         I256::from_u64(1024));
	}

	//		try_mul																
	#[test]
	fn try_mul() {
		assert_ok_eq!(I256::from_i128_bits(-4).try_mul(I256::from_u64(5)), I256::from_i128_bits(-20));
		assert_err_eq!(U256::MAX.try_mul(U256::MAX), ArithmeticError::Overflow(ArithmeticOperation::Multiplication));
	}

	//		try_pow																
	#[test]
	fn try_pow() {
		assert_ok_eq!(U256::from_u64(16).try_pow(63), U256::ONE << 252);
		assert_err_eq!(U256::from_u64(16).try_pow(64), ArithmeticError::Overflow(ArithmeticOperation::Multiplication));
	}

	//		widening_mul														
	#[test]
	fn widening_mul__edges() {
		assert_eq!(U256::MAX.widening_mul(U256::from_u64(2)), (U256::MAX.decrement(), U256::ONE));
		assert_eq!(U256::MAX.widening_mul(U256::MAX),         (U256::ONE, U256::MAX.decrement()));
		assert_eq!(I256::NEG_ONE.widening_mul(I256::NEG_ONE), (U256::ONE, I256::ZERO));
		assert_eq!(I256::NEG_ONE.widening_mul(I256::ONE),     (U256::MAX, I256::NEG_ONE));
		assert_eq!(I256::MIN.widening_mul(I256::MIN),         (U256::ZERO, I256::ONE << 254));
	}
	#[test]
	fn widening_mul__matches_bigint() {
		let mut rng = StdRng::seed_from_u64(0x3173);
		for _ in 0..1000 {
			check_widening::<4, false>(random(&mut rng), random(&mut rng));
			check_widening::<4, true>(random(&mut rng),  random(&mut rng));
			check_widening::<8, false>(random(&mut rng), random(&mut rng));
			check_widening::<8, true>(random(&mut rng),  random(&mut rng));
		}
	}

	//		wrapping_mul														
	#[test]
	fn wrapping_mul() {
		assert_eq!(U256::MAX.wrapping_mul(U256::MAX),     U256::ONE);
		assert_eq!(I256::MIN.wrapping_mul(I256::NEG_ONE), I256::MIN);
		assert_eq!((U512::ONE << 300).wrapping_mul(U512::ONE << 300), U512::ZERO);
	}
	#[test]
	fn wrapping_mul__algebra() {
		let mut rng = StdRng::seed_from_u64(0xA19);
		for _ in 0..300 {
			let (a, b, c): (I512, I512, I512) = (random(&mut rng), random(&mut rng), random(&mut rng));
			assert_eq!(a.wrapping_mul(b), b.wrapping_mul(a));
			assert_eq!(a.wrapping_mul(b).wrapping_mul(c), a.wrapping_mul(b.wrapping_mul(c)));
			assert_eq!(a.wrapping_mul(b.wrapping_add(c)), a.wrapping_mul(b).wrapping_add(a.wrapping_mul(c)));
		}
	}

	//		wrapping_pow														
	#[test]
	fn wrapping_pow() {
		assert_eq!(U256::from_u64(2).wrapping_pow(256), U256::ZERO);
		assert_eq!(U256::from_u64(3).wrapping_pow(0),   U256::ONE);
		assert_eq!(I256::NEG_ONE.wrapping_pow(2),       I256::ONE);
	}
}

mod functions {
	use super::*;

	//		multiply_limbs														
	#[test]
	fn multiply_limbs__shapes() {
		assert_eq!(multiply_limbs(&[0, 0], &[5, 7]),              ([0, 0], [0, 0]));
		assert_eq!(multiply_limbs(&[u64::MAX, 0], &[u64::MAX, 0]), ([1, u64::MAX - 1], [0, 0]));
		assert_eq!(multiply_limbs(&[2, 1], &[3, 0]),              ([6, 3], [0, 0]));
		assert_eq!(multiply_limbs(&[3, 0], &[2, 1]),              ([6, 3], [0, 0]));
		assert_eq!(multiply_limbs(&[0, 1], &[0, 1]),              ([0, 0], [1, 0]));
	}
}



//		Functions																										

//		check_mul																
/// Compares truncating multiplication against exact arithmetic.
fn check_mul<const LIMBS: usize, const SIGNED: bool>(a: Int<LIMBS, SIGNED>, b: Int<LIMBS, SIGNED>) {
	let exact                = to_big(a) * to_big(b);
	let (product, overflow)  = a.overflowing_mul(b);
	assert_eq!(to_big(product),  wrap::<LIMBS, SIGNED>(&exact));
	assert_eq!(overflow,         !in_range::<LIMBS, SIGNED>(&exact));
	assert_eq!(a.wrapping_mul(b), product);
	assert_eq!(a.checked_mul(b).is_some(), !overflow);
}

//		check_widening															
/// Compares the full double-width product against exact arithmetic.
fn check_widening<const LIMBS: usize, const SIGNED: bool>(a: Int<LIMBS, SIGNED>, b: Int<LIMBS, SIGNED>) {
	let (low, high) = a.widening_mul(b);
	let combined    = (to_big(high) << Int::<LIMBS, SIGNED>::BITS) + to_big(low);
	assert_eq!(combined, to_big(a) * to_big(b));
}
