//		Packages																										

use super::*;
use crate::int::{
	I256, I512, U256, U512,
	tests::{in_range, random, to_big, wrap},
};
use claims::{assert_err_eq, assert_none, assert_ok_eq, assert_some_eq};
use rand::{SeedableRng, rngs::StdRng};



//		Tests																											

mod public_methods {
	use super::*;

	//		abs																	
	#[test]
	fn abs() {
		assert_eq!(I256::from_i128_bits(-5).abs(), I256::from_u64(5));
		assert_eq!(I256::MAX.abs(),                I256::MAX);
		assert_eq!(U256::MAX.abs(),                U256::MAX);
	}
	#[test]
	#[should_panic(expected = "Attempt to negate overflowed")]
	fn abs__overflow() {
		let _ = I256::MIN.abs();
	}

	//		checked_abs															
	#[test]
	fn checked_abs() {
		assert_some_eq!(I512::NEG_ONE.checked_abs(), I512::ONE);
		assert_none!(I512::MIN.checked_abs());
	}

	//		checked_add															
	#[test]
	fn checked_add() {
		assert_some_eq!(U256::from_u64(2).checked_add(U256::from_u64(3)), U256::from_u64(5));
		assert_none!(U256::MAX.checked_add(U256::ONE));
		assert_none!(I256::MAX.checked_add(I256::ONE));
		assert_none!(I256::MIN.checked_add(I256::NEG_ONE));
		assert_some_eq!(I256::MIN.checked_add(I256::MAX), I256::NEG_ONE);
	}

	//		checked_copysign													
	#[test]
	fn checked_copysign() {
		assert_some_eq!(I256::from_u64(5).checked_copysign(I256::NEG_ONE),         I256::from_i128_bits(-5));
		assert_some_eq!(I256::from_i128_bits(-5).checked_copysign(I256::ZERO),     I256::from_u64(5));
		assert_some_eq!(I256::from_i128_bits(-5).checked_copysign(I256::MIN),      I256::from_i128_bits(-5));
		assert_some_eq!(I256::MIN.checked_copysign(I256::NEG_ONE),                 I256::MIN);
		assert_some_eq!(I256::ZERO.checked_copysign(I256::NEG_ONE),                I256::ZERO);
		assert_some_eq!(I512::MAX.checked_copysign(I512::MIN),                     I512::MIN.increment());
		assert_some_eq!(U256::MAX.checked_copysign(U256::ZERO),                    U256::MAX);
		assert_none!(I256::MIN.checked_copysign(I256::ONE));
		assert_none!(I512::MIN.checked_copysign(I512::ZERO));
	}

	//		checked_decrement													
	#[test]
	fn checked_decrement() {
		assert_some_eq!(U256::ONE.checked_decrement(), U256::ZERO);
		assert_none!(U256::ZERO.checked_decrement());
		assert_none!(I256::MIN.checked_decrement());
	}

	//		checked_increment													
	#[test]
	fn checked_increment() {
		assert_some_eq!(I256::NEG_ONE.checked_increment(), I256::ZERO);
		assert_none!(U512::MAX.checked_increment());
		assert_none!(I512::MAX.checked_increment());
	}

	//		checked_neg															
	#[test]
	fn checked_neg() {
		assert_some_eq!(I256::ONE.checked_neg(),  I256::NEG_ONE);
		assert_some_eq!(U256::ZERO.checked_neg(), U256::ZERO);
		assert_none!(U256::ONE.checked_neg());
		assert_none!(I256::MIN.checked_neg());
	}

	//		checked_sub															
	#[test]
	fn checked_sub() {
		assert_some_eq!(U256::from_u64(5).checked_sub(U256::from_u64(3)), U256::from_u64(2));
		assert_none!(U256::ZERO.checked_sub(U256::ONE));
		assert_none!(I256::MIN.checked_sub(I256::ONE));
		assert_none!(I256::MAX.checked_sub(I256::NEG_ONE));
	}

	//		copysign															
	#[test]
	fn copysign() {
		assert_eq!(I256::NEG_ONE.copysign(I256::MAX), I256::ONE);
		assert_eq!(I256::ONE.copysign(I256::MIN),     I256::NEG_ONE);
		assert_eq!(U512::ONE.copysign(U512::MAX),     U512::ONE);
	}
	#[test]
	#[should_panic(expected = "Attempt to negate overflowed")]
	fn copysign__overflow() {
		let _ = I256::MIN.copysign(I256::ONE);
	}

	//		decrement															
	#[test]
	fn decrement() {
		assert_eq!(U256::ZERO.decrement(), U256::MAX);
		assert_eq!(I256::MIN.decrement(),  I256::MAX);
		assert_eq!(I256::ONE.decrement(),  I256::ZERO);
	}

	//		increment															
	#[test]
	fn increment() {
		assert_eq!(U256::MAX.increment(),     U256::ZERO);
		assert_eq!(I256::MAX.increment(),     I256::MIN);
		assert_eq!(I256::NEG_ONE.increment(), I256::ZERO);
	}

	//		max_magnitude														
	#[test]
	fn max_magnitude() {
		assert_eq!(I256::from_i128_bits(-7).max_magnitude(I256::from_u64(5)), I256::from_i128_bits(-7));
		assert_eq!(I256::from_u64(5).max_magnitude(I256::from_i128_bits(-7)), I256::from_i128_bits(-7));
		assert_eq!(I256::NEG_ONE.max_magnitude(I256::ONE),                    I256::ONE);
		assert_eq!(I256::ONE.max_magnitude(I256::NEG_ONE),                    I256::ONE);
		assert_eq!(I256::MIN.max_magnitude(I256::MAX),                        I256::MIN);
		assert_eq!(I256::MAX.max_magnitude(I256::MIN),                        I256::MIN);
		assert_eq!(I512::MIN.max_magnitude(I512::NEG_ONE),                    I512::MIN);
		assert_eq!(U256::from_u64(3).max_magnitude(U256::MAX),                U256::MAX);
	}

	//		min_magnitude														
	#[test]
	fn min_magnitude() {
		assert_eq!(I256::from_i128_bits(-7).min_magnitude(I256::from_u64(5)), I256::from_u64(5));
		assert_eq!(I256::NEG_ONE.min_magnitude(I256::ONE),                    I256::NEG_ONE);
		assert_eq!(I256::ONE.min_magnitude(I256::NEG_ONE),                    I256::NEG_ONE);
		assert_eq!(I256::MIN.min_magnitude(I256::NEG_ONE),                    I256::NEG_ONE);
		assert_eq!(I256::MAX.min_magnitude(I256::MIN),                        I256::MAX);
		assert_eq!(I512::MIN.min_magnitude(I512::MIN),                        I512::MIN);
		assert_eq!(U256::from_u64(3).min_magnitude(U256::MAX),                U256::from_u64(3));
	}

	//		overflowing_add														
	#[test]
	fn overflowing_add__edges() {
		assert_eq!(U256::MAX.overflowing_add(U256::ONE),     (U256::ZERO, true));
		assert_eq!(I256::MAX.overflowing_add(I256::ONE),     (I256::MIN,  true));
		assert_eq!(I256::NEG_ONE.overflowing_add(I256::ONE), (I256::ZERO, false));
		assert_eq!(I256::MIN.overflowing_add(I256::MIN),     (I256::ZERO, true));
	}
	#[test]
	fn overflowing_add__matches_bigint() {
		let mut rng = StdRng::seed_from_u64(0xADD);
		for _ in 0..1000 {
			check_add::<4, false>(random(&mut rng), random(&mut rng));
			check_add::<4, true>(random(&mut rng),  random(&mut rng));
			check_add::<8, false>(random(&mut rng), random(&mut rng));
			check_add::<8, true>(random(&mut rng),  random(&mut rng));
		}
	}

	//		overflowing_neg														
	#[test]
	fn overflowing_neg() {
		assert_eq!(I256::MIN.overflowing_neg(),  (I256::MIN,     true));
		assert_eq!(I256::ONE.overflowing_neg(),  (I256::NEG_ONE, false));
		assert_eq!(U256::ONE.overflowing_neg(),  (U256::MAX,     true));
		assert_eq!(U256::ZERO.overflowing_neg(), (U256::ZERO,    false));
	}

	//		overflowing_sub														
	#[test]
	fn overflowing_sub__edges() {
		assert_eq!(U256::ZERO.overflowing_sub(U256::ONE),    (U256::MAX, true));
		assert_eq!(I256::MIN.overflowing_sub(I256::ONE),     (I256::MAX, true));
		assert_eq!(I256::ZERO.overflowing_sub(I256::MIN),    (I256::MIN, true));
		assert_eq!(I256::ZERO.overflowing_sub(I256::MAX),    (I256::MIN.increment(), false));
	}
	#[test]
	fn overflowing_sub__matches_bigint() {
		let mut rng = StdRng::seed_from_u64(0x5B);
		for _ in 0..1000 {
			check_sub::<4, false>(random(&mut rng), random(&mut rng));
			check_sub::<4, true>(random(&mut rng),  random(&mut rng));
			check_sub::<8, false>(random(&mut rng), random(&mut rng));
			check_sub::<8, true>(random(&mut rng),  random(&mut rng));
		}
	}

	//		saturating_add														
	#[test]
	fn saturating_add() {
		assert_eq!(U256::MAX.saturating_add(U256::ONE),     U256::MAX);
		assert_eq!(I256::MAX.saturating_add(I256::ONE),     I256::MAX);
		assert_eq!(I256::MIN.saturating_add(I256::NEG_ONE), I256::MIN);
		assert_eq!(I256::MIN.saturating_add(I256::ONE),     I256::MIN.increment());
	}

	//		saturating_neg														
	#[test]
	fn saturating_neg() {
		assert_eq!(I256::MIN.saturating_neg(), I256::MAX);
		assert_eq!(I256::MAX.saturating_neg(), I256::MIN.increment());
		assert_eq!(U256::ONE.saturating_neg(), U256::ZERO);
	}

	//		saturating_sub														
	#[test]
	fn saturating_sub() {
		assert_eq!(U256::ZERO.saturating_sub(U256::ONE),    U256::ZERO);
		assert_eq!(I256::MIN.saturating_sub(I256::ONE),     I256::MIN);
		assert_eq!(I256::MAX.saturating_sub(I256::NEG_ONE), I256::MAX);
		assert_eq!(I256::ZERO.saturating_sub(I256::MIN),    I256::MAX);
	}

	//		try_add																
	#[test]
	fn try_add() {
		assert_ok_eq!(U256::ONE.try_add(U256::ONE), U256::from_u64(2));
		assert_err_eq!(U256::MAX.try_add(U256::ONE), ArithmeticError::Overflow(ArithmeticOperation::Addition));
		let err = I512::MAX.try_add(I512::ONE).unwrap_err();
		assert_eq!(err.to_string(), "Arithmetic operation resulted in an overflow: addition");
	}

	//		try_neg																
	#[test]
	fn try_neg() {
		assert_ok_eq!(I256::MAX.try_neg(), I256::MIN.increment());
		assert_err_eq!(I256::MIN.try_neg(), ArithmeticError::Overflow(ArithmeticOperation::Negation));
		assert_err_eq!(U256::ONE.try_neg(), ArithmeticError::Overflow(ArithmeticOperation::Negation));
	}

	//		try_sub																
	#[test]
	fn try_sub() {
		assert_ok_eq!(I256::ZERO.try_sub(I256::ONE), I256::NEG_ONE);
		assert_err_eq!(U256::ZERO.try_sub(U256::ONE), ArithmeticError::Overflow(ArithmeticOperation::Subtraction));
	}

	//		unsigned_abs														
	#[test]
	fn unsigned_abs() {
		assert_eq!(I256::MIN.unsigned_abs(),               U256::ONE << 255);
		assert_eq!(I256::NEG_ONE.unsigned_abs(),           U256::ONE);
		assert_eq!(I512::from_i128_bits(-9).unsigned_abs(), U512::from_u64(9));
		assert_eq!(U256::MAX.unsigned_abs(),               U256::MAX);
	}

	//		wrapping_abs														
	#[test]
	fn wrapping_abs() {
		assert_eq!(I256::MIN.wrapping_abs(),     I256::MIN);
		assert_eq!(I256::NEG_ONE.wrapping_abs(), I256::ONE);
	}

	//		wrapping_add														
	#[test]
	fn wrapping_add() {
		assert_eq!(U256::MAX.wrapping_add(U256::ONE), U256::ZERO);
		assert_eq!(I256::MAX.wrapping_add(I256::ONE), I256::MIN);
		assert_eq!(
			U256::from_limbs([u64::MAX, u64::MAX, 0, 0]).wrapping_add(U256::ONE),
			U256::from_limbs([0, 0, 1, 0]),
		);
	}
	#[test]
	fn wrapping_add__commutative_and_associative() {
		let mut rng = StdRng::seed_from_u64(0xC0);
		for _ in 0..500 {
			let (a, b, c): (I512, I512, I512) = (random(&mut rng), random(&mut rng), random(&mut rng));
			assert_eq!(a.wrapping_add(b), b.wrapping_add(a));
			assert_eq!(a.wrapping_add(b).wrapping_add(c), a.wrapping_add(b.wrapping_add(c)));
			assert_eq!(a.wrapping_add(b).wrapping_sub(b), a);
		}
	}

	//		wrapping_neg														
	#[test]
	fn wrapping_neg() {
		assert_eq!(U256::ONE.wrapping_neg(),     U256::MAX);
		assert_eq!(I256::MIN.wrapping_neg(),     I256::MIN);
		assert_eq!(I256::NEG_ONE.wrapping_neg(), I256::ONE);
	}

	//		wrapping_sub														
	#[test]
	fn wrapping_sub() {
		assert_eq!(U256::ZERO.wrapping_sub(U256::ONE), U256::MAX);
		assert_eq!(I256::MIN.wrapping_sub(I256::ONE),  I256::MAX);
		assert_eq!(
			U512::from_limbs([0, 0, 0, 0, 1, 0, 0, 0]).wrapping_sub(U512::ONE),
			U512::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX, 0, 0, 0, 0]),
		);
	}
}

mod private_methods {
	use super::*;

	//		borrowing_sub														
	#[test]
	fn borrowing_sub() {
		assert_eq!(U256::ZERO.borrowing_sub(U256::ONE),    (U256::MAX,  true));
		assert_eq!(I256::ZERO.borrowing_sub(I256::ONE),    (I256::NEG_ONE, true));
		assert_eq!(U256::ONE.borrowing_sub(U256::ONE),     (U256::ZERO, false));
	}

	//		carrying_add														
	#[test]
	fn carrying_add() {
		assert_eq!(U256::MAX.carrying_add(U256::ONE),     (U256::ZERO, true));
		assert_eq!(I256::NEG_ONE.carrying_add(I256::ONE), (I256::ZERO, true));
		assert_eq!(U256::MAX.carrying_add(U256::MAX),     (U256::MAX.decrement(), true));
	}
}



//		Functions																										

//		check_add																
/// Compares addition against exact arithmetic.
fn check_add<const LIMBS: usize, const SIGNED: bool>(a: Int<LIMBS, SIGNED>, b: Int<LIMBS, SIGNED>) {
	let exact            = to_big(a) + to_big(b);
	let (sum, overflow)  = a.overflowing_add(b);
	assert_eq!(to_big(sum), wrap::<LIMBS, SIGNED>(&exact));
	assert_eq!(overflow,    !in_range::<LIMBS, SIGNED>(&exact));
	assert_eq!(a.checked_add(b).is_some(), !overflow);
	assert_eq!(a.wrapping_add(b), b.wrapping_add(a));
}

//		check_sub																
/// Compares subtraction against exact arithmetic.
fn check_sub<const LIMBS: usize, const SIGNED: bool>(a: Int<LIMBS, SIGNED>, b: Int<LIMBS, SIGNED>) {
	let exact             = to_big(a) - to_big(b);
	let (diff, overflow)  = a.overflowing_sub(b);
	assert_eq!(to_big(diff), wrap::<LIMBS, SIGNED>(&exact));
	assert_eq!(overflow,     !in_range::<LIMBS, SIGNED>(&exact));
	if !overflow {
		assert_eq!(to_big(a.saturating_sub(b)), exact);
	}
}
