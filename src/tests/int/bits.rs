//		Packages																										

use super::*;
use crate::int::{I256, I512, U256, U512, tests::random};
use claims::{assert_none, assert_some_eq};
use rand::{Rng, SeedableRng, rngs::StdRng};



//		Type aliases																									

type U128 = Int<2, false>;
type I128 = Int<2, true>;



//		Tests																											

mod public_methods {
	use super::*;

	//		bit																	
	#[test]
	fn bit() {
		let value = U256::from_limbs([0b101, 0, 0, 1 << 63]);
		assert!( value.bit(0));
		assert!(!value.bit(1));
		assert!( value.bit(2));
		assert!( value.bit(255));
		assert!(!value.bit(256));
		assert!(!value.bit(u32::MAX));
	}

	//		bits																
	#[test]
	fn bits__ranges() {
		let value = U256::from_u64(0b1011);
		assert_eq!(value.bits(0..4),   vec![true, true, false, true]);
		assert_eq!(value.bits(..=2),   vec![true, true, false]);
		assert_eq!(value.bits(1..3),   vec![true, false]);
		assert_eq!(value.bits(..).len(), 256);
		assert_eq!(I512::NEG_ONE.bits(500..), vec![true; 12]);
	}
	#[test]
	fn bits__invalid_ranges() {
		let value = U256::MAX;
		assert!(value.bits(5..5).is_empty());
		assert!(value.bits(250..300).is_empty());
		assert!(value.bits(256..).is_empty());
		let (start, end) = (10, 2);
		assert!(value.bits(start..end).is_empty());
	}

	//		checked_ilog2														
	#[test]
	fn checked_ilog2() {
		assert_some_eq!((U256::ONE << 200).checked_ilog2(), 200);
		assert_some_eq!(U512::MAX.checked_ilog2(),          511);
		assert_some_eq!(I256::MAX.checked_ilog2(),          254);
		assert_some_eq!(U256::from_u64(1000).checked_ilog2(), 9);
		assert_none!(U256::ZERO.checked_ilog2());
		assert_none!(I256::NEG_ONE.checked_ilog2());
	}

	//		checked_shl															
	#[test]
	fn checked_shl() {
		assert_some_eq!(U256::ONE.checked_shl(255), U256::ONE << 255);
		assert_none!(U256::ONE.checked_shl(256));
		assert_none!(I512::ONE.checked_shl(512));
	}

	//		checked_shr															
	#[test]
	fn checked_shr() {
		assert_some_eq!(I256::MIN.checked_shr(255), I256::NEG_ONE);
		assert_some_eq!(U256::MAX.checked_shr(255), U256::ONE);
		assert_none!(U256::MAX.checked_shr(256));
	}

	//		count_ones															
	#[test]
	fn count_ones() {
		assert_eq!(U256::ZERO.count_ones(),    0);
		assert_eq!(U512::MAX.count_ones(),     512);
		assert_eq!(I256::MIN.count_ones(),     1);
		assert_eq!(U256::from_u64(0xFF).count_ones(), 8);
	}

	//		count_zeros															
	#[test]
	fn count_zeros() {
		assert_eq!(U256::ZERO.count_zeros(), 256);
		assert_eq!(I256::MAX.count_zeros(),  1);
	}

	//		ilog2																
	#[test]
	fn ilog2() {
		assert_eq!(U256::ONE.ilog2(),         0);
		assert_eq!((U512::ONE << 300).ilog2(), 300);
	}
	#[test]
	#[should_panic(expected = "Argument of integer logarithm must be positive")]
	fn ilog2__zero() {
		let _ = U256::ZERO.ilog2();
	}
	#[test]
	#[should_panic(expected = "Argument of integer logarithm must be positive")]
	fn ilog2__negative() {
		let _ = I256::NEG_ONE.ilog2();
	}

	//		is_even																
	#[test]
	fn is_even() {
		assert!( U256::ZERO.is_even());
		assert!(!U256::ONE.is_even());
		assert!( I256::MIN.is_even());
	}

	//		is_odd																
	#[test]
	fn is_odd() {
		assert!( I256::NEG_ONE.is_odd());
		assert!(!U512::ZERO.is_odd());
	}

	//		is_power_of_two														
	#[test]
	fn is_power_of_two() {
		assert!( U256::ONE.is_power_of_two());
		assert!( (U256::ONE << 255).is_power_of_two());
		assert!(!U256::ZERO.is_power_of_two());
		assert!(!U256::from_u64(6).is_power_of_two());
		assert!(!I256::MIN.is_power_of_two());
	}

	//		leading_ones														
	#[test]
	fn leading_ones() {
		assert_eq!(I256::NEG_ONE.leading_ones(), 256);
		assert_eq!(I256::MIN.leading_ones(),     1);
		assert_eq!(U256::ONE.leading_ones(),     0);
	}

	//		leading_zeros														
	#[test]
	fn leading_zeros() {
		assert_eq!(U256::ZERO.leading_zeros(), 256);
		assert_eq!(U256::ONE.leading_zeros(),  255);
		assert_eq!(I512::MAX.leading_zeros(),  1);
		assert_eq!(U512::from_limbs([0, 0, 0, 0, 1, 0, 0, 0]).leading_zeros(), 255);
	}

	//		logical_shr															
	#[test]
	fn logical_shr() {
		assert_eq!(I256::NEG_ONE.logical_shr(255), I256::ONE);
		assert_eq!(I256::MIN.logical_shr(1),       I256::ONE << 254);
		assert_eq!(U256::MAX.logical_shr(256),     U256::MAX);
	}

	//		reverse_bits														
	#[test]
	fn reverse_bits() {
		assert_eq!(U256::ONE.reverse_bits(),  U256::ONE << 255);
		assert_eq!(U512::MAX.reverse_bits(),  U512::MAX);
		assert_eq!(I256::MIN.reverse_bits(),  I256::ONE);
	}

	//		rotate_left															
	#[test]
	fn rotate_left() {
		assert_eq!((U256::ONE << 255).rotate_left(1), U256::ONE);
		assert_eq!(U256::ONE.rotate_left(256),        U256::ONE);
		assert_eq!(U256::ONE.rotate_left(300),        U256::ONE << 44);
		assert_eq!(I256::MIN.rotate_left(1),          I256::ONE);
	}

	//		rotate_right														
	#[test]
	fn rotate_right() {
		assert_eq!(U256::ONE.rotate_right(1),      U256::ONE << 255);
		assert_eq!(U512::ONE.rotate_right(512),    U512::ONE);
		assert_eq!(U512::ONE.rotate_right(64),     U512::ONE << 448);
	}

	//		set_bit																
	#[test]
	fn set_bit() {
		let mut value = U256::ZERO;
		assert!(value.set_bit(255, true));
		assert_eq!(value, U256::ONE << 255);
		assert!(value.set_bit(0, true));
		assert!(value.set_bit(255, false));
		assert_eq!(value, U256::ONE);
	}
	#[test]
	fn set_bit__out_of_range() {
		let mut value = I256::ZERO;
		assert!(!value.set_bit(256, true));
		assert_eq!(value, I256::ZERO);
	}

	//		shortest_bit_length													
	#[test]
	fn shortest_bit_length() {
		assert_eq!(I256::ZERO.shortest_bit_length(),              0);
		assert_eq!(I256::ONE.shortest_bit_length(),               1);
		assert_eq!(I256::NEG_ONE.shortest_bit_length(),           1);
		assert_eq!(I256::from_i128_bits(-2).shortest_bit_length(), 2);
		assert_eq!(I256::from_u64(127).shortest_bit_length(),     7);
		assert_eq!(I256::from_i128_bits(-128).shortest_bit_length(), 8);
		assert_eq!(I256::MIN.shortest_bit_length(),               256);
		assert_eq!(I256::MAX.shortest_bit_length(),               255);
		assert_eq!(U256::MAX.shortest_bit_length(),               256);
	}

	//		swap_bytes															
	#[test]
	fn swap_bytes() {
		assert_eq!(U256::from_u64(0xAB).swap_bytes(), U256::from_limbs([0, 0, 0, 0xAB << 56]));
		assert_eq!(I512::NEG_ONE.swap_bytes(),        I512::NEG_ONE);
	}

	//		trailing_ones														
	#[test]
	fn trailing_ones() {
		assert_eq!(U256::from_u64(0b0111).trailing_ones(), 3);
		assert_eq!(U512::MAX.trailing_ones(),              512);
		assert_eq!(U512::ZERO.trailing_ones(),             0);
	}

	//		trailing_zeros														
	#[test]
	fn trailing_zeros() {
		assert_eq!(U256::ZERO.trailing_zeros(),      256);
		assert_eq!((U256::ONE << 200).trailing_zeros(), 200);
		assert_eq!(I256::MIN.trailing_zeros(),       255);
	}

	//		with_bit															
	#[test]
	fn with_bit() {
		assert_eq!(U256::ZERO.with_bit(3, true),     U256::from_u64(8));
		assert_eq!(I256::NEG_ONE.with_bit(255, false), I256::MAX);
		assert_eq!(U256::ONE.with_bit(999, true),    U256::ONE);
	}

	//		wrapping_shl														
	#[test]
	fn wrapping_shl() {
		assert_eq!(U256::ONE.wrapping_shl(256),   U256::ONE);
		assert_eq!(U256::ONE.wrapping_shl(257),   U256::from_u64(2));
		assert_eq!(I256::ONE.wrapping_shl(255),   I256::MIN);
		assert_eq!(U512::MAX.wrapping_shl(64),    U512::from_limbs([0, u64::MAX, u64::MAX, u64::MAX, u64::MAX, u64::MAX, u64::MAX, u64::MAX]));
	}
	#[test]
	fn wrapping_shl__periodic() {
		let mut rng = StdRng::seed_from_u64(0x5111);
		for _ in 0..200 {
			let value: U512 = random(&mut rng);
			let n           = rng.gen_range(0..4096_u32);
			assert_eq!(value.wrapping_shl(n), value.wrapping_shl(n % 512));
			assert_eq!(value.wrapping_shr(n), value.wrapping_shr(n % 512));
		}
	}

	//		wrapping_shr														
	#[test]
	fn wrapping_shr() {
		assert_eq!(I256::NEG_ONE.wrapping_shr(1000), I256::NEG_ONE);
		assert_eq!(I256::MIN.wrapping_shr(254),      I256::from_i128_bits(-2));
		assert_eq!(U256::MAX.wrapping_shr(256),      U256::MAX);
		assert_eq!(U256::MAX.wrapping_shr(192),      U256::from_u64(u64::MAX));
	}
}

mod matches_primitives {
	use super::*;

	//		Counting															
	#[test]
	fn counting() {
		let mut rng = StdRng::seed_from_u64(0xC0_07);
		for _ in 0..500 {
			let value = rng.gen::<u128>() >> rng.gen_range(0..128_u32);
			let wide  = U128::from_u128_bits(value);
			assert_eq!(wide.count_ones(),      value.count_ones());
			assert_eq!(wide.leading_zeros(),   value.leading_zeros());
			assert_eq!(wide.trailing_zeros(),  value.trailing_zeros());
			assert_eq!(wide.leading_ones(),    value.leading_ones());
			assert_eq!(wide.trailing_ones(),   value.trailing_ones());
			assert_eq!(wide.is_power_of_two(), value.is_power_of_two());
			assert_eq!(wide.checked_ilog2(),   value.checked_ilog2());
		}
	}

	//		Permutations														
	#[test]
	fn permutations() {
		let mut rng = StdRng::seed_from_u64(0x9E7);
		for _ in 0..500 {
			let value = rng.gen::<u128>();
			let n     = rng.gen_range(0..300_u32);
			let wide  = U128::from_u128_bits(value);
			assert_eq!(wide.reverse_bits().low_u128(),  value.reverse_bits());
			assert_eq!(wide.swap_bytes().low_u128(),    value.swap_bytes());
			assert_eq!(wide.rotate_left(n).low_u128(),  value.rotate_left(n));
			assert_eq!(wide.rotate_right(n).low_u128(), value.rotate_right(n));
		}
	}

	//		Shifts																
	#[test]
	fn shifts() {
		let mut rng = StdRng::seed_from_u64(0x5F7);
		for _ in 0..500 {
			let value = rng.gen::<i128>();
			let n     = rng.gen_range(0..400_u32);
			let wide  = I128::from_i128_bits(value);
			assert_eq!(wide.wrapping_shl(n).low_u128(), value.wrapping_shl(n) as u128);
			assert_eq!(wide.wrapping_shr(n).low_u128(), value.wrapping_shr(n) as u128);
			assert_eq!(wide.logical_shr(n).low_u128(),  (value as u128).wrapping_shr(n));
			assert_eq!(wide.checked_shl(n).map(I128::low_u128), value.checked_shl(n).map(|v| v as u128));
			assert_eq!(wide.checked_shr(n).map(I128::low_u128), value.checked_shr(n).map(|v| v as u128));
		}
	}
}

mod private_methods {
	use super::*;

	//		and_limbs															
	#[test]
	fn and_limbs() {
		assert_eq!(U256::MAX.and_limbs(U256::from_u64(7)), U256::from_u64(7));
		assert_eq!(I256::MIN.and_limbs(I256::MAX),         I256::ZERO);
	}

	//		not_limbs															
	#[test]
	fn not_limbs() {
		assert_eq!(U256::ZERO.not_limbs(), U256::MAX);
		assert_eq!(I256::MIN.not_limbs(),  I256::MAX);
	}

	//		or_limbs															
	#[test]
	fn or_limbs() {
		assert_eq!(I256::MIN.or_limbs(I256::MAX), I256::NEG_ONE);
	}

	//		shift_left															
	#[test]
	fn shift_left() {
		assert_eq!(U256::ONE.shift_left(0),   U256::ONE);
		assert_eq!(U256::ONE.shift_left(64),  U256::from_limbs([0, 1, 0, 0]));
		assert_eq!(U256::MAX.shift_left(100), U256::from_limbs([0, u64::MAX << 36, u64::MAX, u64::MAX]));
	}

	//		shift_right															
	#[test]
	fn shift_right() {
		assert_eq!(U256::MAX.shift_right(64, 0),              U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0]));
		assert_eq!(U256::ZERO.shift_right(64, u64::MAX),      U256::from_limbs([0, 0, 0, u64::MAX]));
		assert_eq!(U256::ONE.shift_right(1, u64::MAX),        U256::from_limbs([0, 0, 0, 1 << 63]));
	}

	//		xor_limbs															
	#[test]
	fn xor_limbs() {
		assert_eq!(U256::MAX.xor_limbs(U256::MAX), U256::ZERO);
		assert_eq!(U256::MAX.xor_limbs(U256::ONE), U256::MAX.decrement());
	}
}
