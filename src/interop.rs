//! Serialisation and database integration.
//!
//! Human-readable serde formats carry the decimal string, as the values are
//! too wide for JSON numbers. Binary formats carry the little-endian byte
//! image. With the `postgres` feature enabled, PostgreSQL integer columns are
//! converted with range checks, and text columns hold the decimal string.



//		Modules																											

#[cfg(test)]
#[path = "tests/interop.rs"]
mod tests;



//		Packages																										

use crate::int::Int;
use core::fmt::{Formatter, self};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;

#[cfg(feature = "postgres")]
use crate::errors::ConversionError;
#[cfg(feature = "postgres")]
use bytes::BytesMut;
#[cfg(feature = "postgres")]
use std::error::Error;
#[cfg(feature = "postgres")]
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs																											

//		BytesVisitor															
/// A visitor for reading integers from their little-endian byte image.
struct BytesVisitor<const LIMBS: usize, const SIGNED: bool>;

//󰭅		Visitor																	
impl<const LIMBS: usize, const SIGNED: bool> Visitor<'_> for BytesVisitor<LIMBS, SIGNED> {
	type Value = Int<LIMBS, SIGNED>;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} bytes representing a {} integer", Int::<LIMBS, SIGNED>::BYTES, kind::<LIMBS, SIGNED>())
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.len() != Int::<LIMBS, SIGNED>::BYTES {
			return Err(E::invalid_length(v.len(), &self));
		}
		Int::from_le_bytes(v).map_err(E::custom)
	}
}

//		IntVisitor																
/// A visitor for reading integers from numbers, strings, or bytes.
struct IntVisitor<const LIMBS: usize, const SIGNED: bool>;

//󰭅		Visitor																	
impl<const LIMBS: usize, const SIGNED: bool> Visitor<'_> for IntVisitor<LIMBS, SIGNED> {
	type Value = Int<LIMBS, SIGNED>;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a {} integer or its decimal string", kind::<LIMBS, SIGNED>())
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}

	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}

	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}

	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BytesVisitor::<LIMBS, SIGNED>.visit_bytes(v)
	}
}



//		Serialisation																									

//󰭅		Int																		
impl<const LIMBS: usize, const SIGNED: bool> Int<LIMBS, SIGNED> {
	//		from_json															
	/// Deserialises a JSON value into this integer type.
	///
	/// Both decimal strings and plain JSON numbers are accepted.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		to_json																
	/// Serialises this integer to a JSON string holding the decimal value.
	///
	/// # Errors
	///
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
}

//󰭅		Deserialize																
impl<'de, const LIMBS: usize, const SIGNED: bool> Deserialize<'de> for Int<LIMBS, SIGNED> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor::<LIMBS, SIGNED>)
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor::<LIMBS, SIGNED>)
		}
	}
}

//󰭅		Serialize																
impl<const LIMBS: usize, const SIGNED: bool> Serialize for Int<LIMBS, SIGNED> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_str(&self.to_string())
		} else {
			serializer.serialize_bytes(&self.to_le_vec())
		}
	}
}



//		Database																										

//󰭅		FromSql																	
#[cfg(feature = "postgres")]
impl<'a, const LIMBS: usize, const SIGNED: bool> FromSql<'a> for Int<LIMBS, SIGNED> {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2 => Ok(Self::try_from(i16::from_sql(ty, raw)?)?),
			Type::INT4 => Ok(Self::try_from(i32::from_sql(ty, raw)?)?),
			Type::INT8 => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			Type::TEXT => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			ref unknown => Err(Box::new(ConversionError::UnsupportedConversion {
				from: unknown.name().to_owned(),
				to:   kind::<LIMBS, SIGNED>(),
			})),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		ToSql																	
#[cfg(feature = "postgres")]
impl<const LIMBS: usize, const SIGNED: bool> ToSql for Int<LIMBS, SIGNED> {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match *ty {
			Type::INT2 => i16::try_from(*self)?.to_sql(ty, out),
			Type::INT4 => i32::try_from(*self)?.to_sql(ty, out),
			Type::INT8 => i64::try_from(*self)?.to_sql(ty, out),
			Type::TEXT => self.to_string().to_sql(ty, out),
			ref unknown => Err(Box::new(ConversionError::UnsupportedConversion {
				from: kind::<LIMBS, SIGNED>(),
				to:   unknown.name().to_owned(),
			})),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}



//		Functions																										

//		kind																	
/// The short name of an integer type, such as `i256` or `u512`.
fn kind<const LIMBS: usize, const SIGNED: bool>() -> String {
	format!("{}{}", if SIGNED { 'i' } else { 'u' }, Int::<LIMBS, SIGNED>::BITS)
}
