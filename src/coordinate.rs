//! Numeric kinds accepted at the construction boundary.
//!
//! Integers, floats and decimals all collapse into [`BigDecimal`] here, once,
//! so the arithmetic in [`crate::vector`] only ever sees decimals.

use crate::{reject, Result, VectorError};
use bigdecimal::BigDecimal;
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(BigDecimal),
}

impl Coordinate {
    /// Coerce into a decimal. Floats go through their shortest round-trip
    /// representation, so `0.1_f64` becomes exactly `0.1`.
    pub fn to_decimal(&self) -> Result<BigDecimal> {
        match self {
            Coordinate::Int(n) => Ok(BigDecimal::from(*n)),
            Coordinate::UInt(n) => Ok(BigDecimal::from(*n)),
            Coordinate::Decimal(d) => Ok(d.clone()),
            Coordinate::Float(f) => {
                if !f.is_finite() {
                    return Err(reject(VectorError::InvalidCoordinateType(format!(
                        "{} has no decimal representation",
                        f
                    ))));
                }
                BigDecimal::from_str(&f.to_string()).map_err(|e| {
                    reject(VectorError::InvalidCoordinateType(format!(
                        "cannot convert {} to decimal: {}",
                        f, e
                    )))
                })
            }
        }
    }

    /// Interpret one element of an untyped JSON sequence. Only JSON numbers
    /// are coordinates; `index` is used to name the offending element.
    pub fn from_json(value: &Value, index: usize) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Coordinate::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Coordinate::UInt(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Coordinate::Float(f))
                } else {
                    Err(reject(VectorError::InvalidCoordinateType(format!(
                        "element {} ({}) is not a representable number",
                        index, n
                    ))))
                }
            }
            other => Err(reject(VectorError::InvalidCoordinateType(format!(
                "element {} is {} ({}), expected int, float or decimal",
                index,
                json_kind(other),
                other
            )))),
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

macro_rules! coordinate_from {
    ($variant:ident: $($t:ty => $wide:ty),*) => {
        $(
            impl From<$t> for Coordinate {
                fn from(value: $t) -> Self {
                    Coordinate::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

coordinate_from!(Int: i8 => i64, i16 => i64, i32 => i64, i64 => i64);
coordinate_from!(UInt: u8 => u64, u16 => u64, u32 => u64, u64 => u64);
coordinate_from!(Float: f32 => f64, f64 => f64);

impl From<BigDecimal> for Coordinate {
    fn from(value: BigDecimal) -> Self {
        Coordinate::Decimal(value)
    }
}

impl From<&BigDecimal> for Coordinate {
    fn from(value: &BigDecimal) -> Self {
        Coordinate::Decimal(value.clone())
    }
}

impl TryFrom<Coordinate> for BigDecimal {
    type Error = VectorError;

    fn try_from(value: Coordinate) -> Result<Self> {
        value.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn float_coercion_uses_shortest_representation() {
        let d = Coordinate::from(0.1_f64).to_decimal().unwrap();
        assert_eq!(d, BigDecimal::from_str("0.1").unwrap());
    }

    #[test]
    fn non_finite_float_is_rejected() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Coordinate::from(f).to_decimal(),
                Err(VectorError::InvalidCoordinateType(_))
            ));
        }
    }

    #[test]
    fn json_non_numbers_are_rejected() {
        for value in [json!("x"), json!(true), json!(null), json!([1]), json!({})] {
            assert!(matches!(
                Coordinate::from_json(&value, 0),
                Err(VectorError::InvalidCoordinateType(_))
            ));
        }
        assert_eq!(Coordinate::from_json(&json!(-4), 0).unwrap(), Coordinate::Int(-4));
        assert_eq!(
            Coordinate::from_json(&json!(2.5), 0).unwrap(),
            Coordinate::Float(2.5)
        );
    }
}
