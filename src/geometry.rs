//! Geometric queries on vectors: zero tests, directions, angles, projections,
//! and the 3-D cross product with the areas derived from it.
//!
//! Angles leave decimal arithmetic for `f64` only at the inverse cosine. The
//! cosine ratio is clamped to [-1, 1] first so rounding noise can never push
//! it outside the domain of `acos`.

use crate::{reject, Result, Vector, VectorError};
use bigdecimal::BigDecimal;
use ndarray::Array1;
use num_traits::{One, ToPrimitive};
use std::f64::consts::FRAC_PI_2;

/// Unit an angle is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl Vector {
    /// True when the magnitude is below the configured zero tolerance.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.config().zero_tolerance)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude()
            .to_f64()
            .map_or(false, |magnitude| magnitude < tolerance)
    }

    pub fn unit_vector(&self) -> Result<Vector> {
        if self.is_zero() {
            return Err(reject(VectorError::ZeroVector(format!(
                "{} has no direction, so no unit vector",
                self
            ))));
        }
        let inverse = (BigDecimal::one() / self.magnitude()).with_prec(self.config().precision);
        Ok(self.scale_rounded(&inverse))
    }

    /// Unrounded angle in radians; zero when either operand is the zero vector.
    fn radians_between(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(0.0);
        }
        let ratio = (dot / (self.magnitude() * other.magnitude()))
            .with_prec(self.config().precision);
        let cosine = ratio.to_f64().ok_or_else(|| {
            reject(VectorError::Unrepresentable(format!(
                "cosine ratio {} between {} and {} has no f64 form",
                ratio, self, other
            )))
        })?;
        Ok(cosine.clamp(-1.0, 1.0).acos())
    }

    /// Angle between two vectors, rounded to `angle_decimals` places.
    ///
    /// The angle with a zero vector is defined as 0 rather than an error.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        let radians = self.radians_between(other)?;
        let angle = match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        };
        Ok(round_to(angle, self.config().angle_decimals))
    }

    /// True when either vector is zero or the angle is π/2 within
    /// `angle_tolerance`. The comparison is always made in radians.
    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        let radians = self.radians_between(other)?;
        Ok(self.is_zero()
            || other.is_zero()
            || (radians - FRAC_PI_2).abs() <= self.config().angle_tolerance)
    }

    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        Ok(self.angle_with(other, AngleUnit::Radians)? == 0.0)
    }

    /// Projection of `self` onto `basis`.
    pub fn parallel_component(&self, basis: &Vector) -> Result<Vector> {
        self.check_dimension(basis)?;
        let direction = basis.unit_vector()?;
        let precision = self.config().precision;
        let length = (self.dot(basis)? / basis.magnitude()).with_prec(precision);
        Ok(self.derive(
            direction
                .coordinates()
                .mapv(|c| (c * &length).with_prec(precision)),
        ))
    }

    /// Rejection of `self` from `basis`: what remains after removing the projection.
    pub fn orthogonal_component(&self, basis: &Vector) -> Result<Vector> {
        let parallel = self.parallel_component(basis)?;
        self.subtract(&parallel)
    }

    pub fn cross_product(&self, other: &Vector) -> Result<Vector> {
        for operand in [self, other] {
            if operand.dimension() != 3 {
                return Err(reject(VectorError::UnsupportedDimension {
                    found: operand.dimension(),
                }));
            }
        }
        let (a, b) = (self.coordinates(), other.coordinates());
        let coordinates = Array1::from_vec(vec![
            &a[1] * &b[2] - &a[2] * &b[1],
            &a[2] * &b[0] - &a[0] * &b[2],
            &a[0] * &b[1] - &a[1] * &b[0],
        ]);
        Ok(self.derive(coordinates))
    }

    pub fn parallelogram_area(&self, other: &Vector) -> Result<BigDecimal> {
        Ok(self.cross_product(other)?.magnitude().clone())
    }

    pub fn triangle_area(&self, other: &Vector) -> Result<BigDecimal> {
        let area = self.parallelogram_area(other)?;
        Ok((area / BigDecimal::from(2)).with_prec(self.config().precision))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
