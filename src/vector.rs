use crate::config::GeometryConfig;
use crate::coordinate::{json_kind, Coordinate};
use crate::{reject, Result, VectorError};
use bigdecimal::BigDecimal;
use ndarray::{Array1, Zip};
use num_traits::{ToPrimitive, Zero};
use serde_json::Value;
use std::fmt;
use std::ops::Index;

/// An immutable n-dimensional vector with decimal coordinates.
///
/// The magnitude is computed once at construction and cached. Every
/// operation returns a new vector; nothing mutates an existing one.
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Array1<BigDecimal>,
    magnitude: BigDecimal,
    config: GeometryConfig,
}

impl Vector {
    pub fn new<I, T>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Coordinate>,
    {
        Self::with_config(coordinates, GeometryConfig::default())
    }

    pub fn with_config<I, T>(coordinates: I, config: GeometryConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Coordinate>,
    {
        let raw: Vec<Coordinate> = coordinates.into_iter().map(Into::into).collect();
        Self::from_raw(&raw, config)
    }

    /// Build a vector from an untyped JSON array such as `[1, 2.5, -3]`.
    ///
    /// Anything other than an array of JSON numbers is rejected with
    /// [`VectorError::InvalidCoordinateType`]; an empty array with
    /// [`VectorError::EmptyCoordinates`].
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::from_json_with_config(value, GeometryConfig::default())
    }

    pub fn from_json_with_config(value: &Value, config: GeometryConfig) -> Result<Self> {
        let elements = value.as_array().ok_or_else(|| {
            reject(VectorError::InvalidCoordinateType(format!(
                "coordinates must be an array, got {}",
                json_kind(value)
            )))
        })?;
        let raw = elements
            .iter()
            .enumerate()
            .map(|(index, element)| Coordinate::from_json(element, index))
            .collect::<Result<Vec<_>>>()?;
        Self::from_raw(&raw, config)
    }

    fn from_raw(raw: &[Coordinate], config: GeometryConfig) -> Result<Self> {
        if raw.is_empty() {
            return Err(reject(VectorError::EmptyCoordinates));
        }
        let decimals = raw
            .iter()
            .map(Coordinate::to_decimal)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_decimals(Array1::from_vec(decimals), config))
    }

    /// Callers guarantee `coordinates` is non-empty.
    pub(crate) fn from_decimals(coordinates: Array1<BigDecimal>, config: GeometryConfig) -> Self {
        let config = config.clamped();
        let magnitude = euclidean_norm(&coordinates, config.precision);
        tracing::trace!(dimension = coordinates.len(), "constructed vector");
        Self {
            coordinates,
            magnitude,
            config,
        }
    }

    /// New vector carrying this vector's config.
    pub(crate) fn derive(&self, coordinates: Array1<BigDecimal>) -> Vector {
        Vector::from_decimals(coordinates, self.config)
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn magnitude(&self) -> &BigDecimal {
        &self.magnitude
    }

    pub fn coordinates(&self) -> &Array1<BigDecimal> {
        &self.coordinates
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigDecimal> {
        self.coordinates.iter()
    }

    /// Lossy float copy of the coordinates for interop with `f64` code.
    pub fn to_f64_array(&self) -> Array1<f64> {
        self.coordinates.mapv(|c| c.to_f64().unwrap_or(f64::NAN))
    }

    pub(crate) fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(reject(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            }));
        }
        Ok(())
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(self.derive(&self.coordinates + &other.coordinates))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(self.derive(&self.coordinates - &other.coordinates))
    }

    /// Multiply every coordinate by `scalar`. Zero is a valid scalar.
    pub fn scale<S: Into<Coordinate>>(&self, scalar: S) -> Result<Vector> {
        let factor = scalar.into().to_decimal()?;
        Ok(self.scale_by(&factor))
    }

    pub(crate) fn scale_by(&self, factor: &BigDecimal) -> Vector {
        self.derive(self.coordinates.mapv(|c| c * factor))
    }

    /// Like `scale_by`, but each product is rounded to the configured precision.
    pub(crate) fn scale_rounded(&self, factor: &BigDecimal) -> Vector {
        let precision = self.config.precision;
        self.derive(self.coordinates.mapv(|c| (c * factor).with_prec(precision)))
    }

    pub fn dot(&self, other: &Vector) -> Result<BigDecimal> {
        self.check_dimension(other)?;
        Ok(self
            .coordinates
            .iter()
            .zip(other.coordinates.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Element-wise (Hadamard) product.
    pub fn elementwise_product(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(self.derive(&self.coordinates * &other.coordinates))
    }

    pub fn divide<S: Into<Coordinate>>(&self, scalar: S) -> Result<Vector> {
        let divisor = scalar.into().to_decimal()?;
        if divisor.is_zero() {
            return Err(reject(VectorError::DivisionByZero(format!(
                "cannot divide {} by zero",
                self
            ))));
        }
        let precision = self.config.precision;
        Ok(self.derive(
            self.coordinates
                .mapv(|c| (&c / &divisor).with_prec(precision)),
        ))
    }

    pub fn divide_elementwise(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        if let Some(index) = other.coordinates.iter().position(Zero::is_zero) {
            return Err(reject(VectorError::DivisionByZero(format!(
                "divisor {} has a zero coordinate at index {}",
                other, index
            ))));
        }
        let precision = self.config.precision;
        let quotients = Zip::from(&self.coordinates)
            .and(&other.coordinates)
            .map_collect(|a, b| (a / b).with_prec(precision));
        Ok(self.derive(quotients))
    }
}

fn euclidean_norm(coordinates: &Array1<BigDecimal>, precision: u64) -> BigDecimal {
    let sum_of_squares: BigDecimal = coordinates.iter().map(|c| c * c).sum();
    // sqrt only declines negative input
    sum_of_squares
        .sqrt()
        .map(|root| root.with_prec(precision))
        .unwrap_or_default()
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Index<usize> for Vector {
    type Output = BigDecimal;

    fn index(&self, index: usize) -> &BigDecimal {
        &self.coordinates[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(data: Array1<f64>) -> Result<Self> {
        Vector::new(data.iter().copied())
    }
}

impl<T: Into<Coordinate>> TryFrom<Vec<T>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<T>) -> Result<Self> {
        Vector::new(coordinates)
    }
}

impl TryFrom<&Value> for Vector {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        Vector::from_json(value)
    }
}
