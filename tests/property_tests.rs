use rand::Rng;
use std::str::FromStr;
use vector_math::{BigDecimal, Vector};

const TRIALS: usize = 50;

fn random_integer_vector(dim: usize) -> Vector {
    let mut rng = rand::thread_rng();
    Vector::new((0..dim).map(|_| rng.gen_range(-100..=100_i64))).unwrap()
}

fn random_float_vector(dim: usize) -> Vector {
    let mut rng = rand::thread_rng();
    Vector::new((0..dim).map(|_| rng.gen_range(-10.0..10.0_f64))).unwrap()
}

fn random_pair() -> (Vector, Vector) {
    let dim = rand::thread_rng().gen_range(1..=8);
    (random_float_vector(dim), random_float_vector(dim))
}

fn tolerance() -> BigDecimal {
    BigDecimal::from_str("1e-25").unwrap()
}

#[test]
fn test_addition_commutes() {
    for _ in 0..TRIALS {
        let (a, b) = random_pair();
        assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
    }
}

#[test]
fn test_dot_product_commutes() {
    for _ in 0..TRIALS {
        let (a, b) = random_pair();
        assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }
}

#[test]
fn test_additive_inverse_is_zero() {
    for _ in 0..TRIALS {
        let (a, _) = random_pair();
        let inverse = (&a * -1_i32).unwrap();
        let sum = (&a + &inverse).unwrap();
        assert!(sum.is_zero());
        assert_eq!(sum, (&a + &(-&a)).unwrap());
    }
}

#[test]
fn test_scaling_scales_magnitude() {
    for _ in 0..TRIALS {
        let (a, _) = random_pair();
        let doubled = (&a * 2_i32).unwrap();
        let expected = a.magnitude() * BigDecimal::from(2);
        assert!((doubled.magnitude() - &expected).abs() < tolerance());
    }
}

#[test]
fn test_projection_decomposition() {
    for _ in 0..TRIALS {
        let (a, b) = random_pair();
        if b.is_zero() {
            continue;
        }
        let parallel = a.parallel_component(&b).unwrap();
        let orthogonal = a.orthogonal_component(&b).unwrap();
        assert_eq!((&parallel + &orthogonal).unwrap(), a);
    }
}

#[test]
fn test_integer_arithmetic_is_exact() {
    for _ in 0..TRIALS {
        let a = random_integer_vector(4);
        let b = random_integer_vector(4);
        let difference = (&a - &b).unwrap();
        assert_eq!((&difference + &b).unwrap(), a);

        let expected: i64 = a
            .to_f64_array()
            .iter()
            .zip(b.to_f64_array().iter())
            .map(|(x, y)| (*x as i64) * (*y as i64))
            .sum();
        assert_eq!(a.dot(&b).unwrap(), BigDecimal::from(expected));
    }
}

#[test]
fn test_cross_product_is_orthogonal_to_operands() {
    for _ in 0..TRIALS {
        let a = random_integer_vector(3);
        let b = random_integer_vector(3);
        let cross = a.cross_product(&b).unwrap();
        assert_eq!(cross.dot(&a).unwrap(), BigDecimal::from(0));
        assert_eq!(cross.dot(&b).unwrap(), BigDecimal::from(0));
        assert!(cross.is_orthogonal_to(&a).unwrap());
        assert!(cross.is_orthogonal_to(&b).unwrap());
    }
}

#[test]
fn test_unit_vector_has_unit_magnitude() {
    for _ in 0..TRIALS {
        let (a, _) = random_pair();
        if a.is_zero() {
            continue;
        }
        let unit = a.unit_vector().unwrap();
        let one = BigDecimal::from(1);
        assert!((unit.magnitude() - &one).abs() < tolerance());
    }
}
