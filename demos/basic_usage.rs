use anyhow::Result;
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vector_math::{AngleUnit, Vector};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("Vector Math Demo");
    println!("================\n");

    let v1 = Vector::new([1, 2, 3])?;
    let v2 = Vector::new([3, 4, 5])?;
    let v3 = Vector::from_json(&json!([1, 2, 3]))?;

    println!("{}", v1);
    println!("v1 == v3: {}", v1 == v3);
    println!("v2 + v3 = {}", (&v2 + &v3)?);
    println!("v2 - v3 = {}", (&v2 - &v3)?);
    println!("v2 * 10 = {}", (&v2 * 10_i32)?);
    println!("v2 . v3 = {}", (&v2 * &v3)?);
    println!("|v2| = {}", v2.magnitude());
    println!("unit(v2) = {}", v2.unit_vector()?);

    let x = Vector::new([1, 0, 0])?;
    let y = Vector::new([0, 1, 0])?;
    println!("\nangle(x, y) = {} rad", x.angle_with(&y, AngleUnit::Radians)?);
    println!("angle(x, y) = {} deg", x.angle_with(&y, AngleUnit::Degrees)?);
    println!("x orthogonal to y: {}", x.is_orthogonal_to(&y)?);
    println!("x cross y = {}", x.cross_product(&y)?);
    println!("triangle area = {}", x.triangle_area(&y)?);

    let a = Vector::new([3.039, 1.879])?;
    let b = Vector::new([0.825, 2.036])?;
    println!("\nprojection of a onto b = {}", a.parallel_component(&b)?);
    println!("rejection of a from b = {}", a.orthogonal_component(&b)?);

    match Vector::new([1, 2]).and_then(|short| short.dot(&v1)) {
        Ok(dot) => println!("unexpected dot product {}", dot),
        Err(e) => tracing::info!("rejected as expected: {}", e),
    }

    Ok(())
}
