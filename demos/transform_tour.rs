//! Walk through the kernel: scalar approximations, a model transform,
//! a quaternion rotation and the degenerate-input fallbacks.
//!
//! Run with `RUST_LOG=fulcrum=trace` to see the fallback events.

use fulcrum::numerics::scalar;
use fulcrum::prelude::*;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transform_tour=info".parse()?),
        )
        .init();

    println!("🔢 Scalar approximations");
    println!("========================");
    for x in [0.25f32, 2.0, 144.0, 1e4] {
        println!("sqrt({x:>8}) = {:>12.6}  (std {:>12.6})", scalar::sqrt(x), x.sqrt());
    }
    for deg in [0.0f32, 30.0, 90.0, 180.0] {
        let r = scalar::radians(deg);
        println!("sin/cos({deg:>5}°) = {:>9.6} / {:>9.6}", scalar::sin(r), scalar::cos(r));
    }

    model_transform_demo()?;
    quaternion_demo();
    fallback_demo();

    Ok(())
}

fn model_transform_demo() -> anyhow::Result<()> {
    println!("\n🧱 Model transform");
    println!("------------------");

    let mut scale = Matrix4x4::identity();
    scale.set_scale(2.0, 2.0, 2.0);
    let mut spin = Matrix4x4::identity();
    spin.set_rotation(HALF_PI);
    let mut shift = Matrix4x4::identity();
    shift.set_translation(10.0, 0.0, -5.0);

    let model = shift * spin * scale;
    let corner = Vector3::new(1.0, 1.0, 1.0);
    let world = model * corner;
    info!(?world, "corner placed in world space");

    let back = model.try_inverse()? * world;
    println!("local {corner:?} -> world {world:?} -> local {back:?}");
    Ok(())
}

fn quaternion_demo() {
    println!("\n🌀 Quaternion rotation");
    println!("---------------------");

    let up = Vector3::new(0.0, 1.0, 0.0);
    let start = Quaternion::identity();
    let end = Quaternion::from_axis_angle(&up, HALF_PI);
    let x = Vector3::new(1.0, 0.0, 0.0);

    for step in 0..=4 {
        let t = step as f32 / 4.0;
        let q = Quaternion::lerp(&start, &end, t);
        println!("t = {t:.2}: {:?}", q.rotate(&x));
    }
}

fn fallback_demo() {
    println!("\n🕳️  Degenerate inputs");
    println!("--------------------");

    let singular = Matrix3x3::from_rows([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
    println!("singular.inverse()      = {:?}", singular.inverse());
    match singular.try_inverse() {
        Ok(inv) => println!("singular.try_inverse()  = {inv:?}"),
        Err(err) => println!("singular.try_inverse()  = error: {err}"),
    }
    println!("zero.normalized()       = {:?}", Vector3::zero().normalized());
    println!("sqrt(-4)                = {}", scalar::sqrt(-4.0));
}
