use argh::FromArgs;
use std::hint::black_box;
use std::time::Instant;

use planar::geom::intersect::{intersects_rotated_matrix, intersects_rotated_trig};
use planar::geom::{transform_point, Circle, Rectangle};
use planar::linalg::Vec2F32;

#[derive(FromArgs)]
/// Test a circle against a rotated rectangle and time the two local frame mappings
struct Args {
    /// x coordinate of the rectangle center
    #[argh(option, default = "0.0")]
    rect_x: f32,

    /// y coordinate of the rectangle center
    #[argh(option, default = "0.0")]
    rect_y: f32,

    /// full width of the rectangle
    #[argh(option, default = "5.0")]
    width: f32,

    /// full height of the rectangle
    #[argh(option, default = "3.0")]
    height: f32,

    /// rotation of the rectangle in degrees
    #[argh(option, default = "45.0")]
    rotation: f32,

    /// x coordinate of the circle center
    #[argh(option, default = "2.0")]
    circle_x: f32,

    /// y coordinate of the circle center
    #[argh(option, default = "2.0")]
    circle_y: f32,

    /// radius of the circle
    #[argh(option, default = "0.5")]
    radius: f32,

    /// number of repetitions used for timing
    #[argh(option, default = "100000")]
    iterations: u32,
}

fn time_it(iterations: u32, f: impl Fn() -> bool) -> std::time::Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    start.elapsed()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.width < 0.0 || args.height < 0.0 || args.radius < 0.0 {
        return Err("width, height and radius must be non-negative".into());
    }

    let rect = Rectangle::from_size(
        Vec2F32::new(args.rect_x, args.rect_y),
        args.width,
        args.height,
        args.rotation,
    );
    let circle = Circle::new(Vec2F32::new(args.circle_x, args.circle_y), args.radius);
    log::debug!("rect: {rect:?}, circle: {circle:?}");

    let local = transform_point(&rect.pose.world_to_local(), circle.center);
    println!("circle center in the rectangle frame: ({}, {})", local.x, local.y);

    let by_matrix = intersects_rotated_matrix(&rect, &circle);
    let by_trig = intersects_rotated_trig(&rect, &circle);
    println!("intersects: {by_matrix}");
    println!("formulations agree: {}", by_matrix == by_trig);
    if by_matrix != by_trig {
        log::warn!("the matrix and trigonometric mappings disagree, the circle is on the boundary");
    }

    let matrix_time = time_it(args.iterations, || {
        intersects_rotated_matrix(black_box(&rect), black_box(&circle))
    });
    let trig_time = time_it(args.iterations, || {
        intersects_rotated_trig(black_box(&rect), black_box(&circle))
    });

    println!(
        "matrix: {:?} ({} iterations), trig: {:?} ({} iterations)",
        matrix_time, args.iterations, trig_time, args.iterations
    );

    Ok(())
}
