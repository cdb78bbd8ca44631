#![allow(dead_code)]

use circle_union::math::Point2;
use circle_union::Circle;

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

#[allow(clippy::unwrap_used)]
pub fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::new(Point2::new(x, y), r).unwrap()
}

/// Area of the lens shared by two circles whose centers are `d` apart.
pub fn lens_area(r1: f64, r2: f64, d: f64) -> f64 {
    if d >= r1 + r2 {
        return 0.0;
    }
    if d <= (r1 - r2).abs() {
        let r = r1.min(r2);
        return std::f64::consts::PI * r * r;
    }
    let a1 = ((d * d + r1 * r1 - r2 * r2) / (2.0 * d * r1)).acos();
    let a2 = ((d * d + r2 * r2 - r1 * r1) / (2.0 * d * r2)).acos();
    let k = ((-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2)).sqrt();
    r1 * r1 * a1 + r2 * r2 * a2 - 0.5 * k
}

/// Midpoint-rule estimate of the union area on an `n x n` grid over the
/// circles' bounding box.
pub fn grid_area(circles: &[Circle], n: usize) -> f64 {
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in circles {
        min.x = min.x.min(c.center().x - c.radius());
        min.y = min.y.min(c.center().y - c.radius());
        max.x = max.x.max(c.center().x + c.radius());
        max.y = max.y.max(c.center().y + c.radius());
    }
    let hx = (max.x - min.x) / n as f64;
    let hy = (max.y - min.y) / n as f64;

    let mut inside = 0_usize;
    for i in 0..n {
        let x = min.x + (i as f64 + 0.5) * hx;
        for j in 0..n {
            let y = min.y + (j as f64 + 0.5) * hy;
            let p = Point2::new(x, y);
            if circles.iter().any(|c| (p - c.center()).norm() <= c.radius()) {
                inside += 1;
            }
        }
    }
    inside as f64 * hx * hy
}
