//! Tessellates a sample path and prints the resulting triangle vertices.
//!
//! ```text
//! cargo run --example print_vertices
//! RUST_LOG=polystroke=debug cargo run --example print_vertices
//! ```

use polystroke::math::Point2;
use polystroke::{EndCapStyle, JointStyle, StrokeStyle, TessellateStroke};

fn main() -> polystroke::Result<()> {
    // Default: WARN for everything, INFO for polystroke.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polystroke=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polystroke=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let points = vec![
        Point2::new(-0.25, -0.5),
        Point2::new(-0.25, 0.5),
        Point2::new(0.25, 0.25),
        Point2::new(0.0, 0.0),
        Point2::new(0.25, -0.25),
        Point2::new(-0.4, -0.25),
    ];

    let style = StrokeStyle::new(0.1)?
        .with_joint_style(JointStyle::Round)
        .with_end_cap_style(EndCapStyle::Square);

    let vertices = TessellateStroke::new(points, style).execute()?;
    for (idx, v) in vertices.iter().enumerate() {
        println!("vert {idx} : ({:.2},{:.2})", v.x, v.y);
    }

    Ok(())
}
