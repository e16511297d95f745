//! Lay out a small grid with every topology and print the result.
//!
//! Run with: RUST_LOG=tilemap=debug cargo run --example tilemap_layout --features tracing

use tilemap::{GridPoint, LinearAxis, SHAPES, Series, SeriesConfig, ShapeArgs, TileShape};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let padding = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<f64>())
        .transpose()
        .map_err(|e| miette::miette!("padding must be a number: {}", e))?
        .unwrap_or(0.0);

    let x = LinearAxis::horizontal(0.0, 6.0, 600.0).map_err(|e| miette::miette!("x axis: {}", e))?;
    let y = LinearAxis::vertical(0.0, 4.0, 400.0).map_err(|e| miette::miette!("y axis: {}", e))?;
    let config = SeriesConfig::default().with_point_padding(padding)?;

    for shape in SHAPES.iter() {
        let points = (1..4).flat_map(|row| (1..5).map(move |col| GridPoint::new(col, row)));
        let mut series = Series::new(config, x, y).with_points(points);
        shape.translate(&mut series)?;

        println!("{} (padding {:?})", shape.kind(), shape.series_padding(&config));
        for point in &series.points {
            let drawn = match point.shape_args() {
                Some(ShapeArgs::Path(path)) => path.to_string(),
                Some(ShapeArgs::Circle { x, y, r }) => format!("circle {},{} r={}", x, y, r),
                Some(ShapeArgs::Rect { x, y, width, height }) => format!("rect {},{} {}x{}", x, y, width, height),
                None => continue,
            };
            println!("  ({}, {}) {}", point.x, point.y, drawn);
        }
    }

    Ok(())
}
