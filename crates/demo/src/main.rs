// File: crates/demo/src/main.rs
// Summary: Demo generating random sample series, simulating interaction, and writing SVGs.

use anyhow::{Context, Result};
use linechart_core::{Chart, DataSet, DataSource, Point, PointerEvent, Series};
use rand::Rng;
use std::path::PathBuf;

const SET_COUNT: usize = 3;
const POINTS_PER_SET: usize = 25;

/// Stand-in data provider: named sets with x = 1..=25 and y uniform in
/// [0, 130), floored to whole values.
struct RandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> DataSource for RandomSource<R> {
    fn dataset(&mut self) -> DataSet {
        (0..SET_COUNT)
            .map(|i| {
                let points = (1..=POINTS_PER_SET)
                    .map(|x| {
                        let base = (self.rng.random_range(0.0..90.0_f64)).floor();
                        let y = (base + self.rng.random_range(0.0..40.0_f64)).floor();
                        Point::new(x as f64, y)
                    })
                    .collect();
                Series::with_points(format!("set{}", i + 1), points)
            })
            .collect()
    }
}

fn main() -> Result<()> {
    let mut source = RandomSource { rng: rand::rng() };

    let mut chart = Chart::new();
    chart.set_data(source.dataset());
    println!("Generated {} series x {} points", SET_COUNT, POINTS_PER_SET);

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("creating target/out")?;

    // 1) Plain render
    let frame = chart.render().context("rendering base frame")?;
    let out = out_dir.join("linechart.svg");
    std::fs::write(&out, linechart_svg::frame_to_svg(&frame))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    // 2) Select the second series and hover its fifth point
    chart.handle_event(PointerEvent::Click { series: 1 });
    chart.handle_event(PointerEvent::PointerEnter {
        series: 1,
        point: 4,
        pointer_x: 320.0,
        pointer_y: 140.0,
    });
    let frame = chart.render().context("rendering interactive frame")?;
    let out = out_dir.join("linechart_active.svg");
    std::fs::write(&out, linechart_svg::frame_to_svg(&frame))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} (series 1 active, point hovered)", out.display());

    Ok(())
}
