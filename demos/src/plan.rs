//! Plans routes across two small maps with A* and Theta* and prints them.
//!
//! Usage: `plan [heuristic]`, where the heuristic is one of
//! `zero`, `manhattan`, `chebyshev`, `euclidean` or `octile` (the default).
//! Set `RUST_LOG=debug` to see per-search summaries.

use std::collections::HashSet;

use terra_core::{Grid, MAX_COST, Point};
use terra_paths::{Heuristic, Outcome, PathSearch, SearchConfig, Variant};

fn open_map() -> Grid {
    Grid::new(5, 5)
}

/// Column x = 2 is a wall except for a gap at y = 4.
fn wall_map() -> Grid {
    Grid::from_fn(5, 5, |p| {
        if p.x == 2 && p.y < 4 {
            (0.0, MAX_COST + 1.0)
        } else {
            (0.0, 1.0)
        }
    })
}

fn render(grid: &Grid, outcome: &Outcome) -> String {
    let waypoints: HashSet<Point> = outcome
        .path()
        .map(|p| p.points().iter().copied().collect())
        .unwrap_or_default();
    let mut out = String::new();
    for x in 0..grid.rows() as i32 {
        for y in 0..grid.cols() as i32 {
            let p = Point::new(x, y);
            let ch = if waypoints.contains(&p) {
                '*'
            } else if grid.is_blocked(p) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let heuristic: Heuristic = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Heuristic::default(),
    };
    log::info!("using {heuristic} heuristic");

    let maps = [("open", open_map()), ("wall", wall_map())];
    let (start, goal) = (Point::new(0, 0), Point::new(4, 4));

    for (name, grid) in &maps {
        for variant in [Variant::AStar, Variant::ThetaStar] {
            let config = SearchConfig::new()
                .with_heuristic(heuristic)
                .with_variant(variant);
            let mut search = PathSearch::new(grid, start, goal, config)?;
            let outcome = search.run();
            let stats = search.stats();

            println!("{name} map, {variant}: {outcome}");
            if let Some(path) = outcome.path() {
                let points: Vec<String> = path.points().iter().map(Point::to_string).collect();
                println!("  waypoints: {}", points.join(" "));
            }
            println!(
                "  expanded {}, pushed {}, shortcuts {}, {:?}",
                stats.expanded, stats.pushed, stats.shortcuts, stats.elapsed
            );
            print!("{}", render(grid, &outcome));
            println!();
        }
    }
    Ok(())
}
