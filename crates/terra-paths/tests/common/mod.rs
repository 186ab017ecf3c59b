#![allow(dead_code)]

use rand::Rng;
use terra_core::{Grid, MAX_COST, Point};
use terra_paths::{CostModel, Outcome, PathSearch, SearchConfig, SearchStats};

/// Build a grid from rows of characters, one string per `x`:
/// `.` flat, `#` blocked, `1`-`9` traversal cost.
pub fn parse(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |r| r.len());
    Grid::from_fn(rows.len() as i32, cols as i32, |p| {
        let ch = rows[p.x as usize].as_bytes()[p.y as usize] as char;
        match ch {
            '#' => (0.0, MAX_COST + 1.0),
            d @ '1'..='9' => (0.0, d.to_digit(10).map_or(1.0, f64::from)),
            _ => (0.0, 1.0),
        }
    })
}

/// Random terrain: elevation in 0..4, cost in 1..4, each cell blocked with
/// probability `blocked`.
pub fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, blocked: f64) -> Grid {
    Grid::from_fn(rows, cols, |_| {
        let elevation = rng.random_range(0..4) as f64;
        if rng.random_bool(blocked) {
            (elevation, MAX_COST * 2.0)
        } else {
            (elevation, rng.random_range(1..4) as f64)
        }
    })
}

pub fn random_passable(rng: &mut impl Rng, grid: &Grid) -> Option<Point> {
    let open: Vec<Point> = grid
        .iter()
        .filter(|c| grid.is_passable(c.pos))
        .map(|c| c.pos)
        .collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Exact single-source costs over the same move rules the search uses,
/// by repeated relaxation of every edge until nothing changes.
pub fn brute_force(grid: &Grid, source: Point, model: CostModel) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; grid.len()];
    let Some(s) = grid.index_of(source) else {
        return dist;
    };
    dist[s] = 0.0;
    loop {
        let mut changed = false;
        for cell in grid.iter() {
            let Some(i) = grid.index_of(cell.pos) else {
                continue;
            };
            if !dist[i].is_finite() {
                continue;
            }
            for next in grid.neighbors(cell.pos, false) {
                if grid.is_squeeze(cell.pos, next.pos) {
                    continue;
                }
                let Some(j) = grid.index_of(next.pos) else {
                    continue;
                };
                let d = dist[i] + model.step_cost(cell, next);
                if d + 1e-12 < dist[j] {
                    dist[j] = d;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

pub fn run(grid: &Grid, start: Point, goal: Point, config: SearchConfig) -> (Outcome, SearchStats) {
    let mut search = PathSearch::new(grid, start, goal, config).expect("valid endpoints");
    let outcome = search.run();
    (outcome, *search.stats())
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
