mod common;

use std::f64::consts::SQRT_2;

use common::{approx_eq, parse, run};
use terra_core::{Grid, Point};
use terra_paths::{
    CostModel, EndpointReason, EndpointRole, Heuristic, Outcome, PathSearch, ReopenPolicy,
    SearchConfig, SearchError, Variant, line_of_sight,
};

fn pts(v: &[(i32, i32)]) -> Vec<Point> {
    v.iter().map(|&p| Point::from(p)).collect()
}

/// 5×5, column x = 2 blocked except at y = 4.
fn wall_with_gap() -> Grid {
    parse(&[".....", ".....", "####.", ".....", "....."])
}

fn octile(variant: Variant) -> SearchConfig {
    SearchConfig::new()
        .with_heuristic(Heuristic::Octile)
        .with_variant(variant)
}

#[test]
fn open_grid_diagonal() {
    let grid = Grid::new(5, 5);
    let (outcome, _) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(Variant::AStar));
    let path = outcome.into_path().expect("path");
    assert_eq!(path.points(), pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]).as_slice());
    assert!(approx_eq(path.cost(), 4.0 * SQRT_2));
}

#[test]
fn open_grid_theta_is_one_segment() {
    let grid = Grid::new(5, 5);
    let (outcome, stats) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(Variant::ThetaStar));
    let path = outcome.into_path().expect("path");
    assert_eq!(path.points(), pts(&[(0, 0), (4, 4)]).as_slice());
    assert!(approx_eq(path.cost(), 4.0 * SQRT_2));
    assert!(stats.shortcuts > 0);
}

#[test]
fn wall_gap_astar_detours_through_opening() {
    let grid = wall_with_gap();
    let (outcome, _) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(Variant::AStar));
    let path = outcome.into_path().expect("path");
    assert!(path.points().contains(&Point::new(2, 4)));
    assert!(path.is_grid_connected());
    assert_eq!(path.len(), 7);
    assert!(approx_eq(path.cost(), 2.0 * SQRT_2 + 4.0));
    for p in path.points() {
        assert!(grid.is_passable(*p));
    }
}

#[test]
fn wall_gap_theta_is_straighter() {
    let grid = wall_with_gap();
    let (astar, _) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(Variant::AStar));
    let (theta, _) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(Variant::ThetaStar));
    let astar = astar.into_path().expect("A* path");
    let theta = theta.into_path().expect("Theta* path");

    assert!(theta.len() < astar.len(), "{theta:?} vs {astar:?}");
    assert!(theta.cost() <= astar.cost() + 1e-9);
    assert_eq!(theta.start(), Some(Point::new(0, 0)));
    assert_eq!(theta.goal(), Some(Point::new(4, 4)));
    for (a, b) in theta.segments() {
        assert!(line_of_sight(&grid, a, b), "{a} -> {b}");
    }
    let recomputed = theta.recompute_cost(&grid, CostModel::Flat).unwrap();
    assert!(approx_eq(recomputed, theta.cost()));
}

#[test]
fn start_equals_goal() {
    let grid = wall_with_gap();
    for variant in [Variant::AStar, Variant::ThetaStar] {
        let (outcome, stats) = run(&grid, Point::new(3, 1), Point::new(3, 1), octile(variant));
        let path = outcome.into_path().expect("trivial path");
        assert_eq!(path.points(), &[Point::new(3, 1)]);
        assert_eq!(path.cost(), 0.0);
        assert_eq!(stats.expanded, 0);
    }
}

#[test]
fn enclosed_goal_is_unreachable() {
    let grid = parse(&[".....", ".....", ".....", "...##", "...#."]);
    for variant in [Variant::AStar, Variant::ThetaStar] {
        let (outcome, stats) = run(&grid, Point::new(0, 0), Point::new(4, 4), octile(variant));
        assert_eq!(outcome, Outcome::NoPathFound);
        assert!(stats.expanded <= grid.len());
    }
}

#[test]
fn invalid_endpoints_fail_before_search() {
    let grid = wall_with_gap();
    let err = PathSearch::new(&grid, Point::new(2, 0), Point::new(4, 4), SearchConfig::new())
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidEndpoint {
            role: EndpointRole::Start,
            pos: Point::new(2, 0),
            reason: EndpointReason::Blocked,
        }
    );
    let err = PathSearch::new(&grid, Point::new(0, 0), Point::new(0, 5), SearchConfig::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidEndpoint {
            role: EndpointRole::Goal,
            reason: EndpointReason::OutOfBounds,
            ..
        }
    ));
}

#[test]
fn terrain_cost_steers_around_expensive_band() {
    // A band of cost-9 cells across the middle, open at the right edge.
    let grid = parse(&[".....", ".....", "9999.", ".....", "....."]);
    let config = octile(Variant::AStar).with_cost_model(CostModel::TerrainWeighted);
    let (outcome, _) = run(&grid, Point::new(0, 0), Point::new(4, 0), config);
    let path = outcome.into_path().expect("path");
    assert!(path.points().contains(&Point::new(2, 4)));

    let (flat, _) = run(&grid, Point::new(0, 0), Point::new(4, 0), octile(Variant::AStar));
    let flat = flat.into_path().expect("flat path");
    assert!(approx_eq(flat.cost(), 4.0));
    assert!(path.cost() < 4.0 + 8.0);
}

#[test]
fn altitude_prefers_level_ground() {
    // A ridge along x = 2 except a saddle at y = 0.
    let grid = Grid::from_fn(5, 5, |p| {
        let elevation = if p.x == 2 && p.y > 0 { 10.0 } else { 0.0 };
        (elevation, 1.0)
    });
    let config = octile(Variant::AStar).with_cost_model(CostModel::AltitudeWeighted);
    let (outcome, _) = run(&grid, Point::new(0, 4), Point::new(4, 4), config);
    let path = outcome.into_path().expect("path");
    assert!(path.points().contains(&Point::new(2, 0)));
    let recomputed = path
        .recompute_cost(&grid, CostModel::AltitudeWeighted)
        .unwrap();
    assert!(approx_eq(recomputed, path.cost()));
    assert!(path.cost() < 4.0 + 20.0);
}

#[test]
fn searches_are_deterministic() {
    let grid = parse(&[
        "........",
        "..##....",
        "..#..#..",
        ".....#..",
        ".##..#..",
        "........",
    ]);
    for variant in [Variant::AStar, Variant::ThetaStar] {
        for h in Heuristic::ALL {
            let config = SearchConfig::new().with_heuristic(h).with_variant(variant);
            let a = run(&grid, Point::new(0, 0), Point::new(5, 7), config);
            let b = run(&grid, Point::new(0, 0), Point::new(5, 7), config);
            assert_eq!(a.0, b.0, "{variant} {h}");
            assert_eq!(a.1.expanded, b.1.expanded);
            assert_eq!(a.1.pushed, b.1.pushed);
        }
    }
}

/// 2×8 strip for a goal at (1, 7). Entering (1, 1) costs 1.2 and every cell
/// from column 3 on costs 3. Manhattan overestimates the diagonal (0, 1) ->
/// (1, 2), so (1, 2) is closed through (1, 1) before the cheaper route via
/// (0, 1) is seen.
fn manhattan_trap() -> Grid {
    Grid::from_fn(2, 8, |p| {
        let cost = match (p.x, p.y) {
            (1, 1) => 1.2,
            (_, y) if y >= 3 => 3.0,
            _ => 1.0,
        };
        (0.0, cost)
    })
}

#[test]
fn manhattan_reopens_closed_cells() {
    let grid = manhattan_trap();
    let (start, goal) = (Point::new(0, 0), Point::new(1, 7));
    let base = SearchConfig::new()
        .with_heuristic(Heuristic::Manhattan)
        .with_cost_model(CostModel::TerrainWeighted);

    let (never, never_stats) = run(&grid, start, goal, base.with_reopen(ReopenPolicy::Never));
    let never = never.into_path().expect("path");
    assert_eq!(never_stats.reopened, 0);
    assert!(approx_eq(never.cost(), 1.2 * SQRT_2 + 1.0 + 15.0));

    for policy in [ReopenPolicy::Auto, ReopenPolicy::Always] {
        let mut search = PathSearch::new(&grid, start, goal, base.with_reopen(policy)).unwrap();
        let path = search.run().into_path().expect("path");
        assert!(search.stats().reopened > 0, "{policy:?}");
        assert!(path.cost() <= never.cost() + 1e-9);
        assert!(approx_eq(path.cost(), 1.0 + SQRT_2 + 15.0));
        assert_eq!(search.state().parent(Point::new(1, 2)), Some(Point::new(0, 1)));
        assert!(path.points().contains(&Point::new(0, 1)));
        let recomputed = path
            .recompute_cost(&grid, CostModel::TerrainWeighted)
            .unwrap();
        assert!(approx_eq(recomputed, path.cost()));
    }
}

#[test]
fn theta_matches_astar_without_visible_shortcuts() {
    // The corridor turns around (1, 1), so no waypoint sees the one two
    // steps ahead. The shortcut (0, 0) -> (0, 2) is visible but dearer than
    // stepping into the cost-9 cell.
    let grid = parse(&["..9", "##.", "##."]);
    let (start, goal) = (Point::new(0, 0), Point::new(2, 2));
    let base = octile(Variant::AStar).with_cost_model(CostModel::TerrainWeighted);

    let (astar, _) = run(&grid, start, goal, base);
    let (theta, stats) = run(&grid, start, goal, base.with_variant(Variant::ThetaStar));
    let (astar, theta) = (astar.into_path().expect("path"), theta.into_path().expect("path"));

    assert_eq!(theta.points(), astar.points());
    assert_eq!(theta.points(), pts(&[(0, 0), (0, 1), (1, 2), (2, 2)]).as_slice());
    assert!(approx_eq(theta.cost(), astar.cost()));
    assert!(approx_eq(theta.cost(), 2.0 + SQRT_2));
    assert_eq!(stats.shortcuts, 0);
    let points = theta.points();
    for i in 0..points.len() {
        for j in i + 2..points.len() {
            assert!(!line_of_sight(&grid, points[i], points[j]), "{} -> {}", points[i], points[j]);
        }
    }
}
