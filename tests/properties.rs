use lifegrid::cell::CellState;
use lifegrid::display::Resolution;
use lifegrid::grid::Grid;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A grid of exactly `cols` x `rows` cells
fn sized_grid(cols: u32, rows: u32, seed: u64) -> Grid {
    // Half a cell past the last full one, so the over-allocated edge cell lands on `cols`/`rows`
    let res = Resolution::new((cols - 1) * 16 + 8, (rows - 1) * 16 + 8);

    Grid::from_rng(&res, 16, StdRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #[test]
    fn edges_wrap_around(cols in 1u32..24, rows in 1u32..24, seed in any::<u64>()) {
        let grid = sized_grid(cols, rows, seed);
        prop_assert_eq!(grid.columns(), cols as usize);
        prop_assert_eq!(grid.rows(), rows as usize);

        let (c, r) = (cols as isize, rows as isize);

        for row in 0..r {
            prop_assert_eq!(grid.get_element(-1, row), grid.get_element(c - 1, row));
            prop_assert_eq!(grid.get_element(c, row), grid.get_element(0, row));
        }

        for col in 0..c {
            prop_assert_eq!(grid.get_element(col, -1), grid.get_element(col, r - 1));
            prop_assert_eq!(grid.get_element(col, r), grid.get_element(col, 0));
        }
    }

    #[test]
    fn snapshot_round_trip_changes_nothing(seed in any::<u64>(), steps in 0usize..8) {
        let mut a = sized_grid(12, 9, seed);
        let mut b = sized_grid(12, 9, seed);

        let field = a.snapshot();
        a.restore(field).unwrap();
        prop_assert_eq!(a.snapshot(), b.snapshot());

        for _ in 0..steps {
            a.advance_generation();
            b.advance_generation();
        }

        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn restore_rewinds_generations(seed in any::<u64>(), steps in 1usize..8) {
        let mut grid = sized_grid(10, 10, seed);
        let field = grid.snapshot();

        for _ in 0..steps {
            grid.advance_generation();
        }
        grid.restore(field.clone()).unwrap();

        prop_assert_eq!(grid.snapshot(), field);
    }
}

#[test]
fn randomize_is_about_one_in_five() {
    // 64x64 cells
    let n = 64.0 * 64.0;
    let expected = 0.2 * n;
    let sd = (n * 0.2 * 0.8f64).sqrt();

    let mut total = 0.0;
    let trials = 20;

    for seed in 0..trials {
        let mut grid = sized_grid(64, 64, seed);
        grid.randomize();

        let alive = grid.count_alive_cells() as f64;
        assert!(
            (alive - expected).abs() < 5.0 * sd,
            "{alive} alive cells, expected about {expected}"
        );

        total += alive;
    }

    let mean = total / trials as f64;
    assert!((mean - expected).abs() < 5.0 * sd / (trials as f64).sqrt());
}

#[test]
fn clear_is_idempotent() {
    let mut grid = sized_grid(16, 16, 7);

    grid.clear();
    assert_eq!(grid.count_alive_cells(), 0);

    let field = grid.snapshot();
    grid.clear();

    assert_eq!(grid.snapshot(), field);
    assert!(
        field
            .iter()
            .flatten()
            .all(|cell| cell.state() == CellState::Dead)
    );
}
