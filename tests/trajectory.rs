// Regression tests against the classical Langton's Ant trajectory.

use langtons_ant::prelude::*;

fn state_after(steps: u64) -> (AntState, usize) {
    let mut sim = Simulation::default();
    sim.run(steps);
    (sim.ant().state(), sim.grid().black_count())
}

#[test]
fn early_phase_revisits_origin_without_cycling() {
    let mut sim = Simulation::default();
    let mut revisits = Vec::new();

    for step in 1..=103u64 {
        sim.step();
        if sim.ant().state().position == Cell::ORIGIN {
            revisits.push(step);
            // back on the start cell, but never with an all-white grid again
            assert!(!sim.grid().is_empty(), "short cycle at step {step}");
        }
    }

    assert_eq!(revisits, vec![4, 8, 16, 52, 60, 96]);
}

#[test]
fn known_positions() {
    let cases = [
        (1, Cell::new(1, 0), Heading::East, 1),
        (4, Cell::new(0, 0), Heading::North, 4),
        (5, Cell::new(-1, 0), Heading::West, 3),
        (104, Cell::new(-2, -4), Heading::North, 20),
        (1000, Cell::new(8, -6), Heading::South, 118),
        (10_000, Cell::new(-16, -10), Heading::North, 720),
        (11_000, Cell::new(-34, 14), Heading::South, 834),
    ];

    for (steps, position, heading, black) in cases {
        let (state, count) = state_after(steps);
        assert_eq!(state, AntState { position, heading }, "after {steps} steps");
        assert_eq!(count, black, "black cells after {steps} steps");
    }
}

#[test]
fn highway_repeats_every_104_steps() {
    let mut sim = Simulation::default();
    sim.run(11_000);

    for _ in 0..5 {
        let before = sim.ant().state();
        let black_before = sim.grid().black_count();

        sim.run(104);

        let after = sim.ant().state();
        assert_eq!(after.heading, before.heading);
        assert_eq!(after.position.x - before.position.x, -2);
        assert_eq!(after.position.y - before.position.y, 2);
        assert_eq!(sim.grid().black_count(), black_before + 12);
    }
}

#[test]
fn replays_are_deterministic() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..20 {
        let origin = Cell::new(rng.i64(-1_000..1_000), rng.i64(-1_000..1_000));
        let steps = rng.u64(0..3_000);

        let mut a = Simulation::new(origin);
        let mut b = Simulation::new(origin);
        a.run(steps);
        b.run_batches(steps, rng.u64(1..50), |_| {});

        assert_eq!(a.snapshot(), b.snapshot(), "origin {origin}, {steps} steps");
    }
}

#[test]
fn identical_state_gives_identical_future() {
    let mut sim = Simulation::new(Cell::new(7, -7));
    sim.run(777);

    let mut grid_a = sim.grid().clone();
    let mut ant_a = sim.ant().clone();
    let mut grid_b = grid_a.clone();
    let mut ant_b = ant_a.clone();

    for _ in 0..2_000 {
        ant_a.step(&mut grid_a);
        ant_b.step(&mut grid_b);
    }

    assert_eq!(ant_a.state(), ant_b.state());
    assert_eq!(grid_a.snapshot(), grid_b.snapshot());
}

#[test]
fn trajectory_is_translation_invariant() {
    let mut rng = fastrand::Rng::with_seed(7);

    let mut base = Simulation::default();
    base.run(1_500);
    let reference = base.snapshot();

    for _ in 0..5 {
        let (dx, dy) = (rng.i64(-500..500), rng.i64(-500..500));
        let mut shifted = Simulation::new(Cell::new(dx, dy));
        shifted.run(1_500);
        let snap = shifted.snapshot();

        let expected_pos = Cell::new(reference.ant.position.x + dx, reference.ant.position.y + dy);
        assert_eq!(snap.ant.position, expected_pos);
        assert_eq!(snap.ant.heading, reference.ant.heading);

        let moved: Vec<Cell> = snap
            .black_cells
            .iter()
            .map(|c| Cell::new(c.x - dx, c.y - dy))
            .collect();
        let expected: Vec<Cell> = reference.black_cells.iter().copied().collect();
        assert_eq!(moved, expected);
    }
}

#[test]
fn full_reset_matches_fresh_simulation() {
    let origin = Cell::new(-3, 12);
    let mut sim = Simulation::new(origin);
    sim.run(5_000);
    sim.reset();
    sim.run(300);

    let mut fresh = Simulation::new(origin);
    fresh.run(300);

    assert_eq!(sim.snapshot(), fresh.snapshot());
}
