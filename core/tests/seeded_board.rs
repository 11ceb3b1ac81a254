use minefield_core::*;

fn seed_one() -> Grid {
    let config = ConfigurationBuilder::new().with_seed(1).build().unwrap();
    generate(config)
}

fn hidden_everywhere(grid: &Grid) -> bool {
    grid.cells().iter().all(Cell::is_hidden)
}

#[test]
fn board_has_requested_shape() {
    let grid = seed_one();

    assert_eq!(grid.rows(), 8);
    assert_eq!(grid.columns(), 8);
    assert_eq!(grid.cells().rows().into_iter().count(), 8);
    assert!(grid.cells().rows().into_iter().all(|row| row.len() == 8));
    assert_eq!(grid.cells().iter().filter(|cell| cell.is_mine()).count(), 10);
}

#[test]
fn mines_land_on_pinned_positions() {
    let grid = seed_one();
    let expected = [
        (0, 3),
        (1, 0),
        (1, 1),
        (2, 7),
        (3, 0),
        (3, 1),
        (4, 2),
        (4, 5),
        (5, 1),
        (5, 7),
    ];

    for coords in expected {
        assert!(grid[coords].is_mine(), "expected a mine at {coords:?}");
    }
}

#[test]
fn adjacency_matches_pinned_layout() {
    assert_eq!(
        seed_one().layout(),
        [
            "222M1000", "MM211011", "4420001M", "MM211121", "34M11M21", "1M21112M", "11100011",
            "00000000",
        ]
    );
}

#[test]
fn generation_is_repeatable() {
    assert_eq!(seed_one(), seed_one());
}

#[test]
fn all_cells_start_hidden() {
    let grid = seed_one();
    assert!(hidden_everywhere(&grid));
    assert!(!grid.is_game_over());
}

#[test]
fn revealing_a_mine_ends_the_game() {
    let mut grid = seed_one();

    assert_eq!(grid.reveal((0, 3)).unwrap(), RevealOutcome::HitMine);

    assert!(grid.is_game_over());
    assert!(grid[(0, 3)].is_death_cause());
    assert!(
        grid.cells()
            .iter()
            .filter(|cell| cell.is_mine())
            .all(Cell::is_visible)
    );
    assert_eq!(grid.visible_count(), 10);
}

#[test]
fn mark_and_unmark() {
    let mut grid = seed_one();

    assert!(!grid[(0, 0)].is_marked());
    grid.mark((0, 0)).unwrap();
    assert!(grid[(0, 0)].is_marked());
    grid.unmark((0, 0)).unwrap();
    assert!(!grid[(0, 0)].is_marked());
}

#[test]
fn marked_mine_does_not_kill() {
    let mut grid = seed_one();

    grid.mark((0, 3)).unwrap();
    grid.reveal((0, 3)).unwrap();

    assert!(!grid.is_game_over());
}

#[test]
fn numbered_cell_reveals_one_cell() {
    let mut grid = seed_one();

    grid.reveal((0, 0)).unwrap();

    assert_eq!(grid.visible_count(), 1);
}

#[test]
fn zero_cell_reveals_its_region() {
    let mut grid = seed_one();

    assert_eq!(grid.reveal((7, 0)).unwrap(), RevealOutcome::Revealed);

    assert_eq!(grid.visible_count(), 21);
    assert_eq!(
        grid.to_string(),
        [
            "########", "########", "########", "########", "########", "##21112#", "11100011",
            "00000000",
        ]
        .join("\n")
    );
}

#[test]
fn clearing_every_safe_cell_wins() {
    let mut grid = generate(Configuration::new(3, 4, 3, 42).unwrap());
    assert_eq!(grid.layout(), ["MM10", "2221", "001M"]);

    assert_eq!(grid.reveal((2, 0)).unwrap(), RevealOutcome::Revealed);
    assert_eq!(grid.visible_count(), 6);
    assert_eq!(grid.hidden_safe_count(), 3);

    assert_eq!(grid.reveal((0, 3)).unwrap(), RevealOutcome::Won);
    assert!(grid.is_won());
    assert!(!grid.is_dead());
    assert_eq!(grid.visible_count(), 9);
    assert_eq!(grid.to_string(), "##10\n2221\n001#");
}

#[test]
fn saved_game_resumes() {
    let mut grid = seed_one();
    grid.reveal((7, 0)).unwrap();
    grid.mark((5, 7)).unwrap();

    let saved = serde_json::to_string(&grid).unwrap();
    let mut restored: Grid = serde_json::from_str(&saved).unwrap();
    assert_eq!(restored, grid);

    restored.reveal((0, 3)).unwrap();
    assert!(restored.is_dead());
    assert!(!grid.is_dead());
}
