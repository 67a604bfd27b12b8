use seabattle::{
    Board, CellState, Coordinate, FleetPlacer, HitError, HitOutcome, Orientation, PlacementError,
    BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(col: usize, row: usize) -> Coordinate {
    Coordinate::new(col, row)
}

#[test]
fn test_place_stamps_decks_and_halo() {
    let mut board = Board::new();
    board.place(2, 3, 4, Orientation::Horizontal, 7).unwrap();

    for (i, col) in (2..=5).enumerate() {
        let deck = board.cell(at(col, 3)).unwrap().deck().unwrap();
        assert_eq!(deck.ship_id, 7);
        assert_eq!(deck.size, 4);
        assert_eq!(deck.deck_index, i + 1);
        assert_eq!(deck.orientation, Orientation::Horizontal);
    }
    for row in 2..=4 {
        for col in 1..=6 {
            if row == 3 && (2..=5).contains(&col) {
                continue;
            }
            assert_eq!(board.cell(at(col, row)), Some(CellState::Halo), "({}, {})", col, row);
        }
    }
    assert_eq!(board.cell(at(7, 3)), Some(CellState::Empty));
    assert_eq!(board.alive_count(), 4);
}

#[test]
fn test_is_fit_bounds() {
    let board = Board::new();
    assert!(board.is_fit(7, 1, 4, Orientation::Horizontal));
    assert!(!board.is_fit(8, 1, 4, Orientation::Horizontal));
    assert!(board.is_fit(1, 7, 4, Orientation::Vertical));
    assert!(!board.is_fit(1, 8, 4, Orientation::Vertical));
    assert!(!board.is_fit(0, 1, 1, Orientation::Vertical));
    assert!(!board.is_fit(1, BOARD_SIZE + 1, 1, Orientation::Vertical));
    assert!(!board.is_fit(3, 3, 0, Orientation::Horizontal));
    assert!(!board.is_fit(1, 1, BOARD_SIZE + 1, Orientation::Horizontal));
    assert!(!board.is_fit(2, 1, usize::MAX, Orientation::Horizontal));
    assert!(!board.is_fit(1, 3, usize::MAX - 1, Orientation::Vertical));
}

#[test]
fn test_is_fit_honours_halo() {
    let mut board = Board::new();
    board.place(5, 5, 1, Orientation::Horizontal, 0).unwrap();

    // decks may not land on a halo, even diagonally
    assert!(!board.is_fit(6, 6, 1, Orientation::Horizontal));
    assert!(!board.is_fit(4, 5, 2, Orientation::Vertical));
    // halos may overlap
    assert!(board.is_fit(7, 5, 1, Orientation::Horizontal));
    assert!(board.is_fit(5, 7, 3, Orientation::Vertical));
}

#[test]
fn test_failed_place_leaves_board_untouched() {
    let mut board = Board::new();
    board.place(3, 3, 3, Orientation::Vertical, 0).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place(2, 4, 3, Orientation::Horizontal, 1),
        Err(PlacementError::DoesNotFit)
    );
    assert_eq!(
        board.place(9, 9, 3, Orientation::Horizontal, 1),
        Err(PlacementError::DoesNotFit)
    );
    assert_eq!(board, before);
}

#[test]
fn test_miss_and_repeat() {
    let mut board = Board::new();
    board.place(5, 5, 1, Orientation::Horizontal, 0).unwrap();

    assert_eq!(board.resolve_hit(1, 1).unwrap(), HitOutcome::Miss);
    assert_eq!(board.cell(at(1, 1)), Some(CellState::MissMarker));
    assert_eq!(board.resolve_hit(1, 1).unwrap(), HitOutcome::AlreadyShot);

    // a halo cell is still water
    assert_eq!(board.resolve_hit(4, 4).unwrap(), HitOutcome::Miss);
    assert_eq!(board.cell(at(4, 4)), Some(CellState::MissMarker));
}

#[test]
fn test_wound_then_dead() {
    let mut board = Board::new();
    board.place(3, 3, 2, Orientation::Horizontal, 0).unwrap();

    assert_eq!(board.resolve_hit(3, 3).unwrap(), HitOutcome::Wound);
    assert!(board.cell(at(3, 3)).unwrap().is_damaged_deck());
    assert!(!board.alive_decks().contains(at(3, 3)));
    assert_eq!(board.alive_count(), 1);
    assert_eq!(board.resolve_hit(3, 3).unwrap(), HitOutcome::AlreadyShot);

    assert_eq!(board.resolve_hit(4, 3).unwrap(), HitOutcome::Dead);
    assert_eq!(board.cell(at(3, 3)), Some(CellState::Sunk));
    assert_eq!(board.cell(at(4, 3)), Some(CellState::Sunk));
    for row in 2..=4 {
        for col in 2..=5 {
            if row == 3 && (col == 3 || col == 4) {
                continue;
            }
            assert_eq!(board.cell(at(col, row)), Some(CellState::MissMarker));
        }
    }
    assert!(board.all_sunk());
    assert_eq!(board.resolve_hit(4, 3).unwrap(), HitOutcome::AlreadyShot);
}

#[test]
fn test_dead_ship_only_marks_its_own_halo() {
    let mut board = Board::new();
    board.place(1, 1, 1, Orientation::Horizontal, 0).unwrap();
    board.place(3, 1, 2, Orientation::Vertical, 1).unwrap();

    assert_eq!(board.resolve_hit(1, 1).unwrap(), HitOutcome::Dead);
    assert_eq!(board.cell(at(2, 2)), Some(CellState::MissMarker));
    assert!(board.cell(at(3, 1)).unwrap().is_intact_deck());
    assert!(board.cell(at(3, 2)).unwrap().is_intact_deck());
    assert_eq!(board.cell(at(4, 1)), Some(CellState::Halo));
    assert_eq!(board.alive_count(), 2);
}

#[test]
fn test_hit_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.resolve_hit(0, 5).unwrap_err(),
        HitError::OutOfBounds(at(0, 5))
    );
    assert_eq!(
        board.resolve_hit(BOARD_SIZE + 1, 1).unwrap_err(),
        HitError::OutOfBounds(at(BOARD_SIZE + 1, 1))
    );
}

#[test]
fn test_render_glyphs() {
    let mut board = Board::new();
    board.place(1, 1, 2, Orientation::Horizontal, 0).unwrap();
    board.place(10, 10, 1, Orientation::Horizontal, 1).unwrap();
    board.resolve_hit(1, 1).unwrap();
    board.resolve_hit(5, 5).unwrap();
    board.resolve_hit(10, 10).unwrap();

    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE + 2);
    assert_eq!(lines[0], "   ABCDEFGHIJ");
    assert_eq!(lines[1], "   ----------");
    assert_eq!(lines[2], " 1|XQ        ");
    assert_eq!(lines[6], " 5|    .     ");
    assert_eq!(lines[10], " 9|        ..");
    assert_eq!(lines[11], "10|        .+");
    assert!(!text.contains('?'));
}

#[test]
fn test_sink_fleet_by_shooting_known_decks() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    let ships = FleetPlacer::default().place(&mut rng, &mut board).unwrap();
    assert_eq!(board.alive_count(), TOTAL_SHIP_CELLS);

    let mut dead = 0;
    while let Some(target) = board.random_alive_deck(&mut rng) {
        match board.resolve_hit(target.col, target.row).unwrap() {
            HitOutcome::Dead => dead += 1,
            HitOutcome::Wound => {}
            other => panic!("unexpected outcome {:?} at {}", other, target),
        }
    }
    assert_eq!(dead, ships);
    assert!(board.all_sunk());
    assert!(board.random_alive_deck(&mut rng).is_none());
    assert!(!board.render().contains('Q'));
    assert!(!board.render().contains('X'));
}
