use seabattle::{
    AiPlayer, Board, Coordinate, FleetSpec, HitOutcome, Match, MatchConfig, MatchError, MatchStatus,
    Orientation, PlacementError, Player, RandomPlayer, Side, TargetingError, TrackingBoard, Turn,
    DEFAULT_SHOT_LIMIT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fires at a fixed list of cells in order.
struct Scripted(Vec<Coordinate>);

impl Player for Scripted {
    fn kind(&self) -> &'static str {
        "scripted"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _tracking: &TrackingBoard,
    ) -> Result<Coordinate, TargetingError> {
        Ok(self.0.remove(0))
    }
}

fn ai_side(name: &str, seed: u64) -> Side {
    Side::new(name, Box::new(AiPlayer::new()), SmallRng::seed_from_u64(seed))
}

fn two_singles() -> Board {
    let mut board = Board::new();
    board.place(1, 1, 1, Orientation::Horizontal, 0).unwrap();
    board.place(5, 5, 1, Orientation::Horizontal, 1).unwrap();
    board
}

#[test]
fn test_ai_vs_ai_game() {
    let mut game = Match::new(ai_side("p1", 1), ai_side("p2", 2), &MatchConfig::default()).unwrap();
    let summary = game.run().unwrap();

    let winner = game.winner().unwrap();
    assert_eq!(game.status(), MatchStatus::Won(winner));
    assert!(game.side(winner.other()).board().all_sunk());
    assert!(!game.side(winner).board().all_sunk());
    assert!(summary.total_shots <= DEFAULT_SHOT_LIMIT);
    assert_eq!(summary.winner.as_deref(), Some(game.side(winner).name()));
    assert_eq!(summary.sides[0].shots + summary.sides[1].shots, summary.total_shots);
    assert_eq!(summary.sides[winner.other() as usize].decks_left, 0);
}

#[test]
fn test_turn_passes_only_on_miss() {
    let mut game = Match::new(ai_side("p1", 10), ai_side("p2", 20), &MatchConfig::default()).unwrap();
    assert_eq!(game.active(), Turn::First);
    while game.winner().is_none() {
        let shooter = game.active();
        let shot = game.step().unwrap();
        assert_eq!(shot.shooter, shooter);
        assert_ne!(shot.outcome, HitOutcome::AlreadyShot);
        assert!(!game.side(shooter).tracking().is_unknown(shot.at));
        if game.winner().is_none() {
            let expected = if shot.outcome == HitOutcome::Miss {
                shooter.other()
            } else {
                shooter
            };
            assert_eq!(game.active(), expected);
        }
    }
    assert_eq!(game.step().unwrap_err(), MatchError::Finished);
}

#[test]
fn test_random_player_finishes_too() {
    let first = ai_side("ai", 3);
    let second = Side::new("random", Box::new(RandomPlayer::new()), SmallRng::seed_from_u64(4));
    let mut game = Match::new(first, second, &MatchConfig::default()).unwrap();
    let summary = game.run().unwrap();
    assert!(summary.winner.is_some());
    assert_eq!(summary.sides[1].kind, "random");
}

#[test]
fn test_scripted_kills_keep_the_turn() {
    let first = Side::with_board(
        "scripted",
        Box::new(Scripted(vec![Coordinate::new(1, 1), Coordinate::new(5, 5)])),
        SmallRng::seed_from_u64(0),
        two_singles(),
    );
    let second = Side::with_board(
        "idle",
        Box::new(Scripted(vec![])),
        SmallRng::seed_from_u64(0),
        two_singles(),
    );
    let mut game = Match::from_sides(first, second, DEFAULT_SHOT_LIMIT);

    assert_eq!(game.step().unwrap().outcome, HitOutcome::Dead);
    assert_eq!(game.active(), Turn::First);
    assert_eq!(game.step().unwrap().outcome, HitOutcome::Dead);
    assert_eq!(game.winner(), Some(Turn::First));
    assert_eq!(game.shots(), 2);
}

#[test]
fn test_repeated_shot_is_rejected() {
    let first = Side::with_board(
        "scripted",
        Box::new(Scripted(vec![Coordinate::new(1, 1), Coordinate::new(1, 1)])),
        SmallRng::seed_from_u64(0),
        two_singles(),
    );
    let second = Side::with_board(
        "idle",
        Box::new(Scripted(vec![])),
        SmallRng::seed_from_u64(0),
        two_singles(),
    );
    let mut game = Match::from_sides(first, second, DEFAULT_SHOT_LIMIT);

    game.step().unwrap();
    assert_eq!(
        game.step().unwrap_err(),
        MatchError::RepeatedShot(Coordinate::new(1, 1))
    );
}

#[test]
fn test_shot_limit() {
    let first = Side::with_board("a", Box::new(AiPlayer::new()), SmallRng::seed_from_u64(0), two_singles());
    let second = Side::with_board("b", Box::new(AiPlayer::new()), SmallRng::seed_from_u64(1), two_singles());
    let mut game = Match::from_sides(first, second, 0);
    assert_eq!(game.run().unwrap_err(), MatchError::ShotLimit { shots: 0 });
}

#[test]
fn test_impossible_fleet_fails_placement() {
    let config = MatchConfig {
        fleet: FleetSpec::classic(7),
        max_placement_attempts: Some(500),
        ..MatchConfig::default()
    };
    let result = Match::new(ai_side("p1", 1), ai_side("p2", 2), &config);
    assert!(matches!(
        result,
        Err(MatchError::Placement(PlacementError::UnableToPlaceShip { .. }))
    ));
}

#[test]
fn test_new_rejects_prepared_board() {
    let prepared = Side::with_board("a", Box::new(AiPlayer::new()), SmallRng::seed_from_u64(0), two_singles());
    let result = Match::new(prepared, ai_side("b", 1), &MatchConfig::default());
    assert!(matches!(
        result,
        Err(MatchError::Placement(PlacementError::BoardNotEmpty))
    ));
}
