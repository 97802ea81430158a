use battlegrid::{
    BoardError, CellView, FireOutcome, GameEngine, GameError, Orientation, Phase, PlayerId,
    ShipKind, BOARD_SIZE, FLEET_LEN, FLEET_ORDER,
};

/// A legal layout for the standard fleet: battleship, two destroyers, three
/// submarines, each in its own row pair.
const LAYOUT: [(usize, usize); FLEET_LEN] = [(0, 0), (2, 0), (2, 4), (4, 0), (4, 2), (4, 4)];

fn place_fleet(engine: &mut GameEngine) {
    for origin in LAYOUT {
        engine
            .place_next_ship(origin, Orientation::Horizontal)
            .unwrap();
    }
}

fn ready_game() -> GameEngine {
    let mut engine = GameEngine::new("Alice", "Bob").unwrap();
    place_fleet(&mut engine);
    place_fleet(&mut engine);
    engine
}

/// Every footprint cell of the layout above.
fn fleet_cells() -> Vec<(usize, usize)> {
    LAYOUT
        .iter()
        .zip(FLEET_ORDER)
        .flat_map(|(&(r, c), kind)| (0..kind.size()).map(move |i| (r, c + i)))
        .collect()
}

#[test]
fn test_new_game_starts_in_setup_for_player_one() {
    let engine = GameEngine::new("Alice", "Bob").unwrap();
    assert_eq!(engine.phase(), Phase::SetupPlayer1);
    assert_eq!(engine.current_placement_kind(), Some(ShipKind::Battleship));
    assert_eq!(engine.remaining_to_place(), &FLEET_ORDER[..]);
    assert_eq!(engine.current_turn_player_name(), "Alice");
    assert_eq!(engine.winner_name(), None);
}

#[test]
fn test_empty_name_rejected() {
    assert_eq!(GameEngine::new("", "Bob").unwrap_err(), GameError::InvalidName);
    assert_eq!(GameEngine::new("Alice", "   ").unwrap_err(), GameError::InvalidName);
}

#[test]
fn test_setup_walks_both_fleets_then_gameplay() {
    let mut engine = GameEngine::new("Alice", "Bob").unwrap();
    for (i, origin) in LAYOUT.iter().enumerate() {
        assert_eq!(engine.current_placement_kind(), Some(FLEET_ORDER[i]));
        engine
            .place_next_ship(*origin, Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(engine.phase(), Phase::SetupPlayer2);
    assert_eq!(engine.current_player(), PlayerId::Second);
    assert_eq!(engine.current_turn_player_name(), "Bob");
    assert_eq!(engine.current_placement_kind(), Some(ShipKind::Battleship));

    place_fleet(&mut engine);
    assert_eq!(engine.phase(), Phase::Gameplay);
    assert_eq!(engine.current_player(), PlayerId::First);
    assert_eq!(engine.current_placement_kind(), None);
    assert!(engine.remaining_to_place().is_empty());
    assert_eq!(engine.player(PlayerId::First).board().ships().len(), FLEET_LEN);
    assert_eq!(engine.player(PlayerId::Second).board().ships().len(), FLEET_LEN);
}

#[test]
fn test_rejected_placement_keeps_same_ship_pending() {
    let mut engine = GameEngine::new("Alice", "Bob").unwrap();
    engine
        .place_next_ship((0, 0), Orientation::Horizontal)
        .unwrap();
    let err = engine
        .place_next_ship((1, 1), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::Board(BoardError::TooClose));
    let err = engine
        .place_next_ship((0, 8), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::Board(BoardError::OutOfBounds { row: 0, col: 9 }));
    assert_eq!(engine.phase(), Phase::SetupPlayer1);
    assert_eq!(engine.current_placement_kind(), Some(ShipKind::Destroyer));
    assert_eq!(engine.remaining_to_place().len(), FLEET_LEN - 1);
}

#[test]
fn test_fire_during_setup_is_wrong_phase() {
    let mut engine = GameEngine::new("Alice", "Bob").unwrap();
    assert_eq!(engine.fire(0, 0).unwrap_err(), GameError::WrongPhase);
    place_fleet(&mut engine);
    assert_eq!(engine.fire(0, 0).unwrap_err(), GameError::WrongPhase);
}

#[test]
fn test_place_during_gameplay_is_wrong_phase() {
    let mut engine = ready_game();
    let before = engine.board_view(PlayerId::First);
    assert_eq!(
        engine
            .place_next_ship((8, 8), Orientation::Horizontal)
            .unwrap_err(),
        GameError::WrongPhase
    );
    assert_eq!(engine.phase(), Phase::Gameplay);
    assert_eq!(engine.board_view(PlayerId::First), before);
    assert_eq!(engine.player(PlayerId::First).board().ships().len(), FLEET_LEN);
}

#[test]
fn test_turns_alternate_and_repeat_costs_nothing() {
    let mut engine = ready_game();
    assert_eq!(engine.current_turn_player_name(), "Alice");

    let res = engine.fire(8, 8).unwrap();
    assert_eq!(res.outcome, FireOutcome::Miss);
    assert!(!res.game_over);
    assert_eq!(engine.current_player(), PlayerId::Second);

    let res = engine.fire(0, 0).unwrap();
    assert_eq!(res.outcome, FireOutcome::Hit);
    assert_eq!(res.sunk, None);
    assert_eq!(engine.current_player(), PlayerId::First);

    // Alice already fired at Bob's (8, 8).
    let res = engine.fire(8, 8).unwrap();
    assert_eq!(res.outcome, FireOutcome::AlreadyFired);
    assert_eq!(engine.current_player(), PlayerId::First);
    assert_eq!(engine.turn_count(), 2);

    // A hit still hands the turn over.
    let res = engine.fire(0, 0).unwrap();
    assert_eq!(res.outcome, FireOutcome::Hit);
    assert_eq!(engine.current_player(), PlayerId::Second);
}

#[test]
fn test_fire_out_of_bounds_keeps_turn() {
    let mut engine = ready_game();
    assert_eq!(
        engine.fire(0, BOARD_SIZE).unwrap_err(),
        GameError::Board(BoardError::OutOfBounds { row: 0, col: BOARD_SIZE })
    );
    assert_eq!(engine.current_player(), PlayerId::First);
    assert_eq!(engine.turn_count(), 0);
}

#[test]
fn test_sunk_reports_destroyed_kind() {
    let mut engine = ready_game();
    // Submarines are a single segment.
    let res = engine.fire(4, 0).unwrap();
    assert_eq!(res.sunk, Some(ShipKind::Submarine));
    engine.fire(8, 8).unwrap();
    let res = engine.fire(2, 0).unwrap();
    assert_eq!(res.sunk, None);
    engine.fire(8, 7).unwrap();
    let res = engine.fire(2, 1).unwrap();
    assert_eq!(res.sunk, Some(ShipKind::Destroyer));
}

#[test]
fn test_player_one_wins_and_game_locks() {
    let mut engine = ready_game();
    let targets = fleet_cells();
    let last = targets.len() - 1;
    let mut misses = (0..BOARD_SIZE).map(|c| (8, c));
    for (i, (r, c)) in targets.into_iter().enumerate() {
        let res = engine.fire(r, c).unwrap();
        assert_eq!(res.outcome, FireOutcome::Hit);
        if i == last {
            assert!(res.game_over);
            assert_eq!(res.winner.as_deref(), Some("Alice"));
            break;
        }
        assert!(!res.game_over);
        assert_eq!(res.winner, None);
        let (mr, mc) = misses.next().unwrap_or((7, 8));
        let reply = engine.fire(mr, mc).unwrap();
        assert!(!reply.game_over);
    }

    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(engine.winner(), Some(PlayerId::First));
    assert_eq!(engine.winner_name(), Some("Alice"));
    assert!(engine.player(PlayerId::Second).fleet_destroyed());
    assert!(!engine.player(PlayerId::First).fleet_destroyed());

    assert_eq!(engine.fire(7, 7).unwrap_err(), GameError::GameAlreadyOver);
    assert_eq!(
        engine
            .place_next_ship((8, 8), Orientation::Vertical)
            .unwrap_err(),
        GameError::GameAlreadyOver
    );
    assert_eq!(engine.winner_name(), Some("Alice"));
}

#[test]
fn test_board_view_conceals_opponent_ships() {
    let mut engine = ready_game();
    engine.fire(0, 0).unwrap(); // Alice hits Bob's battleship
    engine.fire(5, 5).unwrap(); // Bob misses

    // Alice's turn: her board is revealed, Bob's is concealed.
    let own = engine.board_view(PlayerId::First);
    assert_eq!(own.get(0, 1), Some(CellView::Ship));
    assert_eq!(own.get(5, 5), Some(CellView::Miss));
    assert_eq!(own.get(8, 8), Some(CellView::Empty));

    let enemy = engine.board_view(PlayerId::Second);
    assert_eq!(enemy.owner, "Bob");
    assert_eq!(enemy.get(0, 0), Some(CellView::Hit));
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_ne!(enemy.get(r, c), Some(CellView::Ship));
            assert_ne!(enemy.get(r, c), Some(CellView::Empty));
        }
    }
    assert_eq!(enemy.ships_remaining, FLEET_LEN);
    assert_eq!(enemy.get(BOARD_SIZE, 0), None);
}

#[test]
fn test_board_view_marks_sunk_ships() {
    let mut engine = ready_game();
    engine.fire(4, 2).unwrap();
    let view = engine.board_view(PlayerId::Second);
    assert_eq!(view.get(4, 2), Some(CellView::Sunk));
    assert_eq!(view.ships_remaining, FLEET_LEN - 1);
}
