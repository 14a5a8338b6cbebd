use naval_warfare::{Board, CellStatus, Direction, GameError, Position, Ship};

#[test]
fn test_new_board_is_all_free() {
    let board = Board::new(4, 5);
    assert_eq!(board.length(), 4);
    assert_eq!(board.width(), 5);
    for x in 0..4 {
        for y in 0..5 {
            assert_eq!(board.status_at(Position::new(x, y)), CellStatus::Free);
        }
    }
    assert!(board.ships().is_empty());
}

#[test]
fn test_in_bounds_edges() {
    let board = Board::new(4, 5);
    assert!(board.in_bounds(Position::new(0, 0)));
    assert!(board.in_bounds(Position::new(3, 4)));
    assert!(!board.in_bounds(Position::new(4, 0)));
    assert!(!board.in_bounds(Position::new(0, 5)));
}

#[test]
fn test_place_destroyer_horizontally() {
    let mut board = Board::new(4, 4);
    board
        .place_ship(
            Ship::new("destroyer", 3),
            Position::new(0, 0),
            Direction::Horizontal,
        )
        .unwrap();

    for y in 0..3 {
        let cell = board.cell_at(Position::new(0, y));
        assert_eq!(cell.status(), CellStatus::Occupied);
        assert_eq!(cell.ship_index(), Some(0));
    }
    assert_eq!(board.status_at(Position::new(0, 3)), CellStatus::Free);
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.ships()[0].kind(), "destroyer");
}

#[test]
fn test_ship_joins_list_once_not_per_cell() {
    let mut board = Board::new(10, 10);
    board
        .place_ship(
            Ship::new("aircraft-carrier", 5),
            Position::new(2, 2),
            Direction::Vertical,
        )
        .unwrap();
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_placement_out_of_bounds_is_rejected() {
    let mut board = Board::new(4, 4);
    let err = board
        .place_ship(
            Ship::new("destroyer", 3),
            Position::new(0, 2),
            Direction::Horizontal,
        )
        .unwrap_err();
    assert_eq!(err, GameError::CannotOccupyPositions);
    // nothing committed
    assert_eq!(board.status_at(Position::new(0, 2)), CellStatus::Free);
    assert!(board.ships().is_empty());
}

#[test]
fn test_overlapping_placement_is_rejected() {
    let mut board = Board::new(4, 4);
    board
        .place_ship(
            Ship::new("destroyer", 3),
            Position::new(1, 0),
            Direction::Horizontal,
        )
        .unwrap();
    let err = board
        .place_ship(
            Ship::new("submarine", 3),
            Position::new(0, 1),
            Direction::Vertical,
        )
        .unwrap_err();
    assert_eq!(err, GameError::CannotOccupyPositions);
    assert_eq!(board.status_at(Position::new(0, 1)), CellStatus::Free);
    assert_eq!(board.status_at(Position::new(2, 1)), CellStatus::Free);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_placement_over_bombed_cell_is_rejected() {
    let mut board = Board::new(4, 4);
    board.bomb(Position::new(0, 1)).unwrap();
    let err = board
        .place_ship(
            Ship::new("patrol-ship", 2),
            Position::new(0, 0),
            Direction::Horizontal,
        )
        .unwrap_err();
    assert_eq!(err, GameError::CannotOccupyPositions);
    // the free cell of the pair stays untouched
    assert_eq!(board.status_at(Position::new(0, 0)), CellStatus::Free);
}

#[test]
fn test_bomb_free_cell_misses() {
    let mut board = Board::new(4, 4);
    let outcome = board.bomb(Position::new(0, 0)).unwrap();
    assert!(!outcome.hit);
    assert!(!outcome.destroyed_ship);
    assert_eq!(board.status_at(Position::new(0, 0)), CellStatus::Bombed);
}

#[test]
fn test_bomb_same_cell_twice_fails_without_mutation() {
    let mut board = Board::new(4, 4);
    board.bomb(Position::new(0, 0)).unwrap();
    let after_first = board.status_at(Position::new(0, 0));
    assert_eq!(
        board.bomb(Position::new(0, 0)).unwrap_err(),
        GameError::CannotBombPosition
    );
    assert_eq!(board.status_at(Position::new(0, 0)), after_first);
}

#[test]
fn test_bomb_out_of_bounds_is_rejected() {
    let mut board = Board::new(4, 4);
    assert_eq!(
        board.bomb(Position::new(4, 0)).unwrap_err(),
        GameError::CannotBombPosition
    );
    assert_eq!(
        board.bomb(Position::new(0, 9)).unwrap_err(),
        GameError::CannotBombPosition
    );
}

#[test]
fn test_can_bomb_covers_free_and_occupied() {
    let mut board = Board::new(4, 4);
    board
        .place_ship(
            Ship::new("patrol-ship", 2),
            Position::new(0, 0),
            Direction::Horizontal,
        )
        .unwrap();
    assert!(board.can_bomb(Position::new(0, 0))); // occupied
    assert!(board.can_bomb(Position::new(3, 3))); // free
    board.bomb(Position::new(0, 0)).unwrap();
    assert!(!board.can_bomb(Position::new(0, 0))); // bombed
}

#[test]
fn test_empty_board_reports_all_ships_destroyed() {
    let board = Board::new(4, 4);
    assert!(board.all_ships_destroyed());
}

#[test]
fn test_unbombed_positions_shrink_with_each_bomb() {
    let mut board = Board::new(2, 2);
    assert_eq!(board.unbombed_positions().len(), 4);
    board.bomb(Position::new(0, 0)).unwrap();
    board.bomb(Position::new(1, 1)).unwrap();
    let open = board.unbombed_positions();
    assert_eq!(open, vec![Position::new(0, 1), Position::new(1, 0)]);
}

#[test]
fn test_board_rendering_glyphs() {
    let mut board = Board::new(2, 3);
    board
        .place_ship(
            Ship::new("patrol-ship", 2),
            Position::new(0, 0),
            Direction::Horizontal,
        )
        .unwrap();
    board.bomb(Position::new(1, 2)).unwrap();
    assert_eq!(board.to_string(), "XXO\nOOB\n");
}
