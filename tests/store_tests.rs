use std::sync::Arc;
use std::thread;

use naval_warfare::{Direction, GameError, GameStore, Position};

#[test]
fn test_create_returns_distinct_ids() {
    let store = GameStore::new();
    let first = store.create("a", "b");
    let second = store.create("c", "d");
    assert_ne!(first, second);
}

#[test]
fn test_unknown_game_is_rejected() {
    let store = GameStore::new();
    assert_eq!(store.get(999).unwrap_err(), GameError::UnknownGame);
    assert_eq!(store.remove(999).unwrap_err(), GameError::UnknownGame);
}

#[test]
fn test_placement_through_a_game_handle() {
    let store = GameStore::new();
    let id = store.create("a", "b");

    let handle = store.get(id).unwrap();
    {
        let mut game = handle.lock().unwrap();
        let player = game.player_mut("a").unwrap();
        player
            .place_ship("DES", Position::new(0, 0), Direction::Horizontal)
            .unwrap();
    }

    let handle = store.get(id).unwrap();
    let mut game = handle.lock().unwrap();
    assert_eq!(game.player_mut("a").unwrap().board().ships().len(), 1);
}

#[test]
fn test_remove_forgets_the_game() {
    let store = GameStore::new();
    let id = store.create("a", "b");
    store.remove(id).unwrap();
    assert_eq!(store.get(id).unwrap_err(), GameError::UnknownGame);
}

#[test]
fn test_games_are_independent_across_threads() {
    let store = Arc::new(GameStore::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let id = store.create(&format!("p{i}"), "opponent");
                let game = store.get(id).unwrap();
                let mut game = game.lock().unwrap();
                game.player_mut("opponent")
                    .unwrap()
                    .place_ship("PTL", Position::new(0, 0), Direction::Horizontal)
                    .unwrap();
                id
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for id in ids {
        let game = store.get(id).unwrap();
        let mut game = game.lock().unwrap();
        assert_eq!(game.player_mut("opponent").unwrap().board().ships().len(), 1);
    }
}
