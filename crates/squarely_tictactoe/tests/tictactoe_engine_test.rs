//! Tests for the engine: board primitives, validated play, evaluation.

use squarely_tictactoe::{
    Board, Game, Move, MoveError, Outcome, Player, Position, rules,
};

#[test]
fn test_place_then_clear_restores_board() {
    let mut board = Board::new();
    let original = board.clone();

    board.place(Position::Center, Player::Machine);
    assert!(!board.is_empty(Position::Center));

    board.clear(Position::Center);
    assert_eq!(board, original);
}

#[test]
fn test_outcome_is_single_valued_over_a_game() {
    let mut game = Game::new();
    let plies = [
        Move::new(Player::Human, Position::Center),
        Move::new(Player::Machine, Position::TopLeft),
        Move::new(Player::Human, Position::BottomRight),
        Move::new(Player::Machine, Position::TopCenter),
        Move::new(Player::Human, Position::BottomLeft),
        Move::new(Player::Machine, Position::TopRight), // machine wins top row
    ];

    for action in plies {
        // Exactly one outcome at every step of the game.
        match game.outcome() {
            Outcome::InProgress | Outcome::Won(_) | Outcome::Draw => {}
        }
        game.play(action).unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Won(Player::Machine));
    assert_eq!(rules::check_winner(game.board()), Some(Player::Machine));
    assert!(!rules::is_full(game.board()));
}

#[test]
fn test_occupied_square_error_leaves_board_unchanged() {
    let mut game = Game::new();
    game.play(Move::new(Player::Human, Position::TopLeft)).unwrap();
    let snapshot = game.board().clone();

    let result = game.play(Move::new(Player::Machine, Position::TopLeft));
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
    assert_eq!(game.board(), &snapshot);
    assert_eq!(game.to_move(), Player::Machine);
}

#[test]
fn test_scripted_draw() {
    let mut game = Game::new();
    // X O X / O X X / O X O
    let plies = [
        Move::new(Player::Human, Position::TopLeft),
        Move::new(Player::Machine, Position::TopCenter),
        Move::new(Player::Human, Position::TopRight),
        Move::new(Player::Machine, Position::MiddleLeft),
        Move::new(Player::Human, Position::Center),
        Move::new(Player::Machine, Position::BottomLeft),
        Move::new(Player::Human, Position::MiddleRight),
        Move::new(Player::Machine, Position::BottomRight),
        Move::new(Player::Human, Position::BottomCenter),
    ];

    for action in plies {
        game.play(action).unwrap();
    }
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_finished_game_rejects_every_square() {
    let mut game = Game::new();
    for action in [
        Move::new(Player::Human, Position::TopLeft),
        Move::new(Player::Machine, Position::MiddleLeft),
        Move::new(Player::Human, Position::TopCenter),
        Move::new(Player::Machine, Position::Center),
        Move::new(Player::Human, Position::TopRight), // human wins top row
    ] {
        game.play(action).unwrap();
    }

    for position in game.valid_moves() {
        let result = game.play(Move::new(Player::Machine, position));
        assert_eq!(result, Err(MoveError::GameOver));
    }
}

#[test]
fn test_board_display_shows_marks_and_numbers() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Player::Human);
    board.place(Position::Center, Player::Machine);

    let rendered = board.display();
    assert!(rendered.starts_with("X|2|3"));
    assert!(rendered.contains("4|O|6"));
}

#[test]
fn test_state_round_trips_through_json() {
    let mut game = Game::new();
    game.play(Move::new(Player::Human, Position::Center)).unwrap();

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);

    // Front-ends key off these names; keep the wire shape stable.
    assert!(json.contains("\"to_move\":\"Machine\""));
    assert!(json.contains("\"Occupied\":\"Human\""));
}
