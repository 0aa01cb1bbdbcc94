use reversi_arena::*;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn position(discs: &[(usize, usize, Disc)], to_move: Player) -> GameState {
    let board = Board::from_discs(discs.iter().map(|&(r, c, d)| (p(r, c), d)));
    GameState::from_position(GameConfig::default(), board, to_move)
}

#[test]
fn test_opening_move_flips_one_disc() {
    let mut game = GameState::default();
    assert_eq!(game.count_flips(p(2, 4)), 1);
    assert!(game.locate_disc(Move::standard(p(2, 4), Player::First)).is_ok());
    assert_eq!(game.cell_at(p(3, 4)).map(|d| d.owner()), Some(Player::First));
    assert_eq!(game.score(), (4, 1));
}

#[test]
fn test_no_explosives_left_is_rejected() {
    let mut game = GameState::new(GameConfig {
        explosive_discs: 0,
        fortified_discs: 2,
    });
    let before = game.board().clone();
    for pos in game.legal_moves() {
        let result = game.locate_disc(Move::new(pos, Disc::explosive(Player::First)));
        assert_eq!(result, Err(GameError::OutOfStock(DiscKind::Explosive)));
    }
    assert_eq!(game.board(), &before);
    assert!(game.history().is_empty());
}

#[test]
fn test_explosives_chain_diagonally() {
    // Line capture hits the bomb at (5, 2); bombs at (4, 3) and (3, 4) follow.
    let mut game = position(
        &[
            (5, 2, Disc::explosive(Player::Second)),
            (5, 3, Disc::standard(Player::First)),
            (4, 3, Disc::explosive(Player::Second)),
            (3, 4, Disc::explosive(Player::Second)),
            (6, 1, Disc::standard(Player::Second)),
            (4, 2, Disc::standard(Player::Second)),
            (2, 5, Disc::standard(Player::Second)),
            (2, 4, Disc::fortified(Player::Second)),
        ],
        Player::First,
    );

    let captures = game.evaluate_captures(p(5, 1));
    let mut found = captures.positions().to_vec();
    found.sort();
    let mut expected = vec![p(5, 2), p(4, 3), p(3, 4), p(6, 1), p(4, 2), p(2, 5)];
    expected.sort();
    assert_eq!(found, expected);

    game.locate_disc(Move::standard(p(5, 1), Player::First)).unwrap();
    for pos in expected {
        assert_eq!(game.cell_at(pos).unwrap().owner(), Player::First);
    }
    assert_eq!(game.cell_at(p(2, 4)).unwrap().owner(), Player::Second);
}

#[test]
fn test_stalemated_side_loses() {
    let mut game = position(
        &[
            (3, 3, Disc::standard(Player::First)),
            (3, 4, Disc::fortified(Player::First)),
        ],
        Player::Second,
    );
    assert!(game.legal_moves().is_empty());
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::First));
    assert_eq!(game.player(Player::First).wins(), 1);
    assert_eq!(game.player(Player::Second).wins(), 0);
}

#[test]
fn test_full_game_unwinds_to_opening() {
    let mut game = GameState::default();
    let mut bots: [Box<dyn Bot>; 2] = [
        Box::new(RandomBot::with_seed("random".to_string(), 99)),
        Box::new(LookaheadBot::new("minmax".to_string())),
    ];
    while !game.is_game_over() {
        let turn = if game.is_first_player_turn() { 0 } else { 1 };
        let mv = bots[turn].get_move(&mut game).expect("legal move exists");
        game.locate_disc(mv).expect("bots play legal moves");
    }
    assert!(game.winner().is_some());

    while game.undo_last_move().is_some() {}
    assert_eq!(game.board(), &Board::starting());
    assert!(game.is_first_player_turn());
}
