use proptest::prelude::*;
use reversi_arena::*;

fn kind_from(index: u8) -> DiscKind {
    DiscKind::ALL[index as usize % DiscKind::ALL.len()]
}

/// Plays `choices` as (move index, kind index) pairs from the opening,
/// falling back to Standard when the chosen kind has run out.
fn play_out(choices: &[(u8, u8)]) -> GameState {
    let mut game = GameState::default();
    for &(pick, kind) in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let pos = moves[pick as usize % moves.len()];
        let kind = kind_from(kind);
        let kind = if game.current().inventory().has(kind) {
            kind
        } else {
            DiscKind::Standard
        };
        let owner = game.current_player();
        game.locate_disc(Move::new(pos, Disc::new(kind, owner)))
            .expect("legal move with stocked kind");
    }
    game
}

fn arbitrary_game() -> impl Strategy<Value = GameState> {
    prop::collection::vec((any::<u8>(), any::<u8>()), 0..40).prop_map(|choices| play_out(&choices))
}

fn arbitrary_board() -> impl Strategy<Value = Board> {
    let cell = prop::option::weighted(0.7, (0u8..3, any::<bool>()));
    prop::collection::vec(cell, 64).prop_map(|cells| {
        Board::from_discs(cells.into_iter().enumerate().filter_map(|(i, cell)| {
            let (kind, first) = cell?;
            let owner = if first { Player::First } else { Player::Second };
            Some((Position::new(i / 8, i % 8), Disc::new(kind_from(kind), owner)))
        }))
    })
}

proptest! {
    #[test]
    fn prop_failed_placement_changes_nothing(
        game in arbitrary_game(),
        row in 0usize..8,
        col in 0usize..8,
        kind in 0u8..3,
    ) {
        let mut game = game;
        let before = game.clone();
        let pos = Position::new(row, col);
        let mv = Move::new(pos, Disc::new(kind_from(kind), game.current_player()));

        match game.locate_disc(mv) {
            Ok(captures) => {
                prop_assert!(!captures.is_empty());
                prop_assert_eq!(game.cell_at(pos), Some(mv.disc));
                prop_assert_eq!(game.move_count(), before.move_count() + 1);
            }
            Err(_) => {
                prop_assert_eq!(game.board(), before.board());
                prop_assert_eq!(game.history(), before.history());
                prop_assert_eq!(game.current_player(), before.current_player());
                prop_assert_eq!(game.current().inventory(), before.current().inventory());
            }
        }
    }

    #[test]
    fn prop_inspection_is_idempotent(game in arbitrary_game()) {
        let moves = game.legal_moves();
        prop_assert_eq!(game.legal_moves(), moves.clone());
        for pos in moves {
            let flips = game.count_flips(pos);
            prop_assert!(flips > 0);
            prop_assert_eq!(game.count_flips(pos), flips);
            prop_assert_eq!(game.evaluate_captures(pos), game.evaluate_captures(pos));
        }
    }

    #[test]
    fn prop_undo_everything_restores_opening(game in arbitrary_game()) {
        let mut game = game;
        let applied = game.move_count();
        for _ in 0..applied {
            prop_assert!(game.undo_last_move().is_some());
        }
        prop_assert!(game.undo_last_move().is_none());
        prop_assert_eq!(game.board(), &Board::starting());
        prop_assert!(game.is_first_player_turn());
        prop_assert!(game.history().is_empty());
        prop_assert_eq!(game.player(Player::First).inventory(), game.config().inventory());
        prop_assert_eq!(game.player(Player::Second).inventory(), game.config().inventory());
    }

    #[test]
    fn prop_history_replays_to_current_board(game in arbitrary_game()) {
        let mut replay = GameState::default();
        for &mv in game.history() {
            prop_assert!(replay.locate_disc(mv).is_ok());
        }
        prop_assert_eq!(replay.board(), game.board());
        prop_assert_eq!(replay.current_player(), game.current_player());
    }

    #[test]
    fn prop_captures_are_unique_opponent_flippable(
        board in arbitrary_board(),
        row in 0usize..8,
        col in 0usize..8,
        first in any::<bool>(),
    ) {
        let mover = if first { Player::First } else { Player::Second };
        let origin = Position::new(row, col);
        let captures = evaluate_captures(&board, origin, mover);

        let mut unique = captures.positions().to_vec();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), captures.count());
        prop_assert!(!captures.contains(origin));

        for &pos in &captures {
            let disc = board.cell_at(pos).expect("captured cell holds a disc");
            prop_assert_ne!(disc.owner(), mover);
            prop_assert_ne!(disc.kind(), DiscKind::Fortified);
        }
    }

    #[test]
    fn prop_fortified_discs_keep_their_owner(
        choices in prop::collection::vec((any::<u8>(), any::<u8>()), 0..60),
    ) {
        let mut game = GameState::default();
        let mut fortified: Vec<(Position, Player)> = Vec::new();

        for (pick, kind) in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let pos = moves[pick as usize % moves.len()];
            let kind = kind_from(kind);
            let kind = if game.current().inventory().has(kind) { kind } else { DiscKind::Standard };
            let owner = game.current_player();
            game.locate_disc(Move::new(pos, Disc::new(kind, owner))).unwrap();
            if kind == DiscKind::Fortified {
                fortified.push((pos, owner));
            }

            for &(at, holder) in &fortified {
                prop_assert_eq!(game.cell_at(at), Some(Disc::fortified(holder)));
            }
        }
    }
}
