//! Position-text-to-GameState parser.
//!
//! Builds a fully populated `GameState` from a six-field FEN string. The
//! parser never panics on bad input; every malformed field maps to a
//! `ChessErrors` variant and nothing is returned half built.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{board::Board, chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(ChessErrors::InvalidFenFieldCount(fields.len()));
    };

    Ok(GameState {
        board: parse_board(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_square: parse_en_passant_square(en_passant_part)?,
        halfmove_clock: parse_counter("halfmove clock", halfmove_part)?,
        fullmove_number: parse_counter("fullmove number", fullmove_part)?,
    })
}

/// Parses only the piece-placement field.
pub fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let rank_label = char::from(b'1' + board_rank as u8);
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file < 8 {
                if let Some(square) = square_at(file as i8, board_rank) {
                    board.set_piece(square, Some(piece));
                }
            }
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenRankWidth {
                rank: rank_label,
                cells: file,
            });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidCastlingToken(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn parse_counter(field: &'static str, value: &str) -> ChessResult<u32> {
    value.parse::<u32>().map_err(|_| ChessErrors::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, CASTLE_ALL};
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.board.piece_at(4),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game_state.board.piece_at(59),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game_state.board.occupied_squares(Color::Dark).count(), 16);
    }

    #[test]
    fn parses_en_passant_target_and_counters() {
        let game_state =
            parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
                .expect("FEN with en-passant target should parse");

        assert_eq!(game_state.en_passant_square, Some(44));
        assert_eq!(game_state.fullmove_number, 2);
    }

    #[test]
    fn wrong_field_count_is_a_format_error() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
            Err(ChessErrors::InvalidFenFieldCount(5))
        );
        assert_eq!(
            parse_fen(&format!("{STARTING_POSITION_FEN} extra")),
            Err(ChessErrors::InvalidFenFieldCount(7))
        );
        assert_eq!(parse_fen(""), Err(ChessErrors::InvalidFenFieldCount(0)));
    }

    #[test]
    fn rank_width_must_be_exactly_eight() {
        assert_eq!(
            parse_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ChessErrors::InvalidFenRankWidth { rank: '7', cells: 7 })
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR1 w KQkq - 0 1"),
            Err(ChessErrors::InvalidFenRankWidth { rank: '1', cells: 9 })
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
            Err(ChessErrors::InvalidFenRankCount(7))
        );
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/4X3/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ChessErrors::InvalidFenToken('X'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/9/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ChessErrors::InvalidFenToken('9'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(ChessErrors::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkz - 0 1"),
            Err(ChessErrors::InvalidCastlingToken('z'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
            Err(ChessErrors::InvalidAlgebraicString("e9".to_owned()))
        );
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1"),
            Err(ChessErrors::InvalidCounter { .. })
        ));
    }

    #[test]
    fn long_games_keep_large_counters() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 70000 123456";
        let game_state = parse_fen(fen).expect("large counters should parse");

        assert_eq!(game_state.halfmove_clock, 70_000);
        assert_eq!(game_state.fullmove_number, 123_456);
        assert_eq!(game_state.get_fen(), fen);
    }

    #[test]
    fn kingless_board_still_parses() {
        let game_state = parse_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("empty board should parse");
        assert_eq!(game_state.board.king_square(Color::Light), None);
        assert_eq!(game_state.castling_rights, 0);
    }
}
