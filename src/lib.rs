//! Crate root module declarations for the chess referee.
//!
//! Exposes the board model, the move legality and terminal-state rules, the
//! position codec and the line-oriented referee front-end so the binary,
//! benches and embedding servers can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod game_state;
    pub mod rules_config;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_evaluator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod terminal_state;
}

pub mod referee {
    pub mod referee_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_request;
    pub mod render_game_state;
}
