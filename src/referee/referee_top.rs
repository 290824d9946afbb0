//! Line-oriented referee front-end.
//!
//! Reads one command per line, applies it to a single `ChessGame` and answers
//! with one line per command (`show` prints the board diagram first). Commands:
//!
//! ```text
//! new
//! position startpos
//! position fen <board> <side> <castling> <ep> <halfmove> <fullmove>
//! move <e2e4 | 4143>
//! fen
//! show
//! status
//! moves
//! quit
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, error, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::game_controller::ChessGame;
use crate::game_state::rules_config::RulesConfig;

pub fn run_stdio_loop(config: RulesConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut referee = RefereeState::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = referee.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    info!("referee loop finished");
    Ok(())
}

struct RefereeState {
    game: ChessGame,
}

impl RefereeState {
    fn new(config: RulesConfig) -> Self {
        Self {
            game: ChessGame::with_config(config),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!(command = trimmed, "referee command");

        match cmd {
            "new" => {
                self.game.reset();
                writeln!(out, "ok")?;
            }
            "position" => match self.handle_position(parts) {
                Ok(()) => writeln!(out, "ok")?,
                Err(err) => writeln!(out, "error {}", err)?,
            },
            "move" => {
                let request = parts.next().unwrap_or_default();
                match self.game.try_move_request(request) {
                    Ok(true) => writeln!(out, "ok")?,
                    Ok(false) => writeln!(out, "illegal")?,
                    Err(err) => self.report(out, err)?,
                }
            }
            "fen" => {
                writeln!(out, "{}", self.game.serialize())?;
            }
            "show" => {
                writeln!(out, "{}", self.game.render())?;
                writeln!(out, "{}", self.game.serialize())?;
            }
            "status" => match self.status_line() {
                Ok(status) => writeln!(out, "{}", status)?,
                Err(err) => self.report(out, err)?,
            },
            "moves" => match self.game.legal_moves() {
                Ok(moves) => {
                    let listed: Vec<String> = moves
                        .iter()
                        .filter_map(|mv| mv.to_long_algebraic())
                        .collect();
                    writeln!(out, "moves {}", listed.join(" "))?;
                }
                Err(err) => self.report(out, err)?,
            },
            "quit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "error unknown command '{}'", other)?;
            }
        }

        Ok(false)
    }

    fn handle_position<'a>(
        &mut self,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<(), String> {
        match tokens.next() {
            Some("startpos") => {
                self.game.reset();
                Ok(())
            }
            Some("fen") => {
                let fen = tokens.collect::<Vec<_>>().join(" ");
                if fen.is_empty() {
                    return Err("missing FEN after 'position fen'".to_owned());
                }
                self.game.load(&fen).map_err(|err| err.to_string())
            }
            Some(other) => Err(format!("unsupported position token '{}'", other)),
            None => Err("incomplete position command".to_owned()),
        }
    }

    fn status_line(&self) -> Result<String, ChessErrors> {
        let status = self.game.status()?;
        let result = self.game.result()?;
        Ok(format!("status {} result {}", status.as_str(), result.code()))
    }

    fn report(&self, out: &mut impl Write, err: ChessErrors) -> io::Result<()> {
        if !err.is_format_error() {
            error!(
                %err,
                fen = %self.game.serialize(),
                config = ?self.game.config(),
                "position violates the king invariant"
            );
        }
        writeln!(out, "error {}", err)
    }
}
