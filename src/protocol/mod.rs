//! Line-oriented text protocol for playing against the engine.
//!
//! One command per line on stdin, responses on stdout. See
//! [`command::Command`] for the accepted commands.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::search::SearchLogger;
use crate::board::{
    evaluate, Color, Outcome, Piece, SearchParams, Square, SquareError, StateBuilder, StateError,
    State,
};
use crate::engine::{CommandResult, GameController, GameError, Protocol};

pub mod command;
pub mod options;
pub mod print;

use command::{parse_command, Command};

/// Error type for rejected protocol commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Command is missing required arguments
    MissingParts(&'static str),
    /// A square argument could not be parsed
    InvalidSquare(SquareError),
    /// A piece letter other than K, k, p or q
    UnknownPiece(String),
    /// `setoption` named an option that does not exist
    UnknownOption(String),
    /// An argument had the wrong form
    InvalidValue { name: String, value: String },
    /// The controller refused the action
    Game(GameError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingParts(cmd) => write!(f, "Missing arguments for '{cmd}'"),
            ProtocolError::InvalidSquare(e) => write!(f, "{e}"),
            ProtocolError::UnknownPiece(p) => write!(f, "Unknown piece '{p}'"),
            ProtocolError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            ProtocolError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for {name}")
            }
            ProtocolError::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::InvalidSquare(e) => Some(e),
            ProtocolError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for ProtocolError {
    fn from(e: SquareError) -> Self {
        ProtocolError::InvalidSquare(e)
    }
}

impl From<GameError> for ProtocolError {
    fn from(e: GameError) -> Self {
        ProtocolError::Game(e)
    }
}

impl From<StateError> for ProtocolError {
    fn from(e: StateError) -> Self {
        ProtocolError::Game(e.into())
    }
}

/// Parse `<wk> <bk> <pawn> [queen] [turn w|b]` into a state and side to move.
pub fn parse_position(parts: &[String]) -> Result<(State, Color), ProtocolError> {
    if parts.len() < 3 {
        return Err(ProtocolError::MissingParts("position"));
    }
    let white_king = parts[0].parse::<Square>()?;
    let black_king = parts[1].parse::<Square>()?;
    let runner = parts[2].parse::<Square>()?;

    let mut promoted = false;
    let mut turn = Color::White;
    let mut rest = parts[3..].iter();
    while let Some(token) = rest.next() {
        match token.as_str() {
            "queen" => promoted = true,
            "turn" => {
                let side = rest.next().ok_or(ProtocolError::MissingParts("position"))?;
                turn = Color::from_str_opt(side).ok_or_else(|| ProtocolError::InvalidValue {
                    name: "turn".to_string(),
                    value: side.clone(),
                })?;
            }
            other => {
                return Err(ProtocolError::InvalidValue {
                    name: "position".to_string(),
                    value: other.to_string(),
                })
            }
        }
    }

    let builder = StateBuilder::new()
        .white_king(white_king)
        .black_king(black_king);
    let builder = if promoted {
        builder.queen(runner)
    } else {
        builder.pawn(runner)
    };
    Ok((builder.build()?, turn))
}

fn parse_piece(arg: Option<&str>) -> Result<Piece, ProtocolError> {
    let Some(arg) = arg else {
        return Ok(Piece::WhiteKing);
    };
    let mut chars = arg.chars();
    match (chars.next().and_then(Piece::from_char), chars.next()) {
        (Some(piece), None) => Ok(piece),
        _ => Err(ProtocolError::UnknownPiece(arg.to_string())),
    }
}

fn result_line(outcome: Outcome) -> String {
    format!("result {outcome}")
}

/// The text protocol front end, wrapping a [`GameController`].
pub struct TextProtocol {
    game: GameController,
}

impl Default for TextProtocol {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl TextProtocol {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        TextProtocol {
            game: GameController::new(params),
        }
    }

    #[must_use]
    pub const fn game(&self) -> &GameController {
        &self.game
    }

    fn position(&mut self, parts: &[String]) -> Result<Vec<String>, ProtocolError> {
        match parts.first().map(String::as_str) {
            None => return Err(ProtocolError::MissingParts("position")),
            Some("startpos") => self.game.reset(),
            Some("random") => {
                let state = State::random(&mut rand::thread_rng());
                self.game.set_position(state, Color::White)?;
            }
            Some(_) => {
                let (state, turn) = parse_position(parts)?;
                self.game.set_position(state, turn)?;
            }
        }
        Ok(Vec::new())
    }

    fn legal(&self, arg: Option<&str>) -> Result<Vec<String>, ProtocolError> {
        let piece = parse_piece(arg)?;
        let moves = self.game.legal_moves(piece)?;
        Ok(vec![print::format_legal(&moves)])
    }

    fn play(&mut self, arg: Option<&str>) -> Result<Vec<String>, ProtocolError> {
        let to = arg.ok_or(ProtocolError::MissingParts("play"))?.parse::<Square>()?;
        let mv = self.game.play_human(to)?;
        let mut lines = vec![format!("moved {mv}")];
        lines.extend(self.game.status().map(result_line));
        Ok(lines)
    }

    fn go(&mut self, depth: Option<u32>) -> Result<Vec<String>, ProtocolError> {
        let mut params = self.game.params().clone();
        if let Some(depth) = depth {
            params = params.with_depth(depth);
        }

        let mut lines: Vec<String> = Vec::new();
        match self.game.play_engine_with(&params) {
            Ok(report) => {
                lines.info(&report.info());
                lines.push(print::format_bestmove(report.result.best_move));
                lines.extend(self.game.status().map(result_line));
            }
            Err(GameError::GameOver(outcome)) => {
                lines.push(print::format_bestmove(None));
                lines.push(result_line(outcome));
            }
            Err(GameError::NoMoveAvailable) => lines.push(print::format_bestmove(None)),
            Err(e) => return Err(e.into()),
        }
        Ok(lines)
    }

    fn display(&self) -> Vec<String> {
        let mut lines: Vec<String> = print::format_board(self.game.state())
            .lines()
            .map(String::from)
            .collect();
        match self.game.status() {
            Some(outcome) => lines.push(result_line(outcome)),
            None => lines.push(format!("turn {}", self.game.to_move())),
        }
        lines
    }

    fn execute(&mut self, cmd: Command) -> Result<Vec<String>, ProtocolError> {
        match cmd {
            Command::IsReady => Ok(vec!["readyok".to_string()]),
            Command::NewGame => {
                self.game.reset();
                Ok(Vec::new())
            }
            Command::Position(parts) => self.position(&parts),
            Command::Legal(arg) => self.legal(arg.as_deref()),
            Command::Play(arg) => self.play(arg.as_deref()),
            Command::Go(depth) => self.go(depth),
            Command::Eval => Ok(vec![format!("eval {}", evaluate(self.game.state()))]),
            Command::SetOption(parts) => {
                options::apply_setoption(self.game.params_mut(), &parts)?;
                Ok(Vec::new())
            }
            Command::Display => Ok(self.display()),
            // handled by `process_command`
            Command::Quit | Command::Unknown(_) => Ok(Vec::new()),
        }
    }
}

impl Protocol for TextProtocol {
    fn process_command(&mut self, line: &str) -> CommandResult {
        let Some(cmd) = parse_command(line) else {
            return CommandResult::Ok(None);
        };
        match cmd {
            Command::Quit => CommandResult::Quit,
            Command::Unknown(text) => CommandResult::Unknown(text),
            cmd => match self.execute(cmd) {
                Ok(lines) if lines.is_empty() => CommandResult::Ok(None),
                Ok(lines) => CommandResult::Ok(Some(lines.join("\n"))),
                Err(e) => {
                    #[cfg(feature = "logging")]
                    log::warn!("command '{}' failed: {e}", line.trim());
                    CommandResult::Ok(Some(format!("error: {e}")))
                }
            },
        }
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error reading input: {e}");
                    break;
                }
            };

            match self.process_command(&line) {
                CommandResult::Ok(Some(out)) => println!("{out}"),
                CommandResult::Ok(None) => {}
                CommandResult::Unknown(text) => println!("unknown command: {text}"),
                CommandResult::Quit => break,
            }
            let _ = stdout.flush();
        }
    }
}

/// Run the text protocol on stdin/stdout until `quit` or end of input.
pub fn run_loop() {
    let mut protocol = TextProtocol::default();

    #[cfg(feature = "logging")]
    log::info!("{} protocol ready", protocol.name());

    protocol.run();
}
