//! Game orchestration: turn order, game modes and outcome detection
//!
//! Black always moves first. Human moves arrive through
//! [`GameState::try_place_stone`]; AI moves are produced by
//! [`GameState::play_ai_turn`]. Both funnel into the same move execution,
//! which records history and checks for a five or a full board.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Pos, Stone};
use crate::config::{ConfigError, GameConfig};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::find_five_positions;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
    /// AI vs AI
    EvE,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

impl GameMode {
    /// Same mode with the human side set, where the mode has one
    pub fn with_human_color(self, color: Stone) -> Self {
        match self {
            GameMode::PvE { .. } => GameMode::PvE { human_color: color },
            other => other,
        }
    }

    /// Whether `color` is played by a human in this mode
    pub fn is_human(self, color: Stone) -> bool {
        match self {
            GameMode::PvE { human_color } => color == human_color,
            GameMode::PvP { .. } => true,
            GameMode::EvE => false,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PvE { human_color } => write!(f, "human ({human_color:?}) vs AI"),
            GameMode::PvP { .. } => f.write_str("human vs human"),
            GameMode::EvE => f.write_str("AI vs AI"),
        }
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pve" => Ok(GameMode::default()),
            "pvp" => Ok(GameMode::PvP {
                show_suggestions: false,
            }),
            "eve" => Ok(GameMode::EvE),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Five or more in a row; `line` is the winning run
    Win { winner: Stone, line: Vec<Pos> },
    /// Board filled with no five
    Draw,
}

/// Why a move request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("not a human turn")]
    NotHumanTurn,
    #[error("not an AI turn")]
    NotAiTurn,
    #[error("invalid move ({row}, {col}): cell is occupied or out of bounds")]
    InvalidMove { row: i32, col: i32 },
    #[error("no move available")]
    NoMoveAvailable,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    config: GameConfig,
    black_ai: Option<AIEngine>,
    white_ai: Option<AIEngine>,
}

impl GameState {
    /// Start a game. `config` is expected to be validated.
    pub fn new(config: GameConfig) -> Self {
        let engine_for = |color: Stone| {
            (!config.mode.is_human(color))
                .then(|| AIEngine::for_color(config.strategy, config.depth_limit, color))
        };
        Self {
            board: Board::new(config.board_size),
            mode: config.mode,
            current_turn: Stone::Black,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            config,
            black_ai: engine_for(Stone::Black),
            white_ai: engine_for(Stone::White),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.mode.is_human(self.current_turn)
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Attempt to place a human stone at the given coordinates
    pub fn try_place_stone(&mut self, row: i32, col: i32) -> Result<Pos, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotHumanTurn);
        }
        if !self.board.is_valid_move(row, col) {
            return Err(MoveError::InvalidMove { row, col });
        }

        let pos = Pos::new(row as u16, col as u16);
        self.execute_move(pos);
        Ok(pos)
    }

    /// Let the engine for the side to move choose and play a move
    pub fn play_ai_turn(&mut self) -> Result<MoveResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let engine = match self.current_turn {
            Stone::Black => self.black_ai.as_mut(),
            Stone::White => self.white_ai.as_mut(),
            Stone::Empty => None,
        }
        .ok_or(MoveError::NotAiTurn)?;

        let result = engine.get_move_with_stats(&mut self.board);
        let pos = result.best_move.ok_or(MoveError::NoMoveAvailable)?;
        self.last_ai_result = Some(result.clone());
        self.execute_move(pos);
        Ok(result)
    }

    /// Ask an engine what the side to move should play (PvP hints)
    pub fn request_suggestion(&mut self) -> Option<Pos> {
        if self.is_over() {
            return None;
        }
        let mut engine =
            AIEngine::for_color(self.config.strategy, self.config.depth_limit, self.current_turn);
        let result = engine.get_move_with_stats(&mut self.board);
        let hint = result.best_move;
        self.last_ai_result = Some(result);
        hint
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.board.place_stone(pos, color);

        self.move_history.push((pos, color));
        log::info!("{color:?} plays {pos}");

        if let Some(line) = find_five_positions(&self.board, color) {
            log::info!("{color:?} wins with {} in a row", line.len());
            self.game_over = Some(GameResult::Win { winner: color, line });
            return;
        }
        if self.board.is_full() {
            log::info!("board full, draw");
            self.game_over = Some(GameResult::Draw);
            return;
        }

        self.current_turn = color.opponent();
    }
}
