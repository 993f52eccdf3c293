//! Terminal front end: board display, move prompts and the game loop
//!
//! All functions take their input and output streams as parameters so the
//! binary can pass stdin/stdout and tests can pass in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Stone};
use crate::game::{GameMode, GameResult, GameState, MoveError};

/// Errors that end a terminal session
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Prompt until a line parses as `T`. Returns `None` at end of input.
pub fn prompt_parse<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Invalid input. Please enter integer values.")?,
        }
    }
}

/// Ask for a row and a column until they name an empty cell.
///
/// Returns `None` at end of input.
pub fn prompt_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<(i32, i32)>> {
    loop {
        let Some(row) = prompt_parse::<i32, _, _>(input, output, "Enter row: ")? else {
            return Ok(None);
        };
        let Some(col) = prompt_parse::<i32, _, _>(input, output, "Enter col: ")? else {
            return Ok(None);
        };

        if board.is_valid_move(row, col) {
            return Ok(Some((row, col)));
        }
        writeln!(output, "Invalid move. Cell is already occupied or out of bounds.")?;
    }
}

/// Name a side the way the prompts address it
fn side_label(mode: GameMode, color: Stone) -> String {
    match mode {
        GameMode::PvE { human_color } if color == human_color => "You".to_string(),
        GameMode::PvE { .. } => "AI".to_string(),
        _ => format!("{color:?} ({})", color.symbol()),
    }
}

/// Print the final verdict
pub fn announce_result<W: Write>(result: &GameResult, mode: GameMode, output: &mut W) -> io::Result<()> {
    match result {
        GameResult::Win { winner, .. } => match mode {
            GameMode::PvE { human_color } if *winner == human_color => writeln!(output, "You win!"),
            GameMode::PvE { .. } => writeln!(output, "AI wins!"),
            _ => writeln!(output, "{} wins!", side_label(mode, *winner)),
        },
        GameResult::Draw => writeln!(output, "It's a draw."),
    }
}

/// Run a game to completion.
///
/// End of input while waiting for a human move ends the session early
/// without an error.
pub fn run_game<R: BufRead, W: Write>(
    game: &mut GameState,
    input: &mut R,
    output: &mut W,
) -> Result<(), TerminalError> {
    while !game.is_over() {
        write!(output, "{}", game.board)?;
        let color = game.current_turn;

        if game.is_human_turn() {
            if let GameMode::PvP {
                show_suggestions: true,
            } = game.mode
            {
                if let Some(hint) = game.request_suggestion() {
                    writeln!(output, "Hint: {hint}")?;
                }
            }

            writeln!(output, "{} turn ({}):", side_label(game.mode, color), color.symbol())?;
            let Some((row, col)) = prompt_move(&game.board, input, output)? else {
                writeln!(output, "Input closed, leaving game.")?;
                return Ok(());
            };
            game.try_place_stone(row, col)?;
        } else {
            writeln!(output, "{} is thinking ({})...", side_label(game.mode, color), color.symbol())?;
            let result = game.play_ai_turn()?;
            if let Some(pos) = result.best_move {
                writeln!(
                    output,
                    "{} plays {pos} (depth {}, {} nodes, {}ms)",
                    side_label(game.mode, color),
                    result.depth,
                    result.nodes,
                    result.time_ms
                )?;
            }
        }
    }

    write!(output, "{}", game.board)?;
    if let Some(result) = &game.game_over {
        announce_result(result, game.mode, output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::search::Strategy;
    use std::io::Cursor;

    fn game(size: usize, mode: GameMode) -> GameState {
        GameState::new(GameConfig {
            board_size: size,
            depth_limit: 1,
            strategy: Strategy::AlphaBeta,
            mode,
        })
    }

    #[test]
    fn test_prompt_parse_retries() {
        let mut input = Cursor::new("abc\n\n7\n");
        let mut output = Vec::new();
        let value: Option<i32> = prompt_parse(&mut input, &mut output, "> ").unwrap();
        assert_eq!(value, Some(7));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input").count(), 2);
        assert_eq!(text.matches("> ").count(), 3);
    }

    #[test]
    fn test_prompt_parse_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let value: Option<usize> = prompt_parse(&mut input, &mut output, "> ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_prompt_move_rejects_bad_cells() {
        let mut board = Board::new(5);
        board.make_move(1, 1, Stone::Black);
        // occupied, out of range, then valid
        let mut input = Cursor::new("1\n1\n9\n0\n3\n4\n");
        let mut output = Vec::new();

        let mov = prompt_move(&board, &mut input, &mut output).unwrap();
        assert_eq!(mov, Some((3, 4)));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid move").count(), 2);
    }

    #[test]
    fn test_announce_result() {
        let mode = GameMode::PvE {
            human_color: Stone::Black,
        };
        let win = |winner| GameResult::Win { winner, line: Vec::new() };
        let mut out = Vec::new();
        announce_result(&win(Stone::Black), mode, &mut out).unwrap();
        announce_result(&win(Stone::White), mode, &mut out).unwrap();
        announce_result(&GameResult::Draw, mode, &mut out).unwrap();
        announce_result(&win(Stone::White), GameMode::EvE, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You win!\nAI wins!\nIt's a draw.\nWhite (O) wins!\n"
        );
    }

    #[test]
    fn test_run_game_pvp_scripted() {
        let mut game = game(5, GameMode::PvP { show_suggestions: false });
        // Black fills row 0, White row 1
        let script = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n1\n2\n0\n3\n1\n3\n0\n4\n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        run_game(&mut game, &mut input, &mut output).unwrap();
        assert!(matches!(
            game.game_over,
            Some(GameResult::Win { winner: Stone::Black, .. })
        ));
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Black (X) wins!\n"));
    }

    #[test]
    fn test_run_game_stops_on_eof() {
        let mut game = game(5, GameMode::default());
        let mut input = Cursor::new("2\n2\n");
        let mut output = Vec::new();

        run_game(&mut game, &mut input, &mut output).unwrap();
        // Human move, AI reply, then input runs out
        assert_eq!(game.move_history.len(), 2);
        assert!(!game.is_over());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("AI is thinking (O)..."));
        assert!(text.contains("Input closed"));
    }

    #[test]
    fn test_run_game_eve() {
        let mut game = game(5, GameMode::EvE);
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        run_game(&mut game, &mut input, &mut output).unwrap();
        assert!(game.is_over());
    }
}
