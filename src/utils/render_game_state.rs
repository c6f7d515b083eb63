//! Text renderings of the board.
//!
//! `render_snapshot` is the plain serialization used by tests: 8 lines of 8
//! two-character cell codes (`wP`, `bK`, two spaces for empty), row 0 first.
//! `render_game_state` is a framed Unicode view for terminal output.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_row, king_home, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_snapshot(game_state: &GameState) -> String {
    game_state
        .board()
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| cell.map(Piece::code).unwrap_or_else(|| "  ".to_owned()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads a snapshot back into a position with White to move and no
/// en-passant target. A castling right is granted when the king and that
/// rook both stand on their home squares.
pub fn parse_snapshot(snapshot: &str) -> ChessResult<GameState> {
    let lines: Vec<&str> = snapshot.lines().collect();
    if lines.len() != 8 {
        return Err(ChessError::InvalidSnapshot(format!(
            "expected 8 rows, found {}",
            lines.len()
        )));
    }

    let mut board: Board = [[None; 8]; 8];
    for (row, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != 16 {
            return Err(ChessError::InvalidSnapshot(format!(
                "row {row} must hold 8 two-character cells"
            )));
        }
        for (col, code) in chars.chunks(2).enumerate() {
            board[row][col] = parse_cell(code[0], code[1])
                .ok_or_else(|| ChessError::InvalidSnapshot(format!("bad cell at row {row}, col {col}")))?;
        }
    }

    let home_rights = |color: Color, rook_col: u8| {
        let king = Piece::new(color, PieceKind::King);
        let rook = Piece::new(color, PieceKind::Rook);
        let home = king_home(color);
        board[home.row as usize][home.col as usize] == Some(king)
            && board[back_row(color) as usize][rook_col as usize] == Some(rook)
    };
    let castling_rights = CastlingRights {
        white_kingside: home_rights(Color::White, KINGSIDE_ROOK_COL),
        white_queenside: home_rights(Color::White, QUEENSIDE_ROOK_COL),
        black_kingside: home_rights(Color::Black, KINGSIDE_ROOK_COL),
        black_queenside: home_rights(Color::Black, QUEENSIDE_ROOK_COL),
    };

    GameState::from_parts(board, Color::White, castling_rights, None)
}

fn parse_cell(color_code: char, kind_code: char) -> Option<Cell> {
    let color = match color_code {
        ' ' if kind_code == ' ' => return Some(None),
        'w' => Color::White,
        'b' => Color::Black,
        _ => return None,
    };
    if !kind_code.is_ascii_uppercase() {
        return None;
    }
    PieceKind::from_code(kind_code).map(|kind| Some(Piece::new(color, kind)))
}

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, cells) in game_state.board().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
