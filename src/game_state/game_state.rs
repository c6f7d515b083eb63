//! Authoritative position state.
//!
//! `GameState` stores the 8x8 mailbox, side to move, castling rights, the
//! en-passant target, cached king squares and the undo stack used by the
//! make/undo workflow. The cached checkmate/stalemate flags are refreshed by
//! legal move generation.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_row, pawn_direction, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // [Color::index()]
    pub(crate) king_squares: [Square; 2],

    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,

    pub(crate) undo_stack: Vec<UndoState>,
}

impl GameState {
    /// The standard starting arrangement, White to move.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let back = back_row(color) as usize;
            let pawns = pawn_start_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board[back][col] = Some(Piece::new(color, *kind));
                board[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        Self {
            board,
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_square: None,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        }
    }

    /// Builds a position from raw parts, locating both kings.
    ///
    /// Fails unless exactly one king of each color is present, the side that
    /// just moved is not left in check, and any en-passant target sits
    /// directly in front of an enemy pawn that could have double-pushed.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
    ) -> ChessResult<Self> {
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for (row, cells) in board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(Piece {
                    color,
                    kind: PieceKind::King,
                }) = cell
                {
                    kings[color.index()].push(Square::new(row as u8, col as u8));
                }
            }
        }

        let [white, black] = kings;
        let king_squares = match (white.as_slice(), black.as_slice()) {
            ([white_king], [black_king]) => [*white_king, *black_king],
            (w, b) => {
                return Err(ChessError::InvalidPosition(format!(
                    "expected one king per side, found {} white and {} black",
                    w.len(),
                    b.len()
                )))
            }
        };

        let state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            king_squares,
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        };

        if let Some(target) = en_passant_square {
            state.check_en_passant_target(target)?;
        }
        if is_king_in_check(&state, side_to_move.opposite()) {
            return Err(ChessError::InvalidPosition(format!(
                "{:?} is to move but {:?} is in check",
                side_to_move,
                side_to_move.opposite()
            )));
        }

        Ok(state)
    }

    fn check_en_passant_target(&self, target: Square) -> ChessResult<()> {
        let pusher = self.side_to_move.opposite();
        let skipped_row = pawn_start_row(pusher) as i8 + pawn_direction(pusher);
        let pawn_row = target.row as i8 + pawn_direction(pusher);

        let pawn_behind = (0..8).contains(&pawn_row)
            && self.piece_at(Square::new(pawn_row as u8, target.col))
                == Some(Piece::new(pusher, PieceKind::Pawn));
        if target.row as i8 != skipped_row || self.piece_at(target).is_some() || !pawn_behind {
            return Err(ChessError::InvalidPosition(format!(
                "en-passant target {target:?} has no {pusher:?} pawn that just double-pushed"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, cell: Cell) {
        self.board[square.row as usize][square.col as usize] = cell;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// As of the most recent legal move generation.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// As of the most recent legal move generation.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    /// Iterates occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }
}
