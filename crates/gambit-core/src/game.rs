//! The rules engine: move legality, execution, and derived game state.
//!
//! Validation is two-phase. [`Game::is_legal_move`] checks piece-shape
//! legality without touching the board; [`Game::is_valid_move`] then
//! replays the move on a scratch clone of the engine, square by square
//! along the travel path, to confirm the mover's king is never left in
//! check. Knights jump straight to the destination.

use tracing::debug;

use crate::board::{Board, PrettyBoard};
use crate::color::Color;
use crate::error::{BoardError, GameError};
use crate::moveset::{COMPASS, KING_CASTLE_DELTAS, KNIGHT_JUMPS, pawn_deltas, slider_directions};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::Player;
use crate::square::{Coord, Square};
use crate::verdict::{GameState, MoveVerdict};

/// Whether a move execution is for real or part of a check probe.
///
/// Simulated moves skip the derived bookkeeping (move counters and the
/// en passant target); the probe clone is discarded afterwards anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveMode {
    Commit,
    Simulate,
}

/// A full game of chess: board, players, and derived rule state.
///
/// Cloning a game is a deep copy; check probing relies on mutating a
/// clone without disturbing the original.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Indexed by [`Color::index`].
    players: [Player; Color::COUNT],
    current: Color,
    /// Square skipped by the most recent double pawn advance, if any.
    en_passant: Option<Square>,
    /// Cached king squares, indexed by [`Color::index`].
    kings: [Option<Square>; Color::COUNT],
    state: GameState,
}

impl Game {
    /// Create a game with an empty board between two players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchingColors`] if both players were
    /// assigned the same color.
    pub fn new(player_a: Player, player_b: Player) -> Result<Game, GameError> {
        if player_a.color() == player_b.color() {
            return Err(GameError::MatchingColors {
                color: player_a.color(),
            });
        }

        let mut players = [player_a, player_b];
        if players[0].color() == Color::Black {
            players.swap(0, 1);
        }

        Ok(Game {
            board: Board::empty(),
            players,
            current: Color::White,
            en_passant: None,
            kings: [None; Color::COUNT],
            state: GameState::Normal,
        })
    }

    /// Reset the board to the standard 32-piece starting layout.
    ///
    /// Records both kings' squares and clears the en passant target.
    pub fn setup_default_board(&mut self) {
        self.board = Board::standard_layout();
        self.en_passant = None;
        self.kings = [None; Color::COUNT];
        for (sq, piece) in self.board.pieces() {
            if piece.kind() == PieceKind::King {
                self.kings[piece.color().index()] = Some(sq);
            }
        }
        self.state = GameState::Normal;
    }

    /// Place a fresh piece of the given kind and color.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the
    /// board and [`BoardError::Occupied`] if the square holds a piece.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        at: Coord,
    ) -> Result<(), BoardError> {
        let sq = Self::square_at(at)?;
        self.board.place(sq, Piece::new(kind, color))?;
        if kind == PieceKind::King {
            self.kings[color.index()] = Some(sq);
        }
        Ok(())
    }

    /// Return a copy of the piece at the given coordinate, or `None` if
    /// the square is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board.
    pub fn get_location(&self, at: Coord) -> Result<Option<Piece>, BoardError> {
        let sq = Self::square_at(at)?;
        Ok(self.board.piece_at(sq))
    }

    /// Remove whatever piece sits at the given coordinate.
    ///
    /// Removing from an empty square is a deliberate no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board.
    pub fn remove_piece(&mut self, at: Coord) -> Result<(), BoardError> {
        let sq = Self::square_at(at)?;
        if let Some(piece) = self.board.clear(sq)
            && piece.kind() == PieceKind::King
            && self.kings[piece.color().index()] == Some(sq)
        {
            self.kings[piece.color().index()] = None;
        }
        Ok(())
    }

    /// Return the underlying board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return a pretty-printable view of the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        self.board.pretty()
    }

    /// Return the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Return the player commanding the given color.
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Return the color whose turn it is.
    #[inline]
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Return the cached game state for the side to move.
    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Return the en passant target square, if one is live.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the cached king square for the given color.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Hand the turn to the other player and refresh the game state.
    pub fn swap_current_player(&mut self) {
        self.current = self.current.flip();
        self.update_game_state();
        debug!(side = %self.current, state = %self.state, "turn passed");
    }

    /// Phase 1: is the move legal by piece shape and path, ignoring check?
    pub fn is_legal_move(&self, start: Coord, end: Coord) -> MoveVerdict {
        let (Some(s), Some(e)) = (Square::from_coord(start), Square::from_coord(end)) else {
            return MoveVerdict::OutOfBounds;
        };
        self.legal_move(s, e)
    }

    /// Phase 2: phase 1 plus the self-check probe.
    pub fn is_valid_move(&self, start: Coord, end: Coord) -> MoveVerdict {
        let (Some(s), Some(e)) = (Square::from_coord(start), Square::from_coord(end)) else {
            return MoveVerdict::OutOfBounds;
        };
        self.valid_move(s, e)
    }

    /// Execute a move that has already been validated.
    ///
    /// Handles en passant captures, castling rook relocation, move
    /// counters, the en passant target, and the king-square cache, then
    /// refreshes the game state. Returns the captured piece and the
    /// square it was taken from, if any.
    ///
    /// # Errors
    ///
    /// The bounds and occupancy of `start` are re-checked defensively;
    /// a failure here is a caller bug, not a rule rejection.
    pub fn play_move(
        &mut self,
        start: Coord,
        end: Coord,
    ) -> Result<Option<(Piece, Square)>, BoardError> {
        let s = Self::square_at(start)?;
        let e = Self::square_at(end)?;
        let captured = self.apply_move(s, e, MoveMode::Commit)?;
        debug!(from = %s, to = %e, capture = captured.is_some(), "move played");
        self.update_game_state();
        Ok(captured)
    }

    /// Is the side to move currently in check?
    pub fn is_in_check(&self) -> bool {
        self.in_check(self.current)
    }

    /// Is the side to move checkmated?
    pub fn is_in_checkmate(&self) -> bool {
        self.in_check(self.current) && !self.has_any_valid_move()
    }

    /// Is the side to move stalemated?
    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check(self.current) && !self.has_any_valid_move()
    }

    /// Recompute the cached game state for the side to move.
    ///
    /// Checkmate is tested before check since it implies it.
    pub fn update_game_state(&mut self) {
        let checked = self.in_check(self.current);
        let movable = self.has_any_valid_move();
        self.state = match (checked, movable) {
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (false, true) => GameState::Normal,
        };
    }

    fn square_at(at: Coord) -> Result<Square, BoardError> {
        Square::from_coord(at).ok_or(BoardError::OutOfBounds {
            rank: at.0,
            file: at.1,
        })
    }

    fn legal_move(&self, start: Square, end: Square) -> MoveVerdict {
        let Some(piece) = self.board.piece_at(start) else {
            return MoveVerdict::NoPiece;
        };

        // Own piece on the destination blocks everything, including the
        // degenerate start == end move.
        if let Some(target) = self.board.piece_at(end)
            && target.color() == piece.color()
        {
            return MoveVerdict::Blocked;
        }

        if piece.color() != self.current {
            return MoveVerdict::WrongPlayer;
        }

        let rank_delta = end.rank() as i8 - start.rank() as i8;
        let file_delta = end.file() as i8 - start.file() as i8;

        match piece.kind() {
            PieceKind::Pawn => self.legal_pawn_move(piece, start, end, rank_delta, file_delta),
            PieceKind::Knight => {
                if KNIGHT_JUMPS.contains(&(rank_delta, file_delta)) {
                    MoveVerdict::Valid
                } else {
                    MoveVerdict::Illegal
                }
            }
            PieceKind::King => self.legal_king_move(piece, start, rank_delta, file_delta),
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                self.legal_slider_move(piece, start, end, rank_delta, file_delta)
            }
        }
    }

    fn legal_pawn_move(
        &self,
        pawn: Piece,
        start: Square,
        end: Square,
        rank_delta: i8,
        file_delta: i8,
    ) -> MoveVerdict {
        let direction = pawn.color().pawn_direction();
        if rank_delta.signum() != direction {
            return MoveVerdict::Illegal;
        }

        if file_delta == 0 && rank_delta == direction {
            // Single advance onto an empty square.
            if self.board.is_occupied(end) {
                MoveVerdict::Blocked
            } else {
                MoveVerdict::Valid
            }
        } else if file_delta == 0 && rank_delta == 2 * direction {
            // Double advance: first move only, both squares clear.
            if pawn.has_moved() {
                return MoveVerdict::Illegal;
            }
            let blocked = start
                .offset(direction, 0)
                .is_some_and(|mid| self.board.is_occupied(mid))
                || self.board.is_occupied(end);
            if blocked {
                MoveVerdict::Blocked
            } else {
                MoveVerdict::Valid
            }
        } else if file_delta.abs() == 1 && rank_delta == direction {
            // Diagonal capture, ordinary or en passant. An own piece on
            // the destination was already rejected.
            if self.board.is_occupied(end) || self.en_passant == Some(end) {
                MoveVerdict::Valid
            } else {
                MoveVerdict::Illegal
            }
        } else {
            MoveVerdict::Illegal
        }
    }

    fn legal_king_move(
        &self,
        king: Piece,
        start: Square,
        rank_delta: i8,
        file_delta: i8,
    ) -> MoveVerdict {
        if COMPASS.contains(&(rank_delta, file_delta)) {
            return MoveVerdict::Valid;
        }
        if !KING_CASTLE_DELTAS.contains(&(rank_delta, file_delta)) {
            return MoveVerdict::Illegal;
        }

        // Castling: untouched king and rook, clear corridor, not while
        // in check. Passing through an attacked square is caught by the
        // stepwise self-check probe in phase 2.
        if king.has_moved() || self.in_check(king.color()) {
            return MoveVerdict::Illegal;
        }

        let corner_file: u8 = if file_delta > 0 { 7 } else { 0 };
        let corner = Square::at(start.rank(), corner_file);
        let Some(rook) = self.board.piece_at(corner) else {
            return MoveVerdict::Illegal;
        };
        if rook.kind() != PieceKind::Rook || rook.color() != king.color() || rook.has_moved() {
            return MoveVerdict::Illegal;
        }

        let step = file_delta.signum();
        let mut file = start.file() as i8 + step;
        while file != corner_file as i8 {
            if self.board.is_occupied(Square::at(start.rank(), file as u8)) {
                return MoveVerdict::Blocked;
            }
            file += step;
        }

        MoveVerdict::Valid
    }

    fn legal_slider_move(
        &self,
        piece: Piece,
        start: Square,
        end: Square,
        rank_delta: i8,
        file_delta: i8,
    ) -> MoveVerdict {
        // Reduce the delta to a unit direction. Anything that does not
        // divide evenly is not a straight or diagonal line.
        let span = rank_delta.abs().max(file_delta.abs());
        if rank_delta % span != 0 || file_delta % span != 0 {
            return MoveVerdict::Illegal;
        }
        let unit = (rank_delta / span, file_delta / span);
        if !slider_directions(piece.kind()).contains(&unit) {
            return MoveVerdict::Illegal;
        }

        let mut step = start.offset(unit.0, unit.1);
        while let Some(sq) = step {
            if sq == end {
                break;
            }
            if self.board.is_occupied(sq) {
                return MoveVerdict::Blocked;
            }
            step = sq.offset(unit.0, unit.1);
        }

        MoveVerdict::Valid
    }

    fn valid_move(&self, start: Square, end: Square) -> MoveVerdict {
        let verdict = self.legal_move(start, end);
        if !verdict.is_valid() {
            return verdict;
        }
        if self.leaves_king_exposed(start, end) {
            MoveVerdict::SelfCheck
        } else {
            MoveVerdict::Valid
        }
    }

    /// Probe whether playing `start -> end` would leave the mover's own
    /// king in check at any square along the travel path.
    fn leaves_king_exposed(&self, start: Square, end: Square) -> bool {
        let Some(piece) = self.board.piece_at(start) else {
            return false;
        };

        let rank_delta = end.rank() as i8 - start.rank() as i8;
        let file_delta = end.file() as i8 - start.file() as i8;

        let stops: Vec<Square> = if piece.kind() == PieceKind::Knight {
            vec![end]
        } else {
            let span = rank_delta.abs().max(file_delta.abs());
            let unit = (rank_delta / span, file_delta / span);
            (1..=span)
                .filter_map(|k| start.offset(unit.0 * k, unit.1 * k))
                .collect()
        };

        for stop in stops {
            let mut probe = self.clone();
            if probe.apply_move(start, stop, MoveMode::Simulate).is_ok()
                && probe.in_check(piece.color())
            {
                return true;
            }
        }
        false
    }

    fn apply_move(
        &mut self,
        start: Square,
        end: Square,
        mode: MoveMode,
    ) -> Result<Option<(Piece, Square)>, BoardError> {
        let mut piece = self
            .board
            .clear(start)
            .ok_or(BoardError::Vacant { square: start })?;

        // En passant takes the pawn behind the target square; every
        // other capture sits on the destination itself.
        let en_passant_capture = piece.kind() == PieceKind::Pawn
            && start.file() != end.file()
            && !self.board.is_occupied(end)
            && self.en_passant == Some(end);
        let captured = if en_passant_capture {
            let direction = piece.color().pawn_direction();
            end.offset(-direction, 0)
                .and_then(|behind| self.board.clear(behind).map(|taken| (taken, behind)))
        } else {
            self.board.clear(end).map(|taken| (taken, end))
        };

        if mode == MoveMode::Commit {
            piece.record_move();
        }

        // Castling drags the rook to the inside of the king's new square.
        let file_delta = end.file() as i8 - start.file() as i8;
        if piece.kind() == PieceKind::King && file_delta.abs() == 2 {
            let (corner_file, inner_step) = if file_delta > 0 { (7u8, -1i8) } else { (0u8, 1i8) };
            let corner = Square::at(start.rank(), corner_file);
            if let Some(mut rook) = self.board.clear(corner) {
                if mode == MoveMode::Commit {
                    rook.record_move();
                }
                let inner = Square::at(end.rank(), (end.file() as i8 + inner_step) as u8);
                self.board.place(inner, rook)?;
            }
        }

        self.board.place(end, piece)?;

        if mode == MoveMode::Commit {
            self.en_passant = if piece.kind() == PieceKind::Pawn
                && (end.rank() as i8 - start.rank() as i8).abs() == 2
            {
                start.offset(piece.color().pawn_direction(), 0)
            } else {
                None
            };
        }

        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(end);
        }

        Ok(captured)
    }

    fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.kings[color.index()] else {
            return false;
        };
        self.square_attacked(king, color.flip())
    }

    /// Ray scan: walk each compass direction out from `target` to the
    /// first piece; then probe the eight knight squares.
    fn square_attacked(&self, target: Square, by: Color) -> bool {
        for &(rank_dir, file_dir) in &COMPASS {
            let mut next = target.offset(rank_dir, file_dir);
            let mut distance = 1;
            while let Some(sq) = next {
                if let Some(piece) = self.board.piece_at(sq) {
                    if piece.color() == by
                        && Self::threatens(piece, distance, (-rank_dir, -file_dir))
                    {
                        return true;
                    }
                    break;
                }
                next = sq.offset(rank_dir, file_dir);
                distance += 1;
            }
        }

        for &(rank_delta, file_delta) in &KNIGHT_JUMPS {
            if let Some(sq) = target.offset(rank_delta, file_delta)
                && let Some(piece) = self.board.piece_at(sq)
                && piece.color() == by
                && piece.kind() == PieceKind::Knight
            {
                return true;
            }
        }

        false
    }

    /// Can `piece`, found as the first piece on a ray, capture back
    /// along it? `toward` is the unit step from the piece to the target
    /// at `distance` squares away; the ray is clear in between.
    fn threatens(piece: Piece, distance: i8, toward: (i8, i8)) -> bool {
        match piece.kind() {
            PieceKind::King => distance == 1,
            PieceKind::Pawn => {
                distance == 1 && toward.0 == piece.color().pawn_direction() && toward.1 != 0
            }
            PieceKind::Rook => toward.0 == 0 || toward.1 == 0,
            PieceKind::Bishop => toward.0 != 0 && toward.1 != 0,
            PieceKind::Queen => true,
            PieceKind::Knight => false,
        }
    }

    fn has_any_valid_move(&self) -> bool {
        for (from, piece) in self.board.pieces() {
            if piece.color() != self.current {
                continue;
            }
            for to in self.candidate_destinations(from, piece) {
                if self.valid_move(from, to).is_valid() {
                    return true;
                }
            }
        }
        false
    }

    /// Every in-bounds destination the piece's moveset can name: one
    /// step for restricted pieces, every multiple of a direction for
    /// sliders.
    fn candidate_destinations(&self, from: Square, piece: Piece) -> Vec<Square> {
        let mut out = Vec::new();
        match piece.kind() {
            PieceKind::Pawn => {
                for (dr, df) in pawn_deltas(piece.color().pawn_direction()) {
                    out.extend(from.offset(dr, df));
                }
            }
            PieceKind::Knight => {
                for &(dr, df) in &KNIGHT_JUMPS {
                    out.extend(from.offset(dr, df));
                }
            }
            PieceKind::King => {
                for &(dr, df) in COMPASS.iter().chain(KING_CASTLE_DELTAS.iter()) {
                    out.extend(from.offset(dr, df));
                }
            }
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                for &(dr, df) in slider_directions(piece.kind()) {
                    let mut next = from.offset(dr, df);
                    while let Some(sq) = next {
                        out.push(sq);
                        next = sq.offset(dr, df);
                    }
                }
            }
        }
        out
    }
}
