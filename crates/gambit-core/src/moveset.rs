//! Static per-kind move offsets: the piece catalog.
//!
//! Offsets are (rank-delta, file-delta) pairs. Restricted pieces use
//! them literally; sliders treat them as unit directions.

use crate::piece_kind::PieceKind;

/// The four orthogonal unit directions (rook lines).
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal unit directions (bishop lines).
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight unit directions: queen lines, king steps, and the rays
/// scanned by check detection.
pub const COMPASS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight fixed knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The two castling deltas for a king: two files toward either rook.
pub const KING_CASTLE_DELTAS: [(i8, i8); 2] = [(0, 2), (0, -2)];

/// Unit directions an unrestricted (sliding) piece may travel along.
///
/// Returns an empty slice for restricted kinds.
pub const fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen => &COMPASS,
        _ => &[],
    }
}

/// The four pawn offsets for a pawn advancing in `direction`:
/// single advance, double advance, and the two diagonal captures.
pub const fn pawn_deltas(direction: i8) -> [(i8, i8); 4] {
    [
        (direction, 0),
        (2 * direction, 0),
        (direction, 1),
        (direction, -1),
    ]
}

#[cfg(test)]
mod tests {
    use super::{
        COMPASS, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL, pawn_deltas, slider_directions,
    };
    use crate::piece_kind::PieceKind;

    #[test]
    fn compass_covers_orthogonal_and_diagonal() {
        for dir in ORTHOGONAL.iter().chain(DIAGONAL.iter()) {
            assert!(COMPASS.contains(dir));
        }
        assert_eq!(COMPASS.len(), 8);
    }

    #[test]
    fn knight_jumps_are_l_shaped() {
        for &(dr, df) in &KNIGHT_JUMPS {
            assert_eq!(dr.abs() * df.abs(), 2, "({dr}, {df}) is not an L");
        }
    }

    #[test]
    fn slider_directions_match_kind() {
        assert_eq!(slider_directions(PieceKind::Rook).len(), 4);
        assert_eq!(slider_directions(PieceKind::Bishop).len(), 4);
        assert_eq!(slider_directions(PieceKind::Queen).len(), 8);
        assert!(slider_directions(PieceKind::Pawn).is_empty());
        assert!(slider_directions(PieceKind::Knight).is_empty());
        assert!(slider_directions(PieceKind::King).is_empty());
    }

    #[test]
    fn pawn_deltas_follow_direction() {
        assert_eq!(pawn_deltas(1), [(1, 0), (2, 0), (1, 1), (1, -1)]);
        assert_eq!(pawn_deltas(-1), [(-1, 0), (-2, 0), (-1, 1), (-1, -1)]);
    }
}
