use crate::game::{Outcome, Rules, Side};

/// Whether playing `m` wins the game on the spot for `side`.
fn wins<R: Rules>(pos: &mut R, side: Side, m: &R::Move) -> bool {
    pos.apply(m).winner(side) == Some(Outcome::Win(side))
}

/// The moves by which `side` wins the game on the spot, in the order they are generated.
pub fn threats<R: Rules>(pos: &mut R, side: Side) -> Vec<R::Move> {
    let mut threats = pos.moves(side);
    threats.retain(|m| wins(pos, side, m));
    threats
}

/// Finds the first of `moves` by which `side` wins the game on the spot.
pub fn winning_move<R: Rules>(pos: &mut R, side: Side, moves: &[R::Move]) -> Option<R::Move> {
    moves.iter().find(|m| wins(pos, side, m)).cloned()
}

/// Finds the first of `moves` that keeps the opponent of `side` from winning on the spot.
///
/// Every winning reply available to the opponent is considered in turn; the
/// first move after which that particular reply is either no longer legal or
/// no longer winning is returned. Other replies the move might leave open, or
/// create, are not considered.
pub fn defusing_move<R: Rules>(pos: &mut R, side: Side, moves: &[R::Move]) -> Option<R::Move> {
    let opponent = !side;

    for threat in threats(pos, opponent) {
        for m in moves {
            let mut next = pos.apply(m);
            if !next.moves(opponent).contains(&threat) || !wins(&mut *next, opponent, &threat) {
                return Some(m.clone());
            }
        }
    }

    None
}
