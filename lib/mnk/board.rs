use super::{Move, Square};
use crate::game::{Grid, Outcome, Rules, Side};
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// A square board for an [m,n,k-game].
///
/// Two sides take turns placing stones on empty squares, the first to get `k`
/// stones in a row, horizontally, vertically or diagonally, wins.
///
/// [m,n,k-game]: https://en.wikipedia.org/wiki/M,n,k-game
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    #[cfg_attr(test, strategy(1usize..=4))]
    size: usize,
    #[cfg_attr(test, strategy(1..=#size))]
    k: usize,
    #[cfg_attr(test, strategy(proptest::collection::vec(
        proptest::arbitrary::any::<Option<Side>>(),
        #size * #size
    )))]
    cells: Vec<Option<Side>>,
}

impl Default for Board {
    /// The board for tic-tac-toe.
    fn default() -> Self {
        Board::new(3, 3)
    }
}

impl Board {
    /// The largest supported board.
    pub const MAX_SIZE: usize = 26;

    /// An empty board with `size` squares along each side where `k` stones in a row win.
    pub fn new(size: usize, k: usize) -> Self {
        assert!((1..=Self::MAX_SIZE).contains(&size), "{size} ∉ [1, {}]", Self::MAX_SIZE);
        assert!((1..=size).contains(&k), "{k} ∉ [1, {size}]");

        Board {
            size,
            k,
            cells: vec![None; size * size],
        }
    }

    /// The number of stones in a row required to win.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The side occupying a [`Square`], if any.
    pub fn get(&self, sq: Square) -> Option<Side> {
        self.cells[self.index(sq)]
    }

    /// Whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over every [`Square`] in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Square::new(x, y)))
    }

    /// Whether `side` has `k` stones in a row.
    pub fn has_line(&self, side: Side) -> bool {
        const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        let (n, k) = (self.size as isize, self.k as isize);
        let within = |x: isize, y: isize| (0..n).contains(&x) && (0..n).contains(&y);

        self.squares().any(|sq| {
            let (x, y) = (sq.x() as isize, sq.y() as isize);
            DIRECTIONS.iter().any(|&(dx, dy)| {
                within(x + dx * (k - 1), y + dy * (k - 1))
                    && (0..k).all(|i| {
                        self.cell((x + dx * i) as usize, (y + dy * i) as usize) == Some(side)
                    })
            })
        })
    }

    fn index(&self, sq: Square) -> usize {
        assert!(sq.x() < self.size && sq.y() < self.size, "{sq} is off the board");
        sq.y() * self.size + sq.x()
    }

    fn is_decided(&self) -> bool {
        self.has_line(Side::Black) || self.has_line(Side::White)
    }
}

impl Grid for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, x: usize, y: usize) -> Option<Side> {
        self.get(Square::new(x, y))
    }
}

impl Rules for Board {
    type Move = Move;

    fn moves(&self, side: Side) -> Vec<Move> {
        if self.is_decided() {
            return Vec::new();
        }

        self.squares()
            .filter(|&sq| self.get(sq).is_none())
            .map(|sq| Move::Place(side, sq))
            .collect()
    }

    fn play(&mut self, m: &Move) {
        if let Move::Place(side, sq) = *m {
            let i = self.index(sq);
            debug_assert_eq!(self.cells[i], None, "{sq} is occupied");
            self.cells[i] = Some(side);
        }
    }

    fn undo(&mut self, m: &Move) {
        if let Move::Place(side, sq) = *m {
            let i = self.index(sq);
            debug_assert_eq!(self.cells[i], Some(side), "{sq} is not held by {side}");
            self.cells[i] = None;
        }
    }

    fn winner(&self, side: Side) -> Option<Outcome> {
        if self.has_line(side) {
            Some(Outcome::Win(side))
        } else if self.has_line(!side) {
            Some(Outcome::Win(!side))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    fn pass(side: Side) -> Move {
        Move::Pass(side)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }

            for cell in row {
                f.write_str(match cell {
                    Some(Side::Black) => "x",
                    Some(Side::White) => "o",
                    None => ".",
                })?;
            }
        }

        write!(f, " {}", self.k)
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected rows separated by `/` followed by the number of stones to win")]
    Format,
    #[display(fmt = "expected a square board of at most 26 rows")]
    Dimensions,
    #[display(fmt = "expected cells to be one of `x`, `o` or `.`")]
    Cell,
    #[display(fmt = "expected the number of stones to win to be at least 1 and fit in a row")]
    Stones,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, k) = s.trim().split_once(' ').ok_or(ParseBoardError::Format)?;
        let k: usize = k.trim().parse().map_err(|_| ParseBoardError::Format)?;

        let rows: Vec<&str> = rows.split('/').collect();
        let size = rows.len();
        if size > Self::MAX_SIZE || rows.iter().any(|r| r.chars().count() != size) {
            return Err(ParseBoardError::Dimensions);
        } else if !(1..=size).contains(&k) {
            return Err(ParseBoardError::Stones);
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| match c {
                'x' => Ok(Some(Side::Black)),
                'o' => Ok(Some(Side::White)),
                '.' => Ok(None),
                _ => Err(ParseBoardError::Cell),
            })
            .collect::<Result<_, _>>()?;

        Ok(Board { size, k, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_board_is_an_identity(b: Board) {
        assert_eq!(b.to_string().parse(), Ok(b));
    }

    #[proptest]
    fn new_board_is_empty(#[strategy(1usize..=Board::MAX_SIZE)] size: usize, s: Side) {
        let b = Board::new(size, size);
        assert_eq!(b.k(), size);
        assert_eq!(b.moves(s).len(), size * size);
        assert_eq!(b.winner(s), None);
    }

    #[proptest]
    #[should_panic]
    fn new_panics_if_k_does_not_fit(#[strategy(1usize..=8)] size: usize) {
        Board::new(size, size + 1);
    }

    #[proptest]
    #[should_panic]
    fn new_panics_if_board_is_too_large() {
        Board::new(Board::MAX_SIZE + 1, 3);
    }

    #[proptest]
    fn moves_place_stones_on_empty_squares(b: Board, s: Side) {
        for m in b.moves(s) {
            assert_eq!(m.side(), s);
            assert_eq!(m.square().map(|sq| b.get(sq)), Some(None));
        }
    }

    #[proptest]
    fn moves_follow_row_major_order(b: Board, s: Side) {
        let squares: Vec<_> = b.moves(s).iter().filter_map(Move::square).collect();
        let mut sorted = squares.clone();
        sorted.sort_by_key(|sq| (sq.y(), sq.x()));
        assert_eq!(squares, sorted);
    }

    #[proptest]
    fn there_are_no_moves_once_the_game_is_decided(
        #[filter(#b.has_line(Side::Black) || #b.has_line(Side::White))] b: Board,
        s: Side,
    ) {
        assert!(b.moves(s).is_empty());
    }

    #[proptest]
    fn undo_reverts_play(mut b: Board, s: Side, #[strategy(0usize..16)] n: usize) {
        let before = b.clone();
        let m = b.moves(s).get(n).copied().unwrap_or(Board::pass(s));
        b.play(&m);
        b.undo(&m);
        assert_eq!(b, before);
    }

    #[proptest]
    fn play_places_a_stone(mut b: Board, s: Side, #[strategy(0usize..16)] n: usize) {
        if let Some(m) = b.moves(s).get(n).copied() {
            b.play(&m);
            assert_eq!(m.square().and_then(|sq| b.get(sq)), Some(s));
        }
    }

    #[proptest]
    fn pass_leaves_the_board_untouched(mut b: Board, s: Side) {
        let before = b.clone();
        b.play(&Board::pass(s));
        assert_eq!(b, before);
    }

    #[proptest]
    fn winner_prefers_the_side_asking(s: Side, #[filter(#b.has_line(#s))] b: Board) {
        assert_eq!(b.winner(s), Some(Outcome::Win(s)));
    }

    #[proptest]
    fn lines_are_detected_in_every_direction() {
        for (s, side) in [
            ("xxx/oo./... 3", Side::Black),
            ("xo./xo./x.. 3", Side::Black),
            ("o.x/.ox/x.o 3", Side::White),
            ("..x/.xo/xo. 3", Side::Black),
        ] {
            let b: Board = s.parse()?;
            assert!(b.has_line(side), "{s}");
            assert!(!b.has_line(!side), "{s}");
            assert_eq!(b.winner(!side), Some(Outcome::Win(side)));
        }
    }

    #[proptest]
    fn full_board_without_lines_is_a_draw(s: Side) {
        let b: Board = "xox/xoo/oxx 3".parse()?;
        assert_eq!(b.winner(s), Some(Outcome::Draw));
    }

    #[proptest]
    fn board_is_displayed_row_by_row() {
        let mut b = Board::new(3, 3);
        b.play(&Move::Place(Side::Black, Square::new(1, 0)));
        b.play(&Move::Place(Side::White, Square::new(2, 2)));
        assert_eq!(b.to_string(), ".x./.../..o 3");
    }

    #[proptest]
    fn grid_exposes_cells_by_coordinates() {
        let b: Board = ".x./.../..o 2".parse()?;
        assert_eq!(b.size(), 3);
        assert_eq!(b.k(), 2);
        assert_eq!(b.cell(1, 0), Some(Side::Black));
        assert_eq!(b.cell(2, 2), Some(Side::White));
        assert_eq!(b.cell(0, 0), None);
    }

    #[proptest]
    fn parsing_board_fails_if_malformed() {
        assert_eq!("x../...".parse::<Board>(), Err(ParseBoardError::Format));
        assert_eq!("x../... 3".parse::<Board>(), Err(ParseBoardError::Dimensions));
        assert_eq!("x../.../... 4".parse::<Board>(), Err(ParseBoardError::Stones));
        assert_eq!("x../.../... 0".parse::<Board>(), Err(ParseBoardError::Stones));
        assert_eq!("x../.?./... 3".parse::<Board>(), Err(ParseBoardError::Cell));
    }
}
