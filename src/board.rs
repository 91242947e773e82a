use crate::location::{Location, Move};
use crate::piece::{Color, Piece, PieceKind};
use std::fmt::Formatter;
use std::ops::{Index, IndexMut};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
}

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    pub fn new() -> Self {
        Self { pieces: vec![None; (Self::WIDTH * Self::HEIGHT) as usize] }
    }

    pub fn opening() -> Self {
        use PieceKind::*;

        const BACK_RANK: [Option<PieceKind>; 9] = [
            Some(Chariot),
            Some(Elephant),
            Some(Horse),
            Some(Guard),
            None,
            Some(Guard),
            Some(Elephant),
            Some(Horse),
            Some(Chariot),
        ];

        let mut board = Self::new();
        for (color, back) in [(Color::Red, 0), (Color::Blue, Self::HEIGHT - 1)] {
            let forward = color.forward();
            for (x, kind) in BACK_RANK.iter().enumerate() {
                if let Some(kind) = *kind {
                    board.place(x as i8, back, kind, color);
                }
            }
            board.place(4, back + forward, General, color);
            for x in [1, 7] {
                board.place(x, back + 2 * forward, Cannon, color);
            }
            for x in [0, 2, 4, 6, 8] {
                board.place(x, back + 3 * forward, Soldier, color);
            }
        }
        board
    }

    fn place(&mut self, x: i8, y: i8, kind: PieceKind, color: Color) {
        let location = Location::from_xy(x, y).unwrap();
        self[location] = Some(Piece::from_kind(kind, color));
    }

    /// Moves the piece at `mv.from` onto `mv.to` and returns the captured
    /// piece, if any. The inverse of `undo`.
    pub fn play(&mut self, mv: Move) -> Option<Piece> {
        let piece = self[mv.from].take();
        std::mem::replace(&mut self[mv.to], piece)
    }

    pub fn undo(&mut self, mv: Move, capture: Option<Piece>) {
        let piece = std::mem::replace(&mut self[mv.to], capture);
        self[mv.from] = piece;
    }

    pub fn find_general(&self, color: Color) -> Option<Location> {
        self.iter_color(color)
            .find(|&location| self[location].map(|piece| piece.kind()) == Some(PieceKind::General))
    }

    fn iter_color(&self, color: Color) -> impl Iterator<Item = Location> + '_ {
        (0..self.pieces.len())
            .filter_map(Location::from_index)
            .filter(move |&location| self[location].is_some_and(|piece| piece.color() == color))
    }

    fn open(&self, to: Location, color: Color) -> bool {
        self[to].map_or(true, |piece| piece.color() != color)
    }

    /// Every cell the piece at `origin` could move to by its own movement
    /// rule, captures included, friendly-occupied cells excluded. Ignores
    /// whose turn it is and whether the move would expose a General.
    pub fn candidate_moves(&self, origin: Location) -> Vec<Location> {
        let piece = match self[origin] {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        let color = piece.color();
        let mut moves = Vec::new();

        match piece.kind() {
            PieceKind::General | PieceKind::Guard => self.palace_step_moves(origin, color, &mut moves),
            PieceKind::Horse => self.horse_moves(origin, color, &mut moves),
            PieceKind::Elephant => self.elephant_moves(origin, color, &mut moves),
            PieceKind::Chariot => self.chariot_moves(origin, color, &mut moves),
            PieceKind::Cannon => self.cannon_moves(origin, color, &mut moves),
            PieceKind::Soldier => self.soldier_moves(origin, color, &mut moves),
        }

        moves
    }

    // General and Guard share one rule: a single step that stays inside
    // the palace, diagonal steps only along the palace diagonal lines.
    fn palace_step_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        let diagonal = origin.on_palace_diagonal();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if dx != 0 && dy != 0 && !diagonal {
                    continue;
                }
                if let Some(to) = origin.shift_xy(dx, dy) {
                    if to.in_palace() && self.open(to, color) {
                        moves.push(to);
                    }
                }
            }
        }
    }

    fn horse_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        for (dx, dy) in ORTHOGONALS {
            match origin.shift_xy(dx, dy) {
                Some(step) if self[step].is_none() => {}
                _ => continue,
            }
            for side in [-1, 1] {
                let (fx, fy) = if dx == 0 { (side, 2 * dy) } else { (2 * dx, side) };
                if let Some(to) = origin.shift_xy(fx, fy) {
                    if self.open(to, color) {
                        moves.push(to);
                    }
                }
            }
        }
    }

    fn elephant_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        for (dx, dy) in ORTHOGONALS {
            let step = match origin.shift_xy(dx, dy) {
                Some(step) if self[step].is_none() => step,
                _ => continue,
            };
            for side in [-1, 1] {
                let (ex, ey) = if dx == 0 { (side, dy) } else { (dx, side) };
                let middle = match step.shift_xy(ex, ey) {
                    Some(middle) if self[middle].is_none() => middle,
                    _ => continue,
                };
                if let Some(to) = middle.shift_xy(ex, ey) {
                    if self.open(to, color) {
                        moves.push(to);
                    }
                }
            }
        }
    }

    fn chariot_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        for direction in ORTHOGONALS {
            self.slide(origin, color, direction, false, moves);
        }
        if origin.on_palace_diagonal() {
            for direction in DIAGONALS {
                self.slide(origin, color, direction, true, moves);
            }
        }
    }

    fn slide(&self, origin: Location, color: Color, (dx, dy): (i8, i8), palace: bool, moves: &mut Vec<Location>) {
        let mut current = origin;
        while let Some(next) = current.shift_xy(dx, dy) {
            if palace && !next.on_palace_diagonal() {
                break;
            }
            match self[next] {
                Some(piece) => {
                    if piece.color() != color {
                        moves.push(next);
                    }
                    break;
                }
                None => moves.push(next),
            }
            current = next;
        }
    }

    fn cannon_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        for direction in ORTHOGONALS {
            self.cannon_slide(origin, color, direction, false, moves);
        }
        if origin.on_palace_diagonal() {
            for direction in DIAGONALS {
                self.cannon_slide(origin, color, direction, true, moves);
            }
        }
    }

    // A Cannon travels over exactly one screen piece; it can neither jump
    // over nor capture another Cannon.
    fn cannon_slide(&self, origin: Location, color: Color, (dx, dy): (i8, i8), palace: bool, moves: &mut Vec<Location>) {
        let mut screened = false;
        let mut current = origin;
        while let Some(next) = current.shift_xy(dx, dy) {
            if palace && !next.on_palace_diagonal() {
                break;
            }
            match self[next] {
                Some(piece) if !screened => {
                    if piece.kind() == PieceKind::Cannon {
                        break;
                    }
                    screened = true;
                }
                Some(piece) => {
                    if piece.color() != color && piece.kind() != PieceKind::Cannon {
                        moves.push(next);
                    }
                    break;
                }
                None => {
                    if screened {
                        moves.push(next);
                    }
                }
            }
            current = next;
        }
    }

    fn soldier_moves(&self, origin: Location, color: Color, moves: &mut Vec<Location>) {
        let forward = color.forward();
        for dx in [-1, 1] {
            if let Some(to) = origin.shift_x(dx) {
                if self.open(to, color) {
                    moves.push(to);
                }
            }
        }
        if let Some(to) = origin.shift_y(forward) {
            if self.open(to, color) {
                moves.push(to);
            }
        }
        if origin.on_palace_diagonal() {
            for dx in [-1, 1] {
                if let Some(to) = origin.shift_xy(dx, forward) {
                    if to.on_palace_diagonal() && self.open(to, color) {
                        moves.push(to);
                    }
                }
            }
        }
    }

    /// Whether any piece of `by` could move onto `target`.
    pub fn is_attacked(&self, target: Location, by: Color) -> bool {
        self.iter_color(by)
            .any(|from| self.candidate_moves(from).contains(&target))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_general(color) {
            Some(general) => self.is_attacked(general, color.opponent()),
            None => false,
        }
    }

    /// Full legality for one move of `color`, independent of whose turn it
    /// is: ownership, a pass only while not in check, the piece's own
    /// movement rule, and no self-check on the resulting board. Probes run
    /// on a scratch copy; the board itself is never touched.
    pub fn is_legal(&self, color: Color, mv: Move) -> bool {
        match self[mv.from] {
            Some(piece) if piece.color() == color => {}
            _ => return false,
        }
        if mv.from == mv.to {
            return !self.is_in_check(color);
        }
        if !self.candidate_moves(mv.from).contains(&mv.to) {
            return false;
        }
        let mut scratch = self.clone();
        scratch.play(mv);
        !scratch.is_in_check(color)
    }

    /// All legal piece moves for `color`. Passes are not enumerated; a
    /// pass never changes the board, so it can never answer a check.
    pub fn iter_legal_moves(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.iter_color(color)
            .flat_map(move |from| {
                self.candidate_moves(from)
                    .into_iter()
                    .map(move |to| Move { from, to })
            })
            .filter(move |&mv| {
                let mut scratch = self.clone();
                scratch.play(mv);
                !scratch.is_in_check(color)
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Location> for Board {
    type Output = Option<Piece>;
    fn index(&self, index: Location) -> &Self::Output {
        &self.pieces[index.index()]
    }
}

impl IndexMut<Location> for Board {
    fn index_mut(&mut self, index: Location) -> &mut Self::Output {
        &mut self.pieces[index.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for column in 'a'..='i' {
            write!(f, "  {column} ")?;
        }
        writeln!(f)?;

        for y in 0..Self::HEIGHT {
            write!(f, "{:>2}", y + 1)?;
            for x in 0..Self::WIDTH {
                let location = Location::from_xy(x, y).unwrap();
                match self[location] {
                    Some(piece) => write!(f, " {piece}")?,
                    None if location.in_palace() => write!(f, "  * ")?,
                    None => write!(f, "  . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
