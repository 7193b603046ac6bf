use std::fmt;
use thiserror::Error;

/// Occupancy of one board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Empty,
    Human,
    Computer,
}

impl Marker {
    pub fn symbol(&self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::Human => 'X',
            Marker::Computer => 'O',
        }
    }
}

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals (positions 1-9)
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Illegal placements are contract violations, unreachable through the
/// validated interactive path, so they surface as errors rather than
/// re-prompts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is out of range (valid: 1-9)")]
    OutOfRange(usize),
    #[error("position {0} is already occupied")]
    Occupied(usize),
    #[error("cannot place an empty marker")]
    EmptyMarker,
}

/// A 3x3 board: fixed mapping from positions 1-9 to markers, exactly one
/// marker per position at all times
#[derive(Debug, Clone)]
pub struct Board {
    squares: [Marker; 9],
}

impl Board {
    pub fn new() -> Self {
        Board {
            squares: [Marker::Empty; 9],
        }
    }

    pub fn marker_at(&self, position: usize) -> Result<Marker, BoardError> {
        if !(1..=9).contains(&position) {
            return Err(BoardError::OutOfRange(position));
        }
        Ok(self.squares[position - 1])
    }

    /// Place a non-empty marker on an open position
    pub fn place(&mut self, position: usize, marker: Marker) -> Result<(), BoardError> {
        if marker == Marker::Empty {
            return Err(BoardError::EmptyMarker);
        }
        let current = self.marker_at(position)?;
        if current != Marker::Empty {
            return Err(BoardError::Occupied(position));
        }
        self.squares[position - 1] = marker;
        Ok(())
    }

    pub fn is_open(&self, position: usize) -> bool {
        matches!(self.marker_at(position), Ok(Marker::Empty))
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        (1..=9).filter(|&position| self.is_open(position)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&marker| marker != Marker::Empty)
    }

    /// The marker holding a complete triple, if any
    pub fn winner(&self) -> Option<Marker> {
        for triple in WINNING_TRIPLES {
            let first = self.squares[triple[0] - 1];
            if first != Marker::Empty
                && triple.iter().all(|&position| self.squares[position - 1] == first)
            {
                return Some(first);
            }
        }
        None
    }

    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "  {}  |  {}  |  {}  ",
                self.squares[row * 3].symbol(),
                self.squares[row * 3 + 1].symbol(),
                self.squares[row * 3 + 2].symbol()
            )?;
            if row < 2 {
                writeln!(f, "-----+-----+-----")?;
            }
        }
        Ok(())
    }
}
