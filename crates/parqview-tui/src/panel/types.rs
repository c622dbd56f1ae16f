use std::fmt;

use parqview_core::PeekError;

pub type PanelId = u32;

/// Logical grid coordinates, not cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn manhattan_distance(self, other: Position) -> u64 {
        (i64::from(self.column) - i64::from(other.column)).unsigned_abs()
            + (i64::from(self.row) - i64::from(other.row)).unsigned_abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Unit vector in grid space; rows grow downwards.
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Whether `target` lies strictly on this side of `from`. Only the axis
    /// the direction moves along is compared.
    pub fn admits(self, from: Position, target: Position) -> bool {
        match self {
            Direction::Right => target.column > from.column,
            Direction::Left => target.column < from.column,
            Direction::Up => target.row < from.row,
            Direction::Down => target.row > from.row,
        }
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = PeekError;

    fn try_from(vector: (i32, i32)) -> Result<Self, Self::Error> {
        Direction::ALL
            .into_iter()
            .find(|d| d.vector() == vector)
            .ok_or_else(|| PeekError::InvalidDirection(format!("{vector:?}")))
    }
}

/// What a panel displays. The closed set of widgets the viewer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    FilePicker,
    Table,
    TextInput,
}

impl PanelKind {
    pub fn title(self) -> &'static str {
        match self {
            PanelKind::FilePicker => "Files",
            PanelKind::Table => "Preview",
            PanelKind::TextInput => "Input",
        }
    }
}
