// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Grid cells.
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A single cell of the board. The coordinates are fixed at construction; only the `hit`
/// and `occupied` flags change afterwards.
///
/// Equality and hashing only look at the coordinates, so a freshly constructed
/// [`Position`] compares equal to a ship's cell at the same place no matter what has
/// happened to that cell.
#[derive(Debug, Copy, Clone)]
pub struct Position {
    row: i32,
    column: i32,
    hit: bool,
    occupied: bool,
}

impl Position {
    /// Construct an unhit, unoccupied [`Position`] at the given `row` and `column`.
    pub fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            hit: false,
            occupied: false,
        }
    }

    /// Row of this cell.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column of this cell.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Whether this cell has been shot.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Mark this cell as shot.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// Whether a ship sits on this cell.
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Mark this cell as holding a ship.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Returns true if `other` is this cell or one of its eight surrounding cells.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let dr = (i64::from(self.row) - i64::from(other.row)).abs();
        let dc = (i64::from(self.column) - i64::from(other.column)).abs();
        dr.max(dc) <= 1
    }

    /// Returns true if both coordinates lie in `0..=size`.
    pub fn within(&self, size: i32) -> bool {
        (0..=size).contains(&self.row) && (0..=size).contains(&self.column)
    }

    /// This position moved by `dr` rows and `dc` columns, with fresh flags. `None` if either
    /// coordinate would leave the `i32` range.
    pub(crate) fn offset(&self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.column.checked_add(dc)?))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from a `(row, column)` pair.
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into a `(row, column)` pair.
    fn from(pos: Position) -> Self {
        (pos.row, pos.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
