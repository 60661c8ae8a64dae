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
//! Footprint generation table for the ship kinds.
use log::trace;

use crate::{bearing::Bearing, position::Position, ships::ShipError};

/// Projection of a shape onto the board from an anchor cell. The anchor is always the first
/// element and every element is distinct.
pub type ShapeProjection = Vec<Position>;

/// Cells of the tee when facing north, relative to the anchor, as `(row, column)` offsets.
const TEE: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];

/// Shapes a ship can take.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Shape {
    /// A straight run of the given nonzero length.
    Line(usize),
    /// The five-cell T. Each bearing is a quarter turn of the northern layout about the
    /// anchor.
    Tee,
}

impl Shape {
    /// Number of cells this shape covers.
    pub fn len(self) -> usize {
        match self {
            Shape::Line(len) => len,
            Shape::Tee => TEE.len(),
        }
    }

    /// Lay this shape out from `start` along `bearing`.
    ///
    /// Lines grow towards increasing row for north and south and towards increasing column
    /// for east and west.
    pub fn project(self, bearing: Bearing, start: Position) -> Result<ShapeProjection, ShipError> {
        let turns = bearing
            .quarter_turns()
            .ok_or(ShipError::InvalidBearing(bearing))?;
        let proj: ShapeProjection = match self {
            Shape::Line(len) => {
                let (dr, dc) = if turns % 2 == 0 { (1, 0) } else { (0, 1) };
                (0..len as i32)
                    .map(|step| start.offset(dr * step, dc * step))
                    .collect::<Option<ShapeProjection>>()
            }
            Shape::Tee => TEE
                .iter()
                .map(|&offset| {
                    let (dr, dc) = rotate(offset, turns);
                    start.offset(dr, dc)
                })
                .collect::<Option<ShapeProjection>>(),
        }
        .ok_or(ShipError::CoordinateOverflow(start))?;
        trace!("projected {:?} along {:?} from {}: {:?}", self, bearing, start, proj);
        Ok(proj)
    }
}

/// Rotate a `(row, column)` offset clockwise by the given number of quarter turns.
fn rotate((row, column): (i32, i32), turns: u8) -> (i32, i32) {
    (0..turns).fold((row, column), |(r, c), _| (c, -r))
}
