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
//! Ship kinds, their footprints and the per-ship hit bookkeeping.
use std::fmt;

use crate::{bearing::Bearing, position::Position};

pub use self::{
    errors::ShipError,
    shape::{Shape, ShapeProjection},
};

mod errors;
mod shape;

/// The closed set of ship kinds. Each kind owns one entry of the shape table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Barca: a single cell.
    Barge,
    /// Caravela: length 2.
    Caravel,
    /// Nau: length 3.
    Carrack,
    /// Fragata: length 4.
    Frigate,
    /// Galeao: five cells in a T.
    Galleon,
}

impl ShipKind {
    /// Every kind, smallest first.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Display name of this kind, as reported by [`Ship::category`].
    pub fn category(self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Name used to request this kind from [`Ship::build`].
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Barge => "barca",
            ShipKind::Caravel => "caravela",
            ShipKind::Carrack => "nau",
            ShipKind::Frigate => "fragata",
            ShipKind::Galleon => "galeao",
        }
    }

    /// Look up a kind by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        ShipKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Shape this kind is laid out with.
    pub fn shape(self) -> Shape {
        match self {
            ShipKind::Barge => Shape::Line(1),
            ShipKind::Caravel => Shape::Line(2),
            ShipKind::Carrack => Shape::Line(3),
            ShipKind::Frigate => Shape::Line(4),
            ShipKind::Galleon => Shape::Tee,
        }
    }

    /// Number of cells a ship of this kind covers.
    pub fn size(self) -> usize {
        self.shape().len()
    }
}

/// A ship and the cells it covers. The first position is the anchor it was built from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    bearing: Bearing,
    positions: ShapeProjection,
}

impl Ship {
    /// Build a ship of the given kind anchored at `start`. Fails if `bearing` is
    /// [`Bearing::Unknown`] or if a cell would not fit in an `i32`.
    pub fn new(kind: ShipKind, bearing: Bearing, start: Position) -> Result<Self, ShipError> {
        let positions = kind.shape().project(bearing, start)?;
        Ok(Self {
            kind,
            bearing,
            positions,
        })
    }

    /// Build a ship from the name of its kind. An unknown name gives `Ok(None)`; a known
    /// name with an unusable bearing gives an error.
    pub fn build(name: &str, bearing: Bearing, start: Position) -> Result<Option<Self>, ShipError> {
        ShipKind::from_name(name)
            .map(|kind| Ship::new(kind, bearing, start))
            .transpose()
    }

    /// Build a ship with an explicit footprint instead of the kind's generated shape. The
    /// positions are taken as given, including an empty list.
    pub fn from_footprint(kind: ShipKind, bearing: Bearing, positions: ShapeProjection) -> Self {
        Self {
            kind,
            bearing,
            positions,
        }
    }

    /// Kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Display name of this ship's kind.
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    /// Bearing this ship was laid out along.
    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// Cells of this ship in generation order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of cells this ship covers.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// True while at least one cell has not been hit. A ship without cells never floats.
    pub fn still_floating(&self) -> bool {
        self.positions.iter().any(|pos| !pos.is_hit())
    }

    /// Mark the cell equal to `target` as hit. Does nothing if the ship does not cover it.
    pub fn shoot(&mut self, target: &Position) {
        if let Some(pos) = self.positions.iter_mut().find(|pos| **pos == *target) {
            pos.shoot();
        }
    }

    /// True if one of this ship's cells has the same coordinates as `point`.
    pub fn occupies(&self, point: &Position) -> bool {
        self.positions.iter().any(|pos| pos == point)
    }

    /// True if `point` is on or next to (diagonals included) any of this ship's cells.
    pub fn too_close_to(&self, point: &Position) -> bool {
        self.positions.iter().any(|pos| pos.is_adjacent_to(point))
    }

    /// True if any cell of `other` is on or next to any of this ship's cells.
    pub fn too_close_to_ship(&self, other: &Ship) -> bool {
        other.positions.iter().any(|pos| self.too_close_to(pos))
    }

    /// Smallest row covered.
    pub fn top_most(&self) -> Result<i32, ShipError> {
        self.positions
            .iter()
            .map(Position::row)
            .min()
            .ok_or(ShipError::EmptyFootprint)
    }

    /// Largest row covered.
    pub fn bottom_most(&self) -> Result<i32, ShipError> {
        self.positions
            .iter()
            .map(Position::row)
            .max()
            .ok_or(ShipError::EmptyFootprint)
    }

    /// Smallest column covered.
    pub fn left_most(&self) -> Result<i32, ShipError> {
        self.positions
            .iter()
            .map(Position::column)
            .min()
            .ok_or(ShipError::EmptyFootprint)
    }

    /// Largest column covered.
    pub fn right_most(&self) -> Result<i32, ShipError> {
        self.positions
            .iter()
            .map(Position::column)
            .max()
            .ok_or(ShipError::EmptyFootprint)
    }

    pub(crate) fn occupy(&mut self) {
        for pos in self.positions.iter_mut() {
            pos.occupy();
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.positions.first() {
            Some(anchor) => write!(f, "[{} {} {}]", self.category(), self.bearing, anchor),
            None => write!(f, "[{} {}]", self.category(), self.bearing),
        }
    }
}
