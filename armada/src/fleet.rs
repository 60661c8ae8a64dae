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
//! The set of ships on one board.
use log::debug;

use crate::{
    position::Position,
    ships::{Ship, ShipKind},
};

pub use self::errors::{ArrangeError, CannotPlaceReason, PlaceError};

mod errors;
#[cfg(feature = "rng_gen")]
mod random;

/// Largest valid coordinate on either axis. Valid cells are `0..=BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 10;

/// The usual composition of a fleet, largest ships first.
pub const STANDARD_FLEET: &[ShipKind] = &[
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Carrack,
    ShipKind::Carrack,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
];

/// Ships placed on a board. Every ship lies on the board and no two ships touch, not even
/// diagonally.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    /// Accepted ships in insertion order.
    ships: Vec<Ship>,
}

impl Fleet {
    /// Largest valid coordinate on either axis.
    pub const BOARD_SIZE: i32 = BOARD_SIZE;

    /// Construct an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Attempt to add a ship. The ship is refused, and handed back in the error, if any of
    /// its cells is off the board or if it overlaps or touches a ship already in the fleet.
    /// On success the ship's cells are marked occupied.
    pub fn try_add_ship(&mut self, mut ship: Ship) -> Result<(), PlaceError> {
        if !ship.positions().iter().all(|pos| pos.within(BOARD_SIZE)) {
            debug!("refused {}: out of bounds", ship);
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
        }
        if let Some(other) = self.ships.iter().find(|other| other.too_close_to_ship(&ship)) {
            debug!("refused {}: too close to {}", ship, other);
            return Err(PlaceError::new(CannotPlaceReason::TooClose, ship));
        }
        ship.occupy();
        debug!("placed {}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Add a ship, returning whether it was accepted. See [`Fleet::try_add_ship`].
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        self.try_add_ship(ship).is_ok()
    }

    /// All ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if no ship has been added.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ships whose category is exactly `category`.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|ship| ship.category() == category)
            .collect()
    }

    /// Ships that still have at least one unhit cell, in insertion order.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|ship| ship.still_floating()).collect()
    }

    /// The first ship covering `pos`, if any.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(pos))
    }

    pub(crate) fn ship_at_mut(&mut self, pos: &Position) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.occupies(pos))
    }
}
