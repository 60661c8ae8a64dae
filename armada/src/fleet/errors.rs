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
//! Errors returned by the [`Fleet`][crate::fleet::Fleet].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::{Ship, ShipKind};

/// Reason why a ship could not be added to the fleet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells is off the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// The ship overlaps or touches a ship that was already placed.
    #[error("the ship overlaps or touches another ship")]
    TooClose,
}

/// Error caused when attempting to add a ship in an invalid position. Hands the rejected
/// ship back.
#[derive(Error)]
#[error("could not place {ship}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was refused.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was refused.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the refused ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Error returned when random arrangement could not find room for a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no room found for a {kind:?} after {attempts} attempts")]
pub struct ArrangeError {
    kind: ShipKind,
    attempts: usize,
}

impl ArrangeError {
    #[cfg_attr(not(feature = "rng_gen"), allow(dead_code))]
    pub(super) fn new(kind: ShipKind, attempts: usize) -> Self {
        Self { kind, attempts }
    }

    /// Kind of the ship that could not be placed.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Number of placements tried before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}
