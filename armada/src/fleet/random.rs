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
//! Random arrangement of a fleet.
use log::debug;
use rand::Rng;

use crate::{
    bearing::Bearing,
    fleet::{ArrangeError, Fleet, BOARD_SIZE},
    position::Position,
    ships::{Ship, ShipKind},
};

/// Placements tried for a single ship before giving up on the current arrangement.
const ATTEMPTS_PER_SHIP: usize = 1000;

/// Fresh arrangements started before [`Fleet::arrange`] reports failure.
const ARRANGEMENTS: usize = 16;

impl Fleet {
    /// Build a fleet holding one ship for every entry of `kinds`, each at a random anchor and
    /// bearing. Kinds are placed in the order given, so put the largest first. If a ship
    /// runs out of room the arrangement is started over.
    pub fn arrange<R: Rng>(rng: &mut R, kinds: &[ShipKind]) -> Result<Fleet, ArrangeError> {
        let mut result = Ok(Fleet::new());
        for _ in 0..ARRANGEMENTS {
            let mut fleet = Fleet::new();
            result = kinds
                .iter()
                .try_for_each(|&kind| fleet.place_random(rng, kind))
                .map(|()| fleet);
            match result {
                Ok(_) => break,
                Err(ref err) => debug!("arrangement abandoned: {}", err),
            }
        }
        result
    }

    /// Add a ship of the given kind at a random legal placement.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R, kind: ShipKind) -> Result<(), ArrangeError> {
        for attempt in 1..=ATTEMPTS_PER_SHIP {
            let start = Position::new(
                rng.gen_range(0, BOARD_SIZE + 1),
                rng.gen_range(0, BOARD_SIZE + 1),
            );
            let bearing: Bearing = rng.gen();
            let ship = match Ship::new(kind, bearing, start) {
                Ok(ship) => ship,
                Err(_) => continue,
            };
            if self.add_ship(ship) {
                debug!("random {:?} placed after {} attempts", kind, attempt);
                return Ok(());
            }
        }
        Err(ArrangeError::new(kind, ATTEMPTS_PER_SHIP))
    }
}
