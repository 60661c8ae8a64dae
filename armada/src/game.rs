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
//! A single game session: firing shots at a fleet and keeping score.
//!
//! Every call to [`Game::fire`] goes through three stages. A shot off the board is counted
//! as invalid. A shot at a cell already in the history is counted as repeated and never
//! reaches the fleet. Anything else is resolved against the fleet, counting hits and sinks.
//! All three stages append the shot to the history.
use log::debug;

use crate::{
    fleet::{Fleet, BOARD_SIZE},
    position::Position,
    ships::Ship,
};

/// Shot bookkeeping for one session against a borrowed [`Fleet`].
#[derive(Debug)]
pub struct Game<'a> {
    /// Fleet being fired at.
    fleet: &'a mut Fleet,

    /// Every shot fired, valid or not, in call order.
    shots: Vec<Position>,

    hits: usize,
    sinks: usize,
    invalid_shots: usize,
    repeated_shots: usize,
}

impl<'a> Game<'a> {
    /// Start a session against `fleet` with an empty history and all counters at zero.
    pub fn new(fleet: &'a mut Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            hits: 0,
            sinks: 0,
            invalid_shots: 0,
            repeated_shots: 0,
        }
    }

    /// Fire at `target`. Returns the ship this shot sank, if it sank one; misses, hits that
    /// leave the ship afloat, invalid and repeated shots all return `None`.
    pub fn fire(&mut self, target: Position) -> Option<&Ship> {
        if !self.valid_shot(&target) {
            self.invalid_shots += 1;
            self.shots.push(target);
            debug!("shot at {} is off the board", target);
            return None;
        }
        if self.repeated_shot(&target) {
            self.repeated_shots += 1;
            self.shots.push(target);
            debug!("shot at {} repeats an earlier shot", target);
            return None;
        }
        self.shots.push(target);

        let ship = match self.fleet.ship_at_mut(&target) {
            Some(ship) => ship,
            None => {
                debug!("shot at {} missed", target);
                return None;
            }
        };
        ship.shoot(&target);
        self.hits += 1;
        if ship.still_floating() {
            debug!("shot at {} hit {}", target, ship);
            None
        } else {
            self.sinks += 1;
            debug!("shot at {} sank {}", target, ship);
            Some(&*ship)
        }
    }

    /// Returns true if both coordinates of `pos` lie on the board.
    pub fn valid_shot(&self, pos: &Position) -> bool {
        pos.within(BOARD_SIZE)
    }

    /// Returns true if a shot at `pos` has already been fired.
    pub fn repeated_shot(&self, pos: &Position) -> bool {
        self.shots.contains(pos)
    }

    /// Every shot fired so far, in order.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    /// Number of shots that were off the board.
    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    /// Number of shots at cells that had already been shot.
    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    /// Number of shots that landed on a ship.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of ships sunk.
    pub fn sunk_ships(&self) -> usize {
        self.sinks
    }

    /// Number of ships still afloat, counted from the fleet on every call.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.floating_ships().len()
    }

    /// Returns true once no ship in the fleet is afloat.
    pub fn is_over(&self) -> bool {
        self.remaining_ships() == 0
    }

    /// The fleet being fired at.
    pub fn fleet(&self) -> &Fleet {
        &*self.fleet
    }
}
