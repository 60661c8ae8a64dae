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
//! Core of a single-player game of Battleship.
//!
//! Ships of five kinds are laid out on a square board from an anchor cell and a
//! [`Bearing`]. A [`Fleet`] only accepts ships that lie on the board and keep at least one
//! empty cell between each other, diagonals included. A [`Game`] fires caller-chosen shots at
//! a fleet and keeps the history along with hit, sink, invalid and repeated counts.
//!
//! ```
//! use armada::{Bearing, Fleet, Game, Position, Ship, ShipKind};
//!
//! let mut fleet = Fleet::new();
//! let caravel = Ship::new(ShipKind::Caravel, Bearing::East, Position::new(2, 2)).unwrap();
//! assert!(fleet.add_ship(caravel));
//!
//! let mut game = Game::new(&mut fleet);
//! assert!(game.fire(Position::new(2, 2)).is_none());
//! let sunk = game.fire(Position::new(2, 3)).map(|ship| ship.category());
//! assert_eq!(sunk, Some("Caravela"));
//! assert!(game.is_over());
//! ```
//!
//! With the `rng_gen` feature, [`Fleet::arrange`] lays out a fleet at random.

pub use crate::{
    bearing::Bearing,
    fleet::{
        ArrangeError, CannotPlaceReason, Fleet, PlaceError, BOARD_SIZE, STANDARD_FLEET,
    },
    game::Game,
    position::Position,
    ships::{Shape, ShapeProjection, Ship, ShipError, ShipKind},
};

pub mod bearing;
pub mod fleet;
pub mod game;
pub mod position;
pub mod ships;
