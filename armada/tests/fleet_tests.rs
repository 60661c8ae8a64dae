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
use std::error::Error;

use armada::{Bearing, CannotPlaceReason, Fleet, Game, Position, Ship, ShipKind, BOARD_SIZE};
use proptest::prelude::*;

fn ship(kind: ShipKind, bearing: Bearing, row: i32, col: i32) -> Ship {
    Ship::new(kind, bearing, Position::new(row, col)).unwrap()
}

#[test]
fn test_add_ship_inside_board() {
    let mut fleet = Fleet::new();
    assert!(fleet.is_empty());
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::East, 0, 0)));
    assert_eq!(fleet.len(), 1);
    assert!(fleet.ships()[0].positions()[0].is_occupied());
}

#[test]
fn test_board_edges_are_inclusive() {
    let mut fleet = Fleet::new();
    assert_eq!(Fleet::BOARD_SIZE, BOARD_SIZE);
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, BOARD_SIZE, BOARD_SIZE)));
    assert!(fleet.add_ship(ship(ShipKind::Frigate, Bearing::East, 0, BOARD_SIZE - 3)));
}

#[test]
fn test_out_of_bounds_is_refused() {
    let mut fleet = Fleet::new();
    let frigate = ship(ShipKind::Frigate, Bearing::East, 0, BOARD_SIZE - 2);
    let err = fleet.try_add_ship(frigate.clone()).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert_eq!(err.to_string(), format!("could not place {}", frigate));
    let source = err.source().map(|reason| reason.to_string());
    assert_eq!(source, Some(CannotPlaceReason::OutOfBounds.to_string()));
    assert_eq!(err.into_ship(), frigate);
    assert!(fleet.is_empty());

    assert!(!fleet.add_ship(ship(ShipKind::Barge, Bearing::North, -1, 0)));
    assert!(!fleet.add_ship(ship(ShipKind::Galleon, Bearing::East, 0, 0)));
    assert!(fleet.is_empty());
}

#[test]
fn test_overlap_and_adjacency_are_refused() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 0, 0)));

    let err = fleet
        .try_add_ship(ship(ShipKind::Barge, Bearing::North, 0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::TooClose);
    assert!(!fleet.add_ship(ship(ShipKind::Caravel, Bearing::East, 0, 1)));
    assert!(!fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 1, 1)));
    assert_eq!(fleet.len(), 1);

    assert!(fleet.add_ship(ship(ShipKind::Barge, Bearing::North, 0, 2)));
    assert!(fleet.add_ship(ship(ShipKind::Carrack, Bearing::South, 2, 0)));
    assert_eq!(fleet.len(), 3);
}

#[test]
fn test_ships_like() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Caravel, Bearing::East, 0, 0));
    fleet.add_ship(ship(ShipKind::Barge, Bearing::East, 5, 5));

    let caravels = fleet.ships_like("Caravela");
    assert_eq!(caravels.len(), 1);
    assert_eq!(caravels[0].category(), "Caravela");
    assert!(fleet.ships_like("caravela").is_empty());
    assert!(fleet.ships_like("Galeao").is_empty());
}

#[test]
fn test_floating_ships() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Barge, Bearing::East, 0, 0));
    fleet.add_ship(ship(ShipKind::Caravel, Bearing::East, 2, 2));
    assert_eq!(fleet.floating_ships().len(), 2);

    Game::new(&mut fleet).fire(Position::new(0, 0));

    let floating = fleet.floating_ships();
    assert_eq!(floating.len(), 1);
    assert_eq!(floating[0].category(), "Caravela");
}

#[test]
fn test_ship_at() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Barge, Bearing::East, 0, 0));
    fleet.add_ship(ship(ShipKind::Frigate, Bearing::South, 3, 3));

    assert_eq!(fleet.ship_at(&Position::new(0, 0)).map(Ship::category), Some("Barca"));
    assert_eq!(fleet.ship_at(&Position::new(5, 3)).map(Ship::category), Some("Fragata"));
    assert!(fleet.ship_at(&Position::new(9, 9)).is_none());
}

fn candidate() -> impl Strategy<Value = Ship> {
    (
        prop::sample::select(ShipKind::ALL.to_vec()),
        prop::sample::select(Bearing::ALL.to_vec()),
        -2..BOARD_SIZE + 3,
        -2..BOARD_SIZE + 3,
    )
        .prop_map(|(kind, bearing, row, col)| ship(kind, bearing, row, col))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_keeps_fleet_invariants(candidates in prop::collection::vec(candidate(), 1..30)) {
        let mut fleet = Fleet::new();
        for candidate in candidates {
            let in_bounds = candidate.positions().iter().all(|p| p.within(BOARD_SIZE));
            let clear = fleet.ships().iter().all(|s| !s.too_close_to_ship(&candidate));
            let before = fleet.len();
            let accepted = fleet.add_ship(candidate);
            prop_assert_eq!(accepted, in_bounds && clear);
            prop_assert_eq!(fleet.len(), before + accepted as usize);
        }
        let ships = fleet.ships();
        for (i, a) in ships.iter().enumerate() {
            prop_assert!(a.positions().iter().all(|p| p.within(BOARD_SIZE)));
            for b in &ships[i + 1..] {
                prop_assert!(!a.too_close_to_ship(b));
            }
        }
    }
}
