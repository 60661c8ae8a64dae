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
#![cfg(feature = "rng_gen")]

use armada::{Bearing, Fleet, Game, Position, ShipKind, BOARD_SIZE, STANDARD_FLEET};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn check_arrangement(fleet: &Fleet) {
    let ships = fleet.ships();
    for (i, ship) in ships.iter().enumerate() {
        assert_ne!(ship.bearing(), Bearing::Unknown);
        assert!(ship.positions().iter().all(|p| p.within(BOARD_SIZE)), "{}", ship);
        for other in &ships[i + 1..] {
            assert!(!ship.too_close_to_ship(other), "{} touches {}", ship, other);
        }
    }
}

#[test]
fn test_standard_fleet_arrangement() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let fleet = Fleet::arrange(&mut rng, STANDARD_FLEET).unwrap();
        assert_eq!(fleet.len(), STANDARD_FLEET.len());
        check_arrangement(&fleet);

        for kind in ShipKind::ALL {
            let expected = STANDARD_FLEET.iter().filter(|k| *k == kind).count();
            assert_eq!(fleet.ships_like(kind.category()).len(), expected);
        }
    }
}

#[test]
fn test_same_seed_same_fleet() {
    let first = Fleet::arrange(&mut StdRng::seed_from_u64(7), STANDARD_FLEET).unwrap();
    let second = Fleet::arrange(&mut StdRng::seed_from_u64(7), STANDARD_FLEET).unwrap();
    assert_eq!(first.ships(), second.ships());
}

#[test]
fn test_empty_arrangement() {
    let mut rng = StdRng::seed_from_u64(1);
    let fleet = Fleet::arrange(&mut rng, &[]).unwrap();
    assert!(fleet.is_empty());
}

#[test]
fn test_place_random_adds_one_ship() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut fleet = Fleet::new();
    fleet.place_random(&mut rng, ShipKind::Galleon).unwrap();
    fleet.place_random(&mut rng, ShipKind::Caravel).unwrap();
    assert_eq!(fleet.len(), 2);
    check_arrangement(&fleet);
}

#[test]
fn test_sampled_bearings_are_known() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let bearing: Bearing = rng.gen();
        assert_ne!(bearing, Bearing::Unknown);
        if !seen.contains(&bearing) {
            seen.push(bearing);
        }
    }
    assert_eq!(seen.len(), Bearing::ALL.len());
}

#[test]
fn test_random_fleet_can_be_sunk() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut fleet = Fleet::arrange(&mut rng, STANDARD_FLEET).unwrap();
    let mut game = Game::new(&mut fleet);
    for row in 0..=BOARD_SIZE {
        for col in 0..=BOARD_SIZE {
            game.fire(Position::new(row, col));
        }
    }
    let cells: usize = STANDARD_FLEET.iter().map(|kind| kind.size()).sum();
    assert_eq!(game.hits(), cells);
    assert_eq!(game.sunk_ships(), STANDARD_FLEET.len());
    assert!(game.is_over());
    assert_eq!(game.invalid_shots(), 0);
    assert_eq!(game.repeated_shots(), 0);
}
