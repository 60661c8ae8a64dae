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
use std::{
    fmt,
    io::{self, BufRead},
};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use armada::{Fleet, Game, Position, Ship, BOARD_SIZE, STANDARD_FLEET};

/// Matcher for a single `row,col` shot. Negative values are accepted so that off-board shots
/// reach the game and get counted.
static SHOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?x)\s*(?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<col>-?[0-9]+)\s*$").unwrap()
});

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Fires a list of shots at a randomly arranged fleet and reports the outcome.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the fleet arrangement")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("print the fleet layout before firing"),
        )
        .arg(
            Arg::with_name("SHOT")
                .multiple(true)
                .help("shots as row,col; read from stdin, one per line, when none are given"),
        )
        .get_matches();

    let mut fleet = arrange_fleet(&matches)?;
    if matches.is_present("reveal") {
        println!("Fleet:");
        show_fleet(fleet.ships().iter());
        println!();
        show_board(&[(ship_cells(&fleet), '#')]);
        println!();
    }

    let targets: Vec<Position> = match matches.values_of("SHOT") {
        Some(values) => values.filter_map(parse_shot).collect(),
        None => read_shots(io::stdin().lock())?,
    };

    let mut game = Game::new(&mut fleet);
    for target in targets {
        let report = fire(&mut game, target);
        println!("{:>10} {}", target.to_string(), report);
        if game.is_over() {
            println!("All ships sunk.");
            break;
        }
    }

    println!();
    show_summary(&game);
    println!();
    show_board(&[
        (game.shots().to_vec(), 'o'),
        (hit_cells(game.fleet()), 'X'),
    ]);
    println!();
    println!("Still afloat:");
    show_fleet(game.fleet().floating_ships().into_iter());
    Ok(())
}

/// Arrange the standard fleet, seeded from the command line if requested.
fn arrange_fleet(matches: &ArgMatches) -> io::Result<Fleet> {
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("arranging fleet with seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };
    Fleet::arrange(&mut rng, STANDARD_FLEET).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// Parse a `row,col` shot, printing a message and returning `None` if it is malformed.
fn parse_shot(input: &str) -> Option<Position> {
    let captures = match SHOT.captures(input) {
        Some(captures) => captures,
        None => {
            println!("Invalid shot \"{}\", expected row,col", input);
            return None;
        }
    };
    let row = captures.name("row").unwrap().as_str().parse();
    let col = captures.name("col").unwrap().as_str().parse();
    match (row, col) {
        (Ok(row), Ok(col)) => Some(Position::new(row, col)),
        _ => {
            println!("Invalid shot \"{}\", coordinates out of range", input);
            None
        }
    }
}

/// Read shots from `read`, one per line. Blank lines are skipped.
fn read_shots<B: BufRead>(read: B) -> io::Result<Vec<Position>> {
    let mut shots = Vec::new();
    for line in read.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            shots.extend(parse_shot(&line));
        }
    }
    Ok(shots)
}

/// Outcome of a single shot, worked out from the game's counters.
enum ShotReport {
    Invalid,
    Repeated,
    Miss,
    Hit,
    Sunk(&'static str),
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotReport::Invalid => f.pad("off the board"),
            ShotReport::Repeated => f.pad("already fired there"),
            ShotReport::Miss => f.pad("miss"),
            ShotReport::Hit => f.pad("hit"),
            ShotReport::Sunk(category) => write!(f, "sank a {}", category),
        }
    }
}

/// Fire at `target` and describe what happened.
fn fire(game: &mut Game, target: Position) -> ShotReport {
    let invalid = game.invalid_shots();
    let repeated = game.repeated_shots();
    let hits = game.hits();
    if let Some(ship) = game.fire(target) {
        return ShotReport::Sunk(ship.category());
    }
    if game.invalid_shots() > invalid {
        ShotReport::Invalid
    } else if game.repeated_shots() > repeated {
        ShotReport::Repeated
    } else if game.hits() > hits {
        ShotReport::Hit
    } else {
        ShotReport::Miss
    }
}

/// Every cell covered by the fleet.
fn ship_cells(fleet: &Fleet) -> Vec<Position> {
    fleet
        .ships()
        .iter()
        .flat_map(|ship| ship.positions().iter().copied())
        .collect()
}

/// Every ship cell that has been hit.
fn hit_cells(fleet: &Fleet) -> Vec<Position> {
    ship_cells(fleet).into_iter().filter(Position::is_hit).collect()
}

/// Print the counters of the game.
fn show_summary(game: &Game) {
    println!("Shots fired:     {}", game.shots().len());
    println!("Invalid shots:   {}", game.invalid_shots());
    println!("Repeated shots:  {}", game.repeated_shots());
    println!("Hits:            {}", game.hits());
    println!("Ships sunk:      {}", game.sunk_ships());
    println!("Ships remaining: {}", game.remaining_ships());
}

/// Print one line per ship.
fn show_fleet<'a>(ships: impl Iterator<Item = &'a Ship>) {
    for ship in ships {
        println!("  {}", ship);
    }
}

/// Print the board. Each layer marks its positions with its character; later layers are
/// drawn over earlier ones and positions off the board are skipped.
fn show_board(layers: &[(Vec<Position>, char)]) {
    let side = (BOARD_SIZE + 1) as usize;
    let mut grid = vec![vec!['.'; side]; side];
    for (positions, marker) in layers {
        for pos in positions.iter().filter(|pos| pos.within(BOARD_SIZE)) {
            grid[pos.row() as usize][pos.column() as usize] = *marker;
        }
    }
    print!("   ");
    for i in 0..side {
        print!("{:^3}", i);
    }
    println!();
    for (i, row) in grid.iter().enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^3}", cell);
        }
        println!();
    }
}
