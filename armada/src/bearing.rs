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
//! Compass bearings for ship placement.
use std::fmt;

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Direction a ship's footprint is laid out in.
///
/// [`Bearing::Unknown`] only exists so that unrecognised input has somewhere to go. Shape
/// generation refuses it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bearing {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Bearing {
    /// The four real bearings, in quarter-turn order starting from north.
    pub const ALL: &'static [Bearing] = &[
        Bearing::North,
        Bearing::East,
        Bearing::South,
        Bearing::West,
    ];

    /// Single character used when printing this bearing.
    pub fn as_char(self) -> char {
        match self {
            Bearing::North => 'n',
            Bearing::South => 's',
            Bearing::East => 'e',
            Bearing::West => 'o',
            Bearing::Unknown => 'u',
        }
    }

    /// Look up a bearing by its character. Anything unrecognised maps to
    /// [`Bearing::Unknown`].
    pub fn from_char(c: char) -> Self {
        match c {
            'n' => Bearing::North,
            's' => Bearing::South,
            'e' => Bearing::East,
            'o' => Bearing::West,
            _ => Bearing::Unknown,
        }
    }

    /// Number of clockwise quarter turns from north, or `None` for [`Bearing::Unknown`].
    pub(crate) fn quarter_turns(self) -> Option<u8> {
        match self {
            Bearing::North => Some(0),
            Bearing::East => Some(1),
            Bearing::South => Some(2),
            Bearing::West => Some(3),
            Bearing::Unknown => None,
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Bearing> for Standard {
    /// Pick one of the four real bearings uniformly.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bearing {
        Bearing::ALL[rng.gen_range(0, Bearing::ALL.len())]
    }
}
