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
//! Errors raised while building or inspecting ships.

use thiserror::Error;

use crate::{bearing::Bearing, position::Position};

/// Reason a ship could not be built or queried.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// The bearing cannot be used to lay out a footprint.
    #[error("cannot lay out a ship along bearing {0:?}")]
    InvalidBearing(Bearing),
    /// A cell of the footprint would fall outside the representable coordinate range.
    #[error("ship anchored at {0} has cells past the coordinate range")]
    CoordinateOverflow(Position),
    /// The ship has no positions, so it has no extremes.
    #[error("ship has an empty footprint")]
    EmptyFootprint,
}
