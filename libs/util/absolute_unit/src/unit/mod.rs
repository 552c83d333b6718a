// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use std::fmt::Debug;

mod distance;
mod mass;
mod pressure;
mod scalar;
mod temperature;
mod time;

pub use self::{
    distance::{Feet, Meters, NauticalMiles},
    mass::Kilograms,
    pressure::{Hectopascals, Pascals},
    scalar::Scalar,
    temperature::{Celsius, Kelvin},
    time::{Hours, Seconds},
};

pub trait Unit: Copy + Debug + Default + Eq + Ord + 'static {
    /// Used when the unit is part of a compound, as in `nm/h`.
    const SHORT_NAME: &'static str;
    /// Used after a bare value, as in `60000'`.
    const SUFFIX: &'static str;
    /// How many of the SI base unit (m, s, kg, Pa, K) fit in one of this unit.
    const SI_IN_UNIT: f64;
}

pub trait LengthUnit: Unit {}
pub trait TimeUnit: Unit {}
pub trait MassUnit: Unit {}
pub trait PressureUnit: Unit {}

/// Kelvin is `degrees * SI_IN_UNIT + OFFSET_K`.
pub trait TemperatureUnit: Unit {
    const OFFSET_K: f64;
}
