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

//! Quantities tagged with their units at the type level.
//!
//! Converting between units is a `From` on the target unit, usually through
//! one of the constructor macros: `feet!(meters!(100))`.

#[macro_use]
mod generic;

mod density;
mod length;
mod pressure;
mod temperature;
mod unit;
mod velocity;

pub use crate::{
    density::Density,
    length::Length,
    pressure::Pressure,
    temperature::Temperature,
    unit::{
        Celsius, Feet, Hectopascals, Hours, Kelvin, Kilograms, LengthUnit, MassUnit, Meters,
        NauticalMiles, Pascals, PressureUnit, Scalar, Seconds, TemperatureUnit, TimeUnit, Unit,
    },
    velocity::Velocity,
};

pub use approx;
pub use ordered_float;
