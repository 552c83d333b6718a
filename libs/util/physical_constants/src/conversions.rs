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
use crate::Elementwise;

pub const METERS_PER_FOOT: f64 = 0.304_8;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1_852.;
pub const SECONDS_PER_HOUR: f64 = 3_600.;
pub const CELSIUS_OFFSET_K: f64 = 273.15;

pub fn meters_per_second_to_knots(speed: f64) -> f64 {
    speed / METERS_PER_NAUTICAL_MILE * SECONDS_PER_HOUR
}

pub fn knots_to_meters_per_second(speed: f64) -> f64 {
    speed * METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR
}

pub fn meters_to_feet(height: f64) -> f64 {
    height / METERS_PER_FOOT
}

pub fn feet_to_meters(height: f64) -> f64 {
    height * METERS_PER_FOOT
}

pub fn kelvin_to_celsius(temperature: f64) -> f64 {
    temperature - CELSIUS_OFFSET_K
}

/// Convert m/s to knots.
pub fn kts_ms<S: Elementwise>(speed: S) -> S::Output {
    speed.map_elementwise(meters_per_second_to_knots)
}

/// Convert knots to m/s.
pub fn ms_kts<S: Elementwise>(speed: S) -> S::Output {
    speed.map_elementwise(knots_to_meters_per_second)
}

/// Convert m to feet.
pub fn ft_m<H: Elementwise>(height: H) -> H::Output {
    height.map_elementwise(meters_to_feet)
}

/// Convert feet to m.
pub fn m_ft<H: Elementwise>(height: H) -> H::Output {
    height.map_elementwise(feet_to_meters)
}
