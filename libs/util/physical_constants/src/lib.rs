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
//! The International Standard Atmosphere, in its two layer form, along with the
//! physical constants it is built from and a few aviation unit conversions.
//!
//! Every altitude function accepts either a single altitude or a sequence of
//! them; see [`Elementwise`].
mod atmosphere;
mod conversions;
mod elementwise;

pub use atmosphere::{
    a_isa, density_at, p_isa, pressure_at, rho_isa, speed_of_sound_at, t_isa, temperature_at,
    true_airspeed, validate_altitude, AtmosphereSample, StandardAtmosphere, LAPSE_RATE_K_PER_KM,
    LAPSE_RATE_K_PER_M, MAX_MODEL_ALTITUDE_M, PRESSURE_EXPONENT, TROPOPAUSE_ALTITUDE_M,
    TROPOPAUSE_PRESSURE_PA, TROPOPAUSE_TEMPERATURE_K,
};
pub use conversions::{
    feet_to_meters, ft_m, kelvin_to_celsius, knots_to_meters_per_second, kts_ms, m_ft,
    meters_per_second_to_knots, meters_to_feet, ms_kts, CELSIUS_OFFSET_K, METERS_PER_FOOT,
    METERS_PER_NAUTICAL_MILE, SECONDS_PER_HOUR,
};
pub use elementwise::Elementwise;

use absolute_unit::{
    kelvin, kilograms_per_meter3, pascals, Density, Kelvin, Kilograms, Meters, Pressure, Pascals,
    Temperature,
};
use once_cell::sync::Lazy;

/// Sea level pressure, `p0`, in Pa.
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.;
/// Sea level density, `rho0`, in kg/m^3.
pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
/// Sea level temperature, `T0`, in K (15°C).
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
/// Standard gravitational acceleration, `g`, in m/s^2.
pub const STANDARD_GRAVITY_M_S2: f64 = 9.806_65;
/// Specific gas constant of dry air, `r`, in m^2/(K s^2).
pub const AIR_GAS_CONSTANT: f64 = 287.04;
/// Ratio of specific heats of air, `gamma`.
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;

pub static SEA_LEVEL_PRESSURE: Lazy<Pressure<Pascals>> =
    Lazy::new(|| pascals!(SEA_LEVEL_PRESSURE_PA));
pub static SEA_LEVEL_DENSITY: Lazy<Density<Kilograms, Meters>> =
    Lazy::new(|| kilograms_per_meter3!(SEA_LEVEL_DENSITY_KG_M3));
pub static SEA_LEVEL_TEMPERATURE: Lazy<Temperature<Kelvin>> =
    Lazy::new(|| kelvin!(SEA_LEVEL_TEMPERATURE_K));
