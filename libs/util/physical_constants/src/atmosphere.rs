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
use crate::{
    Elementwise, AIR_GAS_CONSTANT, HEAT_CAPACITY_RATIO, SEA_LEVEL_DENSITY, SEA_LEVEL_DENSITY_KG_M3,
    SEA_LEVEL_PRESSURE, SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE, SEA_LEVEL_TEMPERATURE_K,
    STANDARD_GRAVITY_M_S2,
};
use absolute_unit::{
    kelvin, kilograms_per_meter3, meters, meters_per_second, pascals, scalar, Density, Kelvin,
    Kilograms, Length, LengthUnit, Meters, Pascals, Pressure, Scalar, Seconds, Temperature,
    Velocity,
};
use anyhow::{ensure, Result};
use log::trace;

/// Top of the troposphere; this altitude itself still belongs to the troposphere.
pub const TROPOPAUSE_ALTITUDE_M: f64 = 11_000.;
/// Temperature of the isothermal layer above the tropopause (-56.5°C).
pub const TROPOPAUSE_TEMPERATURE_K: f64 = 216.65;
/// Pressure at the tropopause as tabulated. Fixed, rather than taken from the
/// troposphere formula, so that the upper layer matches the reference tables.
pub const TROPOPAUSE_PRESSURE_PA: f64 = 22_632.;
pub const LAPSE_RATE_K_PER_KM: f64 = 6.5;
pub const LAPSE_RATE_K_PER_M: f64 = 0.006_5;
pub const PRESSURE_EXPONENT: f64 = 5.256_1;
/// Upper end of the isothermal layer, and of the domain the model is good for.
pub const MAX_MODEL_ALTITUDE_M: f64 = 20_000.;

// Altitudes are geometric meters and are not checked. Below sea level the
// troposphere formulas simply extrapolate. NaN takes the troposphere branch,
// so it comes back out as NaN.

/// ISA temperature (K) at altitude `h` (m).
pub fn temperature_at(h: f64) -> f64 {
    if h > TROPOPAUSE_ALTITUDE_M {
        TROPOPAUSE_TEMPERATURE_K
    } else {
        SEA_LEVEL_TEMPERATURE_K - LAPSE_RATE_K_PER_KM * h / 1000.
    }
}

/// ISA pressure (Pa) at altitude `h` (m).
pub fn pressure_at(h: f64) -> f64 {
    if h > TROPOPAUSE_ALTITUDE_M {
        TROPOPAUSE_PRESSURE_PA
            * (-STANDARD_GRAVITY_M_S2 / (AIR_GAS_CONSTANT * TROPOPAUSE_TEMPERATURE_K)
                * (h - TROPOPAUSE_ALTITUDE_M))
                .exp()
    } else {
        SEA_LEVEL_PRESSURE_PA
            * (1. - LAPSE_RATE_K_PER_M * h / SEA_LEVEL_TEMPERATURE_K).powf(PRESSURE_EXPONENT)
    }
}

/// ISA density (kg/m^3) at altitude `h` (m), from the ideal gas law.
pub fn density_at(h: f64) -> f64 {
    pressure_at(h) / (AIR_GAS_CONSTANT * temperature_at(h))
}

/// ISA speed of sound (m/s) at altitude `h` (m).
pub fn speed_of_sound_at(h: f64) -> f64 {
    (HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * temperature_at(h)).sqrt()
}

/// Temperature (K) versus altitude (m).
pub fn t_isa<H: Elementwise>(h: H) -> H::Output {
    h.map_elementwise(temperature_at)
}

/// Pressure (Pa) versus altitude (m).
pub fn p_isa<H: Elementwise>(h: H) -> H::Output {
    h.map_elementwise(pressure_at)
}

/// Density (kg/m^3) versus altitude (m).
pub fn rho_isa<H: Elementwise>(h: H) -> H::Output {
    h.map_elementwise(density_at)
}

/// Speed of sound (m/s) versus altitude (m).
pub fn a_isa<H: Elementwise>(h: H) -> H::Output {
    h.map_elementwise(speed_of_sound_at)
}

/// True airspeed (m/s) of flight at `mach` at altitude `h` (m).
pub fn true_airspeed(mach: f64, h: f64) -> f64 {
    mach * speed_of_sound_at(h)
}

/// Check that `h` (m) lies in the range the two layer model describes.
///
/// None of the other functions in this crate call this: it is for callers
/// that would rather have an error than an extrapolated answer.
pub fn validate_altitude(h: f64) -> Result<f64> {
    ensure!(h.is_finite(), "altitude {} m is not a finite number", h);
    ensure!(
        (0. ..=MAX_MODEL_ALTITUDE_M).contains(&h),
        "altitude {} m is outside the standard atmosphere model [0, {}] m",
        h,
        MAX_MODEL_ALTITUDE_M
    );
    Ok(h)
}

/// The state of the standard atmosphere at one altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereSample {
    altitude: Length<Meters>,
    temperature: Temperature<Kelvin>,
    pressure: Pressure<Pascals>,
    density: Density<Kilograms, Meters>,
    speed_of_sound: Velocity<Meters, Seconds>,
}

impl AtmosphereSample {
    pub fn altitude(&self) -> Length<Meters> {
        self.altitude
    }

    pub fn temperature(&self) -> Temperature<Kelvin> {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure<Pascals> {
        self.pressure
    }

    pub fn density(&self) -> Density<Kilograms, Meters> {
        self.density
    }

    pub fn speed_of_sound(&self) -> Velocity<Meters, Seconds> {
        self.speed_of_sound
    }

    // theta
    pub fn temperature_ratio(&self) -> Scalar {
        self.temperature / *SEA_LEVEL_TEMPERATURE
    }

    // delta
    pub fn pressure_ratio(&self) -> Scalar {
        self.pressure / *SEA_LEVEL_PRESSURE
    }

    // sigma
    pub fn density_ratio(&self) -> Scalar {
        self.density / *SEA_LEVEL_DENSITY
    }

    pub fn true_airspeed(&self, mach: f64) -> Velocity<Meters, Seconds> {
        self.speed_of_sound * scalar!(mach)
    }
}

pub struct StandardAtmosphere;

impl StandardAtmosphere {
    pub fn at_altitude<Unit: LengthUnit>(altitude: Length<Unit>) -> AtmosphereSample {
        let altitude = meters!(altitude);
        let h = altitude.f64();
        AtmosphereSample {
            altitude,
            temperature: kelvin!(temperature_at(h)),
            pressure: pascals!(pressure_at(h)),
            density: kilograms_per_meter3!(density_at(h)),
            speed_of_sound: meters_per_second!(speed_of_sound_at(h)),
        }
    }

    /// As `at_altitude`, but refuse altitudes outside of the model's domain.
    pub fn checked_at_altitude<Unit: LengthUnit>(
        altitude: Length<Unit>,
    ) -> Result<AtmosphereSample> {
        validate_altitude(meters!(altitude).f64())?;
        Ok(Self::at_altitude(altitude))
    }

    pub fn profile<Unit, I>(altitudes: I) -> Vec<AtmosphereSample>
    where
        Unit: LengthUnit,
        I: IntoIterator<Item = Length<Unit>>,
    {
        let samples = altitudes
            .into_iter()
            .map(Self::at_altitude)
            .collect::<Vec<_>>();
        trace!("sampled standard atmosphere at {} altitudes", samples.len());
        samples
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::{celsius, feet, hectopascals, knots};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_sea_level() {
        assert_eq!(t_isa(0.), SEA_LEVEL_TEMPERATURE_K);
        assert_eq!(p_isa(0.), SEA_LEVEL_PRESSURE_PA);
        assert_abs_diff_eq!(rho_isa(0.), SEA_LEVEL_DENSITY_KG_M3, epsilon = 0.000_1);
        assert_abs_diff_eq!(a_isa(0.), 340.29, epsilon = 0.1);
    }

    #[test]
    fn test_troposphere_is_linear() {
        for h in [0., 1., 500., 3_048., 5_000., 10_999.9, 11_000.] {
            assert_eq!(t_isa(h), SEA_LEVEL_TEMPERATURE_K - 6.5 * h / 1000.);
        }
        assert_eq!(t_isa(5_000), SEA_LEVEL_TEMPERATURE_K - 32.5);
    }

    #[test]
    fn test_isothermal_layer() {
        for h in [11_000.000_1, 12_000., 18_288., 20_000., 25_000.] {
            assert_eq!(t_isa(h), 216.65);
        }
    }

    #[test]
    fn test_tropopause_boundary() {
        // Both sides of the boundary agree to within the rounding of the tabulated literals.
        assert_abs_diff_eq!(t_isa(11_000.), TROPOPAUSE_TEMPERATURE_K, epsilon = 1e-9);
        assert_abs_diff_eq!(p_isa(11_000.), TROPOPAUSE_PRESSURE_PA, epsilon = 2.);
        assert_abs_diff_eq!(p_isa(11_000.000_001), TROPOPAUSE_PRESSURE_PA, epsilon = 1e-4);
        assert_relative_eq!(rho_isa(11_000.), 0.363_9, epsilon = 0.000_1);
    }

    #[test]
    fn test_pressure_falls_with_altitude() {
        let pressures = p_isa(vec![0., 2_000., 8_000., 11_000., 14_000., 20_000.]);
        assert!(pressures.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_density_is_ideal_gas() {
        for h in [0., 1_524., 11_000., 15_000.] {
            assert_eq!(rho_isa(h), p_isa(h) / (AIR_GAS_CONSTANT * t_isa(h)));
        }
    }

    #[test]
    fn test_below_sea_level_extrapolates() {
        assert_abs_diff_eq!(t_isa(-500.), 291.4, epsilon = 1e-9);
        assert!(p_isa(-500.) > SEA_LEVEL_PRESSURE_PA);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(t_isa(f64::NAN).is_nan());
        assert!(p_isa(f64::NAN).is_nan());
        assert!(rho_isa(f64::NAN).is_nan());
        assert!(a_isa(f64::NAN).is_nan());
    }

    #[test]
    fn test_true_airspeed() {
        assert_eq!(true_airspeed(1., 18_288.), a_isa(18_288.));
        assert_abs_diff_eq!(true_airspeed(0.8, 0.), 272.23, epsilon = 0.01);
        assert_eq!(true_airspeed(0., 5_000.), 0.);
    }

    #[test]
    fn test_validate_altitude() {
        assert_eq!(validate_altitude(0.).unwrap(), 0.);
        assert_eq!(validate_altitude(20_000.).unwrap(), 20_000.);
        assert!(validate_altitude(-1.).is_err());
        assert!(validate_altitude(20_000.1).is_err());
        assert!(validate_altitude(f64::NAN).is_err());
        assert!(validate_altitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_at_altitude() {
        let sample = StandardAtmosphere::at_altitude(feet!(60_000));
        println!("T: {}", celsius!(sample.temperature()));
        println!("p: {}", hectopascals!(sample.pressure()));
        assert_abs_diff_eq!(sample.altitude(), meters!(18_288), epsilon = 1e-9);
        assert_abs_diff_eq!(celsius!(sample.temperature()).f64(), -56.5, epsilon = 1e-9);
        assert_abs_diff_eq!(hectopascals!(sample.pressure()).f64(), 71.712, epsilon = 0.001);
        assert_abs_diff_eq!(sample.density().f64(), 0.115_3, epsilon = 0.000_1);
        assert_abs_diff_eq!(knots!(sample.true_airspeed(1.)).f64(), 573.56, epsilon = 0.01);
    }

    #[test]
    fn test_sample_ratios() {
        let sea_level = StandardAtmosphere::at_altitude(meters!(0));
        assert_abs_diff_eq!(sea_level.temperature_ratio().f64(), 1.);
        assert_abs_diff_eq!(sea_level.pressure_ratio().f64(), 1.);
        assert_abs_diff_eq!(sea_level.density_ratio().f64(), 1., epsilon = 0.000_1);

        let tropopause = StandardAtmosphere::at_altitude(meters!(11_000));
        assert_abs_diff_eq!(tropopause.temperature_ratio().f64(), 0.751_9, epsilon = 0.000_1);
        assert_abs_diff_eq!(tropopause.pressure_ratio().f64(), 0.223_3, epsilon = 0.000_1);
        assert_abs_diff_eq!(tropopause.density_ratio().f64(), 0.297_1, epsilon = 0.000_1);
    }

    #[test]
    fn test_checked_sample() {
        assert!(StandardAtmosphere::checked_at_altitude(feet!(60_000)).is_ok());
        assert!(StandardAtmosphere::checked_at_altitude(feet!(70_000)).is_err());
        assert!(StandardAtmosphere::checked_at_altitude(meters!(-10)).is_err());
    }

    #[test]
    fn test_profile() {
        let profile = StandardAtmosphere::profile((0..=20).map(|i| meters!(i * 1_000)));
        assert_eq!(profile.len(), 21);
        assert_eq!(profile[5].temperature().f64(), t_isa(5_000.));
        assert_eq!(profile[20].pressure().f64(), p_isa(20_000.));
    }
}
