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
use absolute_unit::{celsius, feet, hectopascals, knots};
use anyhow::{Context, Result};
use log::info;
use physical_constants::{
    a_isa, kelvin_to_celsius, kts_ms, m_ft, p_isa, rho_isa, t_isa, validate_altitude,
    StandardAtmosphere,
};
use std::io::{self, Write};
use structopt::StructOpt;

/// Show the standard atmosphere at an altitude
#[derive(Debug, StructOpt)]
#[structopt(name = "isa")]
struct Opt {
    /// Altitude in feet
    #[structopt(short, long, default_value = "60000")]
    feet: f64,

    /// Label each value with its units
    #[structopt(short, long)]
    verbose: bool,

    /// Refuse altitudes outside of the standard atmosphere's range
    #[structopt(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let h = m_ft(opt.feet);
    info!("standard atmosphere at {}ft ({}m)", opt.feet, h);
    if opt.strict {
        validate_altitude(h).with_context(|| format!("no standard atmosphere at {}ft", opt.feet))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if opt.verbose {
        write_labelled_report(&mut out, opt.feet)?;
    } else {
        write_report(&mut out, h)?;
    }
    Ok(())
}

// Pressure (hPa), density (kg/m^3), temperature (°C) and Mach 1 TAS (kt), one per line.
fn write_report<W: Write>(out: &mut W, h: f64) -> Result<()> {
    writeln!(out, "{}", p_isa(h) * 1e-2)?;
    writeln!(out, "{}", rho_isa(h))?;
    writeln!(out, "{}", kelvin_to_celsius(t_isa(h)))?;
    writeln!(out, "{}", kts_ms(a_isa(h)))?;
    Ok(())
}

fn write_labelled_report<W: Write>(out: &mut W, altitude_ft: f64) -> Result<()> {
    let sample = StandardAtmosphere::at_altitude(feet!(altitude_ft));
    writeln!(out, "altitude:    {:.1} ({:.1})", feet!(sample.altitude()), sample.altitude())?;
    writeln!(out, "pressure:    {:.2}", hectopascals!(sample.pressure()))?;
    writeln!(out, "density:     {:.4}", sample.density())?;
    writeln!(out, "temperature: {:.2}", celsius!(sample.temperature()))?;
    writeln!(out, "tas:         {:.1}", knots!(sample.true_airspeed(1.)))?;
    Ok(())
}
