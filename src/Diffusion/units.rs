//! # Unit normalization
//!
//! All correlations work in Kelvin and atmospheres. Inbound values carry free-form unit strings
//! ("C", "celsius", "psi", "mmHg", ...) which are normalized here.
//!
//! Unknown strings are accepted by default: a temperature is taken as already in Kelvin and a
//! pressure as already in atm. The `*_strict` parsers reject them instead.
//!
//! ```rust
//! use DiffuThe::Diffusion::units::{pressure_to_atm, temperature_to_kelvin};
//! assert_eq!(temperature_to_kelvin(0.0, "C"), 273.15);
//! assert!((pressure_to_atm(760.0, "mmHg") - 1.0).abs() < 1e-4);
//! ```
use super::diffusion_errors::DiffusionError;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    fn parse(unit: &str) -> Option<Self> {
        match unit.trim().to_lowercase().as_str() {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
    /// unknown strings fall back to Kelvin
    pub fn from_str_lossy(unit: &str) -> Self {
        Self::parse(unit).unwrap_or_else(|| {
            warn!("unknown temperature unit {:?}, value taken as Kelvin", unit);
            TemperatureUnit::Kelvin
        })
    }
    pub fn from_str_strict(unit: &str) -> Result<Self, DiffusionError> {
        Self::parse(unit).ok_or_else(|| DiffusionError::UnsupportedUnit(unit.to_string()))
    }

    pub fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
            TemperatureUnit::Kelvin => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PressureUnit {
    Atm,
    Bar,
    Psi,
    Pa,
    KPa,
    MmHg,
    Torr,
}

impl PressureUnit {
    fn parse(unit: &str) -> Option<Self> {
        match unit.trim().to_lowercase().as_str() {
            "atm" => Some(PressureUnit::Atm),
            "bar" => Some(PressureUnit::Bar),
            "psi" => Some(PressureUnit::Psi),
            "pa" => Some(PressureUnit::Pa),
            "kpa" => Some(PressureUnit::KPa),
            "mmhg" => Some(PressureUnit::MmHg),
            "torr" => Some(PressureUnit::Torr),
            _ => None,
        }
    }
    /// unknown strings fall back to atm
    pub fn from_str_lossy(unit: &str) -> Self {
        Self::parse(unit).unwrap_or_else(|| {
            warn!("unknown pressure unit {:?}, value taken as atm", unit);
            PressureUnit::Atm
        })
    }
    pub fn from_str_strict(unit: &str) -> Result<Self, DiffusionError> {
        Self::parse(unit).ok_or_else(|| DiffusionError::UnsupportedUnit(unit.to_string()))
    }
    /// atm per one unit
    pub fn atm_multiplier(&self) -> f64 {
        match self {
            PressureUnit::Atm => 1.0,
            PressureUnit::Bar => 0.986923,
            PressureUnit::Psi => 0.068046,
            PressureUnit::Pa => 0.00000986923,
            PressureUnit::KPa => 0.00986923,
            PressureUnit::MmHg | PressureUnit::Torr => 0.00131579,
        }
    }

    pub fn to_atm(&self, value: f64) -> f64 {
        value * self.atm_multiplier()
    }
}

/// Celsius and Fahrenheit are converted, everything else is returned unchanged
pub fn temperature_to_kelvin(value: f64, unit: &str) -> f64 {
    TemperatureUnit::from_str_lossy(unit).to_kelvin(value)
}

pub fn pressure_to_atm(value: f64, unit: &str) -> f64 {
    PressureUnit::from_str_lossy(unit).to_atm(value)
}

/// converts a temperature honoring the unit policy: strict rejects unknown strings
pub fn temperature_to_kelvin_with_policy(
    value: f64,
    unit: &str,
    strict: bool,
) -> Result<f64, DiffusionError> {
    let unit = if strict {
        TemperatureUnit::from_str_strict(unit)?
    } else {
        TemperatureUnit::from_str_lossy(unit)
    };
    Ok(unit.to_kelvin(value))
}

pub fn pressure_to_atm_with_policy(
    value: f64,
    unit: &str,
    strict: bool,
) -> Result<f64, DiffusionError> {
    let unit = if strict {
        PressureUnit::from_str_strict(unit)?
    } else {
        PressureUnit::from_str_lossy(unit)
    };
    Ok(unit.to_atm(value))
}
