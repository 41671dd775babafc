//! # Liquid phase diffusion correlations
//!
//! ## Main structures
//! - `LiquidCorrelation`: common trait of all liquid correlations
//! - `WilkeChang`, `HaydukLaudie`, `Scheibel`, `Tyne`: one struct per correlation
//! - `LiquidModel`: enum over the four correlations, dispatched with `enum_dispatch`
//!
//! ## Formulas (D in cm2/s, T in K, viscosity in cP, volumes in cm3/mol)
//! - Wilke-Chang: D = 7.4e-8 (phi M_B)^0.5 T / (mu Va^0.6)
//! - Hayduk-Laudie: D = 13.26e-5 mu^-1.14 Va^-0.589
//! - Scheibel: D = K T / (mu_B Va^(1/3)), K from the ratio Va/Vb
//! - Tyne: D(T1) = D(T2) ((Tc - T2)/(Tc - T1))^n, n from the vaporization enthalpy
//! - Tyn-Calus: Va = 0.285 Vc^1.048
//!
//! ```rust
//! use DiffuThe::Diffusion::liquid_diffusion::{HaydukLaudie, LiquidCorrelation, LiquidModel};
//! let model = LiquidModel::HaydukLaudie(HaydukLaudie { viscosity: 0.89, molar_volume: 96.0 });
//! let d = model.diffusivity().unwrap();
//! assert!(d > 0.0 && d < 1e-4);
//! ```
use super::diffusion_errors::{
    DiffusionError, finite_result, validate_molar_mass, validate_temperature, validate_viscosity,
    validate_volume,
};
use enum_dispatch::enum_dispatch;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// association factors of Wilke-Chang, names in lowercase (Spanish aliases included)
pub const SOLVENT_ASSOCIATION_TABLE: [(&str, f64); 22] = [
    ("water", 2.6),
    ("agua", 2.6),
    ("methanol", 1.9),
    ("metanol", 1.9),
    ("ethanol", 1.5),
    ("etanol", 1.5),
    ("propanol", 1.2),
    ("1-propanol", 1.2),
    ("benzene", 1.0),
    ("benceno", 1.0),
    ("toluene", 1.0),
    ("tolueno", 1.0),
    ("ether", 1.0),
    ("diethyl ether", 1.0),
    ("éter", 1.0),
    ("eter", 1.0),
    ("heptane", 1.0),
    ("heptano", 1.0),
    ("hexane", 1.0),
    ("hexano", 1.0),
    ("unassociated", 1.0),
    ("no asociado", 1.0),
];

pub const DEFAULT_ASSOCIATION_FACTOR: f64 = 1.0;

/// association factor of a solvent, 1.0 for solvents not in the table
pub fn association_factor(solvent: &str) -> f64 {
    let key = solvent.trim().to_lowercase();
    match SOLVENT_ASSOCIATION_TABLE
        .iter()
        .find(|(name, _)| *name == key)
    {
        Some((_, phi)) => *phi,
        None => {
            warn!(
                "solvent {:?} not in the association table, phi = {}",
                solvent, DEFAULT_ASSOCIATION_FACTOR
            );
            DEFAULT_ASSOCIATION_FACTOR
        }
    }
}

/// Tyn-Calus: molar volume at the normal boiling point from the critical volume
pub fn tyn_calus_volume(critical_volume: f64) -> f64 {
    0.285 * critical_volume.powf(1.048)
}

/// direct molar volume if given, Tyn-Calus estimate from the critical volume otherwise
pub fn resolve_molar_volume(
    molar_volume: Option<f64>,
    critical_volume: Option<f64>,
) -> Option<f64> {
    match (molar_volume, critical_volume) {
        (Some(v), _) => Some(v),
        (None, Some(vc)) => {
            let v = tyn_calus_volume(vc);
            debug!("Tyn-Calus: Vc = {} -> Va = {:.4} cm3/mol", vc, v);
            Some(v)
        }
        (None, None) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidMethod {
    WilkeChang,
    HaydukLaudie,
    Scheibel,
    Tyne,
}

impl LiquidMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidMethod::WilkeChang => "wilke_chang",
            LiquidMethod::HaydukLaudie => "hayduk_laudie",
            LiquidMethod::Scheibel => "scheibel",
            LiquidMethod::Tyne => "tyne",
        }
    }
}

impl fmt::Display for LiquidMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LiquidMethod {
    type Err = DiffusionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wilke_chang" => Ok(LiquidMethod::WilkeChang),
            "hayduk_laudie" => Ok(LiquidMethod::HaydukLaudie),
            "scheibel" => Ok(LiquidMethod::Scheibel),
            "tyne" => Ok(LiquidMethod::Tyne),
            _ => Err(DiffusionError::UnknownMethod(s.to_string())),
        }
    }
}

// Common trait for liquid diffusion correlations
#[enum_dispatch]
pub trait LiquidCorrelation {
    fn method(&self) -> LiquidMethod;
    /// checks the inputs of the correlation
    fn validate(&self) -> Result<(), DiffusionError>;
    /// D, cm2/s
    fn diffusivity(&self) -> Result<f64, DiffusionError>;
}

/// Wilke-Chang correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct WilkeChang {
    /// K
    pub temperature: f64,
    /// association factor of the solvent
    pub association_factor: f64,
    /// g/mol
    pub solvent_molecular_mass: f64,
    /// cP
    pub viscosity: f64,
    /// solute molar volume, cm3/mol
    pub molar_volume: f64,
}

impl LiquidCorrelation for WilkeChang {
    fn method(&self) -> LiquidMethod {
        LiquidMethod::WilkeChang
    }
    fn validate(&self) -> Result<(), DiffusionError> {
        validate_temperature(self.temperature)?;
        validate_molar_mass(self.solvent_molecular_mass)?;
        validate_viscosity(self.viscosity)?;
        validate_volume(self.molar_volume)?;
        if self.association_factor <= 0.0 {
            return Err(DiffusionError::InvalidParameter {
                what: "association factor",
                value: self.association_factor,
            });
        }
        Ok(())
    }
    fn diffusivity(&self) -> Result<f64, DiffusionError> {
        self.validate()?;
        let d = 7.4e-8 * (self.association_factor * self.solvent_molecular_mass).sqrt()
            * self.temperature
            / (self.viscosity * self.molar_volume.powf(0.6));
        finite_result(d, "Wilke-Chang diffusivity")
    }
}

/// Hayduk-Laudie correlation, solute in water.
#[derive(Debug, Clone, PartialEq)]
pub struct HaydukLaudie {
    /// cP
    pub viscosity: f64,
    /// cm3/mol
    pub molar_volume: f64,
}

impl LiquidCorrelation for HaydukLaudie {
    fn method(&self) -> LiquidMethod {
        LiquidMethod::HaydukLaudie
    }
    fn validate(&self) -> Result<(), DiffusionError> {
        validate_viscosity(self.viscosity)?;
        validate_volume(self.molar_volume)
    }
    fn diffusivity(&self) -> Result<f64, DiffusionError> {
        self.validate()?;
        let d = 13.26e-5 * self.viscosity.powf(-1.14) * self.molar_volume.powf(-0.589);
        finite_result(d, "Hayduk-Laudie diffusivity")
    }
}

/// Scheibel correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheibel {
    /// K
    pub temperature: f64,
    /// solvent viscosity, cP
    pub viscosity: f64,
    /// solute molar volume Va, cm3/mol
    pub molar_volume: f64,
    /// solvent molar volume Vb, cm3/mol
    pub solvent_molar_volume: f64,
}

impl Scheibel {
    /// K = 18.9e-8 if Va < 2Vb, 17.5e-8 if Va < 2.5Vb, 8.2e-8 (1 + (3Vb/Va)^(2/3)) otherwise
    pub fn k_factor(&self) -> f64 {
        let (va, vb) = (self.molar_volume, self.solvent_molar_volume);
        if va < 2.0 * vb {
            18.9e-8
        } else if va < 2.5 * vb {
            17.5e-8
        } else {
            8.2e-8 * (1.0 + (3.0 * vb / va).powf(2.0 / 3.0))
        }
    }
}

impl LiquidCorrelation for Scheibel {
    fn method(&self) -> LiquidMethod {
        LiquidMethod::Scheibel
    }
    fn validate(&self) -> Result<(), DiffusionError> {
        validate_temperature(self.temperature)?;
        validate_viscosity(self.viscosity)?;
        validate_volume(self.molar_volume)?;
        validate_volume(self.solvent_molar_volume)
    }
    fn diffusivity(&self) -> Result<f64, DiffusionError> {
        self.validate()?;
        let k = self.k_factor();
        let d = k * self.temperature / (self.viscosity * self.molar_volume.cbrt());
        debug!("Scheibel: K = {:.4e}, D = {:.4e} cm2/s", k, d);
        finite_result(d, "Scheibel diffusivity")
    }
}

/// Tyne extrapolation of a known diffusivity to another temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Tyne {
    /// D at the reference temperature, cm2/s
    pub reference_diffusivity: f64,
    /// T2, K
    pub reference_temperature: f64,
    /// T1, K
    pub temperature: f64,
    /// Tc of the solvent, K
    pub critical_temperature: f64,
    /// dHv at the normal boiling point, kJ/kmol
    pub vaporization_enthalpy: f64,
}

/// exponent n of the Tyne extrapolation as a step function of dHv (kJ/kmol)
pub fn tyne_exponent(vaporization_enthalpy: f64) -> Result<i32, DiffusionError> {
    let h = vaporization_enthalpy;
    match h {
        h if h >= 50000.0 => Ok(10),
        h if h >= 46000.0 => Ok(8),
        h if h >= 39000.0 => Ok(6),
        h if h >= 30000.0 => Ok(4),
        h if h >= 7900.0 => Ok(3),
        _ => Err(DiffusionError::EnthalpyOutOfDomain(h)),
    }
}

impl Tyne {
    pub fn exponent(&self) -> Result<i32, DiffusionError> {
        tyne_exponent(self.vaporization_enthalpy)
    }
}

impl LiquidCorrelation for Tyne {
    fn method(&self) -> LiquidMethod {
        LiquidMethod::Tyne
    }
    fn validate(&self) -> Result<(), DiffusionError> {
        validate_temperature(self.temperature)?;
        validate_temperature(self.reference_temperature)?;
        validate_temperature(self.critical_temperature)?;
        if self.reference_diffusivity <= 0.0 {
            return Err(DiffusionError::InvalidParameter {
                what: "reference diffusivity",
                value: self.reference_diffusivity,
            });
        }
        // both temperatures must lie below Tc, otherwise the ratio changes sign or diverges
        for t in [self.temperature, self.reference_temperature] {
            if t >= self.critical_temperature {
                return Err(DiffusionError::InvalidParameter {
                    what: "temperature at or above critical",
                    value: t,
                });
            }
        }
        self.exponent().map(|_| ())
    }
    fn diffusivity(&self) -> Result<f64, DiffusionError> {
        self.validate()?;
        let n = self.exponent()?;
        let ratio = (self.critical_temperature - self.reference_temperature)
            / (self.critical_temperature - self.temperature);
        let d = self.reference_diffusivity * ratio.powi(n);
        debug!("Tyne: n = {}, ratio = {:.6}, D = {:.4e} cm2/s", n, ratio, d);
        finite_result(d, "Tyne diffusivity")
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// FACTORY  /////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(LiquidCorrelation)]
pub enum LiquidModel {
    WilkeChang(WilkeChang),
    HaydukLaudie(HaydukLaudie),
    Scheibel(Scheibel),
    Tyne(Tyne),
}
