use super::diffusion_errors::{
    DiffusionError, validate_molar_mass, validate_temperature, validate_volume,
};
use serde::Serialize;

/// empirical constant of sigma = 0.841 * Vc^(1/3), Angstrom
const SIGMA_FACTOR: f64 = 0.841;

/// One chemical species of a gas mixture.
///
/// The collision diameter is derived from the critical volume when the substance is built and
/// cannot be set independently; fields are private so that both stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substance {
    name: String,
    /// g/mol
    molecular_mass: f64,
    /// cm3/mol
    critical_volume: f64,
    /// K
    critical_temperature: f64,
    /// mole fraction
    proportion: f64,
    /// Angstrom
    collision_diameter: f64,
}

impl Substance {
    pub fn new(
        name: &str,
        molecular_mass: f64,
        critical_volume: f64,
        critical_temperature: f64,
        proportion: f64,
    ) -> Result<Self, DiffusionError> {
        validate_molar_mass(molecular_mass)?;
        validate_volume(critical_volume)?;
        validate_temperature(critical_temperature)?;
        if !(0.0..=1.0).contains(&proportion) {
            return Err(DiffusionError::InvalidProportion {
                name: name.to_string(),
                value: proportion,
            });
        }
        Ok(Self {
            name: name.to_string(),
            molecular_mass,
            critical_volume,
            critical_temperature,
            proportion,
            collision_diameter: collision_diameter(critical_volume),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn molecular_mass(&self) -> f64 {
        self.molecular_mass
    }
    pub fn critical_volume(&self) -> f64 {
        self.critical_volume
    }
    pub fn critical_temperature(&self) -> f64 {
        self.critical_temperature
    }
    pub fn proportion(&self) -> f64 {
        self.proportion
    }
    pub fn collision_diameter(&self) -> f64 {
        self.collision_diameter
    }
    /// same species with another critical volume, diameter recomputed
    pub fn with_critical_volume(&self, critical_volume: f64) -> Result<Self, DiffusionError> {
        Self::new(
            &self.name,
            self.molecular_mass,
            critical_volume,
            self.critical_temperature,
            self.proportion,
        )
    }
}

/// sigma_A = 0.841 * Vc^(1/3), Vc in cm3/mol, sigma in Angstrom
pub fn collision_diameter(critical_volume: f64) -> f64 {
    SIGMA_FACTOR * critical_volume.cbrt()
}
