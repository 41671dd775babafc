//! Error type shared by every diffusion calculation.
//!
//! Variants are split into two groups: validation failures (bad or missing input, nothing was
//! computed) and calculation failures (the input passed validation but the arithmetic broke down
//! or the environment failed). The request adapter reports the group as the `kind` of the error
//! payload.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffusionError {
    #[error("Target substance \"{0}\" not found in the substance list")]
    TargetNotFound(String),
    #[error("Proportions must sum to 1.0 (actual: {total:.3})")]
    ProportionSum { total: f64 },
    #[error("Substance \"{0}\" appears more than once in the mixture")]
    DuplicateSubstance(String),
    #[error("A mixture needs at least 2 substances, got {0}")]
    TooFewSubstances(usize),
    #[error("Unknown liquid method: {0}")]
    UnknownMethod(String),
    #[error("Method {method} requires field \"{field}\"")]
    MissingField {
        method: &'static str,
        field: &'static str,
    },
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),
    #[error("Invalid temperature: {0} K")]
    InvalidTemperature(f64),
    #[error("Invalid pressure: {0} atm")]
    InvalidPressure(f64),
    #[error("Invalid molar mass: {0} g/mol")]
    InvalidMolarMass(f64),
    #[error("Invalid volume: {0} cm3/mol")]
    InvalidVolume(f64),
    #[error("Invalid viscosity: {0} cP")]
    InvalidViscosity(f64),
    #[error("Invalid {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },
    #[error("Invalid proportion of {name}: {value}")]
    InvalidProportion { name: String, value: f64 },
    #[error("Target substance \"{0}\" has proportion 1.0, multicomponent rescaling is undefined")]
    PureTargetSubstance(String),
    #[error("Vaporization enthalpy {0} kJ/kmol is below 7900, no Tyne exponent defined")]
    EnthalpyOutOfDomain(f64),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Calculation error: {0}")]
    CalculationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DiffusionError {
    /// true if the error was caused by the input and no computation was attempted
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            DiffusionError::CalculationError(_) | DiffusionError::IoError(_)
        )
    }
    /// short tag used in error payloads
    pub fn kind(&self) -> &'static str {
        if self.is_validation() {
            "validation"
        } else {
            "calculation"
        }
    }
}

// Helper functions for validation
pub fn validate_temperature(t: f64) -> Result<(), DiffusionError> {
    if t <= 0.0 || !t.is_finite() {
        Err(DiffusionError::InvalidTemperature(t))
    } else {
        Ok(())
    }
}

pub fn validate_pressure(p: f64) -> Result<(), DiffusionError> {
    if p <= 0.0 || !p.is_finite() {
        Err(DiffusionError::InvalidPressure(p))
    } else {
        Ok(())
    }
}

pub fn validate_molar_mass(m: f64) -> Result<(), DiffusionError> {
    if m <= 0.0 || !m.is_finite() {
        Err(DiffusionError::InvalidMolarMass(m))
    } else {
        Ok(())
    }
}

pub fn validate_volume(v: f64) -> Result<(), DiffusionError> {
    if v <= 0.0 || !v.is_finite() {
        Err(DiffusionError::InvalidVolume(v))
    } else {
        Ok(())
    }
}

pub fn validate_viscosity(mu: f64) -> Result<(), DiffusionError> {
    if mu <= 0.0 || !mu.is_finite() {
        Err(DiffusionError::InvalidViscosity(mu))
    } else {
        Ok(())
    }
}

/// final guard on any computed coefficient
pub fn finite_result(value: f64, what: &str) -> Result<f64, DiffusionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DiffusionError::CalculationError(format!(
            "{} is not a finite number ({})",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(validate_temperature(300.0).is_ok());
        assert!(validate_temperature(-1.0).is_err());
        assert!(validate_temperature(0.0).is_err());

        assert!(validate_pressure(1.0).is_ok());
        assert!(validate_pressure(0.0).is_err());
        assert!(validate_pressure(f64::NAN).is_err());

        assert!(validate_molar_mass(28.0).is_ok());
        assert!(validate_molar_mass(-1.0).is_err());

        assert!(validate_volume(98.6).is_ok());
        assert!(validate_volume(0.0).is_err());

        assert!(validate_viscosity(0.89).is_ok());
        assert!(validate_viscosity(0.0).is_err());
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            DiffusionError::TargetNotFound("CO".to_string()).kind(),
            "validation"
        );
        assert_eq!(
            DiffusionError::CalculationError("boom".to_string()).kind(),
            "calculation"
        );
        let msg = DiffusionError::ProportionSum { total: 1.01 }.to_string();
        assert_eq!(msg, "Proportions must sum to 1.0 (actual: 1.010)");
    }

    #[test]
    fn test_finite_result() {
        assert_eq!(finite_result(0.5, "D").unwrap(), 0.5);
        assert!(finite_result(f64::INFINITY, "D").is_err());
    }
}
