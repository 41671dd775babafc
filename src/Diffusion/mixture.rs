//! # Diffusion of one substance in a gas mixture
//!
//! For more than two components the target diffusivity is approximated by
//!
//! D_A,mix = 1 / sum_i( y'_i / D_A,i ),   y'_i = y_i / (1 - y_A)
//!
//! where the sum runs over all components except the target A and D_A,i are Chapman-Enskog
//! binary coefficients. For exactly two components the binary coefficient is returned as is.
use super::diffusion_errors::{DiffusionError, validate_pressure, validate_temperature};
use super::gas_diffusion::binary_diffusivity;
use super::substance::Substance;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_PROPORTION_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixtureType {
    Binary,
    Multicomponent,
}

/// Contribution of one partner substance to the multicomponent sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairContribution {
    pub partner: String,
    /// y_i
    pub proportion: f64,
    /// y'_i = y_i / (1 - y_A)
    pub corrected_proportion: f64,
    /// D_A,i, cm2/s
    pub binary_diffusivity: f64,
    /// y'_i / D_A,i
    pub term: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixtureResult {
    /// cm2/s
    pub diffusivity: f64,
    pub mixture_type: MixtureType,
    /// empty for a binary mixture
    pub pairs: Vec<PairContribution>,
}

/// Validated mixture: unique names, target present, proportions summing to 1.
#[derive(Debug, Clone)]
pub struct Mixture {
    substances: Vec<Substance>,
    target_index: usize,
    /// K
    temperature: f64,
    /// atm
    pressure: f64,
}

impl Mixture {
    pub fn new(
        target_substance: &str,
        substances: Vec<Substance>,
        temperature: f64,
        pressure: f64,
    ) -> Result<Self, DiffusionError> {
        Self::with_tolerance(
            target_substance,
            substances,
            temperature,
            pressure,
            DEFAULT_PROPORTION_TOLERANCE,
        )
    }

    pub fn with_tolerance(
        target_substance: &str,
        substances: Vec<Substance>,
        temperature: f64,
        pressure: f64,
        tolerance: f64,
    ) -> Result<Self, DiffusionError> {
        if substances.len() < 2 {
            return Err(DiffusionError::TooFewSubstances(substances.len()));
        }
        let mut seen = HashSet::new();
        for s in &substances {
            if !seen.insert(s.name()) {
                return Err(DiffusionError::DuplicateSubstance(s.name().to_string()));
            }
        }
        let target_index = substances
            .iter()
            .position(|s| s.name() == target_substance)
            .ok_or_else(|| DiffusionError::TargetNotFound(target_substance.to_string()))?;
        validate_proportions(&substances, tolerance)?;
        validate_temperature(temperature)?;
        validate_pressure(pressure)?;
        Ok(Self {
            substances,
            target_index,
            temperature,
            pressure,
        })
    }

    pub fn target(&self) -> &Substance {
        &self.substances[self.target_index]
    }
    pub fn substances(&self) -> &[Substance] {
        &self.substances
    }
    pub fn mixture_type(&self) -> MixtureType {
        if self.substances.len() == 2 {
            MixtureType::Binary
        } else {
            MixtureType::Multicomponent
        }
    }

    pub fn diffusivity(&self) -> Result<f64, DiffusionError> {
        Ok(self.calculate()?.diffusivity)
    }
    /// diffusivity of the target together with the per-partner breakdown
    pub fn calculate(&self) -> Result<MixtureResult, DiffusionError> {
        if self.mixture_type() == MixtureType::Binary {
            info!("binary mixture, direct Chapman-Enskog calculation");
            let d = binary_diffusivity(
                &self.substances[0],
                &self.substances[1],
                self.temperature,
                self.pressure,
            )?;
            return Ok(MixtureResult {
                diffusivity: d,
                mixture_type: MixtureType::Binary,
                pairs: Vec::new(),
            });
        }
        let target = self.target();
        let y_target = target.proportion();
        info!(
            "multicomponent mixture of {} substances, target {} (y = {})",
            self.substances.len(),
            target.name(),
            y_target
        );
        if y_target >= 1.0 {
            return Err(DiffusionError::PureTargetSubstance(
                target.name().to_string(),
            ));
        }
        let mut pairs = Vec::with_capacity(self.substances.len() - 1);
        let mut sum_terms = 0.0;
        for (i, substance) in self.substances.iter().enumerate() {
            if i == self.target_index {
                continue;
            }
            let y_prime = substance.proportion() / (1.0 - y_target);
            let d_ai = binary_diffusivity(target, substance, self.temperature, self.pressure)?;
            let term = y_prime / d_ai;
            debug!(
                "{}: y = {}, y' = {:.6}, D = {:.6e} cm2/s, y'/D = {:.6e}",
                substance.name(),
                substance.proportion(),
                y_prime,
                d_ai,
                term
            );
            sum_terms += term;
            pairs.push(PairContribution {
                partner: substance.name().to_string(),
                proportion: substance.proportion(),
                corrected_proportion: y_prime,
                binary_diffusivity: d_ai,
                term,
            });
        }
        let diffusivity = if sum_terms > 0.0 { 1.0 / sum_terms } else { 0.0 };
        info!(
            "sum of terms {:.6e}, D in mixture = {:.6e} cm2/s",
            sum_terms, diffusivity
        );
        Ok(MixtureResult {
            diffusivity,
            mixture_type: MixtureType::Multicomponent,
            pairs,
        })
    }
}

/// |sum(y) - 1| must not exceed the tolerance
pub fn validate_proportions(substances: &[Substance], tolerance: f64) -> Result<(), DiffusionError> {
    let total: f64 = substances.iter().map(|s| s.proportion()).sum();
    if (total - 1.0).abs() > tolerance {
        return Err(DiffusionError::ProportionSum { total });
    }
    Ok(())
}
