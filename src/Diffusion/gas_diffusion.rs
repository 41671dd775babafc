//! # Binary gas diffusion
//!
//! Chapman-Enskog equation in the form used by Welty (Fundamentals of Momentum, Heat and Mass
//! Transfer):
//!
//! D_AB = 0.001858 T^(3/2) (1/M_A + 1/M_B)^(1/2) / (P Omega_D sigma_AB^2)
//!
//! with D_AB in cm2/s, T in K, P in atm, M in g/mol and sigma in Angstrom.
use super::collision_integral::{collision_integral, reduced_temperature};
use super::diffusion_errors::{
    DiffusionError, finite_result, validate_pressure, validate_temperature,
};
use super::substance::Substance;
use log::debug;

const CHAPMAN_ENSKOG_CONST: f64 = 0.001858;

/// Two substances at a given temperature (K) and pressure (atm).
#[derive(Debug, Clone, Copy)]
pub struct BinaryPair<'a> {
    pub substance1: &'a Substance,
    pub substance2: &'a Substance,
    pub temperature: f64,
    pub pressure: f64,
}

impl<'a> BinaryPair<'a> {
    pub fn new(
        substance1: &'a Substance,
        substance2: &'a Substance,
        temperature: f64,
        pressure: f64,
    ) -> Result<Self, DiffusionError> {
        validate_temperature(temperature)?;
        validate_pressure(pressure)?;
        Ok(Self {
            substance1,
            substance2,
            temperature,
            pressure,
        })
    }
    /// sigma_AB = (sigma_A + sigma_B) / 2
    pub fn collision_diameter(&self) -> f64 {
        (self.substance1.collision_diameter() + self.substance2.collision_diameter()) / 2.0
    }

    pub fn reduced_temperature(&self) -> f64 {
        reduced_temperature(
            self.temperature,
            self.substance1.critical_temperature(),
            self.substance2.critical_temperature(),
        )
    }

    pub fn collision_integral(&self) -> f64 {
        collision_integral(self.reduced_temperature())
    }
    /// D_AB, cm2/s
    pub fn diffusivity(&self) -> Result<f64, DiffusionError> {
        let omega_d = self.collision_integral();
        let sigma_ab = self.collision_diameter();
        let T = self.temperature;
        let mass_term = (1.0 / self.substance1.molecular_mass()
            + 1.0 / self.substance2.molecular_mass())
        .sqrt();
        let d_ab = CHAPMAN_ENSKOG_CONST * T.powf(1.5) * mass_term
            / (self.pressure * omega_d * sigma_ab.powi(2));
        debug!(
            "D({}, {}): T* = {:.4}, Omega_D = {:.4}, sigma_AB = {:.4} A, D = {:.6e} cm2/s",
            self.substance1.name(),
            self.substance2.name(),
            self.reduced_temperature(),
            omega_d,
            sigma_ab,
            d_ab
        );
        finite_result(d_ab, "binary diffusivity")
    }
}

/// binary diffusion coefficient of a pair, cm2/s
pub fn binary_diffusivity(
    a: &Substance,
    b: &Substance,
    temperature: f64,
    pressure: f64,
) -> Result<f64, DiffusionError> {
    BinaryPair::new(a, b, temperature, pressure)?.diffusivity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn methane() -> Substance {
        Substance::new("CH4", 16.04, 98.6, 190.6, 0.5).unwrap()
    }
    fn ethane() -> Substance {
        Substance::new("C2H6", 30.07, 145.5, 305.3, 0.5).unwrap()
    }

    #[test]
    fn test_binary_by_hand() {
        let (a, b) = (methane(), ethane());
        let T = 298.15;
        let P = 1.0;
        let pair = BinaryPair::new(&a, &b, T, P).unwrap();
        let sigma = (0.841 * 98.6_f64.cbrt() + 0.841 * 145.5_f64.cbrt()) / 2.0;
        let t_star = T / (190.6 * 305.3 * 0.77_f64.powi(2)).sqrt();
        let omega = collision_integral(t_star);
        let expected = 0.001858 * T.powf(1.5) * (1.0 / 16.04 + 1.0 / 30.07_f64).sqrt()
            / (P * omega * sigma.powi(2));
        assert_relative_eq!(pair.collision_diameter(), sigma, epsilon = 1e-12);
        assert_relative_eq!(pair.reduced_temperature(), t_star, epsilon = 1e-12);
        assert_relative_eq!(pair.diffusivity().unwrap(), expected, epsilon = 1e-12);
        // order of magnitude of a light hydrocarbon pair at ambient conditions
        let d = pair.diffusivity().unwrap();
        assert!(d > 0.05 && d < 0.5);
    }

    #[test]
    fn test_symmetry() {
        let (a, b) = (methane(), ethane());
        let d_ab = binary_diffusivity(&a, &b, 350.0, 2.0).unwrap();
        let d_ba = binary_diffusivity(&b, &a, 350.0, 2.0).unwrap();
        assert_relative_eq!(d_ab, d_ba, epsilon = 1e-15);
    }

    #[test]
    fn test_purity() {
        let (a, b) = (methane(), ethane());
        let first = binary_diffusivity(&a, &b, 400.0, 1.5).unwrap();
        let second = binary_diffusivity(&a, &b, 400.0, 1.5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverse_pressure() {
        let (a, b) = (methane(), ethane());
        let d1 = binary_diffusivity(&a, &b, 400.0, 1.0).unwrap();
        let d2 = binary_diffusivity(&a, &b, 400.0, 2.0).unwrap();
        assert_relative_eq!(d1, 2.0 * d2, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_conditions() {
        let (a, b) = (methane(), ethane());
        assert!(matches!(
            binary_diffusivity(&a, &b, 300.0, 0.0),
            Err(DiffusionError::InvalidPressure(_))
        ));
        assert!(matches!(
            binary_diffusivity(&a, &b, -10.0, 1.0),
            Err(DiffusionError::InvalidTemperature(_))
        ));
    }
}
