/// error type and input validation helpers
pub mod diffusion_errors;
/// temperature and pressure unit normalization
pub mod units;
/// substance properties and collision diameter
pub mod substance;
/// tabulated collision integral for diffusion and its interpolation
pub mod collision_integral;
/// Chapman-Enskog binary diffusion coefficient
pub mod gas_diffusion;
/// diffusion of a target substance in a multicomponent gas mixture
/// # Examples
/// ```
/// use DiffuThe::Diffusion::mixture::{Mixture, MixtureType};
/// use DiffuThe::Diffusion::substance::Substance;
/// let substances = vec![
///     Substance::new("CH4", 16.04, 98.6, 190.6, 0.2).unwrap(),
///     Substance::new("C2H6", 30.07, 145.5, 305.3, 0.3).unwrap(),
///     Substance::new("N2", 28.01, 89.8, 126.2, 0.5).unwrap(),
/// ];
/// let mixture = Mixture::new("CH4", substances, 298.15, 1.0).unwrap();
/// let result = mixture.calculate().unwrap();
/// assert_eq!(result.mixture_type, MixtureType::Multicomponent);
/// println!("D_CH4,mix = {:.4e} cm2/s", result.diffusivity);
/// for pair in &result.pairs {
///     println!("{}: y' = {:.3}, D = {:.4e}", pair.partner, pair.corrected_proportion, pair.binary_diffusivity);
/// }
/// ```
pub mod mixture;
/// Wilke-Chang, Hayduk-Laudie, Scheibel and Tyne correlations for liquids
pub mod liquid_diffusion;
/// request/response payloads for gas and liquid calculations
pub mod diffusion_api;
/// tests across the whole calculation chain
pub mod diffusion_tests;
