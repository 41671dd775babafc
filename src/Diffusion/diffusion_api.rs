//! # Request adapter
//!
//! ## Aim
//! Maps inbound calculation requests (serde structs, usually JSON) to the diffusion engine and
//! maps results and errors back to outbound payloads. Gas and liquid calculations are two
//! independent entry points.
//!
//! ## Main structures
//! - `GasRequest` / `GasResponse`: diffusion of a target substance in a gas mixture
//! - `LiquidRequest` / `LiquidResponse`: liquid correlations selected by `method`
//! - `ErrorResponse`: `{ "error": message, "kind": "validation" | "calculation" }`
//!
//! ## Usage
//! ```rust
//! use DiffuThe::Diffusion::diffusion_api::handle_gas_json;
//! use DiffuThe::settings::Settings;
//! let payload = r#"{
//!     "substances": [
//!         {"name": "CH4", "molecular_mass": 16.04, "critical_volume": 98.6,
//!          "critical_temperature": 190.6, "temp_unit": "K", "proportion": 0.5},
//!         {"name": "C2H6", "molecular_mass": 30.07, "critical_volume": 145.5,
//!          "critical_temperature": 305.3, "temp_unit": "K", "proportion": 0.5}
//!     ],
//!     "target_substance": "CH4",
//!     "temperature": 25.0, "temp_unit": "C",
//!     "pressure": 1.0, "pressure_unit": "atm"
//! }"#;
//! let answer = handle_gas_json(payload, &Settings::default());
//! assert!(answer.contains("\"mixture_type\":\"binary\""));
//! ```
use super::diffusion_errors::DiffusionError;
use super::liquid_diffusion::{
    HaydukLaudie, LiquidCorrelation, LiquidMethod, LiquidModel, Scheibel, Tyne, WilkeChang,
    association_factor, resolve_molar_volume,
};
use super::mixture::{Mixture, MixtureType, PairContribution};
use super::substance::Substance;
use super::units::{pressure_to_atm_with_policy, temperature_to_kelvin_with_policy};
use crate::settings::Settings;
use log::{error, info};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

pub const DIFFUSIVITY_UNITS: &str = "cm²/s";

fn default_temp_unit() -> String {
    "K".to_string()
}
fn default_pressure_unit() -> String {
    "atm".to_string()
}

/////////////////////////////////////////////////////////////////////////////////////////
// GAS  /////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceInput {
    pub name: String,
    /// g/mol
    pub molecular_mass: f64,
    /// cm3/mol
    pub critical_volume: f64,
    pub critical_temperature: f64,
    /// unit of the critical temperature
    #[serde(default = "default_temp_unit")]
    pub temp_unit: String,
    pub proportion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasRequest {
    pub substances: Vec<SubstanceInput>,
    pub target_substance: String,
    pub temperature: f64,
    #[serde(default = "default_temp_unit")]
    pub temp_unit: String,
    pub pressure: f64,
    #[serde(default = "default_pressure_unit")]
    pub pressure_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasResponse {
    pub diffusivity: f64,
    pub units: String,
    pub temperature_k: f64,
    pub pressure_atm: f64,
    pub target_substance: String,
    pub mixture_type: MixtureType,
    #[serde(default)]
    pub pairs: Vec<PairContribution>,
}

pub fn calculate_gas(request: &GasRequest, settings: &Settings) -> Result<GasResponse, DiffusionError> {
    let strict = settings.strict_units;
    let temperature =
        temperature_to_kelvin_with_policy(request.temperature, &request.temp_unit, strict)?;
    let pressure = pressure_to_atm_with_policy(request.pressure, &request.pressure_unit, strict)?;
    info!(
        "gas diffusion of {} in {} substances at {:.2} K, {:.4} atm",
        request.target_substance,
        request.substances.len(),
        temperature,
        pressure
    );
    let substances = request
        .substances
        .iter()
        .map(|s| {
            let tc = temperature_to_kelvin_with_policy(s.critical_temperature, &s.temp_unit, strict)?;
            Substance::new(
                &s.name,
                s.molecular_mass,
                s.critical_volume,
                tc,
                s.proportion,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mixture = Mixture::with_tolerance(
        &request.target_substance,
        substances,
        temperature,
        pressure,
        settings.proportion_tolerance,
    )?;
    let result = mixture.calculate()?;
    info!("D = {:.6e} {}", result.diffusivity, DIFFUSIVITY_UNITS);
    Ok(GasResponse {
        diffusivity: result.diffusivity,
        units: DIFFUSIVITY_UNITS.to_string(),
        temperature_k: temperature,
        pressure_atm: pressure,
        target_substance: request.target_substance.clone(),
        mixture_type: result.mixture_type,
        pairs: result.pairs,
    })
}

impl GasResponse {
    pub fn report_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value"]);
        table.add_row(row!["Target substance", self.target_substance]);
        table.add_row(row!["Mixture", format!("{:?}", self.mixture_type)]);
        table.add_row(row!["T, K", format!("{:.2}", self.temperature_k)]);
        table.add_row(row!["P, atm", format!("{:.4}", self.pressure_atm)]);
        table.add_row(row![
            format!("D, {}", self.units),
            format!("{:.6e}", self.diffusivity)
        ]);
        table
    }
    /// breakdown of the multicomponent sum, None for binary mixtures
    pub fn pairs_table(&self) -> Option<Table> {
        if self.pairs.is_empty() {
            return None;
        }
        let mut table = Table::new();
        table.add_row(row!["Partner", "y", "y'", "D_Ai, cm²/s", "y'/D_Ai"]);
        for p in &self.pairs {
            table.add_row(row![
                p.partner,
                format!("{:.4}", p.proportion),
                format!("{:.4}", p.corrected_proportion),
                format!("{:.6e}", p.binary_diffusivity),
                format!("{:.6e}", p.term)
            ]);
        }
        Some(table)
    }
    pub fn print_report(&self) {
        self.report_table().printstd();
        if let Some(pairs) = self.pairs_table() {
            pairs.printstd();
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// LIQUID  //////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidRequest {
    pub method: String,
    pub temperature: Option<f64>,
    pub temp_unit: Option<String>,
    /// Wilke-Chang: solvent name for the association table
    pub solvent: Option<String>,
    /// Wilke-Chang: explicit association factor, overrides the table
    pub association_factor: Option<f64>,
    pub solvent_molecular_mass: Option<f64>,
    /// cP
    pub viscosity: Option<f64>,
    /// solute molar volume, cm3/mol
    pub molar_volume: Option<f64>,
    /// solute critical volume, cm3/mol, Tyn-Calus fallback
    pub critical_volume: Option<f64>,
    pub solvent_molar_volume: Option<f64>,
    pub solvent_critical_volume: Option<f64>,
    /// Tyne: known diffusivity at the reference temperature, cm2/s
    pub reference_diffusivity: Option<f64>,
    pub reference_temperature: Option<f64>,
    pub reference_temp_unit: Option<String>,
    pub critical_temperature: Option<f64>,
    pub critical_temp_unit: Option<String>,
    /// kJ/kmol
    pub vaporization_enthalpy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidResponse {
    pub diffusivity: f64,
    pub temperature_k: Option<f64>,
    pub method: LiquidMethod,
    pub units: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub viscosity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub molar_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solvent_molar_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solvent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solvent_molecular_mass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub association_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scheibel_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exponent_n: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reference_temperature_k: Option<f64>,
}

impl LiquidResponse {
    fn empty(method: LiquidMethod, temperature_k: Option<f64>) -> Self {
        Self {
            diffusivity: 0.0,
            temperature_k,
            method,
            units: DIFFUSIVITY_UNITS.to_string(),
            viscosity: None,
            molar_volume: None,
            solvent_molar_volume: None,
            solvent: None,
            solvent_molecular_mass: None,
            association_factor: None,
            scheibel_k: None,
            exponent_n: None,
            reference_temperature_k: None,
        }
    }
}

fn require(value: Option<f64>, method: LiquidMethod, field: &'static str) -> Result<f64, DiffusionError> {
    value.ok_or(DiffusionError::MissingField {
        method: method.as_str(),
        field,
    })
}

fn kelvin(
    value: Option<f64>,
    unit: Option<&str>,
    method: LiquidMethod,
    field: &'static str,
    strict: bool,
) -> Result<f64, DiffusionError> {
    let value = require(value, method, field)?;
    let unit = unit.unwrap_or("K");
    temperature_to_kelvin_with_policy(value, unit, strict)
}

/// Builds the correlation selected by `method` and the echo of its inputs.
pub fn build_liquid_model(
    request: &LiquidRequest,
    settings: &Settings,
) -> Result<(LiquidModel, LiquidResponse), DiffusionError> {
    let method: LiquidMethod = request.method.parse()?;
    let strict = settings.strict_units;
    let solute_volume = || {
        resolve_molar_volume(request.molar_volume, request.critical_volume).ok_or(
            DiffusionError::MissingField {
                method: method.as_str(),
                field: "molar_volume",
            },
        )
    };
    match method {
        LiquidMethod::WilkeChang => {
            let T = kelvin(request.temperature, request.temp_unit.as_deref(), method, "temperature", strict)?;
            let phi = match (request.association_factor, &request.solvent) {
                (Some(phi), _) => phi,
                (None, Some(solvent)) => association_factor(solvent),
                (None, None) => {
                    return Err(DiffusionError::MissingField {
                        method: method.as_str(),
                        field: "solvent",
                    });
                }
            };
            let model = WilkeChang {
                temperature: T,
                association_factor: phi,
                solvent_molecular_mass: require(
                    request.solvent_molecular_mass,
                    method,
                    "solvent_molecular_mass",
                )?,
                viscosity: require(request.viscosity, method, "viscosity")?,
                molar_volume: solute_volume()?,
            };
            let mut echo = LiquidResponse::empty(method, Some(T));
            echo.viscosity = Some(model.viscosity);
            echo.molar_volume = Some(model.molar_volume);
            echo.solvent = request.solvent.clone();
            echo.solvent_molecular_mass = Some(model.solvent_molecular_mass);
            echo.association_factor = Some(phi);
            Ok((model.into(), echo))
        }
        LiquidMethod::HaydukLaudie => {
            let T = match request.temperature {
                Some(_) => Some(kelvin(
                    request.temperature,
                    request.temp_unit.as_deref(),
                    method,
                    "temperature",
                    strict,
                )?),
                None => None,
            };
            let model = HaydukLaudie {
                viscosity: require(request.viscosity, method, "viscosity")?,
                molar_volume: solute_volume()?,
            };
            let mut echo = LiquidResponse::empty(method, T);
            echo.viscosity = Some(model.viscosity);
            echo.molar_volume = Some(model.molar_volume);
            Ok((model.into(), echo))
        }
        LiquidMethod::Scheibel => {
            let T = kelvin(request.temperature, request.temp_unit.as_deref(), method, "temperature", strict)?;
            let vb = resolve_molar_volume(
                request.solvent_molar_volume,
                request.solvent_critical_volume,
            )
            .ok_or(DiffusionError::MissingField {
                method: method.as_str(),
                field: "solvent_molar_volume",
            })?;
            let model = Scheibel {
                temperature: T,
                viscosity: require(request.viscosity, method, "viscosity")?,
                molar_volume: solute_volume()?,
                solvent_molar_volume: vb,
            };
            let mut echo = LiquidResponse::empty(method, Some(T));
            echo.viscosity = Some(model.viscosity);
            echo.molar_volume = Some(model.molar_volume);
            echo.solvent_molar_volume = Some(vb);
            echo.scheibel_k = Some(model.k_factor());
            Ok((model.into(), echo))
        }
        LiquidMethod::Tyne => {
            let T1 = kelvin(request.temperature, request.temp_unit.as_deref(), method, "temperature", strict)?;
            let T2 = kelvin(
                request.reference_temperature,
                request.reference_temp_unit.as_deref(),
                method,
                "reference_temperature",
                strict,
            )?;
            let Tc = kelvin(
                request.critical_temperature,
                request.critical_temp_unit.as_deref(),
                method,
                "critical_temperature",
                strict,
            )?;
            let model = Tyne {
                reference_diffusivity: require(
                    request.reference_diffusivity,
                    method,
                    "reference_diffusivity",
                )?,
                reference_temperature: T2,
                temperature: T1,
                critical_temperature: Tc,
                vaporization_enthalpy: require(
                    request.vaporization_enthalpy,
                    method,
                    "vaporization_enthalpy",
                )?,
            };
            let mut echo = LiquidResponse::empty(method, Some(T1));
            echo.exponent_n = Some(model.exponent()?);
            echo.reference_temperature_k = Some(T2);
            Ok((model.into(), echo))
        }
    }
}

pub fn calculate_liquid(
    request: &LiquidRequest,
    settings: &Settings,
) -> Result<LiquidResponse, DiffusionError> {
    let (model, mut response) = build_liquid_model(request, settings)?;
    info!("liquid diffusion, method {}", model.method());
    response.diffusivity = model.diffusivity()?;
    info!("D = {:.6e} {}", response.diffusivity, DIFFUSIVITY_UNITS);
    Ok(response)
}

impl LiquidResponse {
    pub fn report_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value"]);
        table.add_row(row!["Method", self.method]);
        if let Some(t) = self.temperature_k {
            table.add_row(row!["T, K", format!("{:.2}", t)]);
        }
        let optional = [
            ("Viscosity, cP", self.viscosity),
            ("Va, cm3/mol", self.molar_volume),
            ("Vb, cm3/mol", self.solvent_molar_volume),
            ("M solvent, g/mol", self.solvent_molecular_mass),
            ("phi", self.association_factor),
            ("K (Scheibel)", self.scheibel_k),
            ("T reference, K", self.reference_temperature_k),
        ];
        for (name, value) in optional {
            if let Some(v) = value {
                table.add_row(row![name, format!("{:.6}", v)]);
            }
        }
        if let Some(solvent) = &self.solvent {
            table.add_row(row!["Solvent", solvent]);
        }
        if let Some(n) = self.exponent_n {
            table.add_row(row!["n (Tyne)", n]);
        }
        table.add_row(row![
            format!("D, {}", self.units),
            format!("{:.6e}", self.diffusivity)
        ]);
        table
    }
    pub fn print_report(&self) {
        self.report_table().printstd();
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// PAYLOADS  ////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&DiffusionError> for ErrorResponse {
    fn from(err: &DiffusionError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(
            "{{\"error\":\"serialization failed: {}\",\"kind\":\"calculation\"}}",
            e.to_string().replace('"', "'")
        )
    })
}

fn error_json(err: &DiffusionError) -> String {
    error!("calculation failed: {}", err);
    to_json(&ErrorResponse::from(err))
}

/// gas request payload in, response or error payload out
pub fn handle_gas_json(payload: &str, settings: &Settings) -> String {
    let result = serde_json::from_str::<GasRequest>(payload)
        .map_err(DiffusionError::from)
        .and_then(|request| calculate_gas(&request, settings));
    match result {
        Ok(response) => to_json(&response),
        Err(e) => error_json(&e),
    }
}

/// liquid request payload in, response or error payload out
pub fn handle_liquid_json(payload: &str, settings: &Settings) -> String {
    let result = serde_json::from_str::<LiquidRequest>(payload)
        .map_err(DiffusionError::from)
        .and_then(|request| calculate_liquid(&request, settings));
    match result {
        Ok(response) => to_json(&response),
        Err(e) => error_json(&e),
    }
}
