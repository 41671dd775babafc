//! Prompt-driven input of gas and liquid calculation requests.
//!
//! Values with units are typed as one string, e.g. `25 C`, `1.5e5 Pa`, `77°F`.
use crate::Diffusion::diffusion_api::{GasRequest, LiquidRequest, SubstanceInput};
use crate::Diffusion::liquid_diffusion::LiquidMethod;
use regex::Regex;
use std::io::{self, BufRead, Write};

const VALUE_UNIT_PATTERN: &str =
    r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*°?\s*([A-Za-z]*)\s*$";

/// upper bound on the substance count typed at the prompt
pub const MAX_SUBSTANCES: usize = 100;

/// "25 C" -> (25.0, "C"); the unit may be empty
pub fn parse_value_with_unit(input: &str) -> Option<(f64, String)> {
    let re = Regex::new(VALUE_UNIT_PATTERN).ok()?;
    let caps = re.captures(input)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
    Some((value, unit))
}

/// Asks questions on `output` and reads the answers from `input`.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "\x1b[36m{}: \x1b[0m", question)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }
    /// repeats the question until a number is typed
    pub fn ask_number(&mut self, question: &str) -> io::Result<f64> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.output, "Not a number: {}", answer)?,
            }
        }
    }
    /// empty answer gives None
    pub fn ask_optional_number(&mut self, question: &str) -> io::Result<Option<f64>> {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.output, "Not a number: {}", answer)?,
            }
        }
    }
    /// value and unit typed together, missing unit replaced by `default_unit`
    pub fn ask_with_unit(&mut self, question: &str, default_unit: &str) -> io::Result<(f64, String)> {
        loop {
            let answer = self.ask(question)?;
            match parse_value_with_unit(&answer) {
                Some((v, unit)) if unit.is_empty() => return Ok((v, default_unit.to_string())),
                Some((v, unit)) => return Ok((v, unit)),
                None => writeln!(self.output, "Expected a value with unit, e.g. 25 C")?,
            }
        }
    }

    pub fn read_gas_request(&mut self) -> io::Result<GasRequest> {
        let n = loop {
            let n = self.ask_number("Number of substances")?;
            if (2.0..=MAX_SUBSTANCES as f64).contains(&n) && n.fract() == 0.0 {
                break n as usize;
            }
            writeln!(
                self.output,
                "Number of substances must be a whole number from 2 to {}",
                MAX_SUBSTANCES
            )?;
        };
        let mut substances = Vec::with_capacity(n);
        for i in 0..n {
            writeln!(self.output, "\x1b[33mSubstance {}\x1b[0m", i + 1)?;
            let name = self.ask("Name")?;
            let molecular_mass = self.ask_number("Molecular mass, g/mol")?;
            let critical_volume = self.ask_number("Critical volume, cm3/mol")?;
            let (critical_temperature, temp_unit) =
                self.ask_with_unit("Critical temperature (e.g. 190.6 K)", "K")?;
            let proportion = self.ask_number("Mole fraction")?;
            substances.push(SubstanceInput {
                name,
                molecular_mass,
                critical_volume,
                critical_temperature,
                temp_unit,
                proportion,
            });
        }
        let target_substance = self.ask("Target substance")?;
        let (temperature, temp_unit) = self.ask_with_unit("Temperature (e.g. 25 C)", "K")?;
        let (pressure, pressure_unit) = self.ask_with_unit("Pressure (e.g. 1 atm)", "atm")?;
        Ok(GasRequest {
            substances,
            target_substance,
            temperature,
            temp_unit,
            pressure,
            pressure_unit,
        })
    }

    pub fn read_liquid_request(&mut self) -> io::Result<LiquidRequest> {
        let method = loop {
            let answer = self.ask("Method (wilke_chang, hayduk_laudie, scheibel, tyne)")?;
            match answer.parse::<LiquidMethod>() {
                Ok(m) => break m,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };
        let mut request = LiquidRequest {
            method: method.as_str().to_string(),
            ..LiquidRequest::default()
        };
        match method {
            LiquidMethod::WilkeChang => {
                self.read_temperature(&mut request)?;
                let solvent = self.ask("Solvent (name for the association table)")?;
                request.solvent = Some(solvent);
                request.solvent_molecular_mass =
                    Some(self.ask_number("Solvent molecular mass, g/mol")?);
                request.viscosity = Some(self.ask_number("Solvent viscosity, cP")?);
                self.read_solute_volume(&mut request)?;
            }
            LiquidMethod::HaydukLaudie => {
                request.viscosity = Some(self.ask_number("Solvent viscosity, cP")?);
                self.read_solute_volume(&mut request)?;
            }
            LiquidMethod::Scheibel => {
                self.read_temperature(&mut request)?;
                request.viscosity = Some(self.ask_number("Solvent viscosity, cP")?);
                self.read_solute_volume(&mut request)?;
                request.solvent_molar_volume = self.ask_optional_number(
                    "Solvent molar volume, cm3/mol (empty to use critical volume)",
                )?;
                if request.solvent_molar_volume.is_none() {
                    request.solvent_critical_volume =
                        Some(self.ask_number("Solvent critical volume, cm3/mol")?);
                }
            }
            LiquidMethod::Tyne => {
                self.read_temperature(&mut request)?;
                request.reference_diffusivity =
                    Some(self.ask_number("Known diffusivity, cm2/s")?);
                let (t2, unit) = self.ask_with_unit("Temperature of the known value", "K")?;
                request.reference_temperature = Some(t2);
                request.reference_temp_unit = Some(unit);
                let (tc, unit) = self.ask_with_unit("Critical temperature", "K")?;
                request.critical_temperature = Some(tc);
                request.critical_temp_unit = Some(unit);
                request.vaporization_enthalpy =
                    Some(self.ask_number("Vaporization enthalpy, kJ/kmol")?);
            }
        }
        Ok(request)
    }

    fn read_temperature(&mut self, request: &mut LiquidRequest) -> io::Result<()> {
        let (t, unit) = self.ask_with_unit("Temperature (e.g. 25 C)", "K")?;
        request.temperature = Some(t);
        request.temp_unit = Some(unit);
        Ok(())
    }

    fn read_solute_volume(&mut self, request: &mut LiquidRequest) -> io::Result<()> {
        request.molar_volume =
            self.ask_optional_number("Solute molar volume, cm3/mol (empty to use critical volume)")?;
        if request.molar_volume.is_none() {
            request.critical_volume = Some(self.ask_number("Solute critical volume, cm3/mol")?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_value_with_unit() {
        assert_eq!(parse_value_with_unit("25 C"), Some((25.0, "C".to_string())));
        assert_eq!(parse_value_with_unit("77°F"), Some((77.0, "F".to_string())));
        assert_eq!(
            parse_value_with_unit(" 1.5e5 Pa "),
            Some((1.5e5, "Pa".to_string()))
        );
        assert_eq!(parse_value_with_unit("-10.5"), Some((-10.5, String::new())));
        assert_eq!(parse_value_with_unit(".5 bar"), Some((0.5, "bar".to_string())));
        assert_eq!(parse_value_with_unit("abc"), None);
        assert_eq!(parse_value_with_unit("25 C F"), None);
    }

    #[test]
    fn test_read_gas_request() {
        let answers = "x\n2\nCH4\n16.04\n98.6\n190.6 K\n0.5\nC2H6\n30.07\n145.5\n32.15 C\n0.5\nCH4\n25 C\n1\n";
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(answers), &mut output);
        let request = prompter.read_gas_request().unwrap();
        assert_eq!(request.substances.len(), 2);
        assert_eq!(request.substances[1].temp_unit, "C");
        assert_eq!(request.target_substance, "CH4");
        assert_eq!(request.temp_unit, "C");
        assert_eq!(request.pressure_unit, "atm");
        assert_eq!(request.pressure, 1.0);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Not a number: x"));
    }

    #[test]
    fn test_read_gas_request_rejects_huge_count() {
        let answers = "1e20\n101\n2\nCH4\n16.04\n98.6\n190.6\n0.5\nN2\n28.01\n89.8\n126.2\n0.5\nCH4\n298.15\n1\n";
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(answers), &mut output);
        let request = prompter.read_gas_request().unwrap();
        assert_eq!(request.substances.len(), 2);
        assert_eq!(request.substances[1].name, "N2");
        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("whole number from 2 to 100").count(), 2);
    }

    #[test]
    fn test_read_liquid_request() {
        let answers = "stokes\nscheibel\n300\n0.6\n\n200\n6\n";
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(answers), &mut output);
        let request = prompter.read_liquid_request().unwrap();
        assert_eq!(request.method, "scheibel");
        assert_eq!(request.temperature, Some(300.0));
        assert_eq!(request.temp_unit.as_deref(), Some("K"));
        assert_eq!(request.molar_volume, None);
        assert_eq!(request.critical_volume, Some(200.0));
        assert_eq!(request.solvent_molar_volume, Some(6.0));
    }

    #[test]
    fn test_closed_input() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(""), &mut output);
        assert!(prompter.ask("Name").is_err());
    }
}
