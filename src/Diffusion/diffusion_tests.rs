///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Diffusion::collision_integral::collision_integral;
    use crate::Diffusion::diffusion_api::{
        GasRequest, GasResponse, LiquidRequest, LiquidResponse, SubstanceInput, calculate_gas,
        calculate_liquid, handle_gas_json,
    };
    use crate::Diffusion::gas_diffusion::binary_diffusivity;
    use crate::Diffusion::liquid_diffusion::LiquidMethod;
    use crate::Diffusion::mixture::{Mixture, MixtureType};
    use crate::Diffusion::substance::Substance;
    use crate::Diffusion::units::{pressure_to_atm, temperature_to_kelvin};
    use crate::Utils::load_from_file::parse_tasks;
    use crate::settings::Settings;
    use approx::assert_relative_eq;

    fn natural_gas() -> Vec<Substance> {
        vec![
            Substance::new("CH4", 16.04, 98.6, 190.6, 0.2).unwrap(),
            Substance::new("C2H6", 30.07, 145.5, 305.3, 0.3).unwrap(),
            Substance::new("N2", 28.01, 89.8, 126.2, 0.5).unwrap(),
        ]
    }

    #[test]
    fn test_reference_values() {
        let s = natural_gas();
        let T = temperature_to_kelvin(25.0, "C");
        let P = pressure_to_atm(1.0, "atm");
        let d_12 = binary_diffusivity(&s[0], &s[1], T, P).unwrap();
        let d_13 = binary_diffusivity(&s[0], &s[2], T, P).unwrap();
        assert_relative_eq!(d_12, 0.147027, epsilon = 1e-5);
        assert_relative_eq!(d_13, 0.204639, epsilon = 1e-5);
        let mixture = Mixture::new("CH4", s, T, P).unwrap();
        assert_relative_eq!(mixture.diffusivity().unwrap(), 0.178421, epsilon = 1e-5);
    }

    #[test]
    fn test_tabulated_collision_points() {
        assert_eq!(collision_integral(1.00), 1.439);
        assert_relative_eq!(collision_integral(0.325), 2.569, epsilon = 1e-12);
        assert_eq!(collision_integral(0.10), 2.662);
        assert_eq!(collision_integral(95.0), 0.5256);
    }

    #[test]
    fn test_binary_request_equals_engine() {
        let s = natural_gas();
        let engine = binary_diffusivity(&s[0], &s[2], 400.0, 2.0).unwrap();
        let request = GasRequest {
            substances: vec![
                SubstanceInput {
                    name: "CH4".to_string(),
                    molecular_mass: 16.04,
                    critical_volume: 98.6,
                    critical_temperature: 190.6,
                    temp_unit: "K".to_string(),
                    proportion: 0.4,
                },
                SubstanceInput {
                    name: "N2".to_string(),
                    molecular_mass: 28.01,
                    critical_volume: 89.8,
                    critical_temperature: 126.2,
                    temp_unit: "K".to_string(),
                    proportion: 0.6,
                },
            ],
            target_substance: "N2".to_string(),
            temperature: 400.0,
            temp_unit: "K".to_string(),
            pressure: 2.0,
            pressure_unit: "atm".to_string(),
        };
        let response = calculate_gas(&request, &Settings::default()).unwrap();
        assert_eq!(response.mixture_type, MixtureType::Binary);
        assert_relative_eq!(response.diffusivity, engine, epsilon = 1e-15);
    }

    #[test]
    fn test_mixture_type_json_tags() {
        let payload = serde_json::json!({
            "substances": [
                {"name": "CH4", "molecular_mass": 16.04, "critical_volume": 98.6,
                 "critical_temperature": 190.6, "temp_unit": "K", "proportion": 0.2},
                {"name": "C2H6", "molecular_mass": 30.07, "critical_volume": 145.5,
                 "critical_temperature": 305.3, "temp_unit": "K", "proportion": 0.3},
                {"name": "N2", "molecular_mass": 28.01, "critical_volume": 89.8,
                 "critical_temperature": 126.2, "temp_unit": "K", "proportion": 0.5}
            ],
            "target_substance": "CH4",
            "temperature": 77.0, "temp_unit": "F",
            "pressure": 14.696, "pressure_unit": "psi"
        })
        .to_string();
        let answer = handle_gas_json(&payload, &Settings::default());
        assert!(answer.contains("\"mixture_type\":\"multicomponent\""));
        let response: GasResponse = serde_json::from_str(&answer).unwrap();
        assert_relative_eq!(response.temperature_k, 298.15, epsilon = 1e-9);
        assert_relative_eq!(response.pressure_atm, 1.0, epsilon = 1e-3);
        assert_eq!(response.pairs.len(), 2);
    }

    #[test]
    fn test_liquid_methods_from_task_file() {
        let content = r#"GAS
LIQUID
[
  {"method": "wilke_chang", "temperature": 298.15, "solvent": "methanol",
   "solvent_molecular_mass": 32.04, "viscosity": 0.55, "molar_volume": 96.0},
  {"method": "hayduk_laudie", "viscosity": 0.89, "critical_volume": 256.0},
  {"method": "scheibel", "temperature": 298.15, "viscosity": 0.6,
   "molar_volume": 14.0, "solvent_molar_volume": 6.0},
  {"method": "tyne", "temperature": 60.0, "temp_unit": "C",
   "reference_diffusivity": 2.0e-5, "reference_temperature": 298.15,
   "critical_temperature": 512.6, "vaporization_enthalpy": 35270.0}
]"#;
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let tasks = parse_tasks(&lines).unwrap();
        assert!(tasks.gas.is_empty());
        let responses: Vec<LiquidResponse> = tasks
            .liquid
            .iter()
            .map(|r: &LiquidRequest| calculate_liquid(r, &Settings::default()).unwrap())
            .collect();
        let methods: Vec<LiquidMethod> = responses.iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![
                LiquidMethod::WilkeChang,
                LiquidMethod::HaydukLaudie,
                LiquidMethod::Scheibel,
                LiquidMethod::Tyne
            ]
        );
        assert_eq!(responses[0].association_factor, Some(1.9));
        assert_eq!(responses[2].scheibel_k, Some(17.5e-8));
        assert_eq!(responses[3].exponent_n, Some(4));
        for r in &responses {
            assert!(r.diffusivity > 0.0 && r.diffusivity < 1e-3);
        }
    }
}
