use crate::Diffusion::diffusion_api::{handle_gas_json, handle_liquid_json};
use crate::Diffusion::gas_diffusion::BinaryPair;
use crate::Diffusion::liquid_diffusion::{
    HaydukLaudie, LiquidCorrelation, LiquidModel, Scheibel, Tyne, WilkeChang, association_factor,
    tyn_calus_volume,
};
use crate::Diffusion::mixture::Mixture;
use crate::Diffusion::substance::Substance;
use crate::Diffusion::units::{pressure_to_atm, temperature_to_kelvin};
use crate::settings::Settings;
use approx::assert_relative_eq;

pub fn diffusion_examples(task: usize) {
    match task {
        0 => {
            // methane - ethane at 25 C and 1 bar
            let methane = Substance::new("CH4", 16.04, 98.6, 190.6, 0.5).unwrap();
            let ethane = Substance::new("C2H6", 30.07, 145.5, 305.3, 0.5).unwrap();
            let T = temperature_to_kelvin(25.0, "C");
            let P = pressure_to_atm(1.0, "bar");
            let pair = BinaryPair::new(&methane, &ethane, T, P).unwrap();
            println!(
                "sigma_AB = {:.4} A, T* = {:.4}, Omega_D = {:.4}",
                pair.collision_diameter(),
                pair.reduced_temperature(),
                pair.collision_integral()
            );
            let d = pair.diffusivity().unwrap();
            println!("D_AB = {:.6e} cm2/s", d);
            let reversed = BinaryPair::new(&ethane, &methane, T, P).unwrap();
            assert_relative_eq!(d, reversed.diffusivity().unwrap(), epsilon = 1e-15);
        }
        1 => {
            let substances = vec![
                Substance::new("CH4", 16.04, 98.6, 190.6, 0.85).unwrap(),
                Substance::new("C2H6", 30.07, 145.5, 305.3, 0.07).unwrap(),
                Substance::new("C3H8", 44.10, 200.0, 369.8, 0.03).unwrap(),
                Substance::new("N2", 28.01, 89.8, 126.2, 0.05).unwrap(),
            ];
            let T = temperature_to_kelvin(60.0, "F");
            let P = pressure_to_atm(500.0, "psi");
            let mixture = Mixture::new("C3H8", substances, T, P).unwrap();
            let result = mixture.calculate().unwrap();
            println!("{:?} mixture, target {}", result.mixture_type, mixture.target().name());
            for pair in &result.pairs {
                println!(
                    "{:>6}: y = {:.3}, y' = {:.4}, D = {:.4e} cm2/s",
                    pair.partner, pair.proportion, pair.corrected_proportion, pair.binary_diffusivity
                );
            }
            println!("D_mix = {:.6e} cm2/s", result.diffusivity);
        }
        2 => {
            // ethanol (Vc = 167 cm3/mol) in water at 25 C
            let Va = tyn_calus_volume(167.0);
            let T = 298.15;
            let models: Vec<LiquidModel> = vec![
                WilkeChang {
                    temperature: T,
                    association_factor: association_factor("water"),
                    solvent_molecular_mass: 18.015,
                    viscosity: 0.89,
                    molar_volume: Va,
                }
                .into(),
                HaydukLaudie {
                    viscosity: 0.89,
                    molar_volume: Va,
                }
                .into(),
                Scheibel {
                    temperature: T,
                    viscosity: 0.89,
                    molar_volume: Va,
                    solvent_molar_volume: 18.7,
                }
                .into(),
                Tyne {
                    reference_diffusivity: 1.24e-5,
                    reference_temperature: T,
                    temperature: 323.15,
                    critical_temperature: 647.1,
                    vaporization_enthalpy: 40650.0,
                }
                .into(),
            ];
            println!("Va (Tyn-Calus) = {:.3} cm3/mol", Va);
            for model in models {
                match model.diffusivity() {
                    Ok(d) => println!("{:>14}: D = {:.4e} cm2/s", model.method(), d),
                    Err(e) => println!("{:>14}: {}", model.method(), e),
                }
            }
        }
        3 => {
            let settings = Settings::default();
            let gas = r#"{
                "substances": [
                    {"name": "H2", "molecular_mass": 2.016, "critical_volume": 65.0,
                     "critical_temperature": -239.95, "temp_unit": "C", "proportion": 0.4},
                    {"name": "N2", "molecular_mass": 28.01, "critical_volume": 89.8,
                     "critical_temperature": 126.2, "temp_unit": "K", "proportion": 0.6}
                ],
                "target_substance": "H2",
                "temperature": 500.0, "temp_unit": "K",
                "pressure": 760.0, "pressure_unit": "torr"
            }"#;
            println!("{}", handle_gas_json(gas, &settings));
            let liquid = r#"{"method": "hayduk_laudie", "viscosity": 0.89, "critical_volume": 167.0}"#;
            println!("{}", handle_liquid_json(liquid, &settings));
            let wrong = r#"{"method": "stokes_einstein"}"#;
            println!("{}", handle_liquid_json(wrong, &settings));
        }
        _ => println!("No such example: {}", task),
    }
}
