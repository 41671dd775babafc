use super::cli_examples::examples_menu;
use super::cli_input::Prompter;
use crate::Diffusion::diffusion_api::{ErrorResponse, calculate_gas, calculate_liquid};
use crate::Diffusion::diffusion_errors::DiffusionError;
use crate::Utils::load_from_file::LoadData;
use crate::settings::Settings;
use log::error;
use std::io::{self, Write};

pub fn run_interactive_menu(settings: &Settings) {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    loop {
        show_main_menu();
        let choice = match prompter.ask("Enter your choice") {
            Ok(choice) => choice,
            Err(_) => break,
        };
        match choice.as_str() {
            "1" => match prompter.read_gas_request() {
                Ok(request) => match calculate_gas(&request, settings) {
                    Ok(response) => response.print_report(),
                    Err(e) => report_error(&e),
                },
                Err(e) => println!("Input aborted: {}", e),
            },
            "2" => match prompter.read_liquid_request() {
                Ok(request) => match calculate_liquid(&request, settings) {
                    Ok(response) => response.print_report(),
                    Err(e) => report_error(&e),
                },
                Err(e) => println!("Input aborted: {}", e),
            },
            "3" => match prompter.ask("Task file") {
                Ok(file_name) => {
                    if let Err(e) = run_task_file(&file_name, settings) {
                        report_error(&e);
                    }
                }
                Err(e) => println!("Input aborted: {}", e),
            },
            "4" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text
Yellow (\x1b[33m) - Menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - errors
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to DiffuThe: molecular diffusion coefficients\n
    of gases and liquids \n \x1b[0m"
    );
    println!("\x1b[33m1. Gas mixture (Chapman-Enskog)\x1b[0m");
    println!("\x1b[33m2. Liquid correlations\x1b[0m");
    println!("\x1b[33m3. Run task file\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    let _ = io::stdout().flush();
}

fn report_error(e: &DiffusionError) {
    error!("{}", e);
    let payload = ErrorResponse::from(e);
    println!("\x1b[31m{} error: {}\x1b[0m", payload.kind, payload.error);
}

/// Runs every request of a task file and prints the reports; returns the number of failed
/// requests. A request failure does not stop the remaining ones.
pub fn run_task_file(file_name: &str, settings: &Settings) -> Result<usize, DiffusionError> {
    let tasks = LoadData::new(file_name.to_string()).load_tasks()?;
    let mut failed = 0;
    for (i, request) in tasks.gas.iter().enumerate() {
        println!("\x1b[33mGas task {}\x1b[0m", i + 1);
        match calculate_gas(request, settings) {
            Ok(response) => response.print_report(),
            Err(e) => {
                failed += 1;
                report_error(&e);
            }
        }
    }
    for (i, request) in tasks.liquid.iter().enumerate() {
        println!("\x1b[33mLiquid task {} ({})\x1b[0m", i + 1, request.method);
        match calculate_liquid(request, settings) {
            Ok(response) => response.print_report(),
            Err(e) => {
                failed += 1;
                report_error(&e);
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_task_file_counts_failures() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"LIQUID
[
  {{"method": "hayduk_laudie", "viscosity": 0.89, "molar_volume": 59.2}},
  {{"method": "tyne", "temperature": 330.0, "reference_diffusivity": 1e-5,
    "reference_temperature": 298.15, "critical_temperature": 647.1,
    "vaporization_enthalpy": 5000.0}}
]"#
        )
        .unwrap();
        file.flush().unwrap();
        let failed = run_task_file(file.path().to_str().unwrap(), &Settings::default()).unwrap();
        assert_eq!(failed, 1);
        assert!(run_task_file("no_such_task_file.txt", &Settings::default()).is_err());
    }
}
