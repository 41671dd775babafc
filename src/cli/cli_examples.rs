use crate::Examples::diffusion_examples::diffusion_examples;
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Binary gas mixture");
        println!("2. Multicomponent gas mixture");
        println!("3. Liquid correlations");
        println!("4. JSON requests");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = match get_user_input() {
            Some(choice) => choice,
            None => break,
        };
        match choice.trim() {
            "1" => diffusion_examples(0),
            "2" => diffusion_examples(1),
            "3" => diffusion_examples(2),
            "4" => diffusion_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}
