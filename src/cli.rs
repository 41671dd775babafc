pub mod cli_examples;
/// prompts for gas and liquid requests
pub mod cli_input;
pub mod cli_main;
