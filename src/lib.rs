#[allow(non_snake_case)]
pub mod Diffusion;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
