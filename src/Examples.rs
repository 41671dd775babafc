/// worked examples of gas and liquid diffusion calculations
pub mod diffusion_examples;
