pub mod input_loader;
pub mod render;
pub mod trace;

#[cfg(test)]
mod input_loader_tests;
