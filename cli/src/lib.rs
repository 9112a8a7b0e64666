pub mod config;
pub mod engine;
pub mod expr;
pub mod format;
pub mod matchers;
pub mod normalize;
pub mod units;

#[cfg(not(target_arch = "wasm32"))]
pub mod ffi;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use engine::{
    example_commands, extract_numeric, process_voice_input, CalculationResult, Calculator,
    Category, ExampleGroup,
};
pub use format::{format_number, NumberFormat};
