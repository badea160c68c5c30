//! Generate fluent C++ builder wrappers from a C header of descriptor structs.
//!
//! The pipeline is a single forward pass:
//! scanner → patterns → registry/classify → codegen, framed by the fixed
//! template text. [`driver::generate`] runs the whole thing on a string.

pub mod cli;
pub mod classify;
pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod ir;
pub mod patterns;
pub mod registry;
pub mod scanner;
pub mod template;

pub use config::GeneratorConfig;
pub use driver::{collect, generate, render};
pub use error::GenerateError;
