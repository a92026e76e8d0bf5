//! This crate provides a generation based evolution engine together with building blocks
//! to assemble evolutionary algorithms from interchangeable parts: candidate factories,
//! fitness evaluators, evolution operators, termination conditions and observers.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod example;
pub mod population;
pub mod prelude;
pub mod termination;
pub mod utils;
