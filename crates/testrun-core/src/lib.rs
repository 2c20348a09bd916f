pub mod detect;
pub mod ecosystem;
pub mod error;
pub mod plan;
pub mod resolver;
pub mod rules;
pub mod runner;
pub mod toolchain;

pub use error::{Result, TestrunError};
