pub mod detect;
pub mod plan;
pub mod rules;
pub mod run;
