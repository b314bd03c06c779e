pub mod run;
pub mod classify;
pub mod extract;
pub mod strategies;
