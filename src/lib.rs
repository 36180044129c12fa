pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod matcher;
pub mod refine;
