pub mod config;
pub mod denial;
pub mod error;
pub mod gate;
