//! Interactive commands

pub mod interactive;
pub mod parser;
