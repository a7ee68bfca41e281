//! Process-level models shared by the console binary.

pub mod config;
