//! Demonstration of `compiler_args`: a small compiler front end whose
//! options are collected by clap, mapped onto a typed configuration tree,
//! and flattened into the argument vector a compiler process expects.

pub mod cli;
pub mod config;
pub mod error;
