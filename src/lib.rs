pub mod checker;
pub mod cli;
pub mod cmake;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod publish;
pub mod stamper;
pub mod ui;
pub mod warning;

pub use error::{DocReleaseError, Result};
