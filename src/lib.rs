pub mod catalog;
pub mod cli;
pub mod confirm;
pub mod error;
pub mod horizon;
pub mod suggest;
pub mod urls;

pub use error::{AppError, Result};
