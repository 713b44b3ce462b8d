pub mod error;
pub mod output_macros;
pub mod tracing_init;

pub use error::{ReuniError, Result};
