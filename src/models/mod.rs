pub mod enums;
pub mod indicator;
pub mod report;

pub use enums::*;
pub use indicator::*;
pub use report::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
