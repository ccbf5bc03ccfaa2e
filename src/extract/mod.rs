pub mod indicators;
pub mod matchers;
pub mod sanitize;
pub mod status;

pub use indicators::*;
pub use matchers::*;
pub use sanitize::*;
pub use status::*;
