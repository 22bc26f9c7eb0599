/*
    Top-level
*/

mod error;
mod magnitude;
mod rounding;
mod util;

pub use error::*;
pub use magnitude::*;
pub use rounding::*;
