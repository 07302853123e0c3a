pub mod cpi;
pub mod math;
pub mod pda;
pub mod validation;

pub use math::*;
pub use pda::*;
pub use validation::*;
