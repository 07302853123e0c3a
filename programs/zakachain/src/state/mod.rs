pub mod mustahik;
pub mod zakachain_state;

pub use mustahik::*;
pub use zakachain_state::*;
