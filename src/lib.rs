mod error;
mod combi;
mod tableau;

pub use error::*;
pub use combi::*;
pub use tableau::*;
