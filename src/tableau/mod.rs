mod tableau;
mod geom;
mod skew;

pub use tableau::*;
pub use skew::*;
