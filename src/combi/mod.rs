mod partition;
mod count;
mod gen;

pub use partition::*;
pub use count::*;
pub use gen::*;
