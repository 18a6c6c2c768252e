mod address;
mod batch;
mod catalog;
mod outcome;
mod zone;

pub use address::*;
pub use batch::*;
pub use catalog::*;
pub use outcome::*;
pub use zone::*;
