pub mod absorption;
pub mod field;
pub mod forces;
pub mod integrate;

pub use absorption::*;
pub use field::*;
pub use forces::*;
pub use integrate::*;
