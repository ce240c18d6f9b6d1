pub use bitvector::BitVector;
pub use config::Config;
pub use constraints::{Constraints, Rejection, Stricter};
pub use generator::Generator;
pub use symbol::Symbol;

pub mod ambiguity;
pub mod bitvector;
pub mod config;
pub mod constraints;
mod generator;
pub mod merge;
pub mod processors;
mod symbol;
