pub mod kind;

pub use equiv_error::Error;
