pub mod arithmetic;
pub mod error;
