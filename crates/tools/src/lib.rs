pub mod errors;
pub mod stack;
