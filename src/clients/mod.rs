pub mod cloudformation;
pub mod slack;
