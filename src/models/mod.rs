pub mod resource;
pub mod retry;
pub mod slack;
pub mod stack_event;
pub mod status;
