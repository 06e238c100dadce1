// Domain layer - Core types and pure state transitions
pub mod article;
pub mod climate;
pub mod page;
pub mod rotation;
pub mod view_state;
