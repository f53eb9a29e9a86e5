//! Error handling for the werewolf backend.

pub mod domain;

pub use domain::DomainError;
