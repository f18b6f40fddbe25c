pub mod domain;
pub mod dto;
pub mod serde_helpers;
