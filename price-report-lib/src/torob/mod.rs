pub mod dto;
pub mod listings;
pub mod search;
