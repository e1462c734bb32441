#![no_std]

pub mod auction;
pub mod bid;
pub mod checks;
pub mod distribution;
pub mod errors;
pub mod event;
pub mod guard;
pub mod traits;
pub mod types;
