pub mod config;
pub mod constants;
pub mod dates;
pub mod errors;
pub mod events;
pub mod export;
pub mod extract;
pub mod institutions;
pub mod months;
