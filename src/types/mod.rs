pub mod config;
pub mod review;
pub mod status;
