pub mod config;
pub mod matching;
pub mod store;
pub mod types;
pub mod wallet;
pub mod web;

pub use web::start_web_server;
