pub mod cache;
pub mod config;
pub mod llm_clients;
pub mod parsers;
