pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ports;

#[cfg(test)]
pub mod test_helpers;
