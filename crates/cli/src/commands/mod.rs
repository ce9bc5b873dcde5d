pub mod bench;
pub mod config;
pub mod error;
pub mod plugins;
pub mod relayers;
