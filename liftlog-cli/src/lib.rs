// Library exports for the liftlog CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod storage;
