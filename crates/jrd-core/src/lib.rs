pub mod config;
pub mod logging;

pub mod artifact;
pub mod endpoints;
pub mod locator;
pub mod pipeline;
pub mod resolver;
pub mod retrieve;
pub mod retry;
pub mod session;
pub mod storage;
pub mod transport;
