pub mod buffer;
pub mod config;
pub mod process;
pub mod scheduler;
pub mod simulator;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod tests;
