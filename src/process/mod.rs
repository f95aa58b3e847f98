pub mod process;
pub mod workload;
