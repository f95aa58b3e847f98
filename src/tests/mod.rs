mod scheduler_test;
mod workload_test;
