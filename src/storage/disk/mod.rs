pub mod disk_model;
