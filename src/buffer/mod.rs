pub mod buffer_cache;
