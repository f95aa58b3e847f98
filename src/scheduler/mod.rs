pub mod policy;
pub mod request;
