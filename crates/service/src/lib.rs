pub mod contacts;
pub mod errors;
pub mod file;
pub mod storage;
