pub mod scheduler;
pub mod storage;
