//! Desktop services

mod storage;

pub use storage::open_store;
