mod storage;

pub use storage::StorageError;
