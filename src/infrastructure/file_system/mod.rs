pub mod local_file_storage;

pub use local_file_storage::{LocalFileStorage, StoredFile};
