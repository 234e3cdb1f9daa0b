pub mod milvus_store;

pub use milvus_store::{MilvusConfig, MilvusStore};
