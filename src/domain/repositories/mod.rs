pub mod job_repository;

pub use job_repository::JobRepository;
