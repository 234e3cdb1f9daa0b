pub mod index_type;
pub mod job_state;
pub mod tenant;

pub use index_type::IndexType;
pub use job_state::JobState;
pub use tenant::{TenantKey, is_filter_safe};
