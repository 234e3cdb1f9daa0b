use serde::{Deserialize, Serialize};

/// State machine for one asynchronous ingestion job.
///
/// Transitions are one-directional: Pending -> Progress -> Success | Failure.
/// Terminal states are final; a failed ingestion is resubmitted as a new job
/// with a new task id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Pending,
    Progress,
    Success,
    Failure,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Success | JobState::Failure)
    }

    pub fn can_transition_to(&self, next: JobState) -> bool {
        matches!(
            (self, next),
            (JobState::Pending, JobState::Progress)
                | (JobState::Progress, JobState::Success)
                | (JobState::Progress, JobState::Failure)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Pending => "PENDING",
            JobState::Progress => "PROGRESS",
            JobState::Success => "SUCCESS",
            JobState::Failure => "FAILURE",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "PENDING" => Ok(JobState::Pending),
            "PROGRESS" => Ok(JobState::Progress),
            "SUCCESS" => Ok(JobState::Success),
            "FAILURE" => Ok(JobState::Failure),
            other => Err(format!("Invalid job state: {}", other)),
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
