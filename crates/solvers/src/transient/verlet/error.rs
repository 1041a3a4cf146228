use super::ScheduleError;

/// Errors that can occur during Verlet integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}
