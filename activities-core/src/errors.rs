use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { email: String, activity: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
