use std::fmt;

/// Represents errors that can occur while talking to the device location
/// service or driving the acquisition lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable(String), // No fix could be obtained
    TaskSpawn(String),   // The acquisition thread could not be started
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "Permission to access location was denied")
            }
            LocationError::Unavailable(ref reason) => {
                write!(f, "No location available: {}", reason)
            }
            LocationError::TaskSpawn(ref reason) => {
                write!(f, "Could not start location acquisition: {}", reason)
            }
        }
    }
}

impl std::error::Error for LocationError {}
