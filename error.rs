use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Missing building_unit in the event")]
    MissingBuildingUnit,

    #[error("No tenant information found for {0}")]
    NotFound(String),

    // Lookup failures render the same body as NotFound
    #[error("Unable to get tenant info for {unit}: {message}")]
    Store { unit: String, message: String },

    #[error("{0}")]
    Publish(String),
}

impl ReminderError {
    pub fn status_code(&self) -> u16 {
        match self {
            ReminderError::MissingBuildingUnit => 400,
            ReminderError::NotFound(_) | ReminderError::Store { .. } => 404,
            ReminderError::Publish(_) => 500,
        }
    }

    pub fn client_message(&self) -> String {
        match self {
            ReminderError::Store { unit, .. } => ReminderError::NotFound(unit.clone()).to_string(),
            other => other.to_string(),
        }
    }
}
