use thiserror::Error;

/// Internal issues indicating inconsistent stored data or possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Every accommodation is written together with its location, so a missing one
    /// means the database was modified outside the API.
    #[error("Accommodation {accommodation_id} has no location")]
    MissingLocation { accommodation_id: i32 },

    /// Stored enum column holds a value the application does not recognise.
    #[error("Accommodation {accommodation_id} has invalid {column} '{value}'")]
    InvalidStoredValue {
        accommodation_id: i32,
        column: &'static str,
        value: String,
    },

    /// Decrementing availability would leave the 64-bit range.
    #[error("Availability of accommodation {accommodation_id} cannot be decremented further")]
    AvailabilityUnderflow { accommodation_id: i32 },
}
