use thiserror::Error;

/// Invalid user input reported by ledger operations. Surfaced to the user
/// as an alert on the returned page; never fatal, never a mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Please enter a valid distance greater than 0.")]
    InvalidDistance,
    #[error("Please select a club first.")]
    NoClubSelected,
    #[error("no club with id {0}")]
    UnknownClub(String),
}
