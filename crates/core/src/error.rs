use ward_types::FieldError;

/// Errors raised while turning user input into a command.
///
/// These are always reported back to the user; nothing is executed when parsing fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("Index should not be less than 1.")]
    IndexLessThanOne,
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),
    #[error("At least one field to edit must be provided.")]
    NotEdited,
    #[error("Unknown command")]
    UnknownCommand,
    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors raised while executing a parsed command against the model.
///
/// A command that fails leaves the record book exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonDisplayedIndex,
    #[error("Date of birth cannot be later than admission date.")]
    DobLaterThanAdmission,
    #[error("This person already exists in the ward book.")]
    DuplicatePerson,
    #[error("The person could not be found in the ward book.")]
    PersonNotFound,
}

pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Errors raised by the JSON record store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write data file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to create data directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to serialize record book: {0}")]
    Serialization(serde_json::Error),
    #[error("illegal values in data file: {0}")]
    DataConversion(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum WardError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type WardResult<T> = std::result::Result<T, WardError>;
