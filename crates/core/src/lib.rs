//! # Ward Core
//!
//! Core logic for the ward book: a record of the patients admitted to a hospital's wards.
//!
//! This crate contains:
//! - the person model and the record book that holds it
//! - the command parser and the commands it produces
//! - JSON storage of the record book under the configured data file
//!
//! **No front-end concerns**: reading input, printing output and logging setup belong in the
//! `wardbook` CLI or the interactive runner.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod sample_data;
pub mod storage;

pub use commands::{Command, CommandOutput};
pub use config::{data_file_from_env_value, CoreConfig};
pub use error::{
    CommandError, CommandResult, ParseError, ParseResult, StorageError, StorageResult, WardError,
    WardResult,
};
pub use index::Index;
pub use logic::LogicManager;
pub use model::{Model, ModelManager, Person, PersonPredicate, RecordBook};
pub use parser::parse_command;
pub use storage::JsonRecordStorage;
