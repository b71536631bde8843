use anyhow::Error;
use pocsift_config::ConfigError;
use pocsift_io::TableError;
use std::io::ErrorKind;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            };
        }
        if let Some(table_err) = cause.downcast_ref::<TableError>() {
            return table_exit_code(table_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn table_exit_code(err: &TableError) -> u8 {
    match err {
        TableError::Read { source, .. } if source.kind() == ErrorKind::NotFound => EXIT_NOT_FOUND,
        TableError::MissingColumn(_) | TableError::Csv(_) => EXIT_INVALID_INPUT,
        TableError::Read { .. } | TableError::Write { .. } | TableError::Io(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::MissingConfigFile(_) => EXIT_NOT_FOUND,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::EmptyPath { .. }
        | ConfigError::InvalidMissingValue(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, invalid_input, EXIT_INVALID_INPUT, EXIT_NOT_FOUND};
    use anyhow::Context as _;
    use pocsift_io::TableError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn missing_input_file_maps_to_not_found() {
        let err: anyhow::Result<()> = Err(TableError::Read {
            path: PathBuf::from("POC_LIST.csv"),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
        .context("read input table");
        let err = err.unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn schema_errors_map_to_invalid_input() {
        let err = anyhow::Error::from(TableError::MissingColumn("agency"));
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
        assert_eq!(exit_status_for(&invalid_input("bad flag")), EXIT_INVALID_INPUT);
    }
}
