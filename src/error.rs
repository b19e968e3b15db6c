//! Error handling module and error types

use std::process;

use colored::Colorize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    // Construction errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // CLI errors
    #[error("Unknown sample '{0}'. Hint: use --list to see the available samples.")]
    UnknownSample(String),
}

pub type ExprResult<T> = Result<T, ExprError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: ExprError) -> ! {
        let message = error.to_string();

        if cfg!(test) {
            panic!("Error: {}", message.red().clear());
        } else {
            eprintln!("Error: {}", message.red());
            process::exit(1);
        }
    }

    pub fn handle_result<T>(result: ExprResult<T>) -> T {
        match result {
            Ok(val) => val,
            Err(error) => Self::handle_error(error),
        }
    }
}
