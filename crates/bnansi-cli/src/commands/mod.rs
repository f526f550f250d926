pub mod config_ops;
pub mod convert_ops;

use bnansi_core::legacy::EncodeError;
use bnansi_core::tables::TablesError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tables: {0}")]
    Tables(#[from] TablesError),
    #[error("cannot encode output: {0}")]
    Encode(#[from] EncodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;
