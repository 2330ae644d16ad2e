//! Error and warning types for the data-loader crate.
//!
//! Loading has two tiers of failure:
//! - `DataLoadError` is fatal: the dataset cannot be built at all
//! - `LoadWarning` is recoverable: the dataset is built without age ratings

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the dataset from loading.
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The main movie table does not exist
    #[error("File not found: {}. Make sure the dataset is in the data folder.", .path.display())]
    DatasetMissing { path: PathBuf },

    /// The main movie table has no column the loader cannot do without
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// A row of a CSV file could not be read
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Problems with the optional age-rating side table.
///
/// These never abort a load. They travel next to the dataset in
/// [`LoadedDataset`](crate::LoadedDataset) so the caller can show them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    #[error("{} not found. Age ratings will not be available.", .path.display())]
    SideTableMissing { path: PathBuf },

    #[error(
        "{} found, but required columns ({}) are missing.",
        .path.display(),
        quoted_list(.missing)
    )]
    SideTableMalformed { path: PathBuf, missing: Vec<String> },

    #[error(
        "{} could not be read ({reason}). Age ratings will not be available.",
        .path.display()
    )]
    SideTableUnreadable { path: PathBuf, reason: String },
}

fn quoted_list(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_warning_lists_missing_columns() {
        let warning = LoadWarning::SideTableMalformed {
            path: PathBuf::from("data/movies.csv"),
            missing: vec!["title".to_string(), "age_rating".to_string()],
        };

        assert_eq!(
            warning.to_string(),
            "data/movies.csv found, but required columns ('title' and 'age_rating') are missing."
        );
    }

    #[test]
    fn test_csv_error_is_not_prefixed_twice() {
        let csv_err = csv::Reader::from_reader("a,b\n1,2,3\n".as_bytes())
            .records()
            .find_map(|r| r.err())
            .unwrap();
        let message = DataLoadError::from(csv_err).to_string();

        assert_eq!(message.matches("CSV error").count(), 1);
    }

    #[test]
    fn test_dataset_missing_message() {
        let err = DataLoadError::DatasetMissing {
            path: PathBuf::from("data/movies_complete.csv"),
        };
        assert!(err.to_string().starts_with("File not found: data/movies_complete.csv"));
    }
}
