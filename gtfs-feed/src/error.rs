//! Module for the error management
use thiserror::Error;

/// Specific line from a CSV file that could not be read
#[derive(Debug)]
pub struct LineError {
    /// Headers of the CSV file
    pub headers: Vec<String>,
    /// Values of the line that could not be parsed
    pub values: Vec<String>,
}

/// Why a single raw value could not be converted by a [crate::converters::Converter]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The value is empty and the converter has no null representation
    #[error("empty value")]
    Empty,
    /// The value does not follow the expected encoding
    #[error("{0}")]
    Malformed(String),
}

/// An error that can occur when processing GTFS data.
#[derive(Error, Debug)]
pub enum Error {
    /// A column required by the schema is absent from the header, or empty on a row
    #[error("Required field {field_name} not found in {file_name} (line {line})")]
    RequiredFieldMissing {
        /// Logical name of the file
        file_name: String,
        /// Column that was expected
        field_name: String,
        /// Line of the row in the file
        line: u64,
    },
    /// A present value could not be converted to its field type
    #[error("Invalid value '{value}' for {field_name} in {file_name} (line {line}): {reason}")]
    MalformedValue {
        /// Logical name of the file
        file_name: String,
        /// Column holding the value
        field_name: String,
        /// The raw value
        value: String,
        /// What the converter rejected
        reason: ConversionError,
        /// Line of the row in the file
        line: u64,
    },
    /// A mandatory file is not present in the source
    #[error("Could not find file {0}")]
    MissingFile(String),
    /// A lookup on the feed references an Id that is not present
    #[error("The id {0} is not known")]
    ReferenceError(String),
    /// The given path to the GTFS is neither a file nor a directory
    #[error("Could not read GTFS: {0} is neither a file nor a directory")]
    NotFileNorDirectory(String),
    /// The time is not given in the H:MM:SS format
    #[error("'{0}' is not a valid time; H:MM:SS format is expected.")]
    InvalidTime(String),
    /// The date is not given in the YYYYMMDD format
    #[error("'{0}' is not a valid date; YYYYMMDD format is expected.")]
    InvalidDate(String),
    /// The color is not given in the RRGGBB format
    #[error("'{0}' is not a valid color; RRGGBB format is expected")]
    InvalidColor(String),
    /// Generic Input/Output error while reading a file
    #[error("impossible to read file")]
    IO(#[from] std::io::Error),
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Impossible to read a CSV file
    #[error("impossible to read csv file '{file_name}'")]
    CSVError {
        /// File name that could not be parsed as CSV
        file_name: String,
        /// The initial error by the csv library
        #[source]
        source: csv::Error,
    },
    /// A row is not valid UTF-8
    #[error("Invalid UTF-8 in {file_name} (line {line})")]
    InvalidEncoding {
        /// Logical name of the file
        file_name: String,
        /// Line of the row in the file
        line: u64,
        /// The initial error by the csv library
        #[source]
        source: csv::FromUtf8Error,
        /// Headers and values of the row, decoded lossily
        line_in_error: LineError,
    },
    /// Error when trying to unzip the GTFS archive
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// True for errors that only concern a single row, which tolerant reading can skip
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            Error::RequiredFieldMissing { .. }
                | Error::MalformedValue { .. }
                | Error::InvalidEncoding { .. }
        )
    }
}
