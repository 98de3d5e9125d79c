use std::fmt::Display;

/// Coarse grouping of failures: everything up to and including decoding is a
/// decode failure, everything after the transform is an encode failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Encode,
}

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToDetectImageFormat(std::io::Error),
    FailedToDecodeImage(image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToEncodeImage(image::ImageError),
    FailedToFlushOutputFile(std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnableToOpenInputFileForReading(..)
            | Self::FailedToDetectImageFormat(_)
            | Self::FailedToDecodeImage(_) => ErrorKind::Decode,
            Self::UnableToOpenOutputFileForWriting(..)
            | Self::FailedToEncodeImage(_)
            | Self::FailedToFlushOutputFile(_) => ErrorKind::Encode,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToDetectImageFormat(error) => {
                write!(f, "Failed to detect format of input image: {}", error)
            }
            Self::FailedToDecodeImage(error) => {
                write!(f, "Failed to decode input image: {}", error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToEncodeImage(error) => {
                write!(f, "Failed to encode output image as PNG: {}", error)
            }
            Self::FailedToFlushOutputFile(error) => {
                write!(f, "Failed to flush output file: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::FailedToDetectImageFormat(error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToFlushOutputFile(error) => Some(error),
            Self::FailedToDecodeImage(error) | Self::FailedToEncodeImage(error) => Some(error),
        }
    }
}
