use core::fmt;

/// Definition: The failure kinds reported by the driver and the facade
///
/// The set is closed: no textual detail crosses the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bad instance index, out-of-range coordinate, unsupported orientation,
    /// font size or color format
    InvalidArgument,
    /// The operation is not provided by the active controller
    UnsupportedFeature,
    /// A bus transaction reported failure
    TransportFailure,
    /// A dependent sub-call (e.g. controller bring-up) failed
    ComponentFailure,
}

impl Error {
    /// The board-support status code for this error kind
    pub const fn code(self) -> i32 {
        match self {
            Error::InvalidArgument => -2,
            Error::ComponentFailure => -5,
            Error::TransportFailure => -8,
            Error::UnsupportedFeature => -11,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidArgument => "invalid argument",
            Error::UnsupportedFeature => "feature not supported",
            Error::TransportFailure => "bus transaction failed",
            Error::ComponentFailure => "component failure",
        })
    }
}

impl core::error::Error for Error {}

/// Shorthand for results carrying [Error](enum.Error.html)
pub type Result<T> = core::result::Result<T, Error>;
