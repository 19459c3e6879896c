//! Common types shared by all record formats.
pub mod date;

/// The string type used for identifiers and short header fields.
#[cfg(feature = "smartstring")]
pub type ShortString = smartstring::alias::String;

/// The string type used for identifiers and short header fields.
#[cfg(not(feature = "smartstring"))]
pub type ShortString = std::string::String;
