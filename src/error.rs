// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::error;
use std::fmt;

/// A specialized `Result` type for the high-level operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// SVG parsing errors.
#[derive(Debug)]
pub enum ParserError {
    /// The root element of a parsed document must be an `svg` element.
    ///
    /// Contains the tag name of the actual root element.
    NoSvgElement(String),

    /// A `roxmltree` error.
    ///
    /// The text is not a well-formed XML.
    RoXmlError(roxmltree::Error),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserError::NoSvgElement(ref name) => {
                write!(f, "the root element is '{}' and not 'svg'", name)
            }
            ParserError::RoXmlError(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl error::Error for ParserError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ParserError::NoSvgElement(_) => None,
            ParserError::RoXmlError(ref e) => Some(e),
        }
    }
}

impl From<roxmltree::Error> for ParserError {
    fn from(value: roxmltree::Error) -> Self {
        ParserError::RoXmlError(value)
    }
}


/// Errors of the split, compose and color operations.
#[derive(Debug)]
pub enum Error {
    /// One of the input documents cannot be parsed.
    ParsingFailed(ParserError),

    /// A composition requires at least one input document.
    EmptyInput,

    /// An element index is outside of the addressable elements list.
    IndexOutOfRange {
        /// Requested index.
        index: isize,
        /// Number of addressable elements in the document.
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ParsingFailed(ref e) => {
                write!(f, "failed to parse an SVG document cause {}", e)
            }
            Error::EmptyInput => {
                write!(f, "at least one SVG document is required")
            }
            Error::IndexOutOfRange { index, count } => {
                write!(f, "element index {} is out of range 0..{}", index, count)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::ParsingFailed(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParserError> for Error {
    fn from(value: ParserError) -> Self {
        Error::ParsingFailed(value)
    }
}
