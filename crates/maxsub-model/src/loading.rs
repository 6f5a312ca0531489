// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Text loader for input arrays.
//!
//! Every non-blank line holds one array. Elements are separated by
//! whitespace, commas, or both, and the whole list may be wrapped in square
//! brackets, so `1 -2 3`, `1,-2,3` and `[1, -2, 3]` all describe the same
//! array. A `#` starts a comment that runs to the end of the line; lines
//! that are blank after comment removal are skipped. A line with brackets
//! but nothing inside them is an error, because it reads as an explicit
//! empty array.
//!
//! The loader accepts any `BufRead`, file path, raw reader, or string slice.

use crate::sequence::{Sequence, SequenceError};
use num_traits::{PrimInt, Signed};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// The error type for the loading process.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A token could not be parsed into the element type.
    #[error("line {line}: could not parse token '{token}' as type {type_name}")]
    Parse {
        line: usize,
        token: String,
        type_name: &'static str,
    },
    /// A line explicitly describes an array without elements.
    #[error("line {line}: array has no elements")]
    Empty { line: usize },
}

/// Loads arrays of `T` from text, one array per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLoader<T> {
    _marker: PhantomData<T>,
}

impl<T> Default for SequenceLoader<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> SequenceLoader<T>
where
    T: PrimInt + Signed + FromStr,
{
    /// Creates a new `SequenceLoader`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all arrays from a type implementing `BufRead`.
    ///
    /// An input without any arrays yields an empty vector.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Sequence<T>>, LoaderError> {
        let mut sequences = Vec::new();
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            if let Some(seq) = Self::parse_numbered(i + 1, &line)? {
                sequences.push(seq);
            }
        }
        Ok(sequences)
    }

    /// Loads all arrays from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Sequence<T>>, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads all arrays from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Sequence<T>>, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads all arrays from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Sequence<T>>, LoaderError> {
        self.from_reader(s.as_bytes())
    }

    /// Parses a single array. Unlike the multi-line sources, a blank input is
    /// an error here since the caller asked for exactly one array.
    pub fn parse_line(&self, s: &str) -> Result<Sequence<T>, LoaderError> {
        Self::parse_numbered(1, s)?.ok_or(LoaderError::Empty { line: 1 })
    }

    /// Returns `Ok(None)` for lines without content.
    fn parse_numbered(line: usize, raw: &str) -> Result<Option<Sequence<T>>, LoaderError> {
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();

        if content.is_empty() {
            return Ok(None);
        }

        let body = match content.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').unwrap_or(rest),
            None => content,
        };

        let values = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<T>().map_err(|_| LoaderError::Parse {
                    line,
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            })
            .collect::<Result<Vec<T>, LoaderError>>()?;

        match Sequence::new(values) {
            Ok(seq) => Ok(Some(seq)),
            Err(SequenceError::Empty) => Err(LoaderError::Empty { line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_ARRAYS: &str = r#"
        # reference inputs
        -4 -2 -6 5 -6 9
        [-4, 2, -6, 5, -6, 4]     # bracketed
        9,-2,-6,5,-6,4

        -4, -2, -6, 8, -6, 9
    "#;

    #[test]
    fn test_loads_all_formats() {
        let loader = SequenceLoader::<i64>::new();
        let seqs = loader.from_str(REFERENCE_ARRAYS).expect("Failed to load");

        assert_eq!(seqs.len(), 4);
        assert_eq!(seqs[0].as_slice(), &[-4, -2, -6, 5, -6, 9]);
        assert_eq!(seqs[1].as_slice(), &[-4, 2, -6, 5, -6, 4]);
        assert_eq!(seqs[2].as_slice(), &[9, -2, -6, 5, -6, 4]);
        assert_eq!(seqs[3].as_slice(), &[-4, -2, -6, 8, -6, 9]);
    }

    #[test]
    fn test_no_arrays_is_not_an_error() {
        let loader = SequenceLoader::<i64>::new();
        let seqs = loader.from_str("\n   # only a comment\n\n").unwrap();
        assert!(seqs.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line_and_token() {
        let loader = SequenceLoader::<i64>::new();
        let res = loader.from_str("1 2 3\n4 five 6\n");

        match res {
            Err(LoaderError::Parse {
                line,
                token,
                type_name,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "five");
                assert!(type_name.contains("i64"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_token_is_parse_error() {
        let loader = SequenceLoader::<i8>::new();
        let res = loader.from_str("1 300");
        assert!(matches!(res, Err(LoaderError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_empty_brackets_are_rejected() {
        let loader = SequenceLoader::<i64>::new();
        let res = loader.from_str("1 2\n[ ]\n");
        assert!(matches!(res, Err(LoaderError::Empty { line: 2 })));
    }

    #[test]
    fn test_parse_line() {
        let loader = SequenceLoader::<i32>::new();
        let seq = loader.parse_line("[1, -1, 1]").unwrap();
        assert_eq!(seq.as_slice(), &[1, -1, 1]);

        assert!(matches!(
            loader.parse_line("   "),
            Err(LoaderError::Empty { line: 1 })
        ));
    }

    #[test]
    fn test_from_reader() {
        let loader = SequenceLoader::<i64>::new();
        let seqs = loader.from_reader(&b"5\n"[..]).unwrap();
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].as_slice(), &[5]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let loader = SequenceLoader::<i64>::new();
        let res = loader.from_path("/nonexistent/maxsub/arrays.txt");
        assert!(matches!(res, Err(LoaderError::Io(_))));
    }
}
