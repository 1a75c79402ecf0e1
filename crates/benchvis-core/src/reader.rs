// Benchvis - Go benchmark output parser and visualizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line reader for the streaming benchmark parser.
//!
//! Provides buffered, forward-only line reading with line number tracking and
//! one line of look-ahead. The stream is never rewound: the Stream Parser peeks
//! to detect a run boundary, and the Run Parser consumes.

use crate::error::{ParseError, ParseResult};
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// Handles LF and CRLF line endings and tracks the current line number for
/// error reporting.
///
/// # Examples
///
/// ```rust
/// use benchvis_core::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("goos: linux\nPASS"));
///
/// // Peek without consuming
/// assert_eq!(reader.peek_line().unwrap(), Some(&(1, "goos: linux".to_string())));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "goos: linux".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "PASS".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
    peeked: Option<(usize, String)>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
            peeked: None,
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::new(),
            peeked: None,
        }
    }

    /// Number of lines pulled from the underlying source so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> ParseResult<Option<(usize, String)>> {
        if let Some(peeked) = self.peeked.take() {
            return Ok(Some(peeked));
        }
        self.read_line_internal()
    }

    /// Peek at the next line without consuming it.
    pub fn peek_line(&mut self) -> ParseResult<Option<&(usize, String)>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line_internal()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn read_line_internal(&mut self) -> ParseResult<Option<(usize, String)>> {
        self.buffer.clear();

        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;

                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }

                Ok(Some((self.line_number, self.buffer.clone())))
            }
            Err(e) => Err(ParseError::Stream(e)),
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = ParseResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
