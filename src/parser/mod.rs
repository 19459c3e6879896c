//! Line-oriented decoder plumbing.
//!
//! Every format is decoded from a [`LineSource`], a thin wrapper around a
//! [`BufRead`] implementor which yields lines without their terminator
//! and can take back a single line it already yielded. A [`Decoder`]
//! consumes exactly one record from the source on each call, and the
//! [`SequentialParser`] turns a decoder into an iterator over records.
//!
//! GenBank and EMBL records are delimited by a start marker and a `//`
//! terminator, and share the [`read_record`] loop which handles the
//! preamble, the verbatim record text and truncated inputs. Within a record,
//! each line is classified by the format decoder, and the classification
//! drives the transitions between the [`Section`] states.
//!
//! [`BufRead`]: https://doc.rust-lang.org/std/io/trait.BufRead.html

pub(crate) mod utils;

use std::io::BufRead;

use crate::embl::EmblDecoder;
use crate::error::Error;
use crate::fasta::FastaDecoder;
use crate::gbfasta::GenBankFastaDecoder;
use crate::genbank::GenBankDecoder;
use crate::record::Format;
use crate::record::Record;

// ---------------------------------------------------------------------------

/// The marker line ending GenBank and EMBL records.
pub const END_OF_RECORD: &str = "//";

// ---------------------------------------------------------------------------

/// A sequential source of text lines with a one-line push-back.
pub struct LineSource<B: BufRead> {
    reader: B,
    buffer: String,
    pushed: Option<String>,
    line_number: usize,
}

impl<B: BufRead> LineSource<B> {
    /// Create a new `LineSource` wrapping the given reader.
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            buffer: String::new(),
            pushed: None,
            line_number: 0,
        }
    }

    /// The 1-based number of the last line returned by `next_line`.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `Ok(None)` once the underlying reader is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>, Error> {
        if let Some(line) = self.pushed.take() {
            self.line_number += 1;
            return Ok(Some(line));
        }

        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut end = self.buffer.len();
        if self.buffer.as_bytes()[..end].ends_with(b"\n") {
            end -= 1;
            if self.buffer.as_bytes()[..end].ends_with(b"\r") {
                end -= 1;
            }
        }
        Ok(Some(self.buffer[..end].to_string()))
    }

    /// Put back `line` so that the next call to `next_line` returns it.
    ///
    /// Only a single line can be held at a time, and it must be the line
    /// that was returned last.
    pub fn push_back(&mut self, line: String) {
        debug_assert!(self.pushed.is_none(), "only one line can be pushed back");
        self.line_number = self.line_number.saturating_sub(1);
        self.pushed = Some(line);
    }

    /// Unwrap the underlying reader.
    ///
    /// A pushed-back line, if any, is lost.
    pub fn into_inner(self) -> B {
        self.reader
    }
}

impl<B: BufRead> From<B> for LineSource<B> {
    fn from(reader: B) -> Self {
        Self::new(reader)
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The section of a record the decoder is currently reading.
pub enum Section {
    /// Before the start marker of the record.
    Preamble,
    /// Inside the record, outside of any multi-line block.
    Header,
    /// Between an accession line and the line closing the accession list.
    AccessionBlock,
    /// Between the organism line and the first reference.
    OrganismBlock,
    /// Between the comment line and the feature table.
    CommentBlock,
    /// Between the sequence marker and the end of the record.
    SequenceBlock,
    /// After the end marker of the record.
    Done,
}

impl Default for Section {
    fn default() -> Self {
        Section::Preamble
    }
}

// ---------------------------------------------------------------------------

/// Read the lines of a record delimited by `format`'s start marker and `//`.
///
/// Lines before the start marker are skipped. Every line of the record
/// except the terminator is given to `visit` along with its line number.
/// On success, the verbatim record text is returned, with a `\n` after
/// each line including the terminator.
pub(crate) fn read_record<B, F>(
    source: &mut LineSource<B>,
    format: Format,
    mut visit: F,
) -> Result<Option<String>, Error>
where
    B: BufRead,
    F: FnMut(&str, usize) -> Result<(), Error>,
{
    let marker = format.start_marker();

    // skip everything up to the first start marker
    let mut skipped = 0;
    let first = loop {
        match source.next_line()? {
            None => {
                if skipped > 0 {
                    log::debug!("skipped {} trailing lines without a {} record", skipped, format);
                }
                return Ok(None);
            }
            Some(line) if line.starts_with(marker) => break line,
            Some(_) => skipped += 1,
        }
    };
    if skipped > 0 {
        log::debug!("skipped {} lines before {} record", skipped, format);
    }

    let start = source.line_number();
    let mut text = String::new();
    let mut line = first;
    loop {
        text.push_str(&line);
        text.push('\n');
        if line.starts_with(END_OF_RECORD) {
            return Ok(Some(text));
        }
        visit(&line, source.line_number())?;
        line = match source.next_line()? {
            Some(line) => line,
            None => return Err(Error::TruncatedRecord(format, start)),
        };
    }
}

// ---------------------------------------------------------------------------

/// A trait for flat-file record decoders.
pub trait Decoder {
    /// The record type produced by the decoder.
    type Record;

    /// Decode the next record from `source`.
    ///
    /// Returns `Ok(None)` when the source is exhausted before any record
    /// could be started. After an error, the position of `source` is
    /// unspecified and decoding should not be resumed.
    fn decode_next<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<Self::Record>, Error>;
}

/// Decode the next record of the given `format` from `source`.
///
/// Decoders are created with their default configuration.
pub fn decode_next<B: BufRead>(
    format: Format,
    source: &mut LineSource<B>,
) -> Result<Option<Record>, Error> {
    match format {
        Format::GenBank => GenBankDecoder::new()
            .decode_next(source)
            .map(|r| r.map(Record::from)),
        Format::Embl => EmblDecoder::new()
            .decode_next(source)
            .map(|r| r.map(Record::from)),
        Format::Fasta => FastaDecoder::new()
            .decode_next(source)
            .map(|r| r.map(Record::from)),
        Format::GenBankFasta => GenBankFastaDecoder::new()
            .decode_next(source)
            .map(|r| r.map(Record::from)),
    }
}

// --------------------------------------------------------------------------

/// A parser for flat-file formats that decodes records sequentially.
pub struct SequentialParser<B: BufRead, D: Decoder> {
    source: LineSource<B>,
    decoder: D,
    finished: bool,
}

impl<B: BufRead, D: Decoder + Default> SequentialParser<B, D> {
    /// Create a new `SequentialParser` wrapping the given reader.
    pub fn new(reader: B) -> Self {
        Self::with_decoder(reader, D::default())
    }
}

impl<B: BufRead, D: Decoder> SequentialParser<B, D> {
    /// Create a new `SequentialParser` using a configured decoder.
    pub fn with_decoder(reader: B, decoder: D) -> Self {
        Self {
            source: LineSource::new(reader),
            decoder,
            finished: false,
        }
    }

    /// Get a reference to the decoder used by the parser.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Parse a single record from the given reader.
    pub fn parse_record(reader: B) -> Option<Result<D::Record, Error>>
    where
        D: Default,
    {
        Self::new(reader).next()
    }
}

impl<B: BufRead, D: Decoder> Iterator for SequentialParser<B, D> {
    type Item = Result<D::Record, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        // if finished, simply return `None`
        if self.finished {
            return None;
        }

        match self.decoder.decode_next(&mut self.source) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            // the source position is undefined after an error
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<B: BufRead, D: Decoder> std::iter::FusedIterator for SequentialParser<B, D> {}

/// The parser type for the crate.
pub type Parser<B, D> = SequentialParser<B, D>;

// ---------------------------------------------------------------------------
