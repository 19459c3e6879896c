use std::io::BufRead;

use log::debug;
use log::trace;

use super::model::FastaRecord;
use crate::common::ShortString;
use crate::error::Error;
use crate::parser::Decoder;
use crate::parser::LineSource;
use crate::record::Format;

const HEADER: &str = ">";

/// Split a header line into its identifier and description.
fn split_header(line: &str, line_number: usize) -> Result<(&str, &str), Error> {
    // the identifier is the first token, directly after the marker
    let token = line.split_whitespace().next().unwrap_or_default();
    let id = token.strip_prefix(HEADER).unwrap_or_default();
    if id.is_empty() {
        return Err(Error::malformed("identifier", line_number, line));
    }

    let offset = line.len() - line.trim_start().len() + token.len();
    Ok((id, line[offset..].trim_start()))
}

// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
/// A decoder for FASTA records.
///
/// FASTA records have no terminator: a record ends at the next header
/// line, which is pushed back onto the source, or at the end of input.
pub struct FastaDecoder {}

impl FastaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next record, along with the line number of its header.
    pub(crate) fn decode_header_line<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<(FastaRecord, usize)>, Error> {
        let mut skipped = 0;
        let header = loop {
            match source.next_line()? {
                None => return Ok(None),
                Some(line) if line.starts_with(HEADER) => break line,
                Some(_) => skipped += 1,
            }
        };
        if skipped > 0 {
            debug!("skipped {} lines before {} record", skipped, Format::Fasta);
        }

        let start = source.line_number();
        let (id, description) = split_header(&header, start)?;
        let mut record = FastaRecord {
            ids: vec![ShortString::from(id)],
            description: description.to_string(),
            ..Default::default()
        };
        record.text.push_str(&header);
        record.text.push('\n');

        while let Some(line) = source.next_line()? {
            if line.starts_with(HEADER) {
                source.push_back(line);
                break;
            }
            record.sequence.push_str(line.trim());
            record.text.push_str(&line);
            record.text.push('\n');
        }
        record.sequence_length = record.sequence.chars().count();

        trace!("decoded FASTA record {} (line {})", record.ids[0], start);
        Ok(Some((record, start)))
    }
}

impl Decoder for FastaDecoder {
    type Record = FastaRecord;

    fn decode_next<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<FastaRecord>, Error> {
        self.decode_header_line(source)
            .map(|r| r.map(|(record, _)| record))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn split_header_description() {
        let (id, desc) = split_header(">seq1   some  spaced  text", 1).unwrap();
        assert_eq!(id, "seq1");
        assert_eq!(desc, "some  spaced  text");

        let (id, desc) = split_header(">seq1", 1).unwrap();
        assert_eq!(id, "seq1");
        assert_eq!(desc, "");
    }

    #[test]
    fn split_header_empty_identifier() {
        match split_header("> seq1", 5) {
            Err(Error::MalformedField("identifier", 5, _)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(split_header(">", 5).is_err());
    }
}
