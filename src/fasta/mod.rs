//! Data types and decoder for the FASTA format.

use std::io::BufRead;

mod decoder;
mod model;

#[doc(inline)]
pub use self::decoder::FastaDecoder;
pub use self::model::FastaRecord;
pub use self::model::LINE_WIDTH;

/// The sequential parser type for FASTA records.
pub type SequentialParser<B> = super::parser::SequentialParser<B, FastaDecoder>;

/// The parser type for FASTA records.
pub type Parser<B> = super::parser::Parser<B, FastaDecoder>;

/// Parse a FASTA file.
///
/// # Example
/// ```rust
/// use seqrecord::SeqRecord;
///
/// let f = std::fs::File::open("tests/sequences.fa")
///    .map(std::io::BufReader::new)
///    .unwrap();
///
/// let record = seqrecord::fasta::parse(f).next().unwrap().unwrap();
/// assert_eq!(record.primary_id(), "sp|P99999|CYC_HUMAN");
/// assert_eq!(record.sequence_length(), 104);
/// ```
pub fn parse<B: BufRead>(reader: B) -> Parser<B> {
    Parser::new(reader)
}

/// Parse a single FASTA record.
pub fn parse_record<B: BufRead>(reader: B) -> Option<<Parser<B> as Iterator>::Item> {
    SequentialParser::parse_record(reader)
}

#[cfg(test)]
mod tests {

    use std::io::Cursor;

    use super::*;
    use crate::error::Error;
    use crate::parser::Decoder;
    use crate::parser::LineSource;
    use crate::record::SeqRecord;

    #[test]
    fn parse_fasta_4() {
        let f = std::fs::File::open("tests/sequences.fa").unwrap();
        let records = super::parse(std::io::BufReader::new(f))
            .collect::<Result<Vec<_>, _>>()
            .expect("records should parse successfully");
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].description(), "Cytochrome c OS=Homo sapiens");
        assert_eq!(records[0].sequence_length(), 104);
        assert!(!records[0].sequence().contains('\n'));

        assert_eq!(records[1].primary_id(), "sp|P62897|CYC_MOUSE");
        assert_eq!(records[1].description(), "Cytochrome c, somatic  OS=Mus musculus");
        assert_eq!(records[1].sequence_length(), 97);
        assert!(records[1].sequence().ends_with("KATNE"));
        assert!(records[1].text().ends_with("KATNE   \n"));

        assert_eq!(records[2].primary_id(), "empty");
        assert_eq!(records[2].sequence(), "");
        assert_eq!(records[2].text(), ">empty\n\n");

        assert_eq!(records[3].primary_id(), "AC002397");
        assert_eq!(records[3].description(), "");
        assert_eq!(records[3].sequence_length(), 60);
    }

    #[test]
    fn round_trip_from_parts() {
        let sequence = "ACGT".repeat(40);
        let built = FastaRecord::from_parts("seq1", "a test  sequence", sequence.as_str());
        let decoded = super::parse_record(Cursor::new(built.text.clone()))
            .unwrap()
            .unwrap();
        assert_eq!(decoded.primary_id(), "seq1");
        assert_eq!(decoded.description(), "a test  sequence");
        assert_eq!(decoded.sequence(), sequence);
        assert_eq!(decoded.sequence_length(), 160);
        assert_eq!(decoded, built);
    }

    #[test]
    fn round_trip_leading_spaces() {
        let sequence = "ÉA".repeat(50);
        let built = FastaRecord::from_parts("seq2", "  padded", sequence.as_str());
        let decoded = super::parse_record(Cursor::new(built.text.clone()))
            .unwrap()
            .unwrap();
        assert_eq!(decoded.description(), built.description());
        assert_eq!(decoded.sequence_length(), 100);
        assert_eq!(decoded, built);
    }

    #[test]
    fn next_header_pushed_back() {
        let mut source = LineSource::new(Cursor::new(">a\nAC\nGT\n>b\nTT\n"));
        let decoder = FastaDecoder::new();
        let a = decoder.decode_next(&mut source).unwrap().unwrap();
        assert_eq!(a.sequence(), "ACGT");
        assert_eq!(a.text(), ">a\nAC\nGT\n");
        assert_eq!(source.line_number(), 3);
        let b = decoder.decode_next(&mut source).unwrap().unwrap();
        assert_eq!(b.primary_id(), "b");
        assert_eq!(b.sequence(), "TT");
        assert!(decoder.decode_next(&mut source).unwrap().is_none());
    }

    #[test]
    fn fail_empty_identifier() {
        let mut parser = super::parse(Cursor::new(">seq1\nAC\n> seq2\nGT\n>seq3\nTT\n"));
        assert!(parser.next().unwrap().is_ok());
        match parser.next() {
            Some(Err(Error::MalformedField("identifier", 3, _))) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parser.next().is_none());
    }

    #[test]
    fn empty_input() {
        assert!(super::parse_record(Cursor::new("")).is_none());
        assert!(super::parse_record(Cursor::new("; comment only\n")).is_none());
    }
}
