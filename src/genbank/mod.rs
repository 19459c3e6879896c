//! Data types and decoder for the GenBank flat file format.
//!
//! The decoder reads the `LOCUS`, `ACCESSION`, `VERSION`, `ORGANISM`,
//! `COMMENT` and `ORIGIN` sections of each record, and keeps the verbatim
//! text of the record so it can be passed through losslessly.

use std::io::BufRead;

mod decoder;
mod locus;
mod model;

#[doc(inline)]
pub use self::decoder::GenBankDecoder;
pub use self::locus::Locus;
pub use self::locus::LocusLayout;
pub use self::locus::Revision;
#[doc(inline)]
pub use self::model::GenBankRecord;

/// The sequential parser type for GenBank records.
pub type SequentialParser<B> = super::parser::SequentialParser<B, GenBankDecoder>;

/// The parser type for GenBank records.
pub type Parser<B> = super::parser::Parser<B, GenBankDecoder>;

/// Parse a GenBank flat file.
///
/// # Example
/// ```rust
/// use seqrecord::SeqRecord;
///
/// let f = std::fs::File::open("tests/genbank.gb")
///    .map(std::io::BufReader::new)
///    .unwrap();
///
/// let records = seqrecord::genbank::parse(f)
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(records[0].primary_id(), "AC002397");
/// assert_eq!(records[0].version(), "AC002397.1");
/// ```
pub fn parse<B: BufRead>(reader: B) -> Parser<B> {
    Parser::new(reader)
}

/// Parse a single GenBank record.
pub fn parse_record<B: BufRead>(reader: B) -> Option<<Parser<B> as Iterator>::Item> {
    SequentialParser::parse_record(reader)
}
