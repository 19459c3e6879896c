//! Data types and decoder for FASTA files exported from GenBank.
//!
//! These files use NCBI composite identifiers on their header lines
//! (`gi|3287367|gb|AC002397.1|AC002397`); the decoder replaces the
//! composite identifier with the GenBank accession it contains.

use std::io::BufRead;

mod decoder;
mod model;

pub use self::decoder::AccessionField;
#[doc(inline)]
pub use self::decoder::GenBankFastaDecoder;
#[doc(inline)]
pub use self::model::GenBankFastaRecord;

/// The sequential parser type for GenBank-FASTA records.
pub type SequentialParser<B> = super::parser::SequentialParser<B, GenBankFastaDecoder>;

/// The parser type for GenBank-FASTA records.
pub type Parser<B> = super::parser::Parser<B, GenBankFastaDecoder>;

/// Parse a FASTA file with NCBI composite identifiers.
///
/// # Example
/// ```rust
/// use seqrecord::SeqRecord;
///
/// let f = std::fs::File::open("tests/genbank.fa")
///    .map(std::io::BufReader::new)
///    .unwrap();
///
/// let record = seqrecord::gbfasta::parse(f).next().unwrap().unwrap();
/// assert_eq!(record.primary_id(), "AC002397");
/// assert_eq!(record.gi(), Some("3287367"));
/// ```
pub fn parse<B: BufRead>(reader: B) -> Parser<B> {
    Parser::new(reader)
}

/// Parse a single GenBank-FASTA record.
pub fn parse_record<B: BufRead>(reader: B) -> Option<<Parser<B> as Iterator>::Item> {
    SequentialParser::parse_record(reader)
}
