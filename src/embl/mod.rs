//! Data types and decoder for the EMBL flat file format.
//!
//! The same line-tagged layout is used by the SwissProt and TrEMBL
//! protein databases, which can be read with the same decoder.

use std::io::BufRead;

mod decoder;
mod model;

#[doc(inline)]
pub use self::decoder::EmblDecoder;
#[doc(inline)]
pub use self::model::EmblRecord;

/// The sequential parser type for EMBL records.
pub type SequentialParser<B> = super::parser::SequentialParser<B, EmblDecoder>;

/// The parser type for EMBL records.
pub type Parser<B> = super::parser::Parser<B, EmblDecoder>;

/// Parse an EMBL, SwissProt or TrEMBL flat file.
///
/// # Example
/// ```rust
/// use seqrecord::SeqRecord;
///
/// let f = std::fs::File::open("tests/swissprot.dat")
///    .map(std::io::BufReader::new)
///    .unwrap();
///
/// for r in seqrecord::embl::parse(f) {
///     let record = r.unwrap();
///     assert_eq!(record.molecule_type(), "PRT");
/// }
/// ```
pub fn parse<B: BufRead>(reader: B) -> Parser<B> {
    Parser::new(reader)
}

/// Parse a single EMBL record.
pub fn parse_record<B: BufRead>(reader: B) -> Option<<Parser<B> as Iterator>::Item> {
    SequentialParser::parse_record(reader)
}

#[cfg(test)]
mod tests {

    use std::io::Cursor;

    use super::*;
    use crate::error::Error;
    use crate::record::Format;
    use crate::record::SeqRecord;

    fn fixture() -> String {
        std::fs::read_to_string("tests/swissprot.dat").unwrap()
    }

    #[test]
    fn parse_swissprot_2() {
        let f = std::fs::File::open("tests/swissprot.dat").unwrap();
        let records = super::parse(std::io::BufReader::new(f))
            .collect::<Result<Vec<_>, _>>()
            .expect("records should parse successfully");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn accessions_across_lines() {
        let record = super::parse_record(Cursor::new(fixture())).unwrap().unwrap();
        let ids = record.ids().iter().map(|id| id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["P99999", "P00001", "Q6IBA2", "Q6NUR2"]);
        assert_eq!(record.primary_id(), "P99999");
        assert_eq!(record.version(), "");
    }

    #[test]
    fn header_fields() {
        let record = super::parse_record(Cursor::new(fixture())).unwrap().unwrap();
        assert_eq!(record.entry_name.as_str(), "CYC_HUMAN");
        assert_eq!(record.molecule_type(), "PRT");
        assert_eq!(record.sequence_length(), 104);
        assert_eq!(record.residues().count(), 104);
        assert_eq!(record.date(), "15-JUN-2004");
        assert_eq!(record.division(), "");
        assert_eq!(record.organism(), "homo sapiens (human).");
        assert_eq!(
            record.organism_classification(),
            "eukaryota; metazoa; chordata; craniata; vertebrata; euteleostomi; \
             mammalia; eutheria; primates; catarrhini; hominidae; homo."
        );
    }

    #[test]
    fn sequence_block() {
        let record = super::parse_record(Cursor::new(fixture())).unwrap().unwrap();
        assert_eq!(record.sequence().lines().count(), 2);
        assert!(record.sequence().starts_with("     GDVEKGKKIF"));
        assert!(record.sequence().ends_with("ATNE\n"));
    }

    #[test]
    fn records_are_independent() {
        let mut parser = super::parse(Cursor::new(fixture()));
        let human = parser.next().unwrap().unwrap();
        let mouse = parser.next().unwrap().unwrap();
        assert!(parser.next().is_none());

        assert_eq!(mouse.ids().len(), 2);
        assert!(human.ids().iter().all(|id| !mouse.ids().contains(id)));
        assert_eq!(mouse.organism(), "mus musculus (mouse).");
        assert!(!mouse.organism_classification().contains("primates"));
        assert_eq!(mouse.sequence().lines().count(), 2);
        assert!(mouse.text().starts_with("ID   CYC_MOUSE"));
        assert!(mouse.text().ends_with("//\n"));
    }

    #[test]
    fn skip_preamble() {
        let txt = format!("CC   release notes\nXX\n{}", fixture());
        let records = super::parse(Cursor::new(txt))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].text().starts_with("ID   CYC_HUMAN"));
    }

    #[test]
    fn fail_truncated() {
        let txt = fixture();
        let end = txt.find("//").unwrap();
        match super::parse_record(Cursor::new(&txt[..end])) {
            Some(Err(Error::TruncatedRecord(Format::Embl, 1))) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
