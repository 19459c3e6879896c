use std::io::BufRead;
use std::str::FromStr;

use super::model::GenBankFastaRecord;
use crate::common::ShortString;
use crate::error::Error;
use crate::error::InvalidValue;
use crate::fasta::FastaDecoder;
use crate::fasta::FastaRecord;
use crate::parser::Decoder;
use crate::parser::LineSource;

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The field of a composite identifier holding the GenBank accession.
pub enum AccessionField {
    /// The last field, e.g. `AC002397` in `gi|3287367|gb|AC002397.1|AC002397`.
    Last,
    /// The fourth field, e.g. `AC002397.1` in `gi|3287367|gb|AC002397.1|AC002397`.
    Versioned,
}

impl Default for AccessionField {
    fn default() -> Self {
        AccessionField::Last
    }
}

impl FromStr for AccessionField {
    type Err = InvalidValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(AccessionField::Last),
            "versioned" => Ok(AccessionField::Versioned),
            other => Err(InvalidValue::from(other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// Split a composite identifier on `|`, skipping empty fields.
fn split_fields(id: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    for i in memchr::memchr_iter(b'|', id.as_bytes()) {
        fields.push(&id[start..i]);
        start = i + 1;
    }
    fields.push(&id[start..]);
    fields.retain(|f| !f.is_empty());
    fields
}

fn from_fasta(
    record: FastaRecord,
    field: AccessionField,
    line_number: usize,
) -> Result<GenBankFastaRecord, Error> {
    let composite = record.ids.into_iter().next().unwrap_or_default();
    let fields = split_fields(&composite);

    let chosen = match field {
        AccessionField::Last => fields.last(),
        AccessionField::Versioned => fields.get(3),
    }
    .ok_or_else(|| Error::malformed("accession", line_number, composite.as_str()))?;

    let (accession, version) = match chosen.find('.') {
        Some(i) => (&chosen[..i], *chosen),
        None => (*chosen, ""),
    };
    let gen_info_id = match fields.as_slice() {
        ["gi", gi, ..] => Some(ShortString::from(*gi)),
        _ => None,
    };

    Ok(GenBankFastaRecord {
        ids: vec![ShortString::from(accession)],
        version: ShortString::from(version),
        gen_info_id,
        description: record.description,
        sequence: record.sequence,
        sequence_length: record.sequence_length,
        text: record.text,
        composite_id: composite,
    })
}

// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
/// A decoder for FASTA records with NCBI composite identifiers.
pub struct GenBankFastaDecoder {
    inner: FastaDecoder,
    field: AccessionField,
}

impl GenBankFastaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder extracting the accession from the given field.
    pub fn with_accession_field(field: AccessionField) -> Self {
        Self {
            inner: FastaDecoder::new(),
            field,
        }
    }

    pub fn accession_field(&self) -> AccessionField {
        self.field
    }
}

impl Decoder for GenBankFastaDecoder {
    type Record = GenBankFastaRecord;

    fn decode_next<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<GenBankFastaRecord>, Error> {
        match self.inner.decode_header_line(source)? {
            Some((record, line_number)) => from_fasta(record, self.field, line_number).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const COMPOSITE: &str = "gi|3287367|gb|AC002397.1|AC002397";

    #[test]
    fn split_composite() {
        assert_eq!(split_fields(COMPOSITE), vec!["gi", "3287367", "gb", "AC002397.1", "AC002397"]);
        assert_eq!(split_fields("ref|NM_000014.6|"), vec!["ref", "NM_000014.6"]);
        assert_eq!(split_fields("AC002397"), vec!["AC002397"]);
    }

    #[test]
    fn last_field() {
        let fasta = FastaRecord::from_parts(COMPOSITE, "", "ACGT");
        let record = from_fasta(fasta, AccessionField::Last, 1).unwrap();
        assert_eq!(record.ids[0].as_str(), "AC002397");
        assert_eq!(record.version.as_str(), "");
        assert_eq!(record.gi(), Some("3287367"));
        assert_eq!(record.composite_id.as_str(), COMPOSITE);
    }

    #[test]
    fn last_field_with_version() {
        let fasta = FastaRecord::from_parts("gi|1|gb|AC002397.1|", "", "ACGT");
        let record = from_fasta(fasta, AccessionField::Last, 1).unwrap();
        assert_eq!(record.ids[0].as_str(), "AC002397");
        assert_eq!(record.version.as_str(), "AC002397.1");
    }

    #[test]
    fn versioned_field() {
        let fasta = FastaRecord::from_parts(COMPOSITE, "", "ACGT");
        let record = from_fasta(fasta, AccessionField::Versioned, 1).unwrap();
        assert_eq!(record.ids[0].as_str(), "AC002397");
        assert_eq!(record.version.as_str(), "AC002397.1");
    }

    #[test]
    fn versioned_field_missing() {
        let fasta = FastaRecord::from_parts("gb|AC002397", "", "ACGT");
        match from_fasta(fasta, AccessionField::Versioned, 12) {
            Err(Error::MalformedField("accession", 12, v)) => assert_eq!(v.0, "gb|AC002397"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn accession_field_from_str() {
        assert_eq!(AccessionField::from_str("last").unwrap(), AccessionField::Last);
        assert!(AccessionField::from_str("first").is_err());
    }
}
