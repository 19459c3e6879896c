use crate::common::ShortString;
use crate::fasta::FastaRecord;
use crate::record::SeqRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A FASTA record using NCBI composite identifiers.
///
/// The primary identifier is the GenBank accession extracted from the
/// composite identifier, e.g. `AC002397` for `gi|3287367|gb|AC002397.1|AC002397`.
pub struct GenBankFastaRecord {
    pub ids: Vec<ShortString>,
    pub composite_id: ShortString,
    pub gen_info_id: Option<ShortString>,
    pub version: ShortString,
    pub description: String,
    pub sequence: String,
    pub sequence_length: usize,
    pub text: String,
}

impl GenBankFastaRecord {
    /// The GenInfo identifier number, when the composite identifier has one.
    pub fn gi(&self) -> Option<&str> {
        self.gen_info_id.as_ref().map(|gi| gi.as_str())
    }

    /// The free text following the identifier on the header line.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<GenBankFastaRecord> for FastaRecord {
    fn from(record: GenBankFastaRecord) -> Self {
        let mut ids = record.ids;
        match ids.first_mut() {
            Some(id) => *id = record.composite_id,
            None => ids.push(record.composite_id),
        }
        FastaRecord {
            ids,
            description: record.description,
            sequence: record.sequence,
            sequence_length: record.sequence_length,
            text: record.text,
        }
    }
}

impl SeqRecord for GenBankFastaRecord {
    fn ids(&self) -> &[ShortString] {
        &self.ids
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn sequence(&self) -> &str {
        &self.sequence
    }

    fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    fn text(&self) -> &str {
        &self.text
    }
}
