use crate::common::ShortString;
use crate::record::SeqRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A GenBank flat file record.
pub struct GenBankRecord {
    // LOCUS
    pub sequence_length: usize,
    pub molecule_type: ShortString,
    pub division: ShortString,
    pub date: ShortString,
    // ACCESSION / VERSION
    pub ids: Vec<ShortString>, // minOccurs = 1
    pub version: ShortString,
    pub gen_info_id: Option<ShortString>,
    // SOURCE
    pub organism: String,
    // COMMENT
    pub comment: String,
    pub comment_class: String,
    pub comment_contact: String,
    // ORIGIN
    pub sequence: String,
    pub text: String,
}

impl GenBankRecord {
    /// The GenInfo identifier number, without its `GI:` prefix.
    ///
    /// Records released after 2016 no longer report a GI on their
    /// `VERSION` line.
    pub fn gi(&self) -> Option<&str> {
        self.gen_info_id
            .as_ref()
            .map(|gi| gi.as_str())
            .map(|gi| gi.strip_prefix("GI:").unwrap_or(gi))
    }

    /// The residues of the `ORIGIN` block, without numbering or spacing.
    pub fn residues(&self) -> impl Iterator<Item = char> + '_ {
        self.sequence.chars().filter(char::is_ascii_alphabetic)
    }
}

impl SeqRecord for GenBankRecord {
    fn ids(&self) -> &[ShortString] {
        &self.ids
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn organism(&self) -> &str {
        &self.organism
    }

    fn molecule_type(&self) -> &str {
        &self.molecule_type
    }

    fn division(&self) -> &str {
        &self.division
    }

    fn date(&self) -> &str {
        &self.date
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
