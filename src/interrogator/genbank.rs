use super::Vocabulary;
use crate::error::Error;
use crate::record::SeqRecord;

#[derive(Debug, Clone, Copy)]
/// An organism interrogator for GenBank records.
///
/// GenBank records are matched on their lineage, which the decoder
/// collects into the organism field along with the organism name.
pub struct GenBankInterrogator<'v> {
    vocabulary: &'v Vocabulary,
}

impl GenBankInterrogator<'static> {
    /// Create an interrogator using the built-in GenBank vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::genbank())
    }
}

impl Default for GenBankInterrogator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'v> GenBankInterrogator<'v> {
    /// Create an interrogator using a custom vocabulary.
    pub fn with_vocabulary(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Check whether `record` comes from the organism named by `token`.
    pub fn is_organism<R: SeqRecord + ?Sized>(&self, record: &R, token: &str) -> Result<bool, Error> {
        self.vocabulary.matches(record.organism(), token)
    }
}
