use crate::common::ShortString;
use crate::record::SeqRecord;

/// The number of residues per line when formatting a sequence.
pub const LINE_WIDTH: usize = 70;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A FASTA record.
pub struct FastaRecord {
    pub ids: Vec<ShortString>, // exactly 1
    pub description: String,
    pub sequence: String,
    pub sequence_length: usize,
    pub text: String,
}

impl FastaRecord {
    /// Build a record from its parts, formatting its text.
    ///
    /// The sequence is wrapped at [`LINE_WIDTH`](./constant.LINE_WIDTH.html)
    /// residues per line, and every line of the text ends with a newline.
    /// Leading whitespace of the description is dropped.
    ///
    /// # Example
    /// ```rust
    /// use seqrecord::fasta::FastaRecord;
    ///
    /// let record = FastaRecord::from_parts("seq1", "a test", "ACGT");
    /// assert_eq!(record.text, ">seq1 a test\nACGT\n");
    /// assert_eq!(record.sequence_length, 4);
    /// ```
    pub fn from_parts<I, D, S>(id: I, description: D, sequence: S) -> Self
    where
        I: Into<ShortString>,
        D: Into<String>,
        S: Into<String>,
    {
        let id = id.into();
        let mut description = description.into();
        let sequence = sequence.into();

        let leading = description.len() - description.trim_start().len();
        description.drain(..leading);

        let mut text = String::with_capacity(sequence.len() + sequence.len() / LINE_WIDTH + 64);
        text.push('>');
        text.push_str(&id);
        if !description.is_empty() {
            text.push(' ');
            text.push_str(&description);
        }
        text.push('\n');

        let mut start = 0;
        for (i, (pos, _)) in sequence.char_indices().enumerate() {
            if i > 0 && i % LINE_WIDTH == 0 {
                text.push_str(&sequence[start..pos]);
                text.push('\n');
                start = pos;
            }
        }
        if start < sequence.len() {
            text.push_str(&sequence[start..]);
            text.push('\n');
        }

        Self {
            ids: vec![id],
            description,
            sequence_length: sequence.chars().count(),
            sequence,
            text,
        }
    }

    /// The free text following the identifier on the header line.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl SeqRecord for FastaRecord {
    fn ids(&self) -> &[ShortString] {
        &self.ids
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
