use std::io::BufRead;

use lazy_static::lazy_static;
use log::debug;
use log::trace;
use regex::Regex;

use super::locus::LocusLayout;
use super::model::GenBankRecord;
use crate::error::Error;
use crate::parser::read_record;
use crate::parser::utils::push_tokens;
use crate::parser::utils::tokens_after_marker;
use crate::parser::Decoder;
use crate::parser::LineSource;
use crate::parser::Section;
use crate::record::Format;

// ---------------------------------------------------------------------------

const LOCUS: &str = "LOCUS";
const ACCESSION: &str = "ACCESSION";
const VERSION: &str = "VERSION";
const REFERENCE: &str = "REFERENCE";
const COMMENT: &str = "COMMENT";
const FEATURES: &str = "FEATURES";
const ORIGIN: &str = "ORIGIN";

lazy_static! {
    static ref ORGANISM: Regex = Regex::new(r"^ +ORGANISM +(.+)$").unwrap();
    static ref CLASS: Regex = Regex::new(r"[ COMENT]*Class: +(.+)$").unwrap();
    static ref CONTACT: Regex = Regex::new(r"[ COMENT]*Contact: +(.+)$").unwrap();
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The classification of a single line of a GenBank record.
enum Line<'a> {
    Origin,
    SequenceData,
    Locus,
    Accession,
    Version,
    AccessionContinuation,
    Organism(&'a str),
    Reference,
    OrganismContinuation,
    Comment,
    CommentEnd,
    CommentContinuation,
    Other,
}

impl<'a> Line<'a> {
    /// Classify `line` read while in `section`; the first match wins.
    fn classify(line: &'a str, section: Section) -> Self {
        if line.starts_with(ORIGIN) {
            Line::Origin
        } else if section == Section::SequenceBlock {
            Line::SequenceData
        } else if line.starts_with(LOCUS) {
            Line::Locus
        } else if line.starts_with(ACCESSION) {
            Line::Accession
        } else if line.starts_with(VERSION) {
            Line::Version
        } else if section == Section::AccessionBlock {
            Line::AccessionContinuation
        } else if let Some(m) = ORGANISM.captures(line).and_then(|c| c.get(1)) {
            Line::Organism(m.as_str())
        } else if line.starts_with(REFERENCE) {
            Line::Reference
        } else if section == Section::OrganismBlock {
            Line::OrganismContinuation
        } else if line.starts_with(COMMENT) {
            Line::Comment
        } else if section == Section::CommentBlock && line.starts_with(FEATURES) {
            Line::CommentEnd
        } else if section == Section::CommentBlock {
            Line::CommentContinuation
        } else {
            Line::Other
        }
    }
}

// ---------------------------------------------------------------------------

/// The in-progress state of a record being decoded.
struct Builder<'l> {
    layout: &'l LocusLayout,
    section: Section,
    start: usize,
    record: GenBankRecord,
}

impl<'l> Builder<'l> {
    fn new(layout: &'l LocusLayout) -> Self {
        Self {
            layout,
            section: Section::Preamble,
            start: 0,
            record: GenBankRecord::default(),
        }
    }

    /// Apply the effect of `line`, and move to the next section.
    fn visit(&mut self, line: &str, line_number: usize) -> Result<(), Error> {
        if self.section == Section::Preamble {
            self.start = line_number;
        }

        let record = &mut self.record;
        self.section = match Line::classify(line, self.section) {
            Line::Origin => Section::SequenceBlock,
            Line::SequenceData => {
                record.sequence.push_str(line);
                record.sequence.push('\n');
                Section::SequenceBlock
            }
            Line::Locus => {
                let locus = self.layout.parse(line, line_number)?;
                record.sequence_length = locus.length;
                record.molecule_type = locus.molecule_type;
                record.division = locus.division;
                record.date = locus.date;
                Section::Header
            }
            Line::Accession => {
                push_tokens(&mut record.ids, tokens_after_marker(line));
                Section::AccessionBlock
            }
            Line::Version => {
                let mut tokens = tokens_after_marker(line);
                record.version = tokens
                    .next()
                    .ok_or_else(|| Error::malformed("version", line_number, line))?
                    .into();
                record.gen_info_id = tokens.next().map(From::from);
                match self.section {
                    Section::AccessionBlock => Section::Header,
                    other => other,
                }
            }
            Line::AccessionContinuation => {
                push_tokens(&mut record.ids, line.split_whitespace());
                Section::AccessionBlock
            }
            Line::Organism(name) => {
                record.organism.push_str(name);
                Section::OrganismBlock
            }
            Line::Reference => match self.section {
                Section::OrganismBlock => Section::Header,
                other => other,
            },
            Line::OrganismContinuation => {
                record.organism.push_str(line);
                Section::OrganismBlock
            }
            Line::Comment | Line::CommentContinuation => {
                record.comment.push_str(line);
                record.comment.push('\n');
                if let Some(m) = CLASS.captures(line).and_then(|c| c.get(1)) {
                    record.comment_class = m.as_str().trim().to_string();
                } else if let Some(m) = CONTACT.captures(line).and_then(|c| c.get(1)) {
                    record.comment_contact = m.as_str().trim().to_string();
                }
                Section::CommentBlock
            }
            Line::CommentEnd => Section::Header,
            Line::Other => self.section,
        };
        Ok(())
    }

    fn finish(self, text: String) -> Result<GenBankRecord, Error> {
        debug_assert_ne!(self.section, Section::Preamble);

        let mut record = self.record;
        if record.ids.is_empty() {
            let locus = text.lines().next().unwrap_or_default();
            return Err(Error::malformed("accession", self.start, locus));
        }
        record.organism = record.organism.to_lowercase();
        record.text = text;

        let residues = record.residues().count();
        if residues != record.sequence_length {
            debug!(
                "record {} declares {} residues but contains {}",
                record.ids[0], record.sequence_length, residues
            );
        }

        Ok(record)
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
/// A decoder for GenBank flat file records.
///
/// Records start at a `LOCUS` line and end at a `//` line. The fields of
/// the `LOCUS` line are read at fixed columns, given by the decoder
/// [`LocusLayout`](./struct.LocusLayout.html).
pub struct GenBankDecoder {
    layout: LocusLayout,
}

impl GenBankDecoder {
    /// Create a new decoder for the current `LOCUS` layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new decoder reading `LOCUS` lines with the given layout.
    pub fn with_layout<L: Into<LocusLayout>>(layout: L) -> Self {
        Self {
            layout: layout.into(),
        }
    }

    /// Get the `LOCUS` layout used by the decoder.
    pub fn layout(&self) -> &LocusLayout {
        &self.layout
    }
}

impl Decoder for GenBankDecoder {
    type Record = GenBankRecord;

    fn decode_next<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<GenBankRecord>, Error> {
        let mut builder = Builder::new(&self.layout);
        let text = match read_record(source, Format::GenBank, |l, n| builder.visit(l, n))? {
            Some(text) => text,
            None => return Ok(None),
        };

        let record = builder.finish(text)?;
        trace!("decoded GenBank record {} (line {})", record.ids[0], source.line_number());
        Ok(Some(record))
    }
}
