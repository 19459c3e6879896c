use std::io::BufRead;

use lazy_static::lazy_static;
use log::debug;
use log::trace;
use regex::Regex;

use super::model::EmblRecord;
use crate::error::Error;
use crate::parser::read_record;
use crate::parser::utils::append_spaced;
use crate::parser::utils::parse_length;
use crate::parser::utils::strip_separator;
use crate::parser::utils::tokens_after_marker;
use crate::parser::Decoder;
use crate::parser::LineSource;
use crate::parser::Section;
use crate::record::Format;

// ---------------------------------------------------------------------------

const ID: &str = "ID";
const ACCESSION: &str = "AC";
const DATE: &str = "DT";
const SEQUENCE: &str = "SQ";

lazy_static! {
    static ref ORGANISM: Regex = Regex::new(r"^OS +(.+)$").unwrap();
    static ref CLASSIFICATION: Regex = Regex::new(r"^OC +(.+)$").unwrap();
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Sequence,
    SequenceData,
    Id,
    Accession,
    Date,
    Organism(&'a str),
    Classification(&'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str, section: Section) -> Self {
        if line.starts_with(SEQUENCE) {
            Line::Sequence
        } else if section == Section::SequenceBlock {
            Line::SequenceData
        } else if line.starts_with(ID) {
            Line::Id
        } else if line.starts_with(ACCESSION) {
            Line::Accession
        } else if line.starts_with(DATE) {
            Line::Date
        } else if let Some(m) = ORGANISM.captures(line).and_then(|c| c.get(1)) {
            Line::Organism(m.as_str())
        } else if let Some(m) = CLASSIFICATION.captures(line).and_then(|c| c.get(1)) {
            Line::Classification(m.as_str())
        } else {
            Line::Other
        }
    }
}

// ---------------------------------------------------------------------------

#[derive(Default)]
struct Builder {
    section: Section,
    start: usize,
    record: EmblRecord,
}

impl Builder {
    fn visit(&mut self, line: &str, line_number: usize) -> Result<(), Error> {
        if self.section == Section::Preamble {
            self.start = line_number;
        }

        let record = &mut self.record;
        self.section = match Line::classify(line, self.section) {
            Line::Sequence => Section::SequenceBlock,
            Line::SequenceData => {
                record.sequence.push_str(line);
                record.sequence.push('\n');
                Section::SequenceBlock
            }
            Line::Id => {
                // ID   <name> <class>; <type>; <length> <unit>.
                let tokens = line.split_whitespace().collect::<Vec<_>>();
                if tokens.len() < 6 {
                    return Err(Error::malformed("identification", line_number, line));
                }
                record.entry_name = tokens[1].into();
                record.molecule_type = strip_separator(tokens[3]).into();
                record.sequence_length = parse_length(tokens[4], line_number)?;
                Section::Header
            }
            Line::Accession => {
                let before = record.ids.len();
                let ids = tokens_after_marker(line).map(strip_separator);
                record.ids.extend(ids.map(From::from));
                if record.ids.len() == before {
                    return Err(Error::malformed("accession", line_number, line));
                }
                Section::Header
            }
            Line::Date => {
                let date = tokens_after_marker(line)
                    .next()
                    .ok_or_else(|| Error::malformed("date", line_number, line))?;
                record.date = strip_separator(date).into();
                Section::Header
            }
            Line::Organism(name) => {
                append_spaced(&mut record.organism, name);
                Section::Header
            }
            Line::Classification(lineage) => {
                append_spaced(&mut record.organism_classification, lineage);
                Section::Header
            }
            Line::Other => self.section,
        };
        Ok(())
    }

    fn finish(self, text: String) -> Result<EmblRecord, Error> {
        let mut record = self.record;
        if record.ids.is_empty() {
            let id = text.lines().next().unwrap_or_default();
            return Err(Error::malformed("accession", self.start, id));
        }
        record.organism = record.organism.to_lowercase();
        record.organism_classification = record.organism_classification.to_lowercase();
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
/// A decoder for EMBL, SwissProt and TrEMBL flat file records.
///
/// Records start at an `ID` line and end at a `//` line.
pub struct EmblDecoder {}

impl EmblDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for EmblDecoder {
    type Record = EmblRecord;

    fn decode_next<B: BufRead>(
        &self,
        source: &mut LineSource<B>,
    ) -> Result<Option<EmblRecord>, Error> {
        let mut builder = Builder::default();
        let text = match read_record(source, Format::Embl, |l, n| builder.visit(l, n))? {
            Some(text) => text,
            None => return Ok(None),
        };

        let record = builder.finish(text)?;
        trace!("decoded EMBL record {} (line {})", record.ids[0], source.line_number());
        Ok(Some(record))
    }
}
