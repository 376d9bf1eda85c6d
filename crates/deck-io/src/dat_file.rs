//! A complete input deck: free sections plus the entity store.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use deck_inp::Section;
use deck_model::{DeckFormat, EntityStore};
use indexmap::IndexMap;
use log::{debug, warn};

use crate::error::{DeckError, Result};
use crate::header::{MetadataProvider, banner_lines, header_lines};
use crate::link::{LinkMode, link_entities};
use crate::parser::{DeckParser, ParsedDeck};
use crate::writer::DeckWriter;

/// What goes in front of the first section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Maintainer, date, description and provider blocks
    pub header: bool,
    /// Lines that stood in front of the first section of a read deck
    pub dat_header: bool,
    /// Date written in the header, the current local time if `None`
    pub date: Option<NaiveDateTime>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            header: true,
            dat_header: true,
            date: None,
        }
    }
}

impl WriteOptions {
    /// Only the banner and the deck content; output depends on nothing but the data.
    pub fn bare() -> Self {
        Self {
            header: false,
            dat_header: false,
            date: None,
        }
    }
}

#[derive(Default)]
pub struct DatFile {
    pub maintainer: String,
    pub description: Option<String>,
    format: DeckFormat,
    preamble: Vec<String>,
    sections: IndexMap<String, Section>,
    multi_key_sections: Vec<Section>,
    store: EntityStore,
    metadata: Vec<Box<dyn MetadataProvider>>,
    dat_loaded: bool,
}

impl DatFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: DeckFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.maintainer = maintainer.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn format(&self) -> &DeckFormat {
        &self.format
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Add a block of header comment lines written after the maintainer block.
    pub fn add_metadata_provider(&mut self, provider: impl MetadataProvider + 'static) {
        self.metadata.push(Box::new(provider));
    }

    /// Lines read in front of the first section.
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    // Reading

    /// Read a deck file into this document. See [`DatFile::read_str`].
    pub fn read_dat(&mut self, path: impl AsRef<Path>, mode: LinkMode) -> Result<()> {
        let text = fs::read_to_string(path)?;
        self.read_str(&text, mode)
    }

    /// Read deck text into this document.
    ///
    /// The store must not hold nodes, elements, materials or functions yet,
    /// and a document accepts only one source deck.
    pub fn read_str(&mut self, text: &str, mode: LinkMode) -> Result<()> {
        if !self.store.is_empty_mesh() {
            return Err(DeckError::State(
                "a deck can only be read into a document without mesh entities".to_string(),
            ));
        }
        if self.dat_loaded {
            return Err(DeckError::State(
                "a deck has already been read into this document".to_string(),
            ));
        }
        let parsed = DeckParser::new(&self.format).parse_str(text)?;
        self.merge_parsed(parsed, mode)?;
        self.dat_loaded = true;
        Ok(())
    }

    /// Add deck text, e.g. a snippet with extra sections or conditions. The
    /// entities are kept verbatim and no state checks apply.
    pub fn add_dat_str(&mut self, text: &str) -> Result<()> {
        let parsed = DeckParser::new(&self.format).parse_str(text)?;
        self.merge_parsed(parsed, LinkMode::Verbatim)
    }

    /// Merge sections and entities of `parsed`. Nothing is changed if any
    /// part fails.
    fn merge_parsed(&mut self, parsed: ParsedDeck, mode: LinkMode) -> Result<()> {
        let mut sections = self.sections.clone();
        let mut multi_key_sections = parsed.multi_key_sections;
        for section in parsed.sections.into_values() {
            merge_section_into(&mut sections, &mut multi_key_sections, section)?;
        }
        link_entities(parsed.entities, &mut self.store, mode)?;

        self.sections = sections;
        self.multi_key_sections.extend(multi_key_sections);
        self.preamble.extend(parsed.preamble);
        Ok(())
    }

    // Sections

    /// Add a section, merging it into an existing section of the same name.
    pub fn add_section(&mut self, section: Section) -> Result<()> {
        merge_section_into(&mut self.sections, &mut self.multi_key_sections, section)
    }

    /// Parse `text` into the section `name`, creating it if needed.
    pub fn add_section_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.add_section(Section::from_text(name, text)?)
    }

    /// Remove a section. A missing section is reported as a warning only.
    pub fn delete_section(&mut self, name: &str) -> Option<Section> {
        let removed = self.sections.shift_remove(name);
        if removed.is_none() {
            warn!("Section \"{name}\" does not exist and can not be deleted.");
        }
        removed
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Free sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn multi_key_sections(&self) -> &[Section] {
        &self.multi_key_sections
    }

    // Writing

    pub fn dat_lines(&self, options: &WriteOptions) -> Result<Vec<String>> {
        let writer = DeckWriter::new(&self.format, &self.store)?;
        let width = self.format.section_width;

        let mut lines = banner_lines(width);
        if options.header {
            let date = options.date.unwrap_or_else(|| Local::now().naive_local());
            lines.extend(header_lines(
                width,
                &self.maintainer,
                self.description.as_deref(),
                date,
                &self.metadata,
            ));
        }
        if options.dat_header {
            lines.extend(self.preamble.iter().cloned());
        }

        lines.extend(writer.section_lines(self.sections.values()));
        lines.extend(writer.material_lines()?);
        lines.extend(writer.function_lines()?);
        lines.extend(writer.design_description_lines()?);
        lines.extend(writer.condition_lines()?);
        lines.extend(writer.topology_lines()?);
        for section in &self.multi_key_sections {
            lines.extend(section.dat_lines(width, self.format.key_width));
        }
        lines.extend(writer.node_lines()?);
        lines.extend(writer.element_lines()?);
        lines.extend(writer.end_lines());

        debug!(
            "Rendered deck with {} node(s), {} element(s) and {} line(s).",
            self.store.node_count(),
            self.store.element_count(),
            lines.len()
        );
        Ok(lines)
    }

    pub fn to_dat_string(&self, options: &WriteOptions) -> Result<String> {
        Ok(self.dat_lines(options)?.join("\n"))
    }

    /// Write the deck to `path`. The whole deck is rendered before the file is
    /// created, a failing render leaves no file behind.
    pub fn write_dat(&self, path: impl AsRef<Path>, options: &WriteOptions) -> Result<()> {
        let mut body = String::new();
        for line in self.dat_lines(options)? {
            body.push_str(&line);
            body.push('\n');
        }

        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)?;
        Ok(())
    }
}

fn merge_section_into(
    sections: &mut IndexMap<String, Section>,
    multi_key_sections: &mut Vec<Section>,
    section: Section,
) -> Result<()> {
    if section.is_multi_key() {
        multi_key_sections.push(section);
        return Ok(());
    }
    match sections.get_mut(section.name()) {
        Some(existing) => existing.merge_section(section)?,
        None => {
            sections.insert(section.name().to_string(), section);
        }
    }
    Ok(())
}
