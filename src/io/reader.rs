//! Streaming OSM XML reader.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::Error;
use crate::types::{Child, RawElement};

/// Streams [RawElement]s out of an OSM XML document.
///
/// Each top-level element is materialized with its attributes and its
/// `nd`/`tag` children, handed to the caller, and released: the event
/// buffer is cleared after every event, so memory stays bounded by one
/// element no matter the file size.
pub struct OsmReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl OsmReader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    fn read_element(&mut self) -> Result<Option<RawElement>, Error> {
        loop {
            // if we don't keep a borrow elsewhere, clearing the buffer keeps
            // memory usage low
            self.buf.clear();

            // materialize the event into an owned element before touching
            // the reader again
            let (mut element, has_children) = match self.reader.read_event_into(&mut self.buf) {
                Err(e) => return Err(e.into()),
                Ok(Event::Eof) => return Ok(None),
                // a childless element, typically an untagged node
                Ok(Event::Empty(start)) => (element_from_start(&start)?, false),
                Ok(Event::Start(start)) => (element_from_start(&start)?, true),
                // declarations, comments, text, end of a skipped envelope
                Ok(_) => continue,
            };

            if has_children {
                if element.name == "osm" {
                    // the export envelope: descend instead of materializing
                    // the whole file as one element
                    continue;
                }
                self.read_children(&mut element)?;
            }

            return Ok(Some(element));
        }
    }

    /// Collects `nd`/`tag` children until the element closes.
    fn read_children(&mut self, element: &mut RawElement) -> Result<(), Error> {
        let mut depth = 0usize;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.reader.read_event_into(&mut buf) {
                Err(e) => return Err(e.into()),
                Ok(Event::Eof) => {
                    return Err("unexpected end of file inside a map element".into())
                }
                Ok(Event::Empty(start)) => {
                    if depth == 0 {
                        if let Some(child) = child_from_start(&start)? {
                            element.children.push(child);
                        }
                    }
                }
                Ok(Event::Start(start)) => {
                    if depth == 0 {
                        if let Some(child) = child_from_start(&start)? {
                            element.children.push(child);
                        }
                    }
                    depth += 1;
                }
                Ok(Event::End(_)) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Ok(_) => (),
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<RawElement, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_element().transpose()
    }
}

fn element_from_start(start: &BytesStart) -> Result<RawElement, Error> {
    let name = str::from_utf8(start.name().as_ref())?.to_string();
    let mut element = RawElement::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }

    Ok(element)
}

fn child_from_start(start: &BytesStart) -> Result<Option<Child>, Error> {
    let qname = start.name();
    let name = str::from_utf8(qname.as_ref())?;

    match name {
        "nd" => {
            let mut reference = None;
            for attribute in start.attributes() {
                let attribute = attribute.map_err(quick_xml::Error::from)?;
                if attribute.key.as_ref() == b"ref" {
                    reference = Some(attribute.unescape_value()?.into_owned());
                }
            }
            Ok(Some(Child::NodeRef { reference }))
        }
        "tag" => {
            let mut key = None;
            let mut value = None;
            for attribute in start.attributes() {
                let attribute = attribute.map_err(quick_xml::Error::from)?;
                match attribute.key.as_ref() {
                    b"k" => key = Some(attribute.unescape_value()?.into_owned()),
                    b"v" => value = Some(attribute.unescape_value()?.into_owned()),
                    _ => (),
                }
            }
            match (key, value) {
                (Some(key), Some(value)) => Ok(Some(Child::Tag { key, value })),
                _ => {
                    debug!("skipping a tag child missing k or v");
                    Ok(None)
                }
            }
        }
        other => {
            debug!("skipping <{}> child element", other);
            Ok(None)
        }
    }
}
