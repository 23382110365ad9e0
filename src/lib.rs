/*! # osmtl

Ingestion and normalization pipeline for Montreal OpenStreetMap exports.

Map elements are streamed out of an export file, shaped into canonical
documents, and stored; a second pass then standardizes phone numbers,
postal codes and bilingual (French/English) street names in place.

```no_run
use osmtl::io::OsmReader;
use osmtl::normalizers::{AddressCleaner, PhoneCleaner};
use osmtl::pipeline;
use osmtl::shaping::ElementShaper;
use osmtl::store::MemStore;

# fn main() -> Result<(), osmtl::error::Error> {
let source = OsmReader::from_path("montreal.osm")?;
let mut store = MemStore::new();

pipeline::load(source, &ElementShaper::default(), &mut store)?;
pipeline::clean(
    &mut store,
    &[&PhoneCleaner::default(), &AddressCleaner::default()],
)?;
# Ok(())
# }
```
!*/
pub mod error;
pub mod identifiers;
pub mod io;
pub mod lexicon;
pub mod normalizers;
pub mod pipeline;
pub mod shaping;
pub mod store;
pub mod types;
