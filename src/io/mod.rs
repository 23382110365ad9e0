/*! Input plumbing.

Streams raw elements out of an `.osm` export file.
!*/
mod reader;

pub use reader::OsmReader;
