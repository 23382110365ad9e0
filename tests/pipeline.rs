//! End-to-end runs of the two pipeline stages over an in-memory store.
use std::io::Write;

use osmtl::io::OsmReader;
use osmtl::normalizers::{AddressCleaner, PhoneCleaner};
use osmtl::pipeline;
use osmtl::shaping::ElementShaper;
use osmtl::store::MemStore;
use osmtl::types::FieldValue;

const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="overpass">
  <bounds minlat="45.49" minlon="-73.60" maxlat="45.52" maxlon="-73.55"/>
  <node id="1001" lat="45.5088" lon="-73.5617" user="cartographer" uid="42" version="3" changeset="77" timestamp="2017-03-01T12:00:00Z">
    <tag k="amenity" v="cafe"/>
    <tag k="name" v="Café Olimpico"/>
    <tag k="phone" v="(514) 555-1234"/>
    <tag k="addr:street" v="Rue Saint-Denis"/>
    <tag k="addr:postcode" v="H2X3K3"/>
    <tag k="addr:state" v="QC"/>
  </node>
  <node id="1002" lat="45.5231" lon="-73.5817" user="surveyor" version="1">
    <tag k="amenity" v="restaurant"/>
    <tag k="phone" v="555-1234"/>
  </node>
  <way id="2001" user="cartographer" version="2">
    <nd ref="1001"/>
    <nd ref="1002"/>
    <tag k="name" v="Sherbrooke St W"/>
    <tag k="addr:street" v="Sherbrooke St W"/>
  </way>
  <relation id="3001" version="1">
    <member type="way" ref="2001" role="outer"/>
  </relation>
</osm>
"#;

fn loaded_store() -> MemStore {
    let mut store = MemStore::new();
    let source = OsmReader::new(MAP.as_bytes());
    let stats = pipeline::load(source, &ElementShaper::default(), &mut store).unwrap();

    assert_eq!(stats.read, 5);
    assert_eq!(stats.shaped, 3);
    assert_eq!(stats.skipped, 2);

    store
}

fn cleaners() -> (PhoneCleaner, AddressCleaner) {
    (PhoneCleaner::default(), AddressCleaner::default())
}

#[test_log::test]
fn shaping_stage_keeps_nodes_and_ways_only() {
    let store = loaded_store();
    assert_eq!(store.len(), 3);

    let cafe = &store.documents()[0];
    assert_eq!(cafe.position(), Some(&[45.5088, -73.5617]));
    assert_eq!(cafe.created().get("user").unwrap(), "cartographer");
    assert_eq!(cafe.created().get("changeset").unwrap(), "77");
    assert_eq!(cafe.extra().get("id").unwrap(), "1001");
    assert!(cafe.is_amenity());
    assert_eq!(
        cafe.info().unwrap().get("name"),
        Some(&FieldValue::from("Café Olimpico"))
    );

    let way = &store.documents()[2];
    assert_eq!(way.node_refs().unwrap(), &["1001", "1002"]);
    assert!(way.position().is_none());
}

#[test_log::test]
fn cleaning_stage_normalizes_and_flags() {
    let mut store = loaded_store();
    let (phone, address) = cleaners();
    let stats = pipeline::clean(&mut store, &[&phone, &address]).unwrap();

    // the cafe phone and both addresses are rewritten, the restaurant
    // phone is flagged
    assert_eq!(stats.updated, 3);
    assert_eq!(stats.flagged, 1);

    let cafe = &store.documents()[0];
    assert_eq!(
        cafe.phone(),
        Some(&FieldValue::Many(vec!["+1 (514) 555-1234".to_string()]))
    );
    let cafe_address = cafe.address().unwrap();
    assert_eq!(
        cafe_address.get("street"),
        Some(&FieldValue::from("Saint Denis Street"))
    );
    assert_eq!(
        cafe_address.get("postcode"),
        Some(&FieldValue::Many(vec!["H2X 3K3".to_string()]))
    );
    assert_eq!(cafe_address.get("province"), Some(&FieldValue::from("QC")));
    assert_eq!(cafe_address.get("country"), Some(&FieldValue::from("CA")));
    assert!(cafe_address.get("state").is_none());
    assert!(!cafe.has_corrupt_data());

    let way_address = store.documents()[2].address().unwrap();
    assert_eq!(
        way_address.get("street"),
        Some(&FieldValue::from("Sherbrooke Street West"))
    );
}

#[test_log::test]
fn corruption_protocol_runs_all_three_writes() {
    let mut store = loaded_store();
    let (phone, address) = cleaners();
    pipeline::clean(&mut store, &[&phone, &address]).unwrap();

    let restaurant = &store.documents()[1];
    assert!(restaurant.has_corrupt_data());
    assert_eq!(restaurant.corrupt_fields(), Some(&FieldValue::from("555-1234")));
    assert!(restaurant.phone().is_none());
    // the rest of the document is untouched
    assert!(restaurant.is_amenity());
    assert_eq!(
        restaurant.info().unwrap().get("amenity"),
        Some(&FieldValue::from("restaurant"))
    );
}

#[test]
fn cleaning_is_idempotent() {
    let mut store = loaded_store();
    let (phone, address) = cleaners();
    pipeline::clean(&mut store, &[&phone, &address]).unwrap();
    let first_pass: Vec<_> = store.documents().to_vec();

    let stats = pipeline::clean(&mut store, &[&phone, &address]).unwrap();
    assert_eq!(stats.flagged, 0);
    assert_eq!(store.documents(), first_pass.as_slice());
}

#[test]
fn reads_the_same_elements_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MAP.as_bytes()).unwrap();
    file.flush().unwrap();

    let from_disk: Vec<_> = OsmReader::from_path(file.path())
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let from_memory: Vec<_> = OsmReader::new(MAP.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(from_disk, from_memory);
}
