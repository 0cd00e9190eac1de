// tests/snapshot_file.rs
//
// Snapshot JSON shape and on-disk replacement.
//
use chrono::{DateTime, TimeZone};
use openfuel::data::ist_offset;
use openfuel::file::{read_snapshot, to_json, write_snapshot};
use openfuel::{FuelSnapshot, PriceRecord};

fn sample() -> FuelSnapshot {
    let ts: DateTime<_> = ist_offset().with_ymd_and_hms(2025, 3, 14, 6, 0, 0).unwrap();
    FuelSnapshot::at(
        ts,
        vec![PriceRecord::new("New Delhi", 94.77), PriceRecord::new("Chandigarh", 94.3)],
        vec![PriceRecord::new("Mumbai", 89.97)],
    )
}

#[test]
fn json_uses_published_field_names() {
    let json = to_json(&sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["last_updated_ist"], "2025-03-14T06:00:00+05:30");
    assert_eq!(v["petrol"][0]["city"], "New Delhi");
    assert_eq!(v["petrol"][0]["price"], 94.77);
    assert_eq!(v["diesel"][0]["city"], "Mumbai");
    assert!(v["petrol"][0].get("location").is_none());
    assert!(json.contains("\n  \"petrol\": ["), "two-space pretty print");
}

#[test]
fn non_ascii_names_are_written_verbatim() {
    let snap = FuelSnapshot::at(sample().generated_at, vec![PriceRecord::new("दिल्ली", 94.77)], vec![]);
    let json = to_json(&snap).unwrap();
    assert!(json.contains("दिल्ली"));
}

#[test]
fn write_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prices.json");

    let size = write_snapshot(&path, &sample()).unwrap();
    assert!(size > 0);
    assert_eq!(read_snapshot(&path).unwrap(), sample());

    // No temp file left behind
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("prices.json")]);
}

#[test]
fn overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prices.json");
    std::fs::write(&path, "{\"old\": true}").unwrap();

    write_snapshot(&path, &sample()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("old"));
    assert!(text.contains("last_updated_ist"));
}

#[test]
fn failed_write_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    // Target is an existing, non-empty directory: rename over it must fail.
    let path = dir.path().join("prices.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    assert!(write_snapshot(&path, &sample()).is_err());
    assert!(path.join("keep").exists());
    assert!(!dir.path().join(".prices.json.tmp").exists());
}
