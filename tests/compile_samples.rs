//! Compile the sample songsheets and check the element structure.

use pretty_assertions::assert_eq;
use songsheet::{parse_file, parse_songsheet, songsheet_to_json, Element, ElementKind};
use std::path::PathBuf;

fn songsheets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("songsheets")
}

fn kinds(sheet: &songsheet::Songsheet) -> Vec<ElementKind> {
    sheet.elements.iter().map(|e| e.element.kind()).collect()
}

#[test]
fn compile_wild_horses() {
    let sheet = parse_file(songsheets_dir().join("wild-horses.songsheet")).expect("Failed to parse wild-horses");

    let header = sheet.header.as_ref().expect("Should have a title block");
    assert_eq!(header.title, "Wild Horses");
    assert_eq!(header.title_line2, "(live version)");
    assert_eq!(header.date, "2021-03-04");
    assert_eq!(header.bpm, "92");
    assert_eq!(header.capo, "02");
    assert_eq!(header.tuning, ["E", "A", "D", "G", "B", "E"].map(String::from));

    use ElementKind::*;
    assert_eq!(
        kinds(&sheet),
        vec![
            ChordChart, Spacer, AnnotatedSine, Lyrics, Melody, Spacer, AnnotatedSine, Lyrics, Lyrics, Spacer,
            Spacer, AnnotatedSine, Lyrics, Spacer,
        ]
    );

    let Element::ChordChart(chart) = &sheet.elements[0].element else {
        panic!("first element should be a chord chart");
    };
    let names: Vec<&str> = chart.chords.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["F", "G", "C", "Am7"]);
    assert_eq!(chart.chords[3].positions[0], "x");

    // the comment line is gone, so the second curve sits one row higher
    // than its line in the file
    assert_eq!(sheet.elements[6].row, 24);

    let anchors: Vec<String> = sheet
        .annotated_sines()
        .filter_map(|(_, s)| s.anchor.map(|a| a.time.to_string()))
        .collect();
    assert_eq!(anchors, vec!["00:03.00", "00:11.00", "00:14.50"]);
}

#[test]
fn compile_without_title_block() {
    let sheet = parse_file(songsheets_dir().join("little-one.songsheet")).expect("Failed to parse little-one");
    assert!(sheet.header.is_none());
    assert_eq!(
        kinds(&sheet),
        vec![
            ElementKind::AnnotatedSine,
            ElementKind::Lyrics,
            // a melody always takes three lines, here the blank one after it
            ElementKind::Melody,
            ElementKind::ChordChart,
            ElementKind::Spacer,
        ]
    );
    assert_eq!(sheet.longest_humps(), Some(5.0));
}

#[test]
fn compiled_sheet_serializes_to_json() {
    let sheet = parse_file(songsheets_dir().join("wild-horses.songsheet")).unwrap();
    let json = songsheet_to_json(&sheet).expect("Failed to serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["header"]["title"], "Wild Horses");
    assert_eq!(value["elements"].as_array().map(|a| a.len()), Some(sheet.elements.len()));
    assert!(json.contains("\"00:11.00\""));
}

#[test]
fn melody_blocks_are_all_or_nothing() {
    // the 3 has a modifier both above and below, so the block is lyrics
    let sheet = parse_songsheet(" .  .\n 5  3\n    -\n").unwrap();
    assert!(sheet.elements.iter().all(|e| e.element.kind() != ElementKind::Melody));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file(songsheets_dir().join("no-such.songsheet")).unwrap_err();
    assert!(matches!(err, songsheet::SongsheetError::Io(_)));
}
