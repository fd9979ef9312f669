mod helpers;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use helpers::{kb_file, seeded_store};
use loqui::knowledge::codec;
use loqui::knowledge::store::KnowledgeStore;
use loqui::knowledge::types::QuestionKind;
use tempfile::TempDir;

#[test]
fn file_round_trip_preserves_every_pair() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.ini");
    let store = seeded_store();

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    codec::write(&mut writer, &store).unwrap();
    drop(writer);

    let mut reloaded = KnowledgeStore::new();
    let count = codec::read(BufReader::new(File::open(&path).unwrap()), &mut reloaded).unwrap();

    assert_eq!(count, 4);
    for record in store.iter() {
        for kind in QuestionKind::ALL {
            if let Some(response) = record.response(kind) {
                assert_eq!(reloaded.get(kind, &record.entity).unwrap(), response);
            }
        }
    }
}

#[test]
fn written_file_omits_empty_slots() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kb.ini");

    let mut store = KnowledgeStore::new();
    store.put(QuestionKind::What, "sun", "a star");

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    codec::write(&mut writer, &store).unwrap();
    drop(writer);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "[what]\nsun=a star\n\n[where]\n\n[who]\n");
}

#[test]
fn sections_load_in_any_order() {
    let dir = TempDir::new().unwrap();
    let path = kb_file(
        &dir,
        "shuffled.ini",
        "[who]\nlinus=the creator of Linux\n\n[what]\nsun=a star\n",
    );

    let mut store = KnowledgeStore::new();
    let count = codec::read(BufReader::new(File::open(&path).unwrap()), &mut store).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        store.get(QuestionKind::Who, "linus").unwrap(),
        "the creator of Linux"
    );
    assert_eq!(store.get(QuestionKind::What, "sun").unwrap(), "a star");
}

#[test]
fn malformed_file_keeps_entries_before_the_failure() {
    let dir = TempDir::new().unwrap();
    let path = kb_file(&dir, "broken.ini", "[what]\nsun=a star\ngarbage line\n");

    let mut store = KnowledgeStore::new();
    let result = codec::read(BufReader::new(File::open(&path).unwrap()), &mut store);

    assert!(result.is_err());
    assert_eq!(store.get(QuestionKind::What, "sun").unwrap(), "a star");
}
