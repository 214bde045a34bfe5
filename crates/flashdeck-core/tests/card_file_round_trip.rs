use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use flashdeck_core::{Deck, DeckError, Hardest};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.txt", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn sample_deck() -> Deck {
    let mut deck = Deck::new();
    deck.add("France", "Paris").expect("add should succeed");
    deck.add("Japan", "Tokyo").expect("add should succeed");
    deck.add("Peru", "Lima").expect("add should succeed");
    deck.answer("Japan", "Lima").expect("answer should succeed");
    deck.answer("Japan", "Kyoto").expect("answer should succeed");
    deck.answer("Peru", "Cusco").expect("answer should succeed");
    deck
}

#[test]
fn test_export_import_round_trip() {
    let temp = TempFile::new("flashdeck_round_trip");
    let mut deck = sample_deck();

    let saved = deck.export_to_path(&temp.path).expect("export should succeed");
    assert_eq!(saved, 3);

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert_eq!(on_disk, "France\nParis\n0\nJapan\nTokyo\n2\nPeru\nLima\n1\n");

    let mut restored = Deck::new();
    let loaded = restored
        .import_from_path(&temp.path)
        .expect("import should succeed");
    assert_eq!(loaded, 3);
    assert_eq!(restored.cards(), deck.cards());
    assert_eq!(
        restored.hardest(),
        Hardest::Unique {
            term: "Japan".to_string(),
            count: 2
        }
    );
}

#[test]
fn test_import_missing_file_fails() {
    let temp = TempFile::new("flashdeck_missing");
    let mut deck = Deck::new();

    let err = deck.import_from_path(&temp.path).unwrap_err();
    assert!(matches!(err, DeckError::FileNotFound(_)));
    assert!(err.is_not_found());
    assert!(deck.is_empty());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp = TempFile::new("flashdeck_no_dir");
    let target = temp.path.join("nested").join("cards.txt");
    let mut deck = sample_deck();

    let err = deck.export_to_path(&target).unwrap_err();
    assert!(matches!(err, DeckError::Io(_)));
    assert!(!target.exists());
}

#[test]
fn test_import_tolerates_bad_counts() {
    let temp = TempFile::new("flashdeck_bad_counts");
    fs::write(&temp.path, "a\nalpha\nabc\nb\nbeta\n3\n").expect("write should succeed");

    let mut deck = Deck::new();
    let loaded = deck
        .import_from_path(&temp.path)
        .expect("import should succeed");
    assert_eq!(loaded, 2);
    assert_eq!(deck.mistakes_for("a"), 0);
    assert_eq!(deck.mistakes_for("b"), 3);
}
