//! Integration tests for the train-and-test pipeline on a directory corpus

use spam_rs::{
    train_and_test, CorpusLayout, DetectorError, Evaluation, Label, SpamDetector, TrainingCorpus,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to write one document under the corpus root
fn write_doc(root: &Path, dir: &str, name: &str, text: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), text).unwrap();
}

/// Build a small corpus in the default layout
fn setup_corpus() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_doc(root, "train/ham", "h1.txt", "The meeting agenda for Monday");
    write_doc(root, "train/ham", "h2.txt", "The project lunch with the team");
    write_doc(root, "train/ham2", "h3.txt", "The project notes and meeting minutes");
    write_doc(root, "train/spam", "s1.txt", "Buy cheap pills now!!!");
    write_doc(root, "train/spam", "s2.txt", "Win money now, buy now");
    write_doc(root, "train/spam", "s3.txt", "Cheap watches, win big with the best");

    write_doc(root, "test/ham", "b.txt", "The project meeting moved to Tuesday");
    write_doc(root, "test/ham", "a.txt", "Notes from the lunch");
    write_doc(root, "test/spam", "z.txt", "Cheap pills, buy now");
    write_doc(root, "test/spam", "y.txt", "Win money");

    tmp
}

#[test]
fn test_results_ordered_ham_then_spam_by_file_name() {
    let tmp = setup_corpus();
    let results = train_and_test(tmp.path()).unwrap();

    let order: Vec<(&str, Label)> = results
        .iter()
        .map(|doc| (doc.file.as_str(), doc.actual_class))
        .collect();
    assert_eq!(
        order,
        vec![
            ("a.txt", Label::Ham),
            ("b.txt", Label::Ham),
            ("y.txt", Label::Spam),
            ("z.txt", Label::Spam),
        ]
    );
}

#[test]
fn test_small_corpus_is_classified_correctly() {
    let tmp = setup_corpus();
    let run = SpamDetector::new().run(tmp.path()).unwrap();

    for doc in &run.results {
        assert!((0.0..=1.0).contains(&doc.spam_probability));
        assert_eq!(
            doc.predicted_spam(),
            doc.actual_class == Label::Spam,
            "{} scored {}",
            doc.file,
            doc.spam_probability
        );
    }

    let evaluation = run.evaluation();
    assert_eq!(evaluation.accuracy(), 1.0);
    assert_eq!(evaluation.precision(), 1.0);
    assert_eq!(run.training.processed, 6);
    assert_eq!(run.testing.processed, 4);
    assert!(run.training.skipped.is_empty());
}

#[test]
fn test_ham_directories_are_merged() {
    let tmp = setup_corpus();
    let corpus = TrainingCorpus::load(tmp.path(), &CorpusLayout::default()).unwrap();

    assert_eq!(corpus.stats.ham_documents, 3);
    assert_eq!(corpus.stats.spam_documents, 3);
    // "meeting" appears in train/ham and train/ham2
    assert_eq!(corpus.ham.count("meeting"), 2);
    assert_eq!(corpus.spam.count("now"), 2);
}

#[test]
fn test_buy_now_scenario() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_doc(root, "train/ham", "1", "hello there");
    write_doc(root, "train/ham2", "2", "meeting agenda");
    write_doc(root, "train/spam", "1", "buy cheap now");
    write_doc(root, "train/spam", "2", "buy pills now");
    write_doc(root, "test/ham", "unrelated", "see you at the meeting");
    write_doc(root, "test/spam", "buy-now", "buy now");

    let run = SpamDetector::new().run(root).unwrap();
    let model = &run.model;

    assert_eq!(model.conditional_probability("buy", Label::Spam), Some(0.75));
    assert_eq!(model.conditional_probability("buy", Label::Ham), None);
    assert_eq!(model.spam_likelihood("buy"), Some(1.0));

    assert_eq!(run.results[0].file, "unrelated");
    assert_eq!(run.results[0].spam_probability, 0.5);
    assert_eq!(run.results[1].file, "buy-now");
    assert!(run.results[1].spam_probability > 0.5);

    let evaluation = run.evaluation();
    assert_eq!(evaluation.true_positives, 1);
    assert_eq!(evaluation.false_positives, 1);
}

#[test]
fn test_missing_spam_directory_is_fatal() {
    let tmp = setup_corpus();
    fs::remove_dir_all(tmp.path().join("train/spam")).unwrap();

    match train_and_test(tmp.path()) {
        Err(DetectorError::MissingDirectory(path)) => {
            assert_eq!(path, tmp.path().join("train/spam"));
        }
        other => panic!("expected MissingDirectory, got {:?}", other),
    }
}

#[test]
fn test_missing_test_directory_is_fatal() {
    let tmp = setup_corpus();
    fs::remove_dir_all(tmp.path().join("test/ham")).unwrap();

    assert!(matches!(
        train_and_test(tmp.path()),
        Err(DetectorError::MissingDirectory(_))
    ));
}

#[test]
fn test_empty_training_directory_is_fatal() {
    let tmp = setup_corpus();
    let ham2 = tmp.path().join("train/ham2");
    fs::remove_dir_all(&ham2).unwrap();
    fs::create_dir_all(&ham2).unwrap();

    match train_and_test(tmp.path()) {
        Err(DetectorError::EmptyDirectory(path)) => assert_eq!(path, ham2),
        other => panic!("expected EmptyDirectory, got {:?}", other),
    }
}

#[test]
fn test_empty_test_directory_yields_no_results() {
    let tmp = setup_corpus();
    let test_spam = tmp.path().join("test/spam");
    fs::remove_dir_all(&test_spam).unwrap();
    fs::create_dir_all(&test_spam).unwrap();

    let results = train_and_test(tmp.path()).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|doc| doc.actual_class == Label::Ham));
    assert_eq!(Evaluation::from_results(&results).precision(), 0.0);
}

#[test]
fn test_unreadable_document_is_skipped() {
    let tmp = setup_corpus();
    // A directory where a document is expected cannot be read as a file
    fs::create_dir_all(tmp.path().join("train/spam/nested")).unwrap();
    fs::create_dir_all(tmp.path().join("test/ham/nested")).unwrap();

    let run = SpamDetector::new().run(tmp.path()).unwrap();

    assert_eq!(run.model.stats().spam_documents, 3);
    assert_eq!(run.training.processed, 6);
    assert_eq!(run.training.skipped.len(), 1);
    assert_eq!(run.training.skipped[0].path, tmp.path().join("train/spam/nested"));

    assert_eq!(run.results.len(), 4);
    assert_eq!(run.testing.skipped.len(), 1);
}

#[test]
fn test_class_with_only_unreadable_documents_is_fatal() {
    let tmp = setup_corpus();
    let spam = tmp.path().join("train/spam");
    fs::remove_dir_all(&spam).unwrap();
    fs::create_dir_all(spam.join("only-a-directory")).unwrap();

    assert!(matches!(
        train_and_test(tmp.path()),
        Err(DetectorError::EmptyCorpus(Label::Spam))
    ));
}

#[test]
fn test_invalid_utf8_is_read_lossily() {
    let tmp = setup_corpus();
    fs::write(
        tmp.path().join("train/spam/latin1.txt"),
        b"cheap \xe9t\xe9 offer".as_slice(),
    )
    .unwrap();

    let run = SpamDetector::new().run(tmp.path()).unwrap();
    assert!(run.training.skipped.is_empty());
    assert_eq!(run.model.stats().spam_documents, 4);
    assert!(run.model.spam_likelihood("offer").is_some());
}

#[test]
fn test_custom_layout() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_doc(root, "good", "1", "family dinner tonight");
    write_doc(root, "bad", "1", "free prize inside");
    write_doc(root, "check/good", "1", "dinner tonight?");
    write_doc(root, "check/bad", "1", "claim your free prize");

    let layout = CorpusLayout {
        train_ham: vec![PathBuf::from("good")],
        train_spam: vec![PathBuf::from("bad")],
        test_ham: PathBuf::from("check/good"),
        test_spam: PathBuf::from("check/bad"),
    };
    let run = SpamDetector::with_layout(layout).run(root).unwrap();

    assert_eq!(run.results.len(), 2);
    assert_eq!(run.results[0].actual_class, Label::Ham);
    assert_eq!(run.results[0].spam_probability, 0.5);
    assert!(run.results[1].predicted_spam());
}
