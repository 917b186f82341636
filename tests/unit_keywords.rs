// Unit tests for keyword extraction.
//
// Tests the query builder in isolation: stopword and question-word removal,
// order preservation, the resource-free fallback tier, and custom stopword
// files.

use std::path::PathBuf;

use truthfort::verify::keywords::QUESTION_WORDS;
use truthfort::verify::{KeywordExtractor, StopwordSource};

// ============================================================
// Default (bundled stopwords, word tokenizer)
// ============================================================

#[test]
fn extracts_content_words_in_order() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.extract("The Eiffel Tower is in Paris"),
        "eiffel tower paris"
    );
}

#[test]
fn punctuation_is_split_off_and_dropped() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.extract("Did NASA launch Artemis to the Moon, in 2022?"),
        "nasa launch artemis moon"
    );
}

#[test]
fn topical_words_survive_the_stopword_list() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.extract("World War Two ended in 1945"),
        "world war two ended"
    );
    assert_eq!(
        extractor.extract("New York is the largest city in the United States"),
        "new york largest city united states"
    );
}

#[test]
fn hyphenated_tokens_are_not_alphabetic() {
    let extractor = KeywordExtractor::default();
    assert_eq!(
        extractor.extract("The well-known Eiffel Tower is in Paris"),
        "eiffel tower paris"
    );
}

#[test]
fn all_stopword_claims_yield_empty_query() {
    let extractor = KeywordExtractor::default();
    for claim in ["Is it?", "What is the", "Why do they have it?", "", "   ", "?!"] {
        assert_eq!(extractor.extract(claim), "", "claim {claim:?}");
    }
}

#[test]
fn question_words_removed_even_without_stopwords() {
    let extractor = KeywordExtractor::new(&StopwordSource::None);
    for word in QUESTION_WORDS {
        assert_eq!(extractor.extract(word), "", "question word {word:?}");
    }
}

#[test]
fn numbers_and_mixed_tokens_removed() {
    let extractor = KeywordExtractor::new(&StopwordSource::None);
    assert_eq!(extractor.extract("covid19 cases 2020 rose"), "cases rose");
}

// ============================================================
// Fallback tier
// ============================================================

#[test]
fn fallback_splits_on_whitespace_only() {
    let extractor = KeywordExtractor::fallback();
    // "paris?" keeps its punctuation under a whitespace split, so it is not
    // purely alphabetic and gets dropped. No stopword list applies.
    assert_eq!(
        extractor.extract("Is the Eiffel Tower in Paris?"),
        "the eiffel tower in"
    );
}

#[test]
fn missing_stopword_file_degrades_to_no_stopwords() {
    let extractor = KeywordExtractor::new(&StopwordSource::File(PathBuf::from(
        "/nonexistent/truthfort/stopwords.txt",
    )));
    assert_eq!(extractor.extract("The tower"), "the tower");
}

#[test]
fn custom_stopword_file_is_used() {
    let path = std::env::temp_dir().join(format!(
        "truthfort-stopwords-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, "the\nTower\n\nin\n").unwrap();

    let extractor = KeywordExtractor::new(&StopwordSource::File(path.clone()));
    assert_eq!(extractor.extract("The Eiffel Tower is in Paris"), "eiffel paris");

    std::fs::remove_file(&path).ok();
}
