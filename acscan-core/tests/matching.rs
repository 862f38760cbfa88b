use acscan_core::{AcConfig, Alphabet, Automaton};

fn build(patterns: &[&str]) -> Automaton {
    Automaton::build(patterns).unwrap()
}

#[test]
fn test_classic_dictionary_is_idempotent() {
    let automaton = build(&["she", "he", "say", "shr", "her"]);

    assert_eq!(automaton.matches("yasherhs").unwrap(), vec![0, 1, 4]);
    assert_eq!(automaton.matches("yasherhs").unwrap(), vec![0, 1, 4]);
    assert_eq!(automaton.match_count("yasherhs").unwrap(), 3);
}

#[test]
fn test_multibyte_patterns_with_duplicates() {
    for alphabet in [Alphabet::Byte, Alphabet::Unicode] {
        let automaton = Automaton::build_with_config(
            ["hello", "世界", "hello世界", "hello"],
            AcConfig::with_alphabet(alphabet),
        )
        .unwrap();

        assert_eq!(automaton.matches("hello世界").unwrap().len(), 4);
        assert_eq!(automaton.matches("世界").unwrap().len(), 1);
        assert_eq!(automaton.matches("hello").unwrap().len(), 2);
    }
}

#[test]
fn test_overlapping_dictionary_counts() {
    let dictionary = [
        "abc", "bc", "ac", "bc", "de", "efg", "fgh", "hi", "abcd", "ac",
    ];
    let automaton = build(&dictionary);

    let hits = automaton.matches("abcdefghij").unwrap();
    assert_eq!(hits.len(), 8);
    assert_eq!(automaton.match_count("abcdefghij").unwrap(), 8);

    assert_eq!(automaton.matches("abcdef").unwrap().len(), 5);
    assert_eq!(automaton.matches("acdejefg").unwrap().len(), 4);
    assert_eq!(automaton.matches("abcd").unwrap().len(), 4);
    assert_eq!(automaton.matches("adefacde").unwrap().len(), 3);

    let hits = automaton.matches("agbdfgiadafgha").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(dictionary[hits[0] as usize], "fgh");
}

#[test]
fn test_duplicate_ids_repeat_latest() {
    let automaton = build(&[
        "abc", "bc", "ac", "bc", "de", "efg", "fgh", "hi", "abcd", "ac",
    ]);
    // "bc" (ids 1 and 3) and "ac" (ids 2 and 9) only surface their later id
    let hits = automaton.matches("abcac").unwrap();
    assert_eq!(hits, vec![0, 3, 3, 9, 9]);
}

#[test]
fn test_no_patterns() {
    let automaton = build(&[]);
    assert!(automaton.matches("foo bar baz").unwrap().is_empty());
}

#[test]
fn test_no_data() {
    let automaton = build(&["foo", "baz", "bar"]);
    assert!(automaton.matches("").unwrap().is_empty());
}

#[test]
fn test_suffixes() {
    let automaton = build(&["Superman", "uperman", "perman", "erman"]);
    let hits = automaton.matches("The Man Of Steel: Superman").unwrap();
    assert_eq!(hits, vec![0, 1, 2, 3]);
}

#[test]
fn test_prefixes() {
    let automaton = build(&["Superman", "Superma", "Superm", "Super"]);
    let hits = automaton.matches("The Man Of Steel: Superman").unwrap();
    assert_eq!(hits, vec![3, 2, 1, 0]);
}

#[test]
fn test_interior() {
    let automaton = build(&["Steel", "tee", "e"]);
    let hits = automaton.matches("The Man Of Steel: Superman").unwrap();
    assert_eq!(hits, vec![2, 1, 0]);
}

#[test]
fn test_match_at_start() {
    let automaton = build(&["The", "Th", "he"]);
    let hits = automaton.matches("The Man Of Steel: Superman").unwrap();
    assert_eq!(hits, vec![1, 0, 2]);
}

#[test]
fn test_match_at_end() {
    let automaton = build(&["teel", "eel", "el"]);
    let hits = automaton.matches("The Man Of Steel").unwrap();
    assert_eq!(hits, vec![0, 1, 2]);
}

#[test]
fn test_overlapping_patterns() {
    let automaton = build(&["Man ", "n Of", "Of S"]);
    let hits = automaton.matches("The Man Of Steel").unwrap();
    assert_eq!(hits, vec![0, 1, 2]);
}

#[test]
fn test_multiple_matches() {
    let automaton = build(&["The", "Man", "an"]);
    let hits = automaton
        .matches("A Man A Plan A Canal: Panama, which Man Planned The Canal")
        .unwrap();
    assert_eq!(hits, vec![1, 2, 0]);
}

#[test]
fn test_single_character_matches() {
    let automaton = build(&["a", "M", "z"]);
    let hits = automaton
        .matches("A Man A Plan A Canal: Panama, which Man Planned The Canal")
        .unwrap();
    assert_eq!(hits, vec![1, 0]);
}

#[test]
fn test_nothing_matches() {
    let automaton = build(&["baz", "bar", "foo"]);
    let text = "A Man A Plan A Canal: Panama, which Man Planned The Canal";
    assert!(automaton.matches(text).unwrap().is_empty());
    assert!(!automaton.is_match(text).unwrap());
}

#[test]
fn test_wikipedia_dictionary() {
    let automaton = build(&["a", "ab", "bc", "bca", "c", "caa"]);

    assert_eq!(automaton.matches("abccab").unwrap(), vec![0, 1, 2, 4]);
    assert_eq!(automaton.matches("bccab").unwrap(), vec![2, 4, 0, 1]);
    assert_eq!(automaton.matches("bccb").unwrap(), vec![2, 4]);
}

#[test]
fn test_user_agent() {
    let automaton = build(&["Mozilla", "Mac", "Macintosh", "Safari", "Sausage"]);

    let hits = automaton
        .matches("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Safari/537.36")
        .unwrap();
    assert_eq!(hits, vec![0, 1, 2, 3]);

    let hits = automaton
        .matches("Mozilla/5.0 (Mac; Intel Mac OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Safari/537.36")
        .unwrap();
    assert_eq!(hits, vec![0, 1, 3]);

    let hits = automaton
        .matches("Mozilla/5.0 (Moc; Intel Computer OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Safari/537.36")
        .unwrap();
    assert_eq!(hits, vec![0, 3]);

    let hits = automaton
        .matches("Mozilla/5.0 (Moc; Intel Computer OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Sofari/537.36")
        .unwrap();
    assert_eq!(hits, vec![0]);

    let hits = automaton
        .matches("Mazilla/5.0 (Moc; Intel Computer OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Sofari/537.36")
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_alphabets_agree_on_ascii_text() {
    let patterns = ["she", "he", "say", "shr", "her"];
    let texts = ["yasherhs", "hershey", "", "ssss", "shesayshr"];

    let expected: Vec<_> = {
        let automaton = Automaton::build(patterns).unwrap();
        texts.iter().map(|t| automaton.matches(t).unwrap()).collect()
    };

    for &alphabet in Alphabet::all() {
        let automaton =
            Automaton::build_with_config(patterns, AcConfig::with_alphabet(alphabet)).unwrap();
        let actual: Vec<_> = texts.iter().map(|t| automaton.matches(t).unwrap()).collect();
        assert_eq!(actual, expected, "alphabet {alphabet}");
    }
}

#[test]
fn test_byte_alphabet_takes_any_byte() {
    let patterns: [&[u8]; 4] = [b"she", b"he", b"\xff", b"\xffhe\x00"];
    let automaton = Automaton::build(patterns).unwrap();

    assert_eq!(automaton.matches_bytes(b"she\xffhe").unwrap(), vec![0, 1, 2]);
    assert_eq!(automaton.matches_bytes(b"\xffhe\x00").unwrap(), vec![2, 1, 3]);
    assert_eq!(automaton.match_count_bytes(b"\x00\x01\x02").unwrap(), 0);
}
