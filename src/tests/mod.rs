use crate::emit::generate_c;
use crate::keywords_of;
use crate::trie::{build, TrieNode};

static LANG_KEYWORDS: &str = include_str!("kw/lang.txt");

fn build_fixture() -> (Vec<String>, TrieNode) {
    let keywords = keywords_of(LANG_KEYWORDS);
    let root = build(&keywords).expect("fixture list should validate");

    (keywords, root)
}

fn emit_string(root: &TrieNode) -> String {
    let mut out = Vec::new();
    generate_c(root, "NAME", &mut out).expect("write to vec");

    String::from_utf8(out).unwrap()
}

#[test]
fn test_lang_keywords_classify() {
    let (keywords, root) = build_fixture();

    for word in &keywords {
        assert_eq!(root.classify(word), Some(word.as_str()), "{}", word);
    }
}

#[test]
fn test_lang_non_keywords() {
    let (keywords, root) = build_fixture();

    for word in &keywords {
        // proper prefixes that are not themselves keywords
        for cut in 1..word.len() {
            let prefix = &word[..cut];
            if !keywords.iter().any(|w| w == prefix) {
                assert_eq!(root.classify(prefix), None, "{}", prefix);
            }
        }
        // and extensions past the keyword's end
        let extended = format!("{}q", word);
        if !keywords.iter().any(|w| *w == extended) {
            assert_eq!(root.classify(&extended), None, "{}", extended);
        }
    }

    assert_eq!(root.classify(""), None);
    assert_eq!(root.classify("elsewhere"), None);
    assert_eq!(root.classify("keyword"), None);
}

#[test]
fn test_lang_emit_shape() {
    let (keywords, root) = build_fixture();
    let emitted = emit_string(&root);

    assert!(emitted.starts_with("Type keyword(const char *k) {"));
    assert!(emitted.ends_with("}\n"));
    assert!(emitted.contains("switch (k[0]) {"));
    assert!(emitted.contains("default:"));

    // one tag per keyword, none shadowed
    for word in &keywords {
        let ret = format!("return {};", word.to_ascii_uppercase());
        assert!(emitted.contains(&ret), "{}", ret);
    }
}

#[test]
fn test_lang_emit_deterministic() {
    let (_, root) = build_fixture();
    let (_, again) = build_fixture();

    assert_eq!(emit_string(&root), emit_string(&again));
}

quickcheck! {
    fn prop_classify_agrees_with_lookup(token: String) -> bool {
        let (keywords, root) = build_fixture();
        let naive = keywords
            .iter()
            .find(|w| **w == token)
            .map(|w| w.as_str());

        root.classify(&token) == naive
    }

    fn prop_rotation_preserves_classification(
        shift: usize,
        token: String
    ) -> bool {
        let (keywords, root) = build_fixture();

        let mut rotated = keywords.clone();
        rotated.rotate_left(shift % keywords.len());
        let root2 = build(&rotated).unwrap();

        root.classify(&token) == root2.classify(&token)
    }

    fn prop_members_classify_to_themselves(words: Vec<String>) -> bool {
        let mut keywords: Vec<String> = Vec::new();
        for w in words {
            if !w.is_empty() && w.is_ascii() && !keywords.contains(&w) {
                keywords.push(w);
            }
        }

        let root = match build(&keywords) {
            Ok(root) => root,
            Err(_) => return false,
        };

        keywords.iter().all(|w| root.classify(w) == Some(w.as_str()))
    }
}
