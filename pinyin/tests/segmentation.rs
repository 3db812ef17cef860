// Segmentation over the full pinyin table.

use libsyllable_pinyin::{new_decoder, PinyinConfig};

fn best_texts(input: &str) -> Vec<String> {
    let mut decoder = new_decoder(PinyinConfig::default());
    decoder.feed(input);
    decoder
        .get_best_token_path(input)
        .map(|p| p.texts().into_iter().map(String::from).collect())
        .unwrap_or_default()
}

#[test]
fn common_greetings() {
    assert_eq!(best_texts("nihao"), vec!["ni", "hao"]);
    assert_eq!(best_texts("zhongguo"), vec!["zhong", "guo"]);
    assert_eq!(best_texts("woshi"), vec!["wo", "shi"]);
}

#[test]
fn longest_syllable_preferred() {
    assert_eq!(best_texts("xian"), vec!["xian"]);
    assert_eq!(best_texts("zhuang"), vec!["zhuang"]);
}

#[test]
fn vowel_lead_tie_break() {
    // "fangan" splits as fan|gan or fang|an at equal token count; the
    // consonant-led split wins.
    assert_eq!(best_texts("fangan"), vec!["fan", "gan"]);
}

#[test]
fn separator_overrides_greedy_merge() {
    let mut decoder = new_decoder(PinyinConfig::default());
    decoder.feed("xi'an");
    let best = decoder.get_best_token_path("xi'an").unwrap();
    assert_eq!(best.texts(), vec!["xi", "an"]);
    assert!(best.tokens[0].ends_with_separator);
    assert_eq!(best.external_tokens('\''), vec!["xi'", "an"]);

    // Without the separator the single syllable wins.
    assert_eq!(best_texts("xian"), vec!["xian"]);
}

#[test]
fn trailing_initial_stays_a_token() {
    assert_eq!(best_texts("nihaozh"), vec!["ni", "hao", "zh"]);
}

#[test]
fn initial_normalization_expands_to_syllables() {
    let decoder = new_decoder(PinyinConfig::default());
    let zh = decoder.get_normalized_token("zh");
    assert_eq!(zh[0], "zh");
    assert!(zh.contains(&"zhong".to_string()));
    assert!(zh.iter().skip(1).all(|s| s.starts_with("zh")));

    // A full syllable with no fuzzy pairs normalizes to itself.
    assert_eq!(decoder.get_normalized_token("hao"), vec!["hao"]);
}

#[test]
fn fuzzy_normalization_with_standard_pairs() {
    let decoder = new_decoder(PinyinConfig::with_standard_fuzzy());
    let zi = decoder.get_normalized_token("zi");
    assert!(zi.contains(&"zi".to_string()));
    assert!(zi.contains(&"zhi".to_string()));

    let fan = decoder.get_normalized_token("fan");
    assert!(fan.contains(&"fang".to_string())); // an -> ang
    assert!(fan.contains(&"han".to_string())); // f -> h
}

#[test]
fn incremental_typing_session() {
    let mut decoder = new_decoder(PinyinConfig::default());
    let mut last = Vec::new();
    for end in 1..="zhongguo".len() {
        let source = &"zhongguo"[..end];
        decoder.feed(source);
        if let Some(best) = decoder.get_best_token_path(source) {
            last = best.texts().into_iter().map(String::from).collect();
        }
    }
    assert_eq!(last, vec!["zhong", "guo"]);
}

#[test]
fn backspace_restarts_cleanly() {
    let mut decoder = new_decoder(PinyinConfig::default());
    decoder.feed("nihao");
    decoder.feed("niha"); // backspace: not an extension
    assert_eq!(decoder.reconstructed(), "niha");
    let best = decoder.get_best_token_path("niha").unwrap();
    assert_eq!(best.texts(), vec!["ni", "ha"]);
}
