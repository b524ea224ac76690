#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

use canvas_assistant::spelling::{DictionaryCorrector, SpellCorrector};

static CORRECTOR: LazyLock<DictionaryCorrector> = LazyLock::new(|| DictionaryCorrector::new(2));

fuzz_target!(|data: &str| {
    // Tokens arrive pre-split on whitespace; arbitrary unicode, punctuation
    // and URL fragments must never panic the affix split or the lookup.
    for token in data.split_whitespace() {
        let corrected = CORRECTOR.correct(token);
        assert!(!corrected.is_empty());
    }
});
