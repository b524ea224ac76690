#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, LazyLock};

use canvas_assistant::responder::{canvas_topics, ResponderEngine, FALLBACK_RESPONSE};
use canvas_assistant::spelling::DictionaryCorrector;

static ENGINE: LazyLock<ResponderEngine> = LazyLock::new(|| {
    let table = canvas_topics().expect("built-in topics are valid");
    let corrector = DictionaryCorrector::new(2).with_vocabulary(table.vocabulary());
    ResponderEngine::new(&table, Arc::new(corrector)).expect("built-in patterns compile")
});

fuzz_target!(|data: &str| {
    // Every message gets either a rendered list or the exact fallback.
    let html = ENGINE.respond(data);
    assert!(
        html == FALLBACK_RESPONSE
            || (html.starts_with("<ul><li>") && html.ends_with("</li></ul>"))
    );
});
