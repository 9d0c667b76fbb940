#![no_main]

use libfuzzer_sys::fuzz_target;

use sponsorscan::detector::{KeywordMatcher, KeywordSet, extract, normalize};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    // Parsing must never panic and never hand out an empty id.
    if let Ok(id) = extract(&input) {
        assert!(!id.as_str().is_empty());
    }

    let once = normalize(&input);
    assert_eq!(normalize(&once), once);

    let matcher = KeywordMatcher::new(KeywordSet::new(["sponsor", "use code"]));
    let _ = matcher.matches(&once);
});
