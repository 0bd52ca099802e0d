#![no_main]

use libfuzzer_sys::fuzz_target;
use textblock::{ScannerConfig, dedent, measure, parse, resume, tokenize};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(block) = parse(s) else {
        // Only an empty literal has no content
        assert!(s.is_empty());
        return;
    };

    // Fragments cover the input exactly and agree with the pure pipeline
    let rebuilt: String = block.fragments().map(|f| f.text).collect();
    assert_eq!(rebuilt, s);
    assert!(block.fragments().eq(tokenize(s, measure(s, &ScannerConfig::default()))));
    assert_eq!(block.content(), dedent(s));

    // Resuming from the middle reproduces the parse
    let index = block.tokens().len() / 2;
    let resumed = resume(s, &block, index, &ScannerConfig::default()).expect("resume failed");
    assert_eq!(resumed, block);
});
