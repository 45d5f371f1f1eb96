#![no_main]
use jsonsearcher::{Searcher, Segment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], Vec<(Option<i64>, String)>)| {
    let (document, steps) = data;
    if let Ok(searcher) = Searcher::new(document) {
        let path: Vec<Segment<'_>> = steps
            .iter()
            .map(|(idx, key)| match idx {
                Some(idx) => Segment::Index(*idx),
                None => Segment::from(key.as_str()),
            })
            .collect();
        let result = searcher.query(&path);
        if let Some(ty) = result.value_type() {
            assert_eq!(ty, result.value().value_type());
        } else {
            assert!(result.value().is_null());
        }
    }
});
