//! Default dictionary compiled into the binary
//!
//! `build.rs` turns `data/words_ru.txt` into `WORDS` and `WORDS_COUNT`.

include!(concat!(env!("OUT_DIR"), "/words_ru.rs"));
