//! Corpus compiled into the binary by the build script

include!(concat!(env!("OUT_DIR"), "/corpus_en.rs"));
