//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/vocab.rs"));
