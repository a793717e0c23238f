//! Embedded affix tables
//!
//! Affix lists compiled into the binary at build time.

// Include generated affix lists from build script
include!(concat!(env!("OUT_DIR"), "/prefixes.rs"));
include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));
include!(concat!(env!("OUT_DIR"), "/prefix_decoys.rs"));
include!(concat!(env!("OUT_DIR"), "/suffix_decoys.rs"));
