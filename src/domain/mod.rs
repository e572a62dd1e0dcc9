// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing the incident corpus
// and the results of a search over it.
//
// Rules for this layer:
//   - NO file I/O
//   - NO scoring or matching logic
//   - Only data types, fixed section names, and traits
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they are found.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An RCA document with its named sections
pub mod document;

// Scored search hits and the budgeted selection
pub mod match_result;

// Core abstractions (traits) that other layers implement
pub mod traits;
