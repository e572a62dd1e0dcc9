// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to answer a query.
//
// Rules for this layer:
//   - No matching or scoring code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → scan → select for one query
pub mod search_use_case;
