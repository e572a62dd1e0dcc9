// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any single
// business layer:
//
//   config.rs — search tunables (budget, recency horizon,
//               snippet size, quality weights) with defaults,
//               overridable from the environment or a .env
//               file.
//
// Keeping configuration here means the search layer receives
// plain values and never reads the environment itself.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Search configuration and quality weights
pub mod config;
