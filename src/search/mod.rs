// ============================================================
// Layer 5 — Search / Ranking Layer
// ============================================================
// The retrieval pipeline itself. Everything here is pure:
// documents and a query go in, scored results come out.
//
//   RcaDocument[] + query
//       │
//       ▼
//   DocumentScanner   → SectionMatcher per section,
//       │               DateExtractor for recency,
//       │               QualityScorer per matched section
//       ▼
//   MatchResult[]
//       │
//       ▼
//   DocumentSelector  → greedy pick under the word budget
//       │
//       ▼
//   Selection
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Text quality heuristic
pub mod quality;

/// Phrase search inside one section
pub mod matcher;

/// Corpus walk producing scored matches
pub mod scanner;

/// Budget-constrained selection of matches
pub mod selector;
