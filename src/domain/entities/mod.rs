//! Core domain entities.
//!
//! URL mappings themselves are plain `url:<key>` → URL string pairs in the
//! store and need no entity type. The only structured value is the
//! [`ScoredMember`] returned by sorted-set range queries.

pub mod scored_member;

pub use scored_member::ScoredMember;
