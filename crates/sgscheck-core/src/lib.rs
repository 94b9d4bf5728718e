//! # sgscheck core
//!
//! Eligibility checks for a youth football club's technical-staff
//! submission (SGS "Settore Tecnico" requirements), run before the
//! paperwork is filed with the federation.
//!
//! The crate is **presentation-agnostic**: it does not collect fields
//! and it does not render or export anything. It only prescribes how a
//! submission is normalized and which rules it must satisfy.
//!
//! ## Architecture
//!
//! ```text
//! Submission             ← Raw strings from the collection layer
//!     │
//! normalize              ← Trim, placeholder retention, identity keys
//!     │
//! (Director, Roster)     ← Immutable, structured staff assignment
//!     │
//! evaluate               ← Ordered battery of nine rule checks
//!     │
//! EligibilityReport      ← Every triggered violation, in rule order
//! ```
//!
//! Evaluation is a pure function of `(Director, Roster)`: the same
//! input always yields the same report, and no input makes it fail.

pub mod category;
pub mod error;
pub mod person;
pub mod qualification;
pub mod roster;
pub mod rules;

pub use category::Category;
pub use error::VocabularyError;
pub use person::{IdentityKey, Person};
pub use qualification::Qualification;
pub use roster::{
    CategoryAssignment, Director, RawTechnician, Roster, Submission, normalize,
};
pub use rules::{EligibilityReport, Rule, Violation, evaluate};
