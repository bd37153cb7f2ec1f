//! Manual test checklist and ship-readiness tracking

pub mod checklist;
pub mod proof;
