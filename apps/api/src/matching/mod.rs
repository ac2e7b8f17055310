// Career matching: the UserProfile reducer and the deterministic scorer.
// Pure code only; nothing in here performs I/O.

pub mod handlers;
pub mod matcher;
pub mod profile;
