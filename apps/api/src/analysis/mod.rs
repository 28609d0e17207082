// Job analysis: keyword classification of pasted postings, the saved-analysis
// list, and the one-shot handoff into the version builder.

pub mod analyzer;
pub mod handlers;
pub mod saved;
