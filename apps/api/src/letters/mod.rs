// Cover letters: free-text letters loosely linked to a resume version by id.

pub mod compose;
pub mod handlers;
