// Master resume: the canonical record every tailored version copies from.

pub mod editor;
pub mod handlers;
