// Resume versions: tailored content suggestions, the version builder, and the
// stored version list.

pub mod builder;
pub mod handlers;
pub mod tailoring;
pub mod versions;
