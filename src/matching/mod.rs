//! Label canonicalization and string-similarity scoring used to decide when
//! two differently-spelled category labels mean the same thing.

pub mod normalize;
pub mod similarity;

pub use normalize::normalize;
pub use similarity::{edit_distance, similarity};
