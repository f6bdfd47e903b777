//! Pages

mod index;

pub use index::IndexPage;
