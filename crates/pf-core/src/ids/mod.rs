//! ID type wrappers for type safety.

mod id_macro;

pub mod element_id;
pub mod repository_id;

pub use element_id::ElementId;
pub use repository_id::RepositoryId;
