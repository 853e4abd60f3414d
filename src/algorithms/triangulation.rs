pub mod delaunay;

#[doc(inline)]
pub use delaunay::{triangulate, DelaunayMesh};
