pub mod load;
pub mod resource;
pub mod run;

pub use load::{Load, ResultStatus};
pub use resource::{Edge, Resource, Vertex};
pub use run::{Run, RunStatus};
