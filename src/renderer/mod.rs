//! WebGPU rendering: vertex types, mesh generation, scene assembly and the
//! render pipeline. Consumes `GameState` read-only once per frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::Scene;
pub use vertex::Vertex;
