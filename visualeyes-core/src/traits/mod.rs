//! Host-facing traits. The design tool supplies implementations of these;
//! everything else in the workspace is host-agnostic.

mod notifier;
mod renderer;
mod scene;

pub use notifier::INotifier;
pub use renderer::IArtboardRenderer;
pub use scene::ISceneGraph;
