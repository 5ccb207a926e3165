//! Shared test support for the VisualEyes workspace: an in-memory scene
//! graph, a stub artboard renderer, a recording notifier, and a canned
//! single-connection HTTP server for exercising the prediction client
//! without the real service.

mod http;
mod notifier;
mod renderer;
mod scene;

pub use http::{CannedResponse, CannedServer, ReceivedRequest};
pub use notifier::RecordingNotifier;
pub use renderer::{StubRenderer, STUB_RENDITION};
pub use scene::{FixtureNode, MemoryScene};
