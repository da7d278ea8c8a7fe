//! Built-in mappings, one per source type
//!
//! Every mapping is a pure function of the payload. Output contract:
//! `null` drops the event, anything else must be a complete canonical
//! message object.

pub mod fields;

mod botkube;
mod devguard;
mod docs_assignment;
mod github;
mod gitlab;
mod glitchtip;

pub use botkube::BotkubeMapping;
pub use devguard::DevguardMapping;
pub use docs_assignment::DocsAssignmentMapping;
pub use github::GithubMapping;
pub use gitlab::GitlabMapping;
pub use glitchtip::GlitchtipMapping;
