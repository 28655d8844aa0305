mod remote;

pub use remote::{FakeForge, FakeGit, remote_refs};
