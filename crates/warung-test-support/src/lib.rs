//! Shared stubs and helpers for Warung integration tests.

mod db;
mod server;
mod user_stub;

pub use db::memory_pool;
pub use server::spawn_router;
pub use user_stub::{RecordingUserService, StubBehavior};
