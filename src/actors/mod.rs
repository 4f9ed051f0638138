mod pending_buffer;

pub use pending_buffer::{BufferCommand, PendingBufferActor};
