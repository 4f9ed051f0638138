use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine error: pending buffer has stopped")]
    Stopped,
    #[error("Engine error: pending buffer dropped the reply")]
    NoReply
}
