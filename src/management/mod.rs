mod assembler;
mod session;

pub use assembler::PlaylistAssembler;
pub use assembler::SamplingOptions;
pub use session::SessionManager;
pub use session::SessionState;
pub use session::SessionStatus;
pub use session::generate_state;
