mod session;

pub use session::{Selection, TickToken, TimerSession, TimerState};
