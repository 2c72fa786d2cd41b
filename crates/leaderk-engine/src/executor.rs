//! The boundary to OS-level side effects.

use config::Action;

/// Performs the side effect of a resolved leaf action.
///
/// The four recognized kinds are `application` (launch by file path), `url`
/// (open a URI), `command` (run a shell command), and `folder` (reveal a path
/// in the file browser). Implementations live with the app shell; the engine
/// only needs to know the dispatch decision was "execute".
///
/// Invocation is fire-and-forget: the engine never observes completion or
/// failure of the underlying side effect. Implementations must report
/// unrecognized kinds (log, notify) without failing.
pub trait ActionExecutor {
    /// Run the given leaf action.
    fn run(&self, action: &Action);
}
