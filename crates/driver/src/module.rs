//! Seams between the driver and its collaborators.
//!
//! The firmware module is a collaborator, not part of this crate: the driver
//! only relies on the contract below (clear the event buffer, fetch the JSON
//! stream, allocate/free a buffer for the command name it is passed). The
//! output log is the user-visible text channel each frontend provides.

/// Contract the external computation module must satisfy.
///
/// Command functions registered in the
/// [`CommandRegistry`](crate::registry::CommandRegistry) receive the module
/// plus a [`Buf`](Self::Buf) holding the command name, mirroring how the
/// firmware's command-line entry points receive their argument buffer.
pub trait Firmware {
    /// Module-owned buffer for a passed-in command-name string.
    type Buf;

    /// Allocates a module-owned buffer holding `name`.
    fn alloc_command(&mut self, name: &str) -> Self::Buf;

    /// Releases a buffer returned by [`alloc_command`](Self::alloc_command).
    ///
    /// The driver calls this exactly once per run, whether or not the
    /// invocation succeeded.
    fn free_command(&mut self, buf: Self::Buf);

    /// Clears the buffered simulation events from any prior run.
    fn clear_simulation_events(&mut self);

    /// Returns the buffered simulation events as a JSON stream.
    fn simulation_events(&mut self) -> String;
}

/// User-visible output channel (page log, stdout).
pub trait OutputLog {
    /// Appends one line of output.
    fn print(&mut self, line: &str);
}
