//! Protocol trait for driving a game over text.

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed successfully, with optional output
    Ok(Option<String>),
    /// Engine should quit
    Quit,
    /// Command not recognized
    Unknown(String),
}

/// Trait for front ends that translate text commands into game actions
pub trait Protocol {
    /// Process a single command line and return the result
    fn process_command(&mut self, line: &str) -> CommandResult;

    /// Get the protocol name (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Run the protocol's main loop (blocking)
    fn run(&mut self);
}
