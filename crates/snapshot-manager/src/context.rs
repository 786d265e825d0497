use core::fmt::Display;

/// Holds the context for the current operation. Used for prefixing logs.
#[derive(Default, Debug)]
pub struct Context {
    /// The snapshot being worked on.
    pub snapshot: Option<String>,
    /// The current context
    pub current_context: &'static str,
}

impl Context {
    /// Create a context for `operation`.
    pub fn new(operation: &'static str) -> Self {
        Self {
            snapshot: None,
            current_context: operation,
        }
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(snapshot) = &self.snapshot {
            write!(f, "[{snapshot}] ")?;
        }

        write!(f, "[{}] ", self.current_context)?;

        Ok(())
    }
}
