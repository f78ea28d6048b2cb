// src/models/progress.rs
use super::Action;

/// Ordered record of the actions a run actually took.
///
/// Each action is echoed to stdout as soon as it is recorded, so the lines
/// for completed steps are already on the console if a later step fails.
#[derive(Debug, Default)]
pub struct Progress {
    actions: Vec<Action>,
    quiet: bool,
}

impl Progress {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
            quiet: false,
        }
    }

    /// A progress record that keeps actions without printing them.
    #[inline]
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            actions: Vec::new(),
            quiet: true,
        }
    }

    pub fn record(&mut self, action: Action) {
        tracing::debug!(?action, "action taken");
        if !self.quiet {
            println!("- {action}");
        }
        self.actions.push(action);
    }

    #[inline]
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
