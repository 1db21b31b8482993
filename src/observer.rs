//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor a body while it steps (e.g., for
/// debugging, visualization, or performance profiling). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after every spring has accumulated its force.
    fn on_forces_applied(&mut self, _springs: usize) {}

    /// Called after every particle has been integrated.
    fn on_integrate(&mut self, _particles: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Emits a `trace` record per pass through the `log` facade and counts steps.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for LogStepObserver {
    fn on_forces_applied(&mut self, springs: usize) {
        log::trace!("step {}: applied {} springs", self.steps, springs);
    }

    fn on_integrate(&mut self, particles: usize) {
        log::trace!("step {}: integrated {} particles", self.steps, particles);
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
