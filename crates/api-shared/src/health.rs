use crate::wire::HealthRes;

/// Simple health service for the REST API and the CLI.
///
/// This service provides a standardised way to check the health status of the flap selector.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// The engine holds no state, so it is healthy whenever the process is up.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Flap selector is alive".into(),
        }
    }
}
