pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! All tunables for the dashboard, grouped by functional area.

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Backend used when neither the config file nor the CLI names one.
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

    /// 144 steps = 24 hours at 10-minute intervals.
    pub const DEFAULT_FORECAST_PERIODS: u32 = 144;

    /// Network timeouts for backend requests
    pub mod network {
        use std::time::Duration;

        /// Time allowed to establish a TCP connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Time allowed for a whole request, body included (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel between the pipelines and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    pub mod chart {
        /// Curve tension applied to every series.
        pub const LINE_TENSION: f64 = 0.3;

        /// Interpolated samples drawn between two consecutive data points.
        pub const SMOOTHING_STEPS: usize = 8;

        /// Placeholder shown for a label or list field the backend left out.
        pub const MISSING_FIELD: &str = "n/a";
    }
}
