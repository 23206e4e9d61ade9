#[derive(Debug, Clone, clap::Parser)]
pub struct Cfg {
    /// Which element leaves the queue first.
    #[arg(value_enum, default_value_t = OrderPolicy::Min)]
    pub order: OrderPolicy,
    /// Number of producers that will push jobs to the queue.
    #[arg(short, long)]
    pub producer_num: usize,
    /// Number of jobs each producer will push during the test.
    #[arg(short, long)]
    pub job_num: usize,
    /// Number of consumers that block on the queue until it is shut down.
    #[arg(short, long, default_value_t = 1)]
    pub consumer_num: usize,
    /// Smallest payload attached to a job, in bytes.
    #[arg(long, default_value_t = 256)]
    pub payload_min: usize,
    /// Largest payload attached to a job, in bytes.
    #[arg(long, default_value_t = 1_024)]
    pub payload_max: usize,
    /// Lowest priority value assigned to a job.
    #[arg(long, default_value_t = 142)]
    pub priority_min: u64,
    /// Highest priority value assigned to a job.
    #[arg(long, default_value_t = 654)]
    pub priority_max: u64,
    /// Hard cap on the test's execution time, in seconds.
    #[arg(long, default_value_t = 10)]
    pub run_duration_seconds: u64,
    /// Delay between two progress lines.
    #[arg(long, default_value_t = 1_000)]
    pub stats_interval_ms: u64,
    /// Latency percentiles to report.
    #[arg(long, value_delimiter = ',', default_values_t = [50.0, 90.0, 99.0, 99.9])]
    pub percentiles: Vec<f64>,
}

#[derive(Debug, Clone, Copy, strum::EnumString, strum::Display, clap::ValueEnum)]
pub enum OrderPolicy {
    /// Smallest priority value first.
    #[strum(ascii_case_insensitive)]
    Min,
    /// Largest priority value first.
    #[strum(ascii_case_insensitive)]
    Max,
}
