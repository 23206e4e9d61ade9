use std::{sync::Arc, time::Duration};

use anyhow::{Context, ensure};
use cfg::{Cfg, OrderPolicy};
use clap::Parser;
use comm_queue::{
    MaxFirst, MinFirst, Order, PriorityQueue,
    test::stress::{Job, StressTestConfig, run_stress_test},
};
use tracing_subscriber::EnvFilter;

pub mod cfg;

fn main() {
    init_tracing();

    let cfg = cfg::Cfg::parse();
    println!("Running configuration:\n{cfg:#?}");

    let res = match cfg.order {
        OrderPolicy::Min => run(cfg, MinFirst),
        OrderPolicy::Max => run(cfg, MaxFirst),
    };
    if let Err(e) = res {
        tracing::error!("stress test failed: {e:?}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .init();
}

fn run<O>(cfg: Cfg, order: O) -> anyhow::Result<()>
where
    O: Order<Job> + Send + Sync + 'static,
{
    ensure!(
        cfg.payload_min <= cfg.payload_max,
        "payload range is empty: {} > {}",
        cfg.payload_min,
        cfg.payload_max
    );
    ensure!(
        cfg.priority_min <= cfg.priority_max,
        "priority range is empty: {} > {}",
        cfg.priority_min,
        cfg.priority_max
    );

    let capacity = cfg
        .job_num
        .checked_mul(cfg.producer_num)
        .ok_or_else(|| anyhow::anyhow!("Overflow while calculating queue capacity"))?;

    tracing::info!(policy = %cfg.order, capacity, "creating queue");
    let queue = Arc::new(PriorityQueue::with_capacity_and_order(capacity, order));

    let config = StressTestConfig {
        num_producers: cfg.producer_num,
        jobs_per_producer: cfg.job_num,
        num_consumers: cfg.consumer_num,
        payload_size_range: (cfg.payload_min, cfg.payload_max),
        priority_range: (cfg.priority_min, cfg.priority_max),
        run_duration: Duration::from_secs(cfg.run_duration_seconds),
        stats_interval: Duration::from_millis(cfg.stats_interval_ms),
        latency_percentiles: cfg.percentiles,
    };
    let results = run_stress_test(queue, config).context("stress test aborted")?;
    results.print_summary();

    Ok(())
}
