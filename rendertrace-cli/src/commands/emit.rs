//! `rendertrace emit`: push a sample of every record kind through the tracer.

use std::path::Path;

use rendertrace::activity::ActivityFlags;
use rendertrace::instrumentation::Instrumentation;
use rendertrace::log::Severity;
use rendertrace::logging::init_logging;
use rendertrace::{
    activity_scope, log_backtrace, log_debug, log_error, log_fault, log_info,
    profiling_signpost, profiling_signpost_end, profiling_signpost_start,
};

use super::common::{load_config, PlatformOverride};
use crate::error::CliError;

/// Signpost code the sample intervals use; codes 1..=n follow it.
const SAMPLE_SIGNPOST_BASE: u32 = 1000;

/// Upper bound for `--signposts`.
pub const MAX_SAMPLE_SIGNPOSTS: i64 = 10_000;

pub fn run(
    config_path: Option<&Path>,
    overrides: PlatformOverride,
    signposts: u32,
    subscriber: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path, overrides)?;

    let _guard = if subscriber {
        Some(init_logging(&config.logging).map_err(CliError::LoggingInit)?)
    } else {
        None
    };

    let inst = Instrumentation::from_config(&config);
    let tracer = inst.tracer();
    let logs = inst.logs();

    {
        activity_scope!(tracer, "Sample layout pass");
        log_debug!(tracer, logs.layout.get(), "measuring {} nodes", 3);
        log_info!(tracer, logs.layout.get(), "layout pass complete");
    }

    {
        activity_scope!(tracer, "Sample collection update", ActivityFlags::DETACHED);
        for i in 0..signposts {
            let code = SAMPLE_SIGNPOST_BASE + i;
            profiling_signpost_start!(tracer, code, i as usize);
            log_info!(tracer, logs.collections.get(), "applying batch {}", i);
            profiling_signpost_end!(tracer, code, i as usize);
        }
        profiling_signpost!(tracer, SAMPLE_SIGNPOST_BASE);
    }

    log_error!(tracer, logs.render.get(), "sample error record");
    log_fault!(tracer, logs.render.get(), "sample fault record");
    log_backtrace!(tracer, logs.render.get(), Severity::Debug);

    println!(
        "Emitted samples via {} tracer (logs: {}, activities: {}, signposts: {})",
        tracer.name(),
        inst.capabilities().logs(),
        inst.capabilities().activities(),
        inst.capabilities().signposts(),
    );

    Ok(())
}
