//! `rendertrace probe`: report what the host offers.

use std::path::Path;

use rendertrace::backend::default_backend;
use rendertrace::instrumentation::Instrumentation;

use super::common::{load_config, PlatformOverride};
use crate::error::CliError;

pub fn run(config_path: Option<&Path>, overrides: PlatformOverride) -> Result<(), CliError> {
    let config = load_config(config_path, overrides)?;
    let platform = config.platform.resolve();
    let backend = default_backend();
    let backend_name = backend.name();
    let inst = Instrumentation::with_backend(&config, platform, backend);
    let caps = inst.capabilities();

    println!("Platform:    {}", caps.platform());
    println!("Tracer:      {}", inst.tracer().name());
    println!("Backend:     {}", backend_name);
    println!("Subsystem:   {}", config.logging.subsystem);
    println!();
    println!("Logs:        {}", caps.logs());
    println!("Activities:  {}", caps.activities());
    println!("Backtraces:  {}", if caps.backtraces() { "yes" } else { "no" });
    println!("Signposts:   {}", caps.signposts());
    println!(
        "Signpost macros: {}",
        if cfg!(feature = "profiling") {
            "compiled in"
        } else {
            "compiled out"
        }
    );

    Ok(())
}
