//! Panic reporting through the tracer.
//!
//! [`install`] chains a hook in front of the current panic hook. The hook
//! writes a `Fault` record with the panic location and message on the
//! render category, followed by a backtrace record, then hands the panic to
//! the original hook unchanged.

use std::cell::Cell;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crate::instrumentation::Instrumentation;
use crate::log::Severity;

thread_local! {
    // A panic inside a backend must not report itself forever.
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Install the fault-reporting panic hook.
///
/// Each call stacks another hook in front of the previous one, so this
/// should be called once during startup.
pub fn install(instrumentation: Arc<Instrumentation>) {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        report_panic(&instrumentation, info);
        original_hook(info);
    }));
}

fn report_panic(instrumentation: &Instrumentation, info: &PanicHookInfo<'_>) {
    if REPORTING.with(|r| r.replace(true)) {
        return;
    }

    let log = instrumentation.logs().render.get();
    let tracer = instrumentation.tracer();
    let message = panic_message(info);

    match info.location() {
        Some(location) => tracer.fault(
            log,
            format_args!(
                "panic at {}:{}:{}: {}",
                location.file(),
                location.line(),
                location.column(),
                message
            ),
        ),
        None => tracer.fault(log, format_args!("panic: {}", message)),
    }
    tracer.log_backtrace(log, Severity::Fault);

    REPORTING.with(|r| r.set(false));
}

fn panic_message<'a>(info: &'a PanicHookInfo<'_>) -> &'a str {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        *message
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string payload>"
    }
}
