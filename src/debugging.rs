pub struct DebuggingSession;

impl DebuggingSession {
    /// Log to standard error, leaving standard output for results.
    pub fn new(args: &crate::cli::Cli) -> Self {
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(Self::get_filter(args))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        std::panic::set_hook(Box::new(panic_hook));

        Self
    }

    /// Get the filter for log output. The `ART_FINDER_LOG` environmental variable takes priority over CLI arguments.
    fn get_filter(args: &crate::cli::Cli) -> tracing_subscriber::EnvFilter {
        use tracing_subscriber::EnvFilter;

        const ENV: &str = "ART_FINDER_LOG";
        let from_args = || match args.verbose.tracing_level() {
            Some(level) => EnvFilter::new(level.as_str()),
            None => EnvFilter::new("off"),
        };

        if std::env::var_os(ENV).is_some() {
            if args.verbose.is_present() {
                eprintln!("WARNING: Provided verbosity arguments were ignored as environmental variable {ENV} is set");
            }
            EnvFilter::try_from_env(ENV).unwrap_or_else(|error| {
                eprintln!("WARNING: ignoring unusable {ENV} filter: {error}");
                from_args()
            })
        } else {
            from_args()
        }
    }
}

/// Currently private @ https://github.com/rust-lang/rust/blob/52618eb338609df44978b0ca4451ab7941fd1c7a/src/tools/compiletest/src/panic_hook.rs#L75-L92
fn payload_as_str<'a>(info: &'a std::panic::PanicHookInfo<'_>) -> Option<&'a str> {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some(s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        Some(s)
    } else {
        None
    }
}

fn panic_hook(info: &std::panic::PanicHookInfo) {
    use std::backtrace::*;
    use std::panic::Location;

    let backtrace = Backtrace::capture();
    let location = info.location().map(Location::to_string);
    let message = payload_as_str(info);
    let thread = std::thread::current();

    tracing::error!(
        location = location,
        backtrace = match backtrace.status() {
            BacktraceStatus::Captured => format!("{backtrace}"),
            BacktraceStatus::Disabled => "disabled (run with RUST_BACKTRACE=1)".to_string(),
            BacktraceStatus::Unsupported => "unsupported".to_string(),
            opt => format!("unknown (unrecognized status {opt:?})"),
        },
        "{} ({:?}) panicked at {}",
        thread.name()
            .map(|name| format!("thread '{name}'"))
            .unwrap_or("unnamed thread".to_string()),
        thread.id(),
        message.unwrap_or("<no message>")
    );
}
