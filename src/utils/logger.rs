use tracing_subscriber::EnvFilter;

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "flight_finder=debug,info"
    } else {
        "flight_finder=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
