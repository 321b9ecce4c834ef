use config::Config;
use trackctl_cli::TrackctlApp;

fn main() {
    let config = Config::initialize();

    log::init(config.debug);
    log::info!("Configuration: {:?}", config);

    let app = TrackctlApp::new();
    if let Err(e) = app.run() {
        let error_chain = e
            .chain()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(": ");

        eprintln!("\nError: {}\n", error_chain);
        if config.debug {
            eprintln!("Debug backtrace:\n{:?}", e);
        }
        std::process::exit(1);
    }
}
