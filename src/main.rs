use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use subnet_assign::{run, Args, RunConfig};

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    log::info!("#Start main()");

    let args = Args::parse();
    let result = RunConfig::try_from(args)
        .map_err(subnet_assign::Error::from)
        .and_then(|config| run(&config));

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(1);
    }
    log::info!("#End main()");
}

/// Use log4rs.yml when present, else warnings and errors to stderr.
fn init_logging() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing log4rs: {e}");
            }
        }
        Err(e) => eprintln!("Error building log4rs config: {e}"),
    }
}
