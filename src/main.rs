use clap::Parser;
use roman_numerals::utils::{error::AppError, logger, validation::Validate};
use roman_numerals::CliConfig;

fn exit_with(e: &AppError, context: Option<&str>) -> ! {
    tracing::error!("❌ {}", e);
    match context {
        Some(context) => eprintln!("❌ {}: {}", context, e.user_friendly_message()),
        None => eprintln!("❌ {}", e.user_friendly_message()),
    }
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        exit_with(&e, None);
    }

    // The config file may switch logging on, so it is read before the logger exists.
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            let context = format!(
                "Failed to load config file '{}'",
                config.config.as_deref().unwrap_or_default()
            );
            exit_with(&e, Some(&context));
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let outcome = match config.run(&settings) {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e, None),
    };

    println!("{}", outcome.output);
    std::process::exit(outcome.exit_code);
}
