use accuracy_tables::config::{load_config, Config, CONFIG_FILE};
use accuracy_tables::document;
use std::env;

// Main application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // If no arguments provided, generate the report from config
    if args.len() <= 1 {
        let config = load_config()?;
        init_logging(&config);
        return run_generate(&config);
    }

    // Handle different commands
    match args[1].as_str() {
        "generate" => {
            // Load configuration
            let mut config = load_config()?;

            // Override input directory and output file if provided
            if args.len() > 2 {
                config.input_directory = args[2].clone();
            }
            if args.len() > 3 {
                config.output_file = args[3].clone();
            }

            init_logging(&config);
            run_generate(&config)?;
        }
        "config" => {
            if args.len() < 3 {
                println!("Usage: accuracy-tables config <command> [args]");
                println!("Commands:");
                println!("  create - Create default configuration file");
                println!("  show   - Show current configuration");
                println!("  check  - Check configuration settings");
                println!("  set <key> <value> - Modify a configuration setting");
                return Ok(());
            }

            match args[2].as_str() {
                "create" => create_config()?,
                "show" => show_config()?,
                "check" => check_config()?,
                "set" => {
                    if args.len() < 5 {
                        println!("Usage: accuracy-tables config set <key> <value>");
                        return Ok(());
                    }
                    set_config(&args[3], &args[4])?;
                }
                _ => {
                    println!("Unknown config command: {}", args[2]);
                }
            }
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("Unknown command: {}", args[1]);
            print_help();
        }
    }

    Ok(())
}

/// Initialise logging, letting RUST_LOG override the configured level
fn init_logging(config: &Config) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
}

/// Generate the LaTeX document and report where it went
fn run_generate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let summary = document::generate_report(config)?;
    for name in &summary.skipped_files {
        log::debug!("Skipped: {}", name);
    }

    println!("LaTeX code saved to {}", summary.output_path.display());
    Ok(())
}

/// Create default configuration file
fn create_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save_to_file(CONFIG_FILE)?;
    println!("Created default configuration file: {}", CONFIG_FILE);
    Ok(())
}

/// Show current configuration
fn show_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    println!("{:#?}", config);
    Ok(())
}

/// Check configuration settings
fn check_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let input_dir = config.get_input_dir();

    println!("Configuration check:");
    println!(
        "  Input directory: {} ({})",
        input_dir.display(),
        if input_dir.is_dir() { "found" } else { "missing" }
    );
    println!("  Output file: {}", config.get_output_path().display());
    println!(
        "  Entry order: {}",
        if config.sort_entries { "sorted by name" } else { "directory listing" }
    );
    println!("  Log level: {}", config.log_level);

    Ok(())
}

/// Set configuration setting
fn set_config(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;
    config.set(key, value)?;

    // Save updated configuration
    config.save_to_file(CONFIG_FILE)?;
    println!("Updated configuration saved");
    Ok(())
}

/// Print help information
fn print_help() {
    println!("Accuracy Tables - LaTeX accuracy table generator");
    println!();
    println!("Commands:");
    println!("  generate [input_dir] [output_file]  - Build the LaTeX table from accuracy CSVs");
    println!("  config <subcommand>                 - Manage configuration");
    println!("  help                                - Show this help message");
    println!();
    println!("Running without arguments:");
    println!("  Generates the table using the settings in config.json (or the defaults:");
    println!("  input from evaluation/acc_csv, output to accuracy_results.tex)");
    println!();
    println!("Configuration keys:");
    println!("  - input_directory");
    println!("  - output_file");
    println!("  - sort_entries");
    println!("  - log_level");
}
