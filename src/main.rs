use adstxt_validator::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                // No signal handler available, never resolve
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(command) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(adstxt_validator::Error::processing_interrupted(
                    "Validation interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Reports have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ads.txt Validator - IAB ads.txt / app-ads.txt checker");
    println!("=====================================================");
    println!();
    println!("Validate ads.txt and app-ads.txt files, report malformed lines, and");
    println!("summarize the declared advertising systems.");
    println!();
    println!("USAGE:");
    println!("    adstxt-validator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate files and print a summary report");
    println!("    export      Export valid records or syntax errors as CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate a downloaded file:");
    println!("    adstxt-validator validate app-ads.txt");
    println!();
    println!("    # Validate every ads.txt under a directory, failing on syntax errors:");
    println!("    adstxt-validator validate ./sites --strict");
    println!();
    println!("    # Pipe a file in and get a JSON report:");
    println!("    curl -s https://example.com/ads.txt | adstxt-validator validate - --output-format json");
    println!();
    println!("    # Export the cleaned records matching a partner:");
    println!("    adstxt-validator export app-ads.txt --search google -o google.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    adstxt-validator <COMMAND> --help");
}
