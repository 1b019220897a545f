use clap::Parser;
use std::process;
use webcat_sampler::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("WebCAT Sampler - Coastal Webcam Frame Extractor");
    println!("===============================================");
    println!();
    println!("Sample time-spaced frames from WebCAT coastal webcam videos and save");
    println!("them as JPEG files with an optional CSV manifest of frame metadata.");
    println!();
    println!("USAGE:");
    println!("    webcat-sampler <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    sample      Extract frames from one or more archive videos (main command)");
    println!("    download    Download a single archive video to a local file");
    println!("    stations    List the known WebCAT station identifiers");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Save a frame every 10 seconds from one video:");
    println!("    webcat-sampler sample -o ./frames -s buxtoncoastalcam -y 2019 -m 11 -d 13 -t 1000");
    println!();
    println!("    # Sample several stations and times in one batch:");
    println!("    webcat-sampler sample -o ./frames -s buxtoncoastalcam staugustinecam \\");
    println!("                          -y 2019 -m 11 -d 13 14 -t 1000 1330 -i 30");
    println!();
    println!("    # Download a whole video:");
    println!("    webcat-sampler download -s buxtoncoastalcam -y 2019 -m 11 -d 13 -t 1000");
    println!();
    println!("For detailed help on any command, use:");
    println!("    webcat-sampler <COMMAND> --help");
}
