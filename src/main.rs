use clap::{Parser, Subcommand};
use img2ascii::ascii;
use img2ascii::config::Config;
use img2ascii::decode;
use img2ascii::export;
use std::path::{Path, PathBuf};

/// img2ascii: Image to ASCII art converter
#[derive(Parser)]
#[command(name = "img2ascii")]
#[command(version, about = "Image to ASCII art converter")]
#[command(long_about = "Convert raster images (PNG, JPEG, ...) into monospaced ASCII art \
    using a fixed 75-column density-ramp preset. The result can be printed to the \
    terminal, saved as a UTF-8 text file, or copied to the clipboard.")]
#[command(after_help = "EXAMPLES:
    # Convert and print to the terminal
    img2ascii convert photo.jpg

    # Save as a text file (default name: ascii-art.txt)
    img2ascii convert photo.jpg --save

    # Save under a custom name and copy to the clipboard
    img2ascii convert photo.jpg --save art.txt --copy

    # Export only, without printing
    img2ascii convert photo.jpg --quiet --copy")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image file to ASCII art
    #[command(after_help = "EXAMPLES:
    img2ascii convert photo.jpg                  # Print to the terminal
    img2ascii convert photo.jpg --save           # Also write ascii-art.txt
    img2ascii convert photo.jpg --save art.txt   # Custom filename
    img2ascii convert photo.jpg --copy           # Copy to the clipboard")]
    Convert {
        /// Path to the image file (any format the decoder supports)
        image: PathBuf,

        /// Write the art to a text file; FILE defaults to the configured
        /// output name (ascii-art.txt)
        #[arg(long, short = 'o', value_name = "FILE")]
        save: Option<Option<PathBuf>>,

        /// Copy the art to the system clipboard
        #[arg(long, short = 'c')]
        copy: bool,

        /// Do not copy to the clipboard (overrides --copy and config)
        #[arg(long)]
        no_copy: bool,

        /// Do not print the art to stdout
        #[arg(long, short = 'q')]
        quiet: bool,

        /// Custom config file path (default: ~/.config/img2ascii/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Resolve the save target: explicit FILE > config name > built-in default.
fn resolve_save_path(save: Option<Option<PathBuf>>, cfg: &Config) -> Option<PathBuf> {
    save.map(|file| {
        file.unwrap_or_else(|| {
            PathBuf::from(
                cfg.output
                    .file
                    .clone()
                    .unwrap_or_else(|| export::DEFAULT_TXT_NAME.to_string()),
            )
        })
    })
}

/// Resolve the clipboard toggle: --no-copy > --copy > config > off.
fn resolve_clipboard(copy: bool, no_copy: bool, cfg: &Config) -> bool {
    if no_copy {
        false
    } else {
        copy || cfg.output.clipboard.unwrap_or(false)
    }
}

/// Run the convert command: decode, convert, hand the result to the sinks.
fn run_convert(
    image_path: &Path,
    save_path: Option<PathBuf>,
    copy: bool,
    quiet: bool,
) -> Result<(), String> {
    let image = decode::load_image(image_path).map_err(|e| e.to_string())?;
    let art = ascii::convert(&image).map_err(|e| e.to_string())?;

    if art.is_empty() {
        eprintln!("Warning: image is too wide to produce any output rows.");
    }

    if !quiet {
        print!("{}", art);
    }

    if let Some(ref path) = save_path {
        export::write_txt(&art, path).map_err(|e| e.to_string())?;
        eprintln!("Saved to {}", path.display());
    }

    if copy {
        export::copy_to_clipboard(&art).map_err(|e| e.to_string())?;
        eprintln!("Copied to clipboard.");
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            image,
            save,
            copy,
            no_copy,
            quiet,
            config: config_path,
        }) => {
            // Load config file
            // If --config is specified, require the file to exist
            // Otherwise, fall back to defaults if default config not found
            let cfg = if let Some(path) = config_path {
                match Config::load_from_explicit(path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                match Config::load(None) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Warning: Failed to load config file: {}", e);
                        eprintln!("Using default settings.\n");
                        Config::default()
                    }
                }
            };

            // Merge settings: CLI args > config file > built-in defaults
            let save_path = resolve_save_path(save, &cfg);
            let copy = resolve_clipboard(copy, no_copy, &cfg);

            if let Err(e) = run_convert(&image, save_path, copy, quiet) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            // Show brief help when no command is provided
            println!("img2ascii {}", env!("CARGO_PKG_VERSION"));
            println!("Image to ASCII art converter\n");
            println!("USAGE:");
            println!("    img2ascii <COMMAND>\n");
            println!("COMMANDS:");
            println!("    convert  Convert an image file to ASCII art");
            println!("    help     Print this message or the help of a subcommand\n");
            println!("Run 'img2ascii --help' for more details and examples.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use img2ascii::config::OutputConfig;

    fn config_with(file: Option<&str>, clipboard: Option<bool>) -> Config {
        Config {
            output: OutputConfig {
                file: file.map(String::from),
                clipboard,
            },
        }
    }

    // Save path resolution tests

    #[test]
    fn test_save_absent_resolves_to_none() {
        let cfg = config_with(Some("from-config.txt"), None);
        assert_eq!(resolve_save_path(None, &cfg), None);
    }

    #[test]
    fn test_save_without_file_uses_builtin_default() {
        let cfg = config_with(None, None);
        assert_eq!(
            resolve_save_path(Some(None), &cfg),
            Some(PathBuf::from("ascii-art.txt"))
        );
    }

    #[test]
    fn test_save_without_file_uses_config_name() {
        let cfg = config_with(Some("from-config.txt"), None);
        assert_eq!(
            resolve_save_path(Some(None), &cfg),
            Some(PathBuf::from("from-config.txt"))
        );
    }

    #[test]
    fn test_save_with_file_overrides_config() {
        let cfg = config_with(Some("from-config.txt"), None);
        assert_eq!(
            resolve_save_path(Some(Some(PathBuf::from("explicit.txt"))), &cfg),
            Some(PathBuf::from("explicit.txt"))
        );
    }

    // Clipboard toggle tests

    #[test]
    fn test_clipboard_off_by_default() {
        let cfg = config_with(None, None);
        assert!(!resolve_clipboard(false, false, &cfg));
    }

    #[test]
    fn test_clipboard_enabled_by_flag() {
        let cfg = config_with(None, None);
        assert!(resolve_clipboard(true, false, &cfg));
    }

    #[test]
    fn test_clipboard_enabled_by_config() {
        let cfg = config_with(None, Some(true));
        assert!(resolve_clipboard(false, false, &cfg));
    }

    #[test]
    fn test_no_copy_overrides_flag_and_config() {
        let cfg = config_with(None, Some(true));
        assert!(!resolve_clipboard(true, true, &cfg));
        assert!(!resolve_clipboard(false, true, &cfg));
    }
}
