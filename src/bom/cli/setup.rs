use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bom", bin_name = "bom", version)]
#[command(about = "Build and cost bills of materials from shared components", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print the component catalog after building
    #[arg(long, global = true, help_heading = "Options")]
    pub catalog: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and print the sample sedan
    Demo,

    /// Build an assembly from part specifications
    #[command(alias = "b")]
    Build {
        /// Assembly label (defaults to the configured default-label)
        #[arg(short, long)]
        label: Option<String>,

        /// Parts as NAME=COST or PARENT/NAME=COST (e.g. Door=800 Door/Hinge=15)
        #[arg(required = true, num_args = 1..)]
        parts: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (show-catalog, color, default-label)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_with_label_and_parts() {
        let cli = Cli::try_parse_from(["bom", "build", "-l", "Cart", "Wheel=10", "Wheel/Bearing=2"])
            .unwrap();

        match cli.command {
            Commands::Build { label, parts } => {
                assert_eq!(label.as_deref(), Some("Cart"));
                assert_eq!(parts, vec!["Wheel=10", "Wheel/Bearing=2"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn build_requires_parts() {
        assert!(Cli::try_parse_from(["bom", "build"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bom", "demo", "--catalog", "--no-color", "-v"]).unwrap();

        assert!(cli.catalog);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Demo));
    }

    #[test]
    fn config_key_and_value_are_optional() {
        let cli = Cli::try_parse_from(["bom", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                key: None,
                value: None
            }
        ));
    }
}
