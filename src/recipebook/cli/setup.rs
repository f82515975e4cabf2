use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebook", bin_name = "recipebook", version)]
#[command(about = "A small recipe book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the recipe slot and config.json
    #[arg(long, global = true, env = "RECIPEBOOK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List,

    /// View one or more recipes
    #[command(alias = "v")]
    View {
        /// List positions or ids (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Add a recipe
    #[command(alias = "n")]
    Add {
        /// Title of the recipe (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Ingredients
        #[arg(short, long)]
        ingredients: Option<String>,

        /// Preparation steps
        #[arg(short, long)]
        preparation: Option<String>,
    },

    /// Change fields of a recipe
    #[command(alias = "e")]
    Edit {
        /// List position or id
        selector: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New ingredients
        #[arg(short, long)]
        ingredients: Option<String>,

        /// New preparation steps
        #[arg(short, long)]
        preparation: Option<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// List positions or ids (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Print the path of the recipe slot
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (slot-key, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_joins_title_words() {
        let cli = Cli::try_parse_from(["recipebook", "add", "Bolo", "de", "milho", "-i", "milho"])
            .unwrap();
        match cli.command {
            Some(Commands::Add {
                title, ingredients, ..
            }) => {
                assert_eq!(title.join(" "), "Bolo de milho");
                assert_eq!(ingredients.as_deref(), Some("milho"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_is_counted() {
        let cli = Cli::try_parse_from(["recipebook", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn delete_requires_a_selector() {
        assert!(Cli::try_parse_from(["recipebook", "rm"]).is_err());
    }
}
