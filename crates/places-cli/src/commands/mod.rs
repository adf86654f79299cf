use clap::Subcommand;

use crate::output::OutputLevel;
use crate::spinner::Spinner;

pub mod autocomplete;
pub mod completions;
pub mod details;
pub mod info;
pub mod key;
pub mod photo;
pub mod search;

pub use autocomplete::AutocompleteArgs;
pub use completions::CompletionsArgs;
pub use details::DetailsArgs;
pub use info::InfoArgs;
pub use key::KeyArgs;
pub use photo::PhotoArgs;
pub use search::SearchArgs;

// Example strings for after_long_help
const SEARCH_EXAMPLES: &str = r#"EXAMPLES:
  places search "restaurants in Sydney"              # Plain text search
  places search cafe -l -33.8670,151.1957 -r 500     # Bias to a point and radius
  places search bar --type bar --type night_club     # Restrict place types
  places search --page-token CpQCAgEAAFxg8o...       # Next page of a previous search"#;

const DETAILS_EXAMPLES: &str = r#"EXAMPLES:
  places details ChIJN1t_tDeuEmsRUsoyG83frY4              # Details for a place
  places details ChIJN1t_tDeuEmsRUsoyG83frY4 --language ja"#;

const PHOTO_EXAMPLES: &str = r#"EXAMPLES:
  places photo CnRvAAAA... --max-width 400 -o photo.jpg
  places photo CnRvAAAA... --max-height 1600 -o tall.jpg"#;

const AUTOCOMPLETE_EXAMPLES: &str = r#"EXAMPLES:
  places autocomplete "pizza near New Y"             # Print prediction descriptions
  places autocomplete "museo" --language it --json   # Full prediction objects"#;

const KEY_EXAMPLES: &str = r#"EXAMPLES:
  places key set                           # Store an API key (prompted)
  places key set -k AIza...                # Store a key directly
  places key status                        # Show which key would be used
  places key delete                        # Remove the stored key"#;

const INFO_EXAMPLES: &str = r#"EXAMPLES:
  places info                              # Show config path and API key status"#;

const COMPLETIONS_EXAMPLES: &str = r#"EXAMPLES:
  places completions bash > ~/.bashrc       # Add bash completions
  places completions zsh > ~/.zshrc         # Add zsh completions
  places completions fish > ~/.config/fish/completions/places.fish"#;

#[derive(Subcommand)]
pub enum Commands {
    /// Search for places matching a text query
    #[command(after_long_help = SEARCH_EXAMPLES)]
    Search(SearchArgs),
    /// Fetch details for a place ID
    #[command(after_long_help = DETAILS_EXAMPLES)]
    Details(DetailsArgs),
    /// Download a place photo
    #[command(after_long_help = PHOTO_EXAMPLES)]
    Photo(PhotoArgs),
    /// Query predictions for partial text
    #[command(after_long_help = AUTOCOMPLETE_EXAMPLES)]
    Autocomplete(AutocompleteArgs),
    /// Manage the stored API key
    #[command(after_long_help = KEY_EXAMPLES)]
    Key(KeyArgs),
    /// Show configuration and system information
    #[command(after_long_help = INFO_EXAMPLES)]
    Info(InfoArgs),
    /// Generate shell completions
    #[command(after_long_help = COMPLETIONS_EXAMPLES)]
    Completions(CompletionsArgs),
}

/// Check an environment variable without revealing its value
fn env_var_status(var_name: &str) -> &'static str {
    if std::env::var(var_name).is_ok() {
        "Present"
    } else {
        "None"
    }
}

/// Spinner for a network call, hidden in quiet mode
fn spinner_for(message: &str, output_level: OutputLevel) -> Spinner {
    if output_level.show_user() {
        Spinner::new(message)
    } else {
        Spinner::hidden()
    }
}
