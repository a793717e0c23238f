//! Morpheme Lab - CLI
//!
//! Word morphology explorer with TUI and CLI practice modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use morpheme_lab::{
    commands::{
        SelectMode, add_words, analyze_word, export_session, load_game, read_passage,
        remove_words, run_simple, segment_word, select_words, tray_view,
    },
    config::{Config, DEFAULT_DATA_DIR},
    output::{print_analyze_result, print_read_result, print_segment_result, print_tray},
    practice::SortOrder,
    service::{AnalysisType, DEFAULT_API_URL, HttpAnalysisService},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "morpheme_lab",
    about = "Explore prefixes, roots and suffixes, then practice sorting them",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word-analysis service
    #[arg(long, global = true, env = "MORPHEME_LAB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory for saved tray, selection and session state
    #[arg(long, global = true, env = "MORPHEME_LAB_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Affix file replacing the built-in tables (`un-` prefix, `-able` suffix)
    #[arg(long, global = true)]
    affixes: Option<PathBuf>,

    /// Never contact the analysis service
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI practice game (default)
    Play,

    /// Simple CLI practice game (no TUI)
    Simple,

    /// Split a word into prefix, root and suffix
    Segment {
        word: String,

        /// Show the heuristic and service results separately
        #[arg(short, long)]
        verbose: bool,
    },

    /// Ask the service for one kind of analysis
    Analyze {
        word: String,

        #[arg(short = 't', long = "type", value_enum, default_value_t = AnalysisType::Morphemes)]
        analysis_type: AnalysisType,
    },

    /// Read a passage and click words in it
    Read {
        /// Passage text
        #[arg(required = true)]
        text: Vec<String>,

        /// Token indices to click, comma separated (default: every word)
        #[arg(short, long, value_delimiter = ',')]
        click: Vec<usize>,

        /// Also fetch this analysis for each clicked word
        #[arg(short, long, value_enum)]
        details: Option<AnalysisType>,
    },

    /// Manage the tray of clicked words and the practice selection
    Tray {
        #[command(subcommand)]
        action: Option<TrayCommand>,
    },

    /// Show or set hint dots on practice tiles
    Hints {
        #[arg(value_enum, default_value_t = HintSetting::Show)]
        setting: HintSetting,
    },

    /// Write the saved session's results as CSV
    Export { path: PathBuf },

    /// Probe the analysis service
    Health,
}

#[derive(Subcommand)]
enum TrayCommand {
    /// List tray words with their selection marks
    List {
        /// Only words containing this text
        #[arg(short, long)]
        filter: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SortOrder::Alpha)]
        sort: SortOrder,
    },

    /// Add words to the tray
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove words from the tray
    Remove {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Empty the tray and the selection
    Clear,

    /// Toggle words in the practice selection
    Select {
        words: Vec<String>,

        /// Select every shown word, or deselect them if all are selected
        #[arg(long, conflicts_with = "none")]
        all: bool,

        /// Clear the selection
        #[arg(long)]
        none: bool,

        /// Restrict --all to words containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print the words queued for practice
    Selected,
}

#[derive(Clone, Copy, ValueEnum)]
enum HintSetting {
    On,
    Off,
    Show,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config {
        api_url: cli.api_url,
        data_dir: cli.data_dir,
        affixes: cli.affixes,
        offline: cli.offline,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Segment { word, verbose } => run_segment_command(&config, &word, verbose),
        Commands::Analyze {
            word,
            analysis_type,
        } => run_analyze_command(&config, &word, analysis_type),
        Commands::Read {
            text,
            click,
            details,
        } => run_read_command(&config, &text.join(" "), &click, details),
        Commands::Tray { action } => {
            run_tray_command(&config, action.unwrap_or(TrayCommand::List {
                filter: None,
                sort: SortOrder::Alpha,
            }));
            Ok(())
        }
        Commands::Hints { setting } => {
            run_hints_command(&config, setting);
            Ok(())
        }
        Commands::Export { path } => run_export_command(&config, &path),
        Commands::Health => run_health_command(&config),
    }
}

fn run_segment_command(config: &Config, word: &str, verbose: bool) -> Result<()> {
    let segmenter = config.segmenter().context("Failed to load affix file")?;
    let service = config.service();
    let result =
        segment_word(word, &segmenter, service.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
    print_segment_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: &Config, word: &str, analysis_type: AnalysisType) -> Result<()> {
    let service = config.service();
    match analyze_word(word, analysis_type, service.as_ref()) {
        Ok(result) => {
            print_analyze_result(&result);
            Ok(())
        }
        Err(e) => {
            log::debug!("analyze {word}: {e}");
            Err(anyhow::anyhow!(e.user_message()))
        }
    }
}

fn run_read_command(
    config: &Config,
    text: &str,
    click: &[usize],
    details: Option<AnalysisType>,
) -> Result<()> {
    let segmenter = config.segmenter().context("Failed to load affix file")?;
    let service = config.service();
    let mut store = config.store();
    let result = read_passage(
        text,
        click,
        details,
        &segmenter,
        service.as_ref(),
        &mut store,
    );
    print_read_result(&result);
    Ok(())
}

fn run_tray_command(config: &Config, action: TrayCommand) {
    let mut store = config.store();

    match action {
        TrayCommand::List { filter, sort } => {
            print_tray(&tray_view(&store, filter.as_deref(), sort));
        }
        TrayCommand::Add { words } => {
            let added = add_words(&mut store, &words);
            println!("Added {} word(s)", added.len());
        }
        TrayCommand::Remove { words } => {
            let removed = remove_words(&mut store, &words);
            println!("Removed {removed} word(s)");
        }
        TrayCommand::Clear => {
            store.clear_tray();
            store.clear_selected();
            println!("Tray cleared");
        }
        TrayCommand::Select {
            words,
            all,
            none,
            filter,
        } => {
            let mode = if none {
                SelectMode::Clear
            } else if all {
                SelectMode::ToggleVisible
            } else {
                SelectMode::Toggle
            };
            let view = select_words(&mut store, &words, mode, filter.as_deref());
            print_tray(&view);
        }
        TrayCommand::Selected => {
            let selected = store.selected_words();
            if selected.is_empty() {
                println!("No words selected; practice uses the built-in words.");
            } else {
                for word in selected {
                    println!("{word}");
                }
            }
        }
    }
}

fn run_hints_command(config: &Config, setting: HintSetting) {
    let mut store = config.store();
    match setting {
        HintSetting::On => store.set_hint_dots(true),
        HintSetting::Off => store.set_hint_dots(false),
        HintSetting::Show => {}
    }
    let state = if store.hint_dots() { "on" } else { "off" };
    println!("Hint dots: {state}");
}

fn run_export_command(config: &Config, path: &std::path::Path) -> Result<()> {
    let store = config.store();
    let rows = export_session(&store, path).map_err(|e| anyhow::anyhow!(e))?;
    println!("Wrote {rows} row(s) to {}", path.display());
    Ok(())
}

fn run_health_command(config: &Config) -> Result<()> {
    if config.offline {
        println!("{}", "Offline mode: service not contacted".yellow());
        return Ok(());
    }
    let service = HttpAnalysisService::new(config.api_url.clone())?;
    let status = service.health()?;
    println!("{} {}", "✅ Service reachable:".green(), status);
    Ok(())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let segmenter = config.segmenter().context("Failed to load affix file")?;
    let service = config.service();
    let mut store = config.store();
    let hint_dots = store.hint_dots();

    let loaded = load_game(
        &store,
        service.as_ref(),
        &segmenter,
        &mut rand::rng(),
        true,
    );
    run_simple(loaded, &mut store, hint_dots).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: &Config) -> Result<()> {
    use morpheme_lab::interactive::{App, run_tui};

    let segmenter = config.segmenter().context("Failed to load affix file")?;
    let service = config.service();
    let store = config.store();

    let loaded = load_game(
        &store,
        service.as_ref(),
        &segmenter,
        &mut rand::rng(),
        true,
    );
    run_tui(App::new(loaded, store))
}
