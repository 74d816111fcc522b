//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI modes. The secret word and guess
//! validation come from embedded word lists by default, or from the public
//! random-word and dictionary services with `--online`.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, score_words},
    core::Word,
    interactive::{App, run_tui},
    logging,
    output::print_score_report,
    providers::{
        ApiDictionary, ApiWordSource, DictionaryValidator, EmbeddedDictionary, EmbeddedWordSource,
        FixedWordSource, WordSource,
    },
    wordlists::{answer_words, guess_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: six guesses, five letters, duplicate-aware feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers' (secret pool only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Fetch the secret and validate guesses via the public HTTP services
    #[arg(long, global = true)]
    online: bool,

    /// Play against a fixed secret word (implies the offline word source)
    #[arg(long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain prompt, no TUI)
    Simple,

    /// Show the feedback a guess would earn against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load the guess list and answer pool based on the -w flag
///
/// Returns (`dictionary_words`, `answer_pool`)
/// - "all": full guess list as dictionary, answer list as pool
/// - "answers": the answer list for both (every guess must be a possible answer)
/// - "<path>": custom wordlist from file, used for both
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    match wordlist_mode {
        "all" => Ok((guess_words(), answer_words())),
        "answers" => {
            let answers = answer_words();
            Ok((answers.clone(), answers))
        }
        path => {
            let custom = load_from_file(path)
                .with_context(|| format!("could not read wordlist file '{path}'"))?;
            if custom.is_empty() {
                bail!("wordlist file '{path}' contains no valid 5-letter words");
            }
            Ok((custom.clone(), custom))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli).await,
        Commands::Simple => run_simple_command(&cli).await,
        Commands::Score { guess, secret } => {
            let report = score_words(&guess, &secret).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
    }
}

async fn run_play_command(cli: &Cli) -> Result<()> {
    if let Some(secret) = fixed_secret(cli)? {
        let (dictionary, _) = load_wordlists(&cli.wordlist)?;
        return play_tui(FixedWordSource::new(secret), EmbeddedDictionary::new(&dictionary)).await;
    }

    if cli.online {
        return play_tui(ApiWordSource::new(), ApiDictionary::new()).await;
    }

    let (dictionary, pool) = load_wordlists(&cli.wordlist)?;
    play_tui(
        EmbeddedWordSource::new(pool),
        EmbeddedDictionary::new(&dictionary),
    )
    .await
}

async fn play_tui<S, V>(source: S, validator: V) -> Result<()>
where
    S: WordSource,
    V: DictionaryValidator + Clone,
{
    let app = App::start(source, validator)
        .await
        .context("could not fetch a secret word")?;
    run_tui(app).await
}

async fn run_simple_command(cli: &Cli) -> Result<()> {
    if let Some(secret) = fixed_secret(cli)? {
        let (dictionary, _) = load_wordlists(&cli.wordlist)?;
        return run_simple(
            &FixedWordSource::new(secret),
            EmbeddedDictionary::new(&dictionary),
        )
        .await;
    }

    if cli.online {
        return run_simple(&ApiWordSource::new(), ApiDictionary::new()).await;
    }

    let (dictionary, pool) = load_wordlists(&cli.wordlist)?;
    run_simple(
        &EmbeddedWordSource::new(pool),
        EmbeddedDictionary::new(&dictionary),
    )
    .await
}

/// Parse the `--secret` flag, if given
fn fixed_secret(cli: &Cli) -> Result<Option<Word>> {
    cli.secret
        .as_deref()
        .map(|s| Word::new(s).with_context(|| format!("invalid --secret word '{s}'")))
        .transpose()
}
