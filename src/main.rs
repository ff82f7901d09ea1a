//! # RankWise CLI
//!
//! Terminal front end for the RankWise client SDK. Each subcommand mirrors
//! one screen of the product: authentication flows, keyword research, the
//! article generator, the article library, and the SEO analyzer. One
//! invocation performs one operation against the remote API and prints a
//! human-readable result; session tokens persist in a JSON file between
//! invocations.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rankwise::api::client::ApiClient;
use rankwise::api::models::{
    Article, ArticleDraft, ArticleLength, ArticleTone, GenerateRequest, SeoAnalysis,
    SeoAnalyzeRequest,
};
use rankwise::auth::session::SessionGate;
use rankwise::auth::store::FileTokenStore;
use rankwise::config::Config;
use rankwise::viewmodel::ScoreBand;
use rankwise::viewmodel::articles::{ArticleQuery, ArticleSort, LengthFilter};
use rankwise::viewmodel::keywords::{
    DifficultyBand, DifficultyFilter, SuggestionQuery, SuggestionSort, format_volume,
};

#[derive(Parser)]
#[command(name = "rankwise", version, about = "Client for the RankWise SEO content platform")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account; a verification code is emailed to you
    Register {
        email: String,
        password: String,
    },
    /// Confirm the emailed verification code
    Verify {
        email: String,
        code: String,
    },
    /// Request a fresh verification code
    ResendCode {
        email: String,
    },
    /// Log in and persist the session
    Login {
        email: String,
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the identity of the current session
    Whoami,
    /// Email a password reset code
    ResetRequest {
        email: String,
    },
    /// Set a new password using a reset code
    ResetPassword {
        email: String,
        code: String,
        new_password: String,
    },
    /// Look up keyword suggestions with volume and difficulty metrics
    Keywords {
        query: String,
        #[arg(long, value_enum, default_value_t = DifficultyArg::All)]
        difficulty: DifficultyArg,
        #[arg(long, value_enum, default_value_t = SuggestionSortArg::Volume)]
        sort: SuggestionSortArg,
    },
    /// Generate an article for a keyword
    Generate {
        keyword: String,
        #[arg(long, value_enum, default_value_t = LengthArg::Medium)]
        length: LengthArg,
        #[arg(long, value_enum, default_value_t = ToneArg::Professional)]
        tone: ToneArg,
        /// Save the generated article to your library
        #[arg(long)]
        save: bool,
    },
    /// Manage your article library
    Articles {
        #[command(subcommand)]
        command: ArticlesCommand,
    },
    /// Analyze title, meta description, and content for a target keyword
    Seo {
        #[arg(long)]
        title: String,
        #[arg(long)]
        meta_description: String,
        #[arg(long)]
        keyword: String,
        /// File containing the content to analyze
        #[arg(long)]
        content_file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ArticlesCommand {
    /// List saved articles, with search, filter, and sort
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = LengthFilterArg::All)]
        length: LengthFilterArg,
        #[arg(long, value_enum, default_value_t = ArticleSortArg::Newest)]
        sort: ArticleSortArg,
    },
    /// Print one article's body
    Show {
        id: String,
    },
    /// Replace an article's fields
    Update {
        id: String,
        #[arg(long)]
        keyword: String,
        #[arg(long, value_enum)]
        length: LengthArg,
        #[arg(long, value_enum)]
        tone: ToneArg,
        /// File containing the new body text
        #[arg(long)]
        content_file: PathBuf,
    },
    /// Delete an article by id
    Delete {
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for ArticleLength {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Short => ArticleLength::Short,
            LengthArg::Medium => ArticleLength::Medium,
            LengthArg::Long => ArticleLength::Long,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ToneArg {
    Professional,
    Casual,
    Informative,
    Persuasive,
}

impl From<ToneArg> for ArticleTone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Professional => ArticleTone::Professional,
            ToneArg::Casual => ArticleTone::Casual,
            ToneArg::Informative => ArticleTone::Informative,
            ToneArg::Persuasive => ArticleTone::Persuasive,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LengthFilterArg {
    All,
    Short,
    Medium,
    Long,
}

impl From<LengthFilterArg> for LengthFilter {
    fn from(arg: LengthFilterArg) -> Self {
        match arg {
            LengthFilterArg::All => LengthFilter::All,
            LengthFilterArg::Short => LengthFilter::Only(ArticleLength::Short),
            LengthFilterArg::Medium => LengthFilter::Only(ArticleLength::Medium),
            LengthFilterArg::Long => LengthFilter::Only(ArticleLength::Long),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ArticleSortArg {
    Newest,
    Oldest,
    Keyword,
}

impl From<ArticleSortArg> for ArticleSort {
    fn from(arg: ArticleSortArg) -> Self {
        match arg {
            ArticleSortArg::Newest => ArticleSort::Newest,
            ArticleSortArg::Oldest => ArticleSort::Oldest,
            ArticleSortArg::Keyword => ArticleSort::Keyword,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    All,
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for DifficultyFilter {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::All => DifficultyFilter::All,
            DifficultyArg::Easy => DifficultyFilter::Only(DifficultyBand::Easy),
            DifficultyArg::Medium => DifficultyFilter::Only(DifficultyBand::Medium),
            DifficultyArg::Hard => DifficultyFilter::Only(DifficultyBand::Hard),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SuggestionSortArg {
    Volume,
    Difficulty,
    Alphabetical,
}

impl From<SuggestionSortArg> for SuggestionSort {
    fn from(arg: SuggestionSortArg) -> Self {
        match arg {
            SuggestionSortArg::Volume => SuggestionSort::Volume,
            SuggestionSortArg::Difficulty => SuggestionSort::Difficulty,
            SuggestionSortArg::Alphabetical => SuggestionSort::Alphabetical,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let store = Arc::new(FileTokenStore::new(config.token_file.clone()));
    let api = ApiClient::new(&config, store.clone())?;
    let gate = SessionGate::new(store);

    let outcome = dispatch(cli.command, &api, &gate).await;
    if let Err(err) = &outcome {
        let session_rejected = err
            .downcast_ref::<rankwise::ClientError>()
            .is_some_and(|e| e.requires_login());
        if session_rejected {
            gate.clear_session();
            eprintln!("Your session has expired. Run `rankwise login` again.");
        }
    }
    outcome
}

async fn dispatch(command: Command, api: &ApiClient, gate: &SessionGate) -> Result<()> {
    match command {
        Command::Register { email, password } => {
            let ack = api.register(&email, &password).await?;
            println!("{}", non_empty(&ack.message, "Verification code sent."));
        }
        Command::Verify { email, code } => {
            let ack = api.verify_email(&email, &code).await?;
            println!("{}", non_empty(&ack.message, "Email verified."));
        }
        Command::ResendCode { email } => {
            let ack = api.resend_code(&email).await?;
            println!("{}", non_empty(&ack.message, "Verification code resent."));
        }
        Command::Login { email, password } => {
            let tokens = api.login(&email, &password).await?;
            gate.persist_session(&tokens.access_token, &tokens.refresh_token);
            match gate.current_identity() {
                Some(identity) => println!("Logged in as {identity}"),
                None => println!("Logged in"),
            }
        }
        Command::Logout => {
            gate.clear_session();
            println!("Logged out");
        }
        Command::Whoami => match gate.current_identity() {
            Some(identity) if gate.is_authenticated() => println!("{identity}"),
            Some(identity) => println!("{identity} (session expired)"),
            None => println!("Not logged in"),
        },
        Command::ResetRequest { email } => {
            let ack = api.request_password_reset(&email).await?;
            println!("{}", non_empty(&ack.message, "Reset code sent."));
        }
        Command::ResetPassword { email, code, new_password } => {
            let ack = api.reset_password(&email, &code, &new_password).await?;
            println!("{}", non_empty(&ack.message, "Password reset."));
        }
        Command::Keywords { query, difficulty, sort } => {
            let report = api.keyword_suggestions(&query).await?;
            let projection = SuggestionQuery {
                difficulty: difficulty.into(),
                sort: sort.into(),
            };
            let shown = projection.apply(&report.suggestions);
            println!("{} suggestions for \"{}\"", shown.len(), report.query);
            for suggestion in shown {
                println!(
                    "  {:<40} volume {:>8}  difficulty {:>3} ({})",
                    suggestion.suggestion,
                    format_volume(suggestion.search_volume),
                    suggestion.keyword_difficulty,
                    DifficultyBand::of(suggestion.keyword_difficulty).label(),
                );
            }
        }
        Command::Generate { keyword, length, tone, save } => {
            ensure_authenticated(gate, api).await?;
            let request = GenerateRequest {
                keyword,
                length: length.into(),
                tone: tone.into(),
            };
            let draft = api.generate_article(&request).await?;
            println!("{}", draft.article);
            if save {
                let saved = api.save_article(&draft).await?;
                eprintln!("Saved as {}", saved.id);
            }
        }
        Command::Articles { command } => {
            ensure_authenticated(gate, api).await?;
            run_articles(command, api).await?;
        }
        Command::Seo { title, meta_description, keyword, content_file } => {
            ensure_authenticated(gate, api).await?;
            let content = fs::read_to_string(&content_file)
                .with_context(|| format!("reading {}", content_file.display()))?;
            let request = SeoAnalyzeRequest {
                title,
                meta_description,
                content,
                keyword,
            };
            let analysis = api.seo_analyze(&request).await?;
            print_analysis(&analysis);
        }
    }

    Ok(())
}

async fn run_articles(command: ArticlesCommand, api: &ApiClient) -> Result<()> {
    match command {
        ArticlesCommand::List { search, length, sort } => {
            let articles = api.list_articles().await?;
            let query = ArticleQuery {
                search,
                length: length.into(),
                sort: sort.into(),
            };
            let shown = query.apply(&articles);
            if shown.is_empty() {
                println!("No articles found");
                return Ok(());
            }
            for article in shown {
                println!(
                    "{}  {}  {:<7} {:<12} {}",
                    article.id,
                    article.created_at.format("%Y-%m-%d"),
                    article.length,
                    article.tone,
                    article.keyword,
                );
            }
        }
        ArticlesCommand::Show { id } => {
            let articles = api.list_articles().await?;
            match articles.iter().find(|article| article.id == id) {
                Some(article) => print_article(article),
                None => bail!("no article with id {id}"),
            }
        }
        ArticlesCommand::Update { id, keyword, length, tone, content_file } => {
            let body = fs::read_to_string(&content_file)
                .with_context(|| format!("reading {}", content_file.display()))?;
            let draft = ArticleDraft {
                keyword,
                length: length.into(),
                tone: tone.into(),
                article: body,
            };
            let updated = api.update_article(&id, &draft).await?;
            println!("Updated {}", updated.id);
        }
        ArticlesCommand::Delete { id } => {
            api.delete_article(&id).await?;
            println!("Deleted {id}");
        }
    }
    Ok(())
}

/// Make sure a usable session exists before an authenticated command runs,
/// renewing through the refresh token once when the access token has
/// expired. The CLI analogue of the login redirect.
async fn ensure_authenticated(gate: &SessionGate, api: &ApiClient) -> Result<()> {
    if gate.is_authenticated() {
        return Ok(());
    }
    if gate.renew_access_token(api).await.is_ok() && gate.is_authenticated() {
        return Ok(());
    }
    bail!("You are not logged in. Run `rankwise login <email> <password>` first.");
}

fn print_article(article: &Article) {
    println!("# {}", article.keyword);
    println!(
        "{} | {} | saved {}",
        article.length,
        article.tone,
        article.created_at.format("%Y-%m-%d %H:%M"),
    );
    println!();
    println!("{}", article.article);
}

fn print_analysis(analysis: &SeoAnalysis) {
    println!(
        "Overall score: {} ({})",
        analysis.overall_score,
        band_label(ScoreBand::of(analysis.overall_score)),
    );
    print_section("Title", analysis.title_analysis.score, &analysis.title_analysis.issues, &analysis.title_analysis.suggestions);
    print_section(
        "Meta description",
        analysis.meta_description_analysis.score,
        &analysis.meta_description_analysis.issues,
        &analysis.meta_description_analysis.suggestions,
    );

    let content = &analysis.content_analysis;
    print_section("Content", content.score, &content.issues, &content.suggestions);
    println!(
        "    {} words, {:.1}% keyword density, readability {:.1}",
        content.word_count, content.keyword_density, content.readability_score,
    );

    let keyword = &analysis.keyword_analysis;
    print_section("Keyword", keyword.score, &keyword.issues, &keyword.suggestions);
    println!(
        "    in title: {}  in meta: {}  in content: {}  frequency: {}",
        yes_no(keyword.keyword_in_title),
        yes_no(keyword.keyword_in_meta),
        yes_no(keyword.keyword_in_content),
        keyword.keyword_frequency,
    );
}

fn print_section(name: &str, score: u32, issues: &[String], suggestions: &[String]) {
    println!("  {name}: {score} ({})", band_label(ScoreBand::of(score)));
    for issue in issues {
        println!("    ! {issue}");
    }
    for suggestion in suggestions {
        println!("    > {suggestion}");
    }
}

fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "excellent",
        ScoreBand::Fair => "fair",
        ScoreBand::Poor => "needs work",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn non_empty<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() { fallback } else { message }
}
