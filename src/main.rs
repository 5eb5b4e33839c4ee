mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use draft_score::analysis::{AnalysisContext, DeepAnalysisClient};
use draft_score::engine::{score_draft, score_variants};
use draft_score::features::extract_features;
use draft_score::history::{HistoryStore, LogSource, ScoreLogEntry};
use draft_score::insights::all_insights;
use draft_score::{copy, credibility, format_number, format_percent, MediaType, PostTime, UserContext};

#[derive(Parser)]
#[command(name = "draft-score", about = "Draft post algorithm-score estimator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Variants(VariantArgs),
    Insights,
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    media: Option<String>,
    #[arg(long)]
    media_count: Option<u32>,
    #[arg(long)]
    thread_length: Option<u32>,
    #[arg(long)]
    reply: bool,
    #[arg(long)]
    quote: bool,
    #[arg(long)]
    hour: Option<u8>,
    #[arg(long, default_value_t = 1000)]
    followers: u64,
    #[arg(long, default_value_t = 500)]
    following: u64,
    #[arg(long, default_value_t = 12)]
    account_age_months: u32,
    #[arg(long, default_value_t = 0.02)]
    avg_engagement_rate: f64,
    #[arg(long, default_value_t = 2.0)]
    posts_per_day: f64,
    #[arg(long)]
    premium: bool,
    #[arg(long)]
    verified: bool,
    #[arg(long)]
    ai: bool,
    #[arg(long)]
    details: bool,
    #[arg(long)]
    log: bool,
    #[arg(long, default_value = "data/history.json")]
    history_path: String,
}

impl Default for ScoreArgs {
    fn default() -> Self {
        Self {
            text: None,
            media: None,
            media_count: None,
            thread_length: None,
            reply: false,
            quote: false,
            hour: None,
            followers: 1000,
            following: 500,
            account_age_months: 12,
            avg_engagement_rate: 0.02,
            posts_per_day: 2.0,
            premium: false,
            verified: false,
            ai: false,
            details: false,
            log: false,
            history_path: "data/history.json".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
struct VariantArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    hour: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "../webapp/dist")]
    web_root: String,
    #[arg(long, default_value = "data/history.json")]
    history_path: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args).await,
        Command::Variants(args) => run_variants(args),
        Command::Insights => run_insights(),
        Command::Serve(args) => server::serve(args).await,
    }
}

async fn run_score(args: ScoreArgs) -> Result<(), String> {
    let text = read_text(args.text.clone())?;
    let media_type = match args.media.as_deref() {
        Some(value) => Some(
            MediaType::from_str(value).ok_or_else(|| format!("invalid media type: {}", value))?,
        ),
        None => None,
    };

    let mut tweet = extract_features(&text).into_draft(media_type.is_some(), media_type);
    tweet.media_count = args.media_count;
    if let Some(thread_length) = args.thread_length {
        tweet.is_thread = true;
        tweet.thread_length = Some(thread_length.max(1));
    }
    tweet.is_reply = args.reply;
    tweet.quote_tweet = args.quote;

    let user = UserContext {
        follower_count: args.followers,
        following_count: args.following,
        is_premium: args.premium,
        is_verified: args.verified,
        account_age_months: args.account_age_months,
        avg_engagement_rate: args.avg_engagement_rate,
        recent_post_frequency: args.posts_per_day,
        ..UserContext::default()
    };

    let when = match args.hour {
        Some(hour) => PostTime::new(validate_hour(hour)?, PostTime::now().day_of_week),
        None => PostTime::now(),
    };

    let score = score_draft(&tweet, Some(&user), when);

    println!("Score: {}/100 (grade {})", score.overall, score.grade.label());
    println!("{}", copy::score_summary(score.overall));
    println!(
        "Breakdown: content {} | media {} | timing {} | engagement {} | risk -{}",
        score.breakdown.content,
        score.breakdown.media,
        score.breakdown.timing,
        score.breakdown.engagement,
        score.breakdown.risk
    );
    println!(
        "Predicted reach: {} - {} - {} impressions ({} confidence)",
        format_number(score.predicted_reach.low as f64),
        format_number(score.predicted_reach.median as f64),
        format_number(score.predicted_reach.high as f64),
        format_percent(score.predicted_reach.confidence)
    );

    if let Some(top) = copy::top_recommendation(&score) {
        println!("Top recommendation: {}", top);
    }

    if !score.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &score.suggestions {
            println!("- {}", suggestion.message);
            if let Some(action) = &suggestion.action {
                println!("  {}", action);
            }
        }
    }

    if args.details {
        println!("\nAlgorithm factors:");
        for factor in &score.algorithm_factors {
            println!(
                "  {} [{:?}]: {} (current {})",
                factor.name,
                factor.status,
                factor.description,
                format_percent(factor.current_value)
            );
        }

        let estimate = credibility::estimate_credibility(Some(&user));
        println!("\nCredibility estimate: {}", format_percent(estimate.score));
        for factor in &estimate.factors {
            println!("  {} [{:?}]: {}", factor.name, factor.status, factor.tip);
        }
    }

    if args.log {
        let store = HistoryStore::load(PathBuf::from(&args.history_path)).await?;
        let entry = store
            .append(ScoreLogEntry::from_score(&tweet, &score, LogSource::Cli))
            .await?;
        println!("\nLogged to history as {}", entry.id);
    }

    if args.ai {
        let client = DeepAnalysisClient::from_env().map_err(|err| err.to_string())?;
        let context = AnalysisContext {
            has_media: tweet.has_media,
            media_type: tweet.media_type,
            is_premium: args.premium,
            recent_posts: Vec::new(),
        };
        let report = client
            .analyze(&tweet.text, &context)
            .await
            .map_err(|err| err.to_string())?;

        println!("\nDeep analysis:");
        println!("  Originality: {}/100 - {}", report.originality.score, report.originality.assessment);
        println!(
            "  Audience: {}/100 - {}",
            report.audience_alignment.score, report.audience_alignment.target_audience
        );
        println!(
            "  Engagement: replies {:?}, viral potential {:?}",
            report.engagement_prediction.reply_likelihood,
            report.engagement_prediction.viral_potential
        );
        for rewrite in &report.rewrite_suggestions {
            println!("  Rewrite: {}", rewrite.improved);
        }
        println!("  Insight: {}", report.overall_insight);
    }

    Ok(())
}

fn run_variants(args: VariantArgs) -> Result<(), String> {
    let text = read_text(args.text)?;
    let when = match args.hour {
        Some(hour) => PostTime::new(validate_hour(hour)?, PostTime::now().day_of_week),
        None => PostTime::now(),
    };

    let scored = score_variants(&text, None, when);
    if scored.is_empty() {
        println!("No variants generated; the draft already uses every strategy.");
        return Ok(());
    }

    let original_tweet = extract_features(&text).into_draft(false, None);
    let original = score_draft(&original_tweet, None, when);
    println!("Original: {}/100 (grade {})", original.overall, original.grade.label());

    for scored_variant in scored {
        println!(
            "\n[{}] {}/100 (grade {})",
            scored_variant.variant.strategy,
            scored_variant.score.overall,
            scored_variant.score.grade.label()
        );
        println!("{}", scored_variant.variant.text);
        for change in &scored_variant.variant.changes {
            println!("  - {}", change);
        }
    }

    Ok(())
}

fn run_insights() -> Result<(), String> {
    for insight in all_insights() {
        let tag = match insight.kind {
            draft_score::insights::InsightKind::Verified => "verified",
            draft_score::insights::InsightKind::Heuristic => "heuristic",
        };
        println!("[{}] {}", tag, insight.title);
        println!("  {}", insight.description);
        if let Some(source) = &insight.source {
            println!("  Source: {} ({})", source.name, source.url);
        }
        println!();
    }
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing draft text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn validate_hour(value: u8) -> Result<u8, String> {
    if value > 23 {
        return Err(format!("invalid hour (0-23): {}", value));
    }
    Ok(value)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
