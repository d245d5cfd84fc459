use clap::{Args, Parser, Subcommand};

/// Inspect the content and channel statistics behind the GenLatam site.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one CMS collection and print it as JSON.
    Fetch {
        #[command(subcommand)]
        target: FetchTarget,
    },
    /// Print live channel statistics, with growth against a baseline.
    Stats(StatsArgs),
    /// Compute the growth badge for a baseline and a live subscriber count.
    Growth(GrowthArgs),
}

#[derive(Debug, Subcommand)]
pub enum FetchTarget {
    /// Site-wide configuration.
    Global,
    /// Corporate home page.
    Home,
    /// Services page.
    Services,
    /// Guarimba community hub.
    Community,
    /// EXIT podcast campaign.
    Podcast,
    /// All case studies, newest first.
    Cases,
    /// One case study.
    Case(CaseArgs),
}

#[derive(Debug, Args)]
pub struct CaseArgs {
    /// Case-study slug.
    #[arg(long)]
    pub slug: String,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// YouTube channel id (UC...).
    #[arg(long)]
    pub channel: String,

    /// Subscriber count when the campaign started.
    #[arg(long)]
    pub baseline: Option<String>,

    /// Recent uploads to include.
    #[arg(long, default_value_t = crate::youtube::CASE_STUDY_RECENT_VIDEOS)]
    pub videos: usize,
}

#[derive(Debug, Args)]
pub struct GrowthArgs {
    /// Subscriber count when the campaign started.
    #[arg(long)]
    pub baseline: String,

    /// Current subscriber count.
    #[arg(long)]
    pub live: u64,
}
