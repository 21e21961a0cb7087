use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lin_core::{
    Activity, Drinking, Engine, Gender, InputProfile, PetKind, Settings, Smoking, Tone, estimate,
    slotted_hobbies, weekly_hobbies,
};

#[derive(Parser)]
#[command(name = "lin", about = "Life in Numbers: count the good things still coming")]
struct Cli {
    /// Settings file (TOML). Falls back to $LIN_CONFIG, then defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the narrative for a profile
    Render {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Seed for the closing-line pick (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plain-text export (lines separated by a blank line)
        #[arg(long, conflicts_with = "json")]
        plain: bool,

        /// Print the full narrative as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the lifespan estimate and years remaining
    Estimate {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

/// Profile source plus per-field overrides.
#[derive(Args)]
struct ProfileArgs {
    /// Profile file (.toml or .json)
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    /// Free text; non-digits are ignored
    #[arg(long)]
    age: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// unspecified, male, female, nonbinary
    #[arg(long)]
    gender: Option<String>,

    /// never, former, current
    #[arg(long)]
    smoking: Option<String>,

    /// none, moderate, heavy
    #[arg(long)]
    drinking: Option<String>,

    /// low, moderate, high (optionally suffixed: high-weekly)
    #[arg(long)]
    activity: Option<String>,

    #[arg(long)]
    conditions: Option<String>,

    /// Weekly hobby, repeatable (up to 3)
    #[arg(long = "hobby", conflicts_with_all = ["weekly", "monthly", "quarterly"])]
    hobbies: Vec<String>,

    /// Weekly hobby slot
    #[arg(long)]
    weekly: Option<String>,

    /// Monthly hobby slot
    #[arg(long)]
    monthly: Option<String>,

    /// Quarterly hobby slot
    #[arg(long)]
    quarterly: Option<String>,

    /// none, dog, cat, other
    #[arg(long)]
    pet_type: Option<String>,

    #[arg(long)]
    pet_name: Option<String>,

    /// warm, gentle, playful
    #[arg(long)]
    tone: Option<String>,

    /// Use the fixed ten-year horizon instead of the smart estimate
    #[arg(long)]
    no_smart: bool,
}

impl ProfileArgs {
    /// Load the base profile (if any) and apply every flag on top.
    fn resolve(&self) -> Result<InputProfile> {
        let mut p = match &self.profile {
            Some(path) => lin_config::load_profile(path)
                .with_context(|| format!("failed to load profile {}", path.display()))?,
            None => InputProfile::default(),
        };

        if let Some(name) = &self.name {
            p.name = name.clone();
        }
        if let Some(age) = &self.age {
            p.set_age_text(age);
        }
        if let Some(location) = &self.location {
            p.location = location.clone();
        }
        if let Some(g) = &self.gender {
            p.gender = Gender::parse(g);
        }
        if let Some(s) = &self.smoking {
            p.smoking = Smoking::parse(s);
        }
        if let Some(d) = &self.drinking {
            p.drinking = Drinking::parse(d);
        }
        if let Some(a) = &self.activity {
            p.activity = Activity::parse(a);
        }
        if let Some(c) = &self.conditions {
            p.conditions = c.clone();
        }

        if self.weekly.is_some() || self.monthly.is_some() || self.quarterly.is_some() {
            p.hobbies = slotted_hobbies(
                self.weekly.as_deref().unwrap_or(""),
                self.monthly.as_deref().unwrap_or(""),
                self.quarterly.as_deref().unwrap_or(""),
            );
        } else if !self.hobbies.is_empty() {
            let labels: Vec<&str> = self.hobbies.iter().map(String::as_str).collect();
            p.hobbies = weekly_hobbies(&labels);
        }

        if let Some(kind) = &self.pet_type {
            p.pet.kind = PetKind::parse(kind);
        }
        if let Some(name) = &self.pet_name {
            p.pet.name = name.clone();
        }
        if let Some(t) = &self.tone {
            p.tone = Tone::parse(t);
        }
        if self.no_smart {
            p.use_smart_estimate = false;
        }
        Ok(p)
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var("LIN_CONFIG").ok().map(PathBuf::from));
    lin_config::load_settings(path.as_deref()).context("failed to load settings")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Render {
            profile,
            seed,
            plain,
            json,
        } => cmd_render(&cli, profile, *seed, *plain, *json),
        Commands::Estimate { profile } => cmd_estimate(&cli, profile),
    }
}

fn cmd_render(
    cli: &Cli,
    args: &ProfileArgs,
    seed: Option<u64>,
    plain: bool,
    json: bool,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let profile = args.resolve()?;

    let mut engine = match seed {
        Some(seed) => Engine::seeded(settings, seed),
        None => Engine::new(settings),
    };
    let narrative = engine.render(&profile);
    tracing::info!(
        lines = narrative.lines.len(),
        years = narrative.estimate.years_remaining,
        "rendered narrative"
    );

    if json {
        let out = serde_json::to_string_pretty(&narrative)
            .context("failed to serialize narrative")?;
        println!("{out}");
    } else if plain {
        println!("{}", narrative.to_plain_text());
    } else {
        for line in &narrative.lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn cmd_estimate(cli: &Cli, args: &ProfileArgs) -> Result<()> {
    let settings = load_settings(cli)?;
    let profile = args.resolve()?;
    let derived = estimate(&profile, &settings);

    println!("age:        {}", profile.age);
    println!("expected:   {}", derived.expected_lifespan_years);
    println!("remaining:  {}", derived.years_remaining);
    println!(
        "mode:       {}",
        if profile.use_smart_estimate {
            "smart"
        } else {
            "fixed"
        }
    );
    Ok(())
}
