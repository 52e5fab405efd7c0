use clap::{Parser, Subcommand};
use nutri_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nutri")]
#[command(about = "Food log and nutrient health tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a food from the catalog
    Add {
        /// Food name or part of it (e.g. "dosa")
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Quantity in the chosen unit
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        qty: f64,

        /// Unit of the quantity (g or serving)
        #[arg(long, default_value = "serving")]
        unit: Unit,
    },

    /// Remove a logged food by its number in `show`
    Remove {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Show today's log, totals, health score and suggestions (default)
    Show,

    /// List catalog foods matching a query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Clear today's log
    Reset,

    /// Set the daily calorie goal
    Goal {
        #[arg(value_parser = parse_goal)]
        kcal: f64,
    },

    /// Save today's totals and score to the daily history
    Save,

    /// Show saved daily summaries
    History,

    /// Export saved daily summaries to CSV
    Export { path: PathBuf },
}

/// Paths derived from the data directory
struct DataPaths {
    session: PathBuf,
    history: PathBuf,
}

impl DataPaths {
    fn new(data_dir: &Path) -> Self {
        Self {
            session: data_dir.join("session.json"),
            history: data_dir.join("history.json"),
        }
    }
}

fn parse_goal(s: &str) -> std::result::Result<f64, String> {
    let goal: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !goal.is_finite() || goal < 0.0 {
        return Err("goal must be a non-negative number".into());
    }
    Ok(goal)
}

fn main() -> ExitCode {
    // Keep stdout for command output
    nutri_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::FoodNotFound(query)) => {
            eprintln!(
                "Food not found: '{}'. Try items like: roti, rice, banana, dosa, dal, pizza, etc.",
                query
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let paths = DataPaths::new(&data_dir);
    tracing::debug!("Using data directory {:?}", data_dir);
    let default_goal = config.goal.daily_calories;

    match cli.command {
        Some(Commands::Add { query, qty, unit }) => {
            cmd_add(&paths, &config, &query.join(" "), qty, unit)
        }
        Some(Commands::Remove { number }) => cmd_remove(&paths, default_goal, number),
        Some(Commands::Show) | None => cmd_show(&paths, default_goal),
        Some(Commands::Search { query }) => cmd_search(&config, &query.join(" ")),
        Some(Commands::Reset) => cmd_reset(&paths, default_goal),
        Some(Commands::Goal { kcal }) => cmd_goal(&paths, default_goal, kcal),
        Some(Commands::Save) => cmd_save(&paths, default_goal),
        Some(Commands::History) => cmd_history(&paths),
        Some(Commands::Export { path }) => cmd_export(&paths, &path),
    }
}

fn cmd_add(paths: &DataPaths, config: &Config, query: &str, qty: f64, unit: Unit) -> Result<()> {
    let catalog = config.catalog()?;

    let (session, added) = Session::update(&paths.session, config.goal.daily_calories, |s| {
        s.add(&catalog, query, qty, unit).map(|e| e.clone())
    })?;

    println!(
        "✓ Added {} × {} {} ({:.1} kcal) {}",
        added.name,
        added.quantity,
        added.unit,
        added.calories,
        classify(&added).label()
    );
    print_summary(&session.report());
    Ok(())
}

fn cmd_remove(paths: &DataPaths, default_goal: f64, number: u64) -> Result<()> {
    let index = (number - 1) as usize;
    let result = Session::update(&paths.session, default_goal, |s| s.remove_at(index));

    match result {
        Ok((session, removed)) => {
            println!("✓ Removed {}", removed.name);
            print_summary(&session.report());
            Ok(())
        }
        Err(Error::IndexOutOfRange { len, .. }) => Err(Error::State(format!(
            "no entry #{} (the log has {} entries)",
            number, len
        ))),
        Err(e) => Err(e),
    }
}

fn cmd_show(paths: &DataPaths, default_goal: f64) -> Result<()> {
    let session = Session::load(&paths.session, default_goal)?;
    let report = session.report();

    println!("\nToday's log (goal {:.0} kcal)", report.goal);
    println!("─────────────────────────────────────────");
    if report.entries.is_empty() {
        println!("  (empty)");
    }
    for (i, item) in report.entries.iter().enumerate() {
        let e = &item.entry;
        println!(
            "  {:>2}. {} × {} {}  {}  {:.1} kcal",
            i + 1,
            e.name,
            e.quantity,
            e.unit,
            item.classification.label(),
            e.calories
        );
    }

    print_summary(&report);

    println!("\nSuggestions");
    for card in &report.advice {
        println!("  [{:?}] {}", card.severity, card.text);
    }
    println!();
    Ok(())
}

fn print_summary(report: &SessionReport) {
    let t = &report.totals;
    println!();
    println!(
        "  Calories {:.1} | Protein {:.1} g | Carbs {:.1} g | Fat {:.1} g | Sugar {:.1} g",
        t.calories, t.protein, t.carbs, t.fat, t.sugar
    );
    println!("  Health score: {} ({:?})", report.score, report.band);
    println!("  {}", report.goal_status.message());
}

fn cmd_search(config: &Config, query: &str) -> Result<()> {
    let catalog = config.catalog()?;
    let matches = catalog.suggest(query, SUGGESTION_LIMIT);

    if matches.is_empty() {
        println!("No foods match '{}'.", query);
        return Ok(());
    }

    for food in matches {
        println!(
            "  {} ({} g serving): {:.0} kcal, {:.1} g protein, {:.1} g sugar",
            food.name, food.serving_grams, food.calories, food.protein, food.sugar
        );
    }
    Ok(())
}

fn cmd_reset(paths: &DataPaths, default_goal: f64) -> Result<()> {
    Session::update(&paths.session, default_goal, |s| {
        s.reset();
        Ok(())
    })?;
    println!("✓ Day reset successfully!");
    Ok(())
}

fn cmd_goal(paths: &DataPaths, default_goal: f64, kcal: f64) -> Result<()> {
    let (session, _) = Session::update(&paths.session, default_goal, |s| {
        s.set_goal(kcal);
        Ok(())
    })?;
    println!("✓ Daily goal set to {:.0} kcal", kcal);
    print_summary(&session.report());
    Ok(())
}

fn cmd_save(paths: &DataPaths, default_goal: f64) -> Result<()> {
    let session = Session::load(&paths.session, default_goal)?;
    let store = HistoryStore::new(&paths.history);
    let snapshot = store.save_session(&today_key(), &session)?;

    println!(
        "✓ Today's data saved! ({}: {:.1} kcal, score {})",
        snapshot.date, snapshot.calories, snapshot.score
    );
    Ok(())
}

fn cmd_history(paths: &DataPaths) -> Result<()> {
    let snapshots = HistoryStore::new(&paths.history).load()?;

    if snapshots.is_empty() {
        println!("No saved days yet.");
        return Ok(());
    }

    println!("{:<12} {:>10} {:>10} {:>6}", "Date", "Calories", "Sugar", "Score");
    for day in &snapshots {
        println!(
            "{:<12} {:>10.1} {:>10.1} {:>6}",
            day.date, day.calories, day.sugar, day.score
        );
    }
    Ok(())
}

fn cmd_export(paths: &DataPaths, out: &Path) -> Result<()> {
    let snapshots = HistoryStore::new(&paths.history).load()?;
    let count = export_csv(&snapshots, out)?;
    println!("✓ Exported {} days to {}", count, out.display());
    Ok(())
}
