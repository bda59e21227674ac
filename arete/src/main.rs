//! arete - daily discipline tracker CLI
//!
//! Track habits from the terminal: mark daily completions, then view
//! streaks, consistency charts, the 90-day mosaic, and the sunburst
//! breakdown computed by arete-core.

use anyhow::{Context, Result};
use arete_core::analytics::{
    self, average_percentage, consistency_series, current_streak, dashboard_stats, format_date,
    habit_tree, layout, logo_slices, longest_streak, parse_date_str, DayStats, HeatTier,
    HEATMAP_WINDOW_DAYS, TREND_WINDOW_DAYS,
};
use arete_core::{Config, Habit, Palette, Store};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arete")]
#[command(about = "arete - a daily discipline tracker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new habit
    Add {
        /// Habit title
        title: String,
        /// Category name (created if unknown)
        #[arg(long, default_value = "Productivity")]
        category: String,
        /// Free-form description or motto
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Mark a habit complete (today unless --date is given)
    Done {
        /// Habit id, title, or unique title prefix
        habit: String,
        /// Date to log, YYYY-MM-DD (backfilling past days is fine)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a completion mark
    Undo {
        habit: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// List habits with today's state and streaks
    List {
        /// Include archived habits
        #[arg(long)]
        all: bool,
    },
    /// Edit a habit's title, description, or category
    Edit {
        habit: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Archive or unarchive a habit
    Archive { habit: String },
    /// Delete a habit and its history
    Rm { habit: String },
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryCommand,
    },
    /// Dashboard: quick cards, consistency chart, and 90-day mosaic
    Stats {
        /// Window length for the consistency chart
        #[arg(long, default_value_t = TREND_WINDOW_DAYS)]
        days: u32,
        /// Export format (md = markdown, json = JSON)
        #[arg(long)]
        export: Option<String>,
    },
    /// Radial category/habit breakdown
    Sunburst {
        /// Outer radius for the slice geometry
        #[arg(long, default_value_t = 250.0)]
        radius: f64,
        /// Export format (json = slice geometry)
        #[arg(long)]
        export: Option<String>,
    },
    /// Completion glyph for a single date
    Logo {
        /// Target date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Export format (json = slice geometry)
        #[arg(long)]
        export: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    /// Add a category
    Add { name: String },
    /// Rename a category, updating its habits
    Rename { old: String, new: String },
    /// Remove an empty category
    Rm { name: String },
    /// List categories with habit counts
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = arete_core::logging::init(&config.logging).ok();

    // Captured once; every computation below sees the same "today"
    let today = analytics::today();

    let mut store = Store::open(today).context("failed to open store")?;
    let palette = Palette::with_overrides(config.palette.clone());

    match cli.command {
        Command::Add {
            title,
            category,
            description,
        } => {
            let id = store.add_habit(&title, &description, &category, today);
            store.save()?;
            println!("Added \"{}\" ({}) [{}]", title, category, id);
        }
        Command::Done { habit, date } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            let habit = store.resolve_habit(&habit)?.clone();
            if store.logs().is_completed(&habit.id, date) {
                println!("\"{}\" already done on {}", habit.title, format_date(date));
            } else {
                store.toggle_completion(&habit.id, date)?;
                store.save()?;
                let streak = current_streak(store.logs().completions(&habit.id), today);
                print!("✓ {} on {}", habit.title, format_date(date));
                if streak > 2 {
                    print!("  🔥 {} days", streak);
                }
                println!();
            }
        }
        Command::Undo { habit, date } => {
            let date = parse_date_arg(date.as_deref(), today)?;
            let habit = store.resolve_habit(&habit)?.clone();
            if store.logs().is_completed(&habit.id, date) {
                store.toggle_completion(&habit.id, date)?;
                store.save()?;
                println!("Unmarked \"{}\" on {}", habit.title, format_date(date));
            } else {
                println!(
                    "\"{}\" was not marked on {}",
                    habit.title,
                    format_date(date)
                );
            }
        }
        Command::List { all } => print_list(&store, &config, today, all),
        Command::Edit {
            habit,
            title,
            description,
            category,
        } => {
            let id = store.resolve_habit(&habit)?.id.clone();
            store.edit_habit(&id, title.as_deref(), description.as_deref(), category.as_deref())?;
            store.save()?;
            println!("Updated {}", store.resolve_habit(&id)?.title);
        }
        Command::Archive { habit } => {
            let id = store.resolve_habit(&habit)?.id.clone();
            let archived = store.toggle_archived(&id)?;
            store.save()?;
            let habit = store.resolve_habit(&id)?;
            if archived {
                println!("Archived \"{}\"", habit.title);
            } else {
                println!("Restored \"{}\"", habit.title);
            }
        }
        Command::Rm { habit } => {
            let habit = store.resolve_habit(&habit)?.clone();
            store.delete_habit(&habit.id)?;
            store.save()?;
            println!("Deleted \"{}\" and its history", habit.title);
        }
        Command::Category { action } => match action {
            CategoryCommand::Add { name } => {
                store.add_category(&name)?;
                store.save()?;
                println!("Added category \"{}\"", name);
            }
            CategoryCommand::Rename { old, new } => {
                store.rename_category(&old, &new)?;
                store.save()?;
                println!("Renamed \"{}\" to \"{}\"", old, new);
            }
            CategoryCommand::Rm { name } => {
                store.delete_category(&name)?;
                store.save()?;
                println!("Removed category \"{}\"", name);
            }
            CategoryCommand::List => {
                for category in store.categories() {
                    let count = store
                        .habits()
                        .iter()
                        .filter(|h| &h.category == category && !h.archived)
                        .count();
                    println!(
                        "{:<16} {} habit{} [{}]",
                        category,
                        count,
                        if count == 1 { "" } else { "s" },
                        palette.color(category)
                    );
                }
            }
        },
        Command::Stats { days, export } => match export.as_deref() {
            Some("json") => print_stats_json(&store, days, today)?,
            Some("md") => print_stats_markdown(&store, days, today),
            Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
            None => print_stats_terminal(&store, &config, days, today),
        },
        Command::Sunburst { radius, export } => {
            let tree = habit_tree(store.habits(), store.logs(), &palette);
            match export.as_deref() {
                Some("json") => {
                    let slices = layout(&tree, radius);
                    println!("{}", serde_json::to_string_pretty(&slices)?);
                }
                Some(other) => anyhow::bail!("Unknown export format: {}. Use 'json'", other),
                None => print_sunburst_terminal(&tree, today),
            }
        }
        Command::Logo { date, export } => {
            let target = parse_date_arg(date.as_deref(), today)?;
            let slices = logo_slices(store.habits(), store.logs(), target, &palette);
            match export.as_deref() {
                Some("json") => println!("{}", serde_json::to_string_pretty(&slices)?),
                Some(other) => anyhow::bail!("Unknown export format: {}. Use 'json'", other),
                None => {
                    if slices.is_empty() {
                        println!("No active habits - empty ring for {}", format_date(target));
                    } else {
                        println!("Glyph for {}:", format_date(target));
                        for slice in &slices {
                            let mark = if slice.completed { "●" } else { "○" };
                            println!(
                                "  {} {:<20} {:>6.1}°–{:<6.1}° {}",
                                mark, slice.title, slice.start_angle, slice.end_angle, slice.color
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Parse an optional `--date` argument, defaulting to today. Future
/// dates are rejected; backfilling the past is allowed.
fn parse_date_arg(arg: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let date = match arg {
        Some(s) => parse_date_str(s).context("invalid --date")?,
        None => today,
    };
    if date > today {
        anyhow::bail!("cannot log the future: {} is after today", format_date(date));
    }
    Ok(date)
}

fn print_list(store: &Store, config: &Config, today: NaiveDate, all: bool) {
    let habits: Vec<&Habit> = store
        .habits()
        .iter()
        .filter(|h| all || !h.archived)
        .collect();

    if habits.is_empty() {
        println!("No habits yet. Create one with `arete add <title>`.");
        return;
    }

    for habit in habits {
        let done = store.logs().is_completed(&habit.id, today);
        let mark = if done { "✓" } else { " " };
        let streak = current_streak(store.logs().completions(&habit.id), today);
        print!("[{}] {:<24} {:<14}", mark, habit.title, habit.category);
        if streak > 2 {
            print!(" 🔥 {} days", streak);
        }
        if habit.archived {
            print!(" (archived)");
        }
        println!();
    }

    let day = store.day_number(today);
    let target = config.challenge.target_days as i64;
    let progress = ((day as f64 / target as f64) * 100.0).min(100.0);
    println!();
    println!("Day {} of {} ({:.0}%)", day, target, progress);
}

// ============================================
// Stats output
// ============================================

/// Block glyph for one day of the consistency chart.
fn spark_glyph(percentage: f64) -> char {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let index = (percentage / 100.0 * (BLOCKS.len() - 1) as f64).round() as usize;
    BLOCKS[index.min(BLOCKS.len() - 1)]
}

/// Mosaic glyph for one heatmap tier.
fn heat_glyph(tier: HeatTier) -> char {
    match tier {
        HeatTier::None => '·',
        HeatTier::Low => '░',
        HeatTier::Mid => '▒',
        HeatTier::High => '▓',
        HeatTier::Max => '█',
    }
}

fn print_stats_terminal(store: &Store, config: &Config, days: u32, today: NaiveDate) {
    let stats = dashboard_stats(store.habits(), store.logs(), today);
    let series = consistency_series(store.habits(), store.logs(), days, today);
    let day = store.day_number(today);

    let title = format!("ARETE - DAY {} OF {}", day, config.challenge.target_days);
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    println!("THE NUMBERS");
    println!(
        "   Total reps:  {:<10} Disciplines: {}",
        stats.total_completions, stats.active_habits
    );
    println!(
        "   Daily wins:  {:<10} Consistency: {:.0}%",
        stats.completed_today, stats.avg_consistency_pct
    );
    println!();

    println!("{} DAY CONSISTENCY", days);
    let chart: String = series.iter().map(|d| spark_glyph(d.percentage)).collect();
    println!("   {}", chart);
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        println!(
            "   {}{}{}",
            format_date(first.date),
            " ".repeat((days as usize).saturating_sub(20).max(1)),
            format_date(last.date)
        );
    }
    println!();

    println!("MOSAIC ({} DAYS)", HEATMAP_WINDOW_DAYS);
    let mosaic = consistency_series(store.habits(), store.logs(), HEATMAP_WINDOW_DAYS, today);
    for week in mosaic.chunks(30) {
        let row: String = week
            .iter()
            .map(|d| heat_glyph(HeatTier::for_day(d)))
            .collect();
        println!("   {}", row);
    }
    println!("   less ·░▒▓█ more");
    println!();

    print_streak_leaders(store, today);
}

fn print_streak_leaders(store: &Store, today: NaiveDate) {
    let mut leaders: Vec<(&Habit, u32, u32)> = store
        .habits()
        .iter()
        .filter(|h| !h.archived)
        .map(|h| {
            let completions = store.logs().completions(&h.id);
            (
                h,
                current_streak(completions, today),
                longest_streak(completions),
            )
        })
        .collect();
    leaders.sort_by(|a, b| b.1.cmp(&a.1));

    if leaders.iter().all(|(_, current, _)| *current == 0) {
        return;
    }
    println!("STREAKS");
    for (habit, current, longest) in leaders.iter().take(5) {
        if *current == 0 {
            continue;
        }
        println!(
            "   {:<24} {:>3} day{} (best {})",
            habit.title,
            current,
            if *current == 1 { "" } else { "s" },
            longest
        );
    }
    println!();
}

fn print_stats_markdown(store: &Store, days: u32, today: NaiveDate) {
    let stats = dashboard_stats(store.habits(), store.logs(), today);
    let series = consistency_series(store.habits(), store.logs(), days, today);

    println!("# arete stats - {}", format_date(today));
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Total reps | {} |", stats.total_completions);
    println!("| Disciplines | {} |", stats.active_habits);
    println!("| Daily wins | {} |", stats.completed_today);
    println!("| Consistency | {:.0}% |", stats.avg_consistency_pct);
    println!();

    println!("## {} day consistency", days);
    println!();
    println!("| Date | Done | Active | % |");
    println!("|------|------|--------|---|");
    for d in &series {
        println!(
            "| {} | {} | {} | {:.0}% |",
            format_date(d.date),
            d.count,
            d.total_active,
            d.percentage
        );
    }
    println!();
    println!("---");
    println!("*Generated by arete*");
}

fn print_stats_json(store: &Store, days: u32, today: NaiveDate) -> Result<()> {
    let stats = dashboard_stats(store.habits(), store.logs(), today);
    let series = consistency_series(store.habits(), store.logs(), days, today);
    let mosaic: Vec<DayStats> =
        consistency_series(store.habits(), store.logs(), HEATMAP_WINDOW_DAYS, today);

    let json = serde_json::json!({
        "date": format_date(today),
        "totals": stats,
        "series": series,
        "heatmap": mosaic,
        "avg_percentage": average_percentage(&series),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_sunburst_terminal(tree: &arete_core::analytics::SunburstNode, today: NaiveDate) {
    if tree.value == 0 {
        println!("No completions yet - nothing to partition.");
        return;
    }

    println!("HOLISTIC VIEW - {} total reps", tree.value);
    println!();
    for category in &tree.children {
        let share = category.value as f64 / tree.value as f64 * 100.0;
        println!("{:<16} {:>5} reps  {:>5.1}%", category.name, category.value, share);
        for habit in &category.children {
            if habit.value == 0 {
                continue;
            }
            println!("   {:<16} {:>5}", habit.name, habit.value);
        }
    }
    println!();
    println!("As of {}", format_date(today));
}
