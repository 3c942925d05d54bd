use chrono::Utc;
use clap::{Parser, Subcommand};
use elitefit_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "elitefit")]
#[command(about = "EliteFit gym member companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate your BMI and health score
    Bmi {
        /// Height (cm for metric, inches for imperial)
        #[arg(long)]
        height: Option<String>,

        /// Weight (kg for metric, pounds for imperial)
        #[arg(long)]
        weight: Option<String>,

        /// Unit system (metric, imperial); defaults to the configured one
        #[arg(long)]
        units: Option<String>,
    },

    /// Log and review gym activities
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Show the member dashboard
    Status,

    /// Show today's diet plan and nutrient totals
    Diet,

    /// Browse and select membership plans
    Plans {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Manage the member profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Export profile and settings as JSON
    Export,

    /// Roll up the activity log to CSV
    Rollup {
        /// Clean up processed log files after rollup
        #[arg(long)]
        cleanup: bool,
    },
}

#[derive(Subcommand)]
enum LogAction {
    /// Log an activity
    Add {
        /// Activity name (e.g. "Chest Press")
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 3)]
        sets: u32,

        #[arg(long, default_value_t = 10)]
        reps: u32,

        /// Weight in kg (0 for bodyweight)
        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        /// Duration in minutes
        #[arg(long, default_value_t = 10)]
        duration: u32,

        /// Estimated calories burned
        #[arg(long, default_value_t = 0)]
        calories: u32,

        /// Log as planned rather than completed
        #[arg(long)]
        pending: bool,
    },

    /// List recent activities
    List {
        /// How many days back to look
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}

#[derive(Subcommand)]
enum PlanAction {
    /// List available membership plans
    List,

    /// Select a membership plan by id
    Select { id: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the stored profile
    Show,

    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove the stored profile and settings
    Clear,
}

fn main() -> Result<()> {
    // Initialize logging
    elitefit_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Commands::Bmi {
            height,
            weight,
            units,
        } => cmd_bmi(height, weight, units, &config),
        Commands::Log { action } => match action {
            LogAction::Add {
                name,
                sets,
                reps,
                weight,
                duration,
                calories,
                pending,
            } => cmd_log_add(
                &data_dir, name, sets, reps, weight, duration, calories, pending,
            ),
            LogAction::List { days } => cmd_log_list(&data_dir, days),
        },
        Commands::Status => cmd_status(&data_dir, &config),
        Commands::Diet => cmd_diet(&config),
        Commands::Plans { action } => match action {
            PlanAction::List => cmd_plans_list(&data_dir),
            PlanAction::Select { id } => cmd_plans_select(&data_dir, &id),
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd_profile_show(&data_dir),
            ProfileAction::Set { name, email, phone } => {
                cmd_profile_set(&data_dir, name, email, phone)
            }
            ProfileAction::Clear => cmd_profile_clear(&data_dir),
        },
        Commands::Export => cmd_export(&data_dir),
        Commands::Rollup { cleanup } => cmd_rollup(&data_dir, cleanup),
    }
}

fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("activities.log")
}

fn csv_path(data_dir: &Path) -> PathBuf {
    data_dir.join("activities.csv")
}

fn cmd_bmi(
    height: Option<String>,
    weight: Option<String>,
    units: Option<String>,
    config: &Config,
) -> Result<()> {
    let units = units
        .as_deref()
        .map(|u| match u.to_lowercase().as_str() {
            "metric" => UnitSystem::Metric,
            "imperial" => UnitSystem::Imperial,
            other => {
                eprintln!("Unknown unit system: {}. Using configured default.", other);
                config.units.default
            }
        })
        .unwrap_or(config.units.default);

    let measurement = match Measurement::from_raw(height.as_deref(), weight.as_deref(), units) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let result = compute_bmi(&measurement);
    display_bmi_result(&result);
    Ok(())
}

fn display_bmi_result(result: &BmiResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  YOUR BMI SCORE");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {:.1}  ({})", result.bmi, result.category.label());
    println!();
    println!(
        "  Scale   [{}] {:.0}%",
        render_bar(result.progress_percent, 20),
        result.progress_percent
    );
    println!(
        "  Health  [{}] {}%",
        render_bar(result.health_score as f64, 20),
        result.health_score
    );
    println!();
    println!("  Expert Recommendation");
    println!("  {}", result.category.recommendation());
    println!();
    println!("  Reference: {} → {}", result.category.reference_band(), result.category.label());
    println!();
}

fn render_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[allow(clippy::too_many_arguments)]
fn cmd_log_add(
    data_dir: &Path,
    name: String,
    sets: u32,
    reps: u32,
    weight: f64,
    duration: u32,
    calories: u32,
    pending: bool,
) -> Result<()> {
    let entry = ActivityEntry {
        id: uuid::Uuid::new_v4(),
        name,
        sets,
        reps,
        weight_kg: weight,
        duration_min: duration,
        calories,
        completed: !pending,
        performed_at: Utc::now(),
    };

    let mut sink = JsonlSink::new(log_path(data_dir));
    sink.append(&entry)?;

    if entry.completed {
        println!("✓ Activity logged: {}", entry.name);
    } else {
        println!("○ Activity planned: {}", entry.name);
    }
    Ok(())
}

fn cmd_log_list(data_dir: &Path, days: i64) -> Result<()> {
    let entries = load_recent_entries(&log_path(data_dir), &csv_path(data_dir), days)?;

    if entries.is_empty() {
        println!("No activities in the last {} days.", days);
        return Ok(());
    }

    println!("\nActivities, last {} days:", days);
    println!();
    for entry in &entries {
        let mark = if entry.completed { "✓" } else { "○" };
        println!(
            "  {} {}  {}x{} @ {}kg  {} min, {} kcal  ({})",
            mark,
            entry.name,
            entry.sets,
            entry.reps,
            entry.weight_kg,
            entry.duration_min,
            entry.calories,
            entry.performed_at.format("%Y-%m-%d %H:%M"),
        );
    }
    println!();
    Ok(())
}

fn cmd_status(data_dir: &Path, config: &Config) -> Result<()> {
    let profile = UserProfile::load(&profile::user_path(data_dir))?;
    let entries = load_recent_entries(&log_path(data_dir), &csv_path(data_dir), 7)?;
    let today = Utc::now().date_naive();

    let name = if profile.full_name.is_empty() {
        "Champion".to_string()
    } else {
        profile.full_name.clone()
    };

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ELITEFIT DASHBOARD");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Welcome back, {}!", name);

    let streak = dashboard::current_streak(&entries, today);
    if streak > 0 {
        println!("  You're on a {}-day streak! Keep the momentum going.", streak);
    }
    println!();

    // Health gauges
    let gauges = dashboard::snapshot_gauges(&HealthSnapshot::default(), &config.targets);
    for gauge in &gauges {
        println!(
            "  {:<13} {:>6} {:<6} [{}] {:.0}%",
            gauge.label,
            gauge.value,
            gauge.unit,
            render_bar(gauge.percent, 20),
            gauge.percent
        );
    }
    println!();

    // Today's activity totals
    let totals = dashboard::day_totals(&entries, today);
    println!(
        "  Today: {} of {} activities done, {} kcal, {} min",
        totals.completed, totals.total, totals.calories, totals.minutes
    );

    // Weekly goal row
    let goals = dashboard::weekly_goals(&entries, today);
    let row: Vec<String> = goals
        .iter()
        .map(|g| {
            let mark = if g.completed { "●" } else { "·" };
            format!("{} {}", g.weekday, mark)
        })
        .collect();
    println!("  Week:  {}", row.join("  "));
    println!();

    Ok(())
}

fn cmd_diet(config: &Config) -> Result<()> {
    let day = default_diet_day();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TODAY'S DIET PLAN");
    println!("╰─────────────────────────────────────────╯");

    for slot in MealSlot::ALL {
        let slot_totals = day.slot_totals(slot);
        println!();
        println!("  {} ({} kcal)", slot.label(), slot_totals.calories);
        for meal in day.meals(slot) {
            println!(
                "    - {}  {} kcal, {}g protein",
                meal.name, meal.calories, meal.protein_g
            );
        }
    }

    let totals = day.day_totals();
    let progress = nutrition::progress_toward(&totals, &config.targets);

    println!();
    println!(
        "  Calories {:>5} of {}  [{}] {:.0}%",
        totals.calories,
        config.targets.calories_kcal,
        render_bar(progress.calories_percent, 20),
        progress.calories_percent
    );
    println!(
        "  Protein  {:>4}g of {}g  [{}] {:.0}%",
        totals.protein_g,
        config.targets.protein_g,
        render_bar(progress.protein_percent, 20),
        progress.protein_percent
    );
    println!();

    Ok(())
}

fn cmd_plans_list(data_dir: &Path) -> Result<()> {
    let catalog = get_default_plans();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Plan catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::PlanCatalog("Invalid plan catalog".into()));
    }

    let profile = UserProfile::load(&profile::user_path(data_dir))?;

    println!("\nMembership plans:");
    for plan in &catalog.plans {
        println!();
        let star = if plan.popular { " ★ popular" } else { "" };
        let selected = if profile.selected_plan.as_deref() == Some(plan.id.as_str()) {
            "  (your plan)"
        } else {
            ""
        };
        println!(
            "  {}  ${}/month{}{}",
            plan.name, plan.price_per_month, star, selected
        );
        println!("  {}", plan.description);
        for feature in &plan.features {
            println!("    - {}", feature);
        }
    }
    println!();
    Ok(())
}

fn cmd_plans_select(data_dir: &Path, id: &str) -> Result<()> {
    let catalog = get_default_plans();

    let plan = match catalog.get(id) {
        Some(plan) => plan,
        None => {
            let ids: Vec<&str> = catalog.plans.iter().map(|p| p.id.as_str()).collect();
            eprintln!("✗ Unknown plan '{}'. Available: {}", id, ids.join(", "));
            std::process::exit(1);
        }
    };

    UserProfile::update(&profile::user_path(data_dir), |p| {
        p.selected_plan = Some(plan.id.clone());
        if p.member_since.is_none() {
            p.member_since = Some(Utc::now());
        }
        Ok(())
    })?;

    println!(
        "✓ Selected the {} plan (${}/month)",
        plan.name, plan.price_per_month
    );
    Ok(())
}

fn cmd_profile_show(data_dir: &Path) -> Result<()> {
    let profile = UserProfile::load(&profile::user_path(data_dir))?;
    let settings = AppSettings::load(&profile::settings_path(data_dir))?;

    println!("\nProfile:");
    println!("  Name:   {}", or_unset(&profile.full_name));
    println!("  Email:  {}", or_unset(&profile.email));
    println!("  Phone:  {}", or_unset(&profile.phone));
    println!(
        "  Plan:   {}",
        profile.selected_plan.as_deref().unwrap_or("(none)")
    );
    if let Some(since) = profile.member_since {
        println!("  Member since: {}", since.format("%Y-%m-%d"));
    }
    println!();
    println!("Settings:");
    println!("  Notifications: {}", on_off(settings.notifications_enabled));
    println!("  Persist dashboard: {}", on_off(settings.persist_dashboard));
    println!();
    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn cmd_profile_set(
    data_dir: &Path,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    if name.is_none() && email.is_none() && phone.is_none() {
        eprintln!("Nothing to update. Pass --name, --email, or --phone.");
        return Ok(());
    }

    UserProfile::update(&profile::user_path(data_dir), |p| {
        if let Some(name) = name {
            p.full_name = name;
        }
        if let Some(email) = email {
            p.email = email;
        }
        if let Some(phone) = phone {
            p.phone = phone;
        }
        Ok(())
    })?;

    println!("✓ Profile updated");
    Ok(())
}

fn cmd_profile_clear(data_dir: &Path) -> Result<()> {
    profile::clear(data_dir)?;
    println!("✓ Profile and settings removed");
    Ok(())
}

fn cmd_export(data_dir: &Path) -> Result<()> {
    let bundle = profile::export_bundle(data_dir)?;
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}

fn cmd_rollup(data_dir: &Path, cleanup: bool) -> Result<()> {
    let log = log_path(data_dir);
    let csv = csv_path(data_dir);

    if !log.exists() {
        println!("No activity log found - nothing to roll up.");
        return Ok(());
    }

    let count = elitefit_core::rollup::log_to_csv_and_archive(&log, &csv)?;

    println!("✓ Rolled up {} activities to CSV", count);
    println!("  CSV: {}", csv.display());

    if cleanup {
        let cleaned = elitefit_core::rollup::cleanup_processed_logs(data_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed log files", cleaned);
        }
    }

    Ok(())
}
