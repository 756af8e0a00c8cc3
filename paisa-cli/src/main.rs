use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use paisa_core::{
    NeedWant, Period, TxnKind, breakdown_chart, category_breakdown, daily_forecast,
    generate_insights, period_totals,
};
use paisa_ingest::{parse_bank_csv, to_transactions};
use paisa_store::{
    BudgetService, ClassificationService, GoalService, JsonFileStore, NewTransaction,
    ProfileService, ReportService, TransactionService,
};

mod setup;
mod state;

use state::{Config, format_money, load_config};

#[derive(Parser, Debug)]
#[command(name = "paisa", version, about = "Local expense tracker with heuristic insights")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time setup: create ~/.paisa, seed categories and the profile
    Setup,

    /// Record a transaction
    Add {
        #[arg(long)]
        title: String,

        /// Positive amount
        #[arg(long)]
        amount: f64,

        #[arg(long)]
        category: String,

        /// YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        note: Option<String>,

        /// Record as income instead of expense
        #[arg(long, default_value_t = false)]
        income: bool,
    },

    /// List transactions, optionally for one month (YYYY-MM)
    List {
        #[arg(long)]
        month: Option<String>,
    },

    /// Delete a transaction by id
    Delete { id: String },

    /// Period totals and category breakdown (defaults to this month)
    Dashboard {
        #[arg(long)]
        month: Option<String>,
    },

    /// Spending insights over all recorded data
    Insights,

    /// Need/want classification for recent transactions
    Classify {
        /// Override one transaction: need | want
        #[arg(long, requires = "id")]
        set: Option<String>,

        #[arg(long)]
        id: Option<String>,
    },

    /// Budget management
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },

    /// Safe-to-spend forecast for today
    Forecast {
        /// Monthly budget; defaults to the sum of your category budgets
        #[arg(long)]
        budget: Option<f64>,
    },

    /// Savings goals
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Import a CSV statement export
    Import {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Monthly report (defaults to this month)
    Report {
        #[arg(long)]
        month: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    /// Suggest budgets for categories without one
    Suggest {
        /// Accept every suggestion
        #[arg(long, default_value_t = false)]
        accept: bool,
    },

    /// Set a category budget
    Set {
        category: String,
        monthly_limit: f64,
    },

    /// List category budgets
    List,
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        target: f64,

        /// YYYY-MM-DD
        #[arg(long)]
        deadline: String,
    },

    List,

    /// Add saved money to a goal
    Progress { id: String, amount: f64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Setup => setup::run_setup(),
        command => {
            let store = JsonFileStore::open_default()?;
            let cfg = load_config()?;
            run(command, &store, &cfg)
        }
    }
}

fn run(command: Command, store: &JsonFileStore, cfg: &Config) -> Result<()> {
    match command {
        Command::Setup => unreachable!("handled in main"),

        Command::Add {
            title,
            amount,
            category,
            date,
            note,
            income,
        } => {
            if !amount.is_finite() || amount <= 0.0 {
                bail!("amount must be a positive number, got {amount}");
            }
            let date = parse_date_or_today(date.as_deref())?;
            let kind = if income { TxnKind::Income } else { TxnKind::Expense };

            let txn = TransactionService::new(store).add(NewTransaction {
                title,
                amount,
                category,
                date,
                note,
                kind,
                profile_id: Some(cfg.active_profile.clone()),
            })?;
            println!(
                "Recorded {} | {} | {} | {}",
                txn.date,
                txn.title,
                format_money(cfg, txn.amount),
                txn.id
            );
            Ok(())
        }

        Command::List { month } => {
            let period = parse_month_period(month.as_deref())?;
            let mut txns = active_transactions(store, cfg);
            if let Some(period) = period {
                txns.retain(|t| period.contains(t.date));
            }
            txns.sort_by(|a, b| b.date.cmp(&a.date));

            for t in &txns {
                let sign = if t.is_income() { "+" } else { "-" };
                println!(
                    "{} {}{} | {} | {} | {}",
                    t.date,
                    sign,
                    format_money(cfg, t.amount),
                    t.category,
                    t.title,
                    t.id
                );
            }
            println!("\n{} transactions", txns.len());
            Ok(())
        }

        Command::Delete { id } => {
            if TransactionService::new(store).delete(&id)? {
                println!("Deleted {id}");
            } else {
                println!("No transaction with id {id}");
            }
            Ok(())
        }

        Command::Dashboard { month } => {
            let period = parse_month_period(month.as_deref())?
                .unwrap_or_else(|| Period::month_of(today()));
            let txns = active_transactions(store, cfg);

            let totals = period_totals(&txns, period);
            println!("Period {}", period.label());
            println!("  income:  {}", format_money(cfg, totals.income));
            println!("  expense: {}", format_money(cfg, totals.expense));
            println!("  net:     {}", format_money(cfg, totals.net()));

            let slices = category_breakdown(&txns, period);
            if !slices.is_empty() {
                println!("\nBy category:");
                for p in breakdown_chart(&slices) {
                    let pct = slices
                        .iter()
                        .find(|s| s.category == p.label)
                        .map(|s| s.percentage)
                        .unwrap_or(0.0);
                    println!(
                        "  {:<16} {:>12}  {:>5.1}%  {}",
                        p.label,
                        format_money(cfg, p.value),
                        pct,
                        p.color
                    );
                }
            }
            Ok(())
        }

        Command::Insights => {
            let txns = active_transactions(store, cfg);
            let insights = generate_insights(&txns);
            if insights.is_empty() {
                println!("Not enough data for insights yet");
            }
            for i in insights {
                println!("- {}", i.message);
            }
            Ok(())
        }

        Command::Classify { set, id } => {
            let svc = ClassificationService::new(store);

            if let (Some(label), Some(id)) = (set.as_deref(), id.as_deref()) {
                let label = match label.to_lowercase().as_str() {
                    "need" => NeedWant::Need,
                    "want" => NeedWant::Want,
                    other => bail!("expected need or want, got {other}"),
                };
                let entry = svc.override_label(id, label)?;
                println!("Marked {} as {:?}", entry.transaction_id, entry.label);
                return Ok(());
            }

            let mut txns = active_transactions(store, cfg);
            txns.sort_by(|a, b| b.date.cmp(&a.date));
            for t in txns.iter().take(20) {
                let c = svc.classify_or_get(t)?;
                let tag = if c.ai_assigned { "auto" } else { "user" };
                println!(
                    "{} | {:<14} | {:?} ({:.2}, {}) | {}",
                    t.date, t.category, c.label, c.confidence, tag, t.title
                );
            }
            Ok(())
        }

        Command::Budget { command } => run_budget(command, store, cfg),

        Command::Forecast { budget } => {
            let budgets = BudgetService::new(store);
            let monthly_budget = match budget {
                Some(b) => b,
                None => {
                    let total: f64 = budgets.list().iter().map(|b| b.monthly_limit).sum();
                    if total <= 0.0 {
                        bail!("no budgets set; pass --budget or run `paisa budget set`");
                    }
                    total
                }
            };

            let txns = active_transactions(store, cfg);
            let f = daily_forecast(&txns, monthly_budget, today());
            println!("Spent so far:   {}", format_money(cfg, f.spent_so_far));
            println!("Remaining:      {}", format_money(cfg, f.remaining_budget));
            println!("Days left:      {}", f.days_left);
            println!("Safe today:     {}", format_money(cfg, f.safe_to_spend));
            println!("Risk:           {:?}", f.risk);
            Ok(())
        }

        Command::Goal { command } => run_goal(command, store, cfg),

        Command::Import { csv } => {
            if !csv.exists() {
                bail!("CSV not found: {}", csv.display());
            }
            let stmts = parse_bank_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;
            let records = to_transactions(&stmts, Some(&cfg.active_profile));

            let svc = TransactionService::new(store);
            let mut imported = 0usize;
            for r in &records {
                svc.add(NewTransaction {
                    title: r.title.clone(),
                    amount: r.amount,
                    category: r.category.clone(),
                    date: r.date,
                    note: r.note.clone(),
                    kind: r.kind,
                    profile_id: r.profile_id.clone(),
                })?;
                imported += 1;
            }
            println!(
                "Imported {imported} of {} rows from {}",
                stmts.len(),
                csv.display()
            );
            Ok(())
        }

        Command::Report { month } => {
            let period = parse_month_period(month.as_deref())?
                .unwrap_or_else(|| Period::month_of(today()));
            let Period::Month { year, month } = period else {
                bail!("report expects a month, not a day");
            };

            let txns = active_transactions(store, cfg);
            let report = ReportService::new(store).generate(&txns, year, month)?;

            println!("Report {}", report.month);
            println!("  income:  {}", format_money(cfg, report.total_income));
            println!("  expense: {}", format_money(cfg, report.total_expense));
            println!("  net:     {}", format_money(cfg, report.net));
            if let Some(top) = &report.top_category {
                println!("  top:     {top}");
            }
            for row in &report.rows {
                println!(
                    "  {:<16} {:>12}  {:>5.1}%",
                    row.category,
                    format_money(cfg, row.amount),
                    row.percentage
                );
            }
            Ok(())
        }
    }
}

fn run_budget(command: BudgetCommand, store: &JsonFileStore, cfg: &Config) -> Result<()> {
    let budgets = BudgetService::new(store);
    match command {
        BudgetCommand::Suggest { accept } => {
            let txns = active_transactions(store, cfg);
            let suggestions = budgets.suggestions(&txns, today());
            if suggestions.is_empty() {
                println!("Every spending category already has a budget");
                return Ok(());
            }
            for s in &suggestions {
                println!(
                    "{:<16} {:>12}  ({})",
                    s.category,
                    format_money(cfg, s.suggested_amount),
                    s.reasoning
                );
            }
            if accept {
                let count = suggestions.len();
                for s in suggestions {
                    budgets.accept(s)?;
                }
                println!("\nAccepted {count} suggestions");
            }
            Ok(())
        }

        BudgetCommand::Set {
            category,
            monthly_limit,
        } => {
            let b = budgets.set(&category, monthly_limit)?;
            println!("{} budget: {}", b.category, format_money(cfg, b.monthly_limit));
            Ok(())
        }

        BudgetCommand::List => {
            let all = budgets.list();
            if all.is_empty() {
                println!("No budgets set");
            }
            for b in all {
                println!("{:<16} {}", b.category, format_money(cfg, b.monthly_limit));
            }
            Ok(())
        }
    }
}

fn run_goal(command: GoalCommand, store: &JsonFileStore, cfg: &Config) -> Result<()> {
    let goals = GoalService::new(store);
    match command {
        GoalCommand::Add {
            name,
            target,
            deadline,
        } => {
            let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d")
                .with_context(|| format!("invalid deadline '{deadline}', expected YYYY-MM-DD"))?;
            let goal = goals.add(&name, target, deadline)?;
            println!(
                "Goal {} | target {} by {} | save {} per week | {}",
                goal.name,
                format_money(cfg, goal.target_amount),
                goal.deadline,
                format_money(cfg, goal.weekly_target(today())),
                goal.id
            );
            Ok(())
        }

        GoalCommand::List => {
            let all = goals.list();
            if all.is_empty() {
                println!("No goals yet");
            }
            for g in all {
                println!(
                    "{:<20} {:>12} / {:<12} {:>5.0}%  weekly {}  | {}",
                    g.name,
                    format_money(cfg, g.current_amount),
                    format_money(cfg, g.target_amount),
                    g.progress() * 100.0,
                    format_money(cfg, g.weekly_target(today())),
                    g.id
                );
            }
            Ok(())
        }

        GoalCommand::Progress { id, amount } => {
            match goals.add_progress(&id, amount)? {
                Some(g) => println!(
                    "{}: {} of {}",
                    g.name,
                    format_money(cfg, g.current_amount),
                    format_money(cfg, g.target_amount)
                ),
                None => println!("No goal with id {id}"),
            }
            Ok(())
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD")),
        None => Ok(today()),
    }
}

fn parse_month_period(s: Option<&str>) -> Result<Option<Period>> {
    match s {
        Some(raw) => {
            let period = Period::parse(raw)?;
            Ok(Some(period))
        }
        None => Ok(None),
    }
}

/// Transactions visible to the active profile: tagged with it, or whose
/// tag is missing/orphaned when the active profile is the default
fn active_transactions(store: &JsonFileStore, cfg: &Config) -> Vec<paisa_core::Transaction> {
    let profiles = ProfileService::new(store);
    TransactionService::new(store)
        .list()
        .into_iter()
        .filter(|t| profiles.resolve_id(t.profile_id.as_deref()) == cfg.active_profile)
        .collect()
}
