use crate::infra::{parse_category, parse_date, PlatformContent};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use fundbridge::error::AppError;
use fundbridge::workflows::dashboard::{select_dashboard, ClaimsJson};
use fundbridge::workflows::schemes::{
    Dimension, EligibilityEvaluator, EligibilityForm, FilterState, SchemeCategory, SchemeRecord,
};
use std::io;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SchemeSearchArgs {
    /// Case-insensitive text matched against title, ministry and description
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Restrict to one category (financial, tax, incubation, research, msme)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<SchemeCategory>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct SchemeCheckArgs {
    /// Startup stage, e.g. "Ideation" or "Early Traction"
    #[arg(long)]
    pub(crate) stage: String,
    /// Industry, e.g. "FinTech"
    #[arg(long)]
    pub(crate) industry: String,
    /// Annual revenue band, e.g. "Pre-revenue"
    #[arg(long)]
    pub(crate) revenue: String,
    /// Employee band, e.g. "1-5"
    #[arg(long)]
    pub(crate) employees: String,
    /// Registered location, e.g. "Metro City"
    #[arg(long)]
    pub(crate) location: String,
    /// Existing government support (none, incubation, funding, tax, multiple)
    #[arg(long)]
    pub(crate) support: String,
    /// Print the per-criterion breakdown for every scheme
    #[arg(long)]
    pub(crate) breakdown: bool,
}

impl SchemeCheckArgs {
    fn form(&self) -> EligibilityForm {
        let mut form = EligibilityForm::default();
        for (dimension, value) in [
            (Dimension::StartupStage, &self.stage),
            (Dimension::IndustryType, &self.industry),
            (Dimension::AnnualRevenue, &self.revenue),
            (Dimension::Employees, &self.employees),
            (Dimension::RegisteredLocation, &self.location),
            (Dimension::ExistingSupport, &self.support),
        ] {
            form.set(dimension, value.as_str());
        }
        form
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Decoded identity claims as JSON, e.g. '{"name":"Asha","userType":"startup"}'
    #[arg(long)]
    pub(crate) identity: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StoriesArgs {
    /// Only show stories from this sector
    #[arg(long)]
    pub(crate) sector: Option<String>,
    /// Reference date for "closed N days ago" (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_scheme_search(args: SchemeSearchArgs) -> Result<(), AppError> {
    let content = PlatformContent::load()?;
    let filter = FilterState::new(args.search.unwrap_or_default(), args.category);
    let schemes = filter.apply(content.catalog.schemes());

    match args.format {
        OutputFormat::Table => render_scheme_table(&filter, &schemes),
        OutputFormat::Csv => write_scheme_csv(io::stdout().lock(), &schemes)?,
    }
    Ok(())
}

fn render_scheme_table(filter: &FilterState, schemes: &[&SchemeRecord]) {
    let category = filter
        .category
        .map(SchemeCategory::label)
        .unwrap_or("All Categories");
    println!(
        "Schemes matching \"{}\" in {}: {}",
        filter.search_term,
        category,
        schemes.len()
    );
    if schemes.is_empty() {
        println!("  No schemes found. Try a different search or category.");
        return;
    }
    for scheme in schemes {
        println!("  [{}] {}", scheme.id, scheme.title);
        println!("      {}", scheme.ministry);
        for detail in &scheme.details {
            println!("      - {}: {}", detail.label, detail.value);
        }
        println!("      Website: {}", scheme.website);
    }
}

pub(crate) fn write_scheme_csv<W: io::Write>(
    writer: W,
    schemes: &[&SchemeRecord],
) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["id", "title", "ministry", "website", "application_url"])
        .map_err(io::Error::from)?;
    for scheme in schemes {
        let id = scheme.id.to_string();
        csv_writer
            .write_record([
                id.as_str(),
                scheme.title.as_str(),
                scheme.ministry.as_str(),
                scheme.website.as_str(),
                scheme.application_url.as_deref().unwrap_or_default(),
            ])
            .map_err(io::Error::from)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub(crate) fn run_scheme_check(args: SchemeCheckArgs) -> Result<(), AppError> {
    let content = PlatformContent::load()?;
    let profile = args
        .form()
        .to_profile()
        .map_err(fundbridge::workflows::schemes::LookupError::from)?;

    let evaluator = EligibilityEvaluator::new();
    let matches = evaluator.evaluate(&content.catalog, &profile);

    println!(
        "Eligibility check ({} of {} criteria required)",
        evaluator.threshold(),
        Dimension::COUNT
    );
    if matches.is_empty() {
        println!("  No matching schemes. Adjusting your answers may surface other options.");
    } else {
        println!("  Matching schemes:");
        for scheme in &matches {
            let apply = scheme.application_url.as_deref().unwrap_or("visit website");
            println!("    - [{}] {} ({})", scheme.id, scheme.title, apply);
        }
    }

    if args.breakdown {
        println!("  Breakdown:");
        for assessment in evaluator.assess_all(&content.catalog, &profile) {
            println!("    - {}", assessment.summary());
        }
    }

    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let view = select_dashboard(&ClaimsJson(args.identity));

    println!("{} ({} dashboard)", view.greeting(), view.role.label());
    for card in &view.cards {
        println!("  - {} [{}]", card.title, card.route);
        println!("      {}", card.description);
    }
    Ok(())
}

pub(crate) fn run_stories(args: StoriesArgs) -> Result<(), AppError> {
    let content = PlatformContent::load()?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let stories = content
        .stories
        .in_sector(args.sector.as_deref().unwrap_or_default());

    println!("Success stories ({})", stories.len());
    for story in stories {
        let days = (as_of - story.closed_on).num_days();
        println!(
            "  {} ({}) raised {} from {}",
            story.startup, story.sector, story.amount_raised, story.investor
        );
        println!("      {}", story.headline);
        println!(
            "      Founder: {}; closed {} ({} days ago)",
            story.founder, story.closed_on, days
        );
    }
    Ok(())
}
