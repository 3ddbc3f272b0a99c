use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use std::env;

use gridmix_back_end::action_router::{ActionRouterInput, ActionRouterOutput};
use gridmix_back_end::aggregators::STACK_ORDER;
use gridmix_back_end::aggregators::classification::source_label;
use gridmix_back_end::cli_helper::{call_action_router, initialize_app_config};
use gridmix_back_end::cli_utils::formatting::{format_date, format_output, print_header, print_section};
use gridmix_back_end::cli_utils::{format_intensity, format_json, format_percent, format_record, format_table, print_error, print_info};
use gridmix_back_end::grid_data::processor_enums::{GetHistoryInputArgs, GridDataProcessorInput, GridDataProcessorOutput};
use gridmix_back_end::grid_data::types::{DashboardData, DataSourceKind, TimeRange};

#[derive(Parser, Debug)]
#[command(
    name = "gridmix-cli",
    about = "Grid carbon intensity and generation mix report",
    long_about = "Fetches (or simulates) a zone's generation history and prints the dashboard summary"
)]
struct CliArgs {
    /// Grid zone code (defaults to DEFAULT_ZONE, then IN)
    #[arg(long, env = "DEFAULT_ZONE")]
    zone: Option<String>,

    /// History window
    #[arg(long, value_enum, default_value = "1Y")]
    range: RangeArg,

    /// Where records come from (defaults to DATA_SOURCE, then mock)
    #[arg(long, value_enum)]
    source: Option<SourceArg>,

    /// Seed for reproducible mock output
    #[arg(long, env = "MOCK_SEED")]
    seed: Option<u64>,

    /// Print the full dashboard payload as JSON
    #[arg(long)]
    json: bool,

    /// Number of most recent rows to show in the table
    #[arg(long, default_value_t = 10)]
    rows: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RangeArg {
    #[value(name = "1Y", alias = "1y")]
    OneYear,
    #[value(name = "5Y", alias = "5y")]
    FiveYears,
}

impl From<RangeArg> for TimeRange {
    fn from(value: RangeArg) -> Self {
        match value {
            RangeArg::OneYear => TimeRange::OneYear,
            RangeArg::FiveYears => TimeRange::FiveYears,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    Mock,
    Live,
}

impl From<SourceArg> for DataSourceKind {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Mock => DataSourceKind::Mock,
            SourceArg::Live => DataSourceKind::Live,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut app_config = initialize_app_config()?;
    if let Some(source) = args.source {
        app_config.data_source = source.into();
    }
    if args.seed.is_some() {
        app_config.mock_seed = args.seed;
    }

    let zone = args
        .zone
        .clone()
        .unwrap_or_else(|| app_config.default_zone.clone())
        .trim()
        .to_string();
    if zone.is_empty() {
        return Err(anyhow!("Zone cannot be empty"));
    }

    let history_args = GetHistoryInputArgs {
        zone,
        range: args.range.into(),
        source: app_config.data_source,
    };
    let action = ActionRouterInput::GridData(GridDataProcessorInput::GetDashboard(history_args.clone()));

    let output = match call_action_router(action, app_config).await {
        Ok(output) => output,
        Err(e) => {
            print_error(&format!("Failed to load {} history for {}", history_args.range, history_args.zone));
            return Err(e);
        }
    };

    let data = match output {
        ActionRouterOutput::GridData(GridDataProcessorOutput::GetDashboard(data)) => data,
        _ => return Err(anyhow!("Unexpected response type")),
    };

    let Some(data) = data else {
        print_info(&format!(
            "No data for {} over {} ({})",
            history_args.zone, history_args.range, history_args.source
        ));
        return Ok(());
    };

    if args.json {
        println!("{}", format_json(&data));
        return Ok(());
    }

    print_report(&history_args, &data, args.rows);
    Ok(())
}

fn print_report(history_args: &GetHistoryInputArgs, data: &DashboardData, rows: usize) {
    print_header(&format!(
        "GridMix: {} over {} ({})",
        history_args.zone, history_args.range, history_args.source
    ));

    format_record(vec![
        ("Points", data.chart_data.len().to_string()),
        ("Average intensity", format_intensity(data.avg_intensity as f64)),
        ("Latest reading", format_date(&data.latest.datetime)),
        ("Latest renewable", format_percent(data.latest.renewable_pct)),
        ("Latest low-carbon", format_percent(data.latest.carbon_free_pct)),
    ]);

    print_section(&format!("Last {} points", rows.min(data.chart_data.len())));

    let mut headers = vec!["Date".to_string(), "Intensity".to_string(), "Renew %".to_string(), "Low-C %".to_string()];
    headers.extend(STACK_ORDER.iter().map(|source| source_label(source)));

    let skip = data.chart_data.len().saturating_sub(rows);
    let table_rows = data.chart_data[skip..]
        .iter()
        .map(|record| {
            let mut row = vec![
                format_date(&record.datetime),
                format!("{:.0}", record.carbon_intensity),
                format!("{:.1}", record.renewable_pct),
                format!("{:.1}", record.carbon_free_pct),
            ];
            row.extend(STACK_ORDER.iter().map(|source| format_output(record.source_value(source))));
            row
        })
        .collect();

    format_table(headers.iter().map(String::as_str).collect(), table_rows);
}
