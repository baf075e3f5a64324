//! RuStat CLI — inspect and export indicator data from the terminal.
//!
//! Commands:
//! - `list` — catalog overview (code, name, latest value, point count)
//! - `table` — one page of the historical table, optionally year-filtered
//! - `chart` — the merged chart sequence for a window, with optional overlay
//! - `forecast` — forecast months with 95% bounds and interpretation
//! - `stats` — series extremes plus the per-year aggregate table
//! - `export` — CSV export of the series (and forecast) with dataset hash

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rustat_core::data::{load_catalog, write_forecast_csv, write_series_csv, LoadedIndicator};
use rustat_core::stats::{latest_snapshot, month_matrix, yearly_stats};
use rustat_core::view::{available_years, chart_series, table_view, Window, YearFilter};

#[derive(Parser)]
#[command(name = "rustat", about = "RuStat CLI — macroeconomic indicator viewer")]
struct Cli {
    /// Directory of indicator JSON files.
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the indicator catalog.
    List,
    /// Print one page of the historical data table.
    Table {
        /// Indicator code (e.g. cpi).
        code: String,

        /// Calendar year filter. Omit for all years.
        #[arg(long)]
        year: Option<i32>,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Emit the rows as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the chart-ready merged sequence.
    Chart {
        /// Indicator code.
        code: String,

        /// Trailing window: 1y, 5y, 10y, all.
        #[arg(long, default_value = "5y")]
        window: String,

        /// Include the forecast overlay.
        #[arg(long, default_value_t = false)]
        forecast: bool,

        /// Emit the sequence as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the forecast table.
    Forecast {
        /// Indicator code.
        code: String,
    },
    /// Print summary and yearly statistics.
    Stats {
        /// Indicator code.
        code: String,

        /// Also print the year-by-month seasonality matrix.
        #[arg(long, default_value_t = false)]
        months: bool,
    },
    /// Export series (and forecast) CSV files.
    Export {
        /// Indicator code.
        code: String,

        /// Output directory for the CSV files.
        #[arg(long, default_value = "export")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = load_catalog(&cli.data_dir)
        .with_context(|| format!("failed to load catalog from {}", cli.data_dir.display()))?;

    match cli.command {
        Commands::List => run_list(&catalog),
        Commands::Table {
            code,
            year,
            page,
            json,
        } => run_table(find(&catalog, &code)?, year, page, json),
        Commands::Chart {
            code,
            window,
            forecast,
            json,
        } => run_chart(find(&catalog, &code)?, &window, forecast, json),
        Commands::Forecast { code } => run_forecast(find(&catalog, &code)?),
        Commands::Stats { code, months } => run_stats(find(&catalog, &code)?, months),
        Commands::Export { code, output_dir } => run_export(find(&catalog, &code)?, &output_dir),
    }
}

fn find<'a>(catalog: &'a [LoadedIndicator], code: &str) -> Result<&'a LoadedIndicator> {
    match catalog.iter().find(|l| l.indicator.code == code) {
        Some(loaded) => Ok(loaded),
        None => {
            let known: Vec<&str> = catalog.iter().map(|l| l.indicator.code.as_str()).collect();
            bail!("unknown indicator '{code}'. Known: {}", known.join(", "))
        }
    }
}

fn run_list(catalog: &[LoadedIndicator]) -> Result<()> {
    if catalog.is_empty() {
        println!("Catalog is empty (no *.json indicator files found).");
        return Ok(());
    }

    println!("{:<10} {:<40} {:>10} {:>8}", "Code", "Name", "Latest", "Points");
    println!("{}", "-".repeat(72));
    for loaded in catalog {
        let ind = &loaded.indicator;
        let latest = latest_snapshot(&ind.data)
            .map(|s| format!("{:.2}", s.value))
            .unwrap_or_else(|| "—".to_string());
        println!(
            "{:<10} {:<40} {:>10} {:>8}",
            ind.code,
            ind.name,
            latest,
            ind.data.len()
        );
    }
    Ok(())
}

fn run_table(loaded: &LoadedIndicator, year: Option<i32>, page: usize, json: bool) -> Result<()> {
    let ind = &loaded.indicator;
    let filter = match year {
        Some(y) => YearFilter::Year(y),
        None => YearFilter::All,
    };
    let view = table_view(&ind.data, filter, page);

    if json {
        println!("{}", serde_json::to_string_pretty(&view.rows)?);
        return Ok(());
    }

    println!("{} — страница {page} из {}", ind.name, view.total_pages);
    println!();
    println!("{:<10} {:>10} {:>10}", "Дата", "Значение", "Изм.");
    println!("{}", "-".repeat(32));
    for row in &view.rows {
        let change = row
            .change
            .map(|c| format!("{c:+.2}"))
            .unwrap_or_else(|| "—".to_string());
        println!(
            "{:<10} {:>10.2} {:>10}",
            row.date.format("%Y-%m"),
            row.value,
            change
        );
    }
    println!();
    println!(
        "Показано: {} из {} | Годы: {}",
        view.rows.len(),
        view.total_filtered,
        available_years(&ind.data)
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

fn run_chart(loaded: &LoadedIndicator, window: &str, overlay: bool, json: bool) -> Result<()> {
    let ind = &loaded.indicator;
    let window: Window = window.parse().map_err(anyhow::Error::msg)?;
    let points = chart_series(&ind.data, ind.forecast(), window, overlay);

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!(
        "{} | окно {} | точек: {}",
        ind.name,
        window.as_str(),
        points.len()
    );
    println!();
    println!(
        "{:<10} {:>10} {:>10} {:>10} {:>10}",
        "Дата", "Факт", "Прогноз", "Ниж.", "Верх."
    );
    println!("{}", "-".repeat(54));
    for p in &points {
        println!(
            "{:<10} {:>10} {:>10} {:>10} {:>10}",
            p.date.format("%Y-%m"),
            opt(p.value),
            opt(p.forecast),
            opt(p.lower),
            opt(p.upper)
        );
    }
    Ok(())
}

fn run_forecast(loaded: &LoadedIndicator) -> Result<()> {
    let ind = &loaded.indicator;
    let Some(forecast) = ind.forecast() else {
        println!("Для индикатора '{}' прогноз недоступен.", ind.code);
        return Ok(());
    };

    println!("Прогноз SARIMA: {}", ind.name);
    println!();
    println!(
        "{:<10} {:>10} {:>12} {:>12}  {}",
        "Месяц", "Прогноз", "Ниж. (95%)", "Верх. (95%)", "Оценка"
    );
    println!("{}", "-".repeat(62));
    for p in forecast.iter() {
        let reading = if p.value > 100.0 {
            "Рост цен"
        } else if p.value < 100.0 {
            "Снижение цен"
        } else {
            "Стабильно"
        };
        println!(
            "{:<10} {:>10.2} {:>12.2} {:>12.2}  {}",
            p.date.format("%Y-%m"),
            p.value,
            p.lower,
            p.upper,
            reading
        );
    }
    Ok(())
}

fn run_stats(loaded: &LoadedIndicator, months: bool) -> Result<()> {
    let ind = &loaded.indicator;

    println!("=== {} ===", ind.name);
    if !ind.source.is_empty() {
        println!("Источник:      {}", ind.source);
    }
    if !ind.frequency.is_empty() {
        println!("Периодичность: {}", ind.frequency);
    }
    println!("Точек:         {}", ind.data.len());
    println!();

    match ind.summary_stats() {
        Some(stats) => {
            println!(
                "Максимум: {:>8.2}  ({})",
                stats.highest.value,
                stats.highest.date.format("%Y-%m")
            );
            println!(
                "Минимум:  {:>8.2}  ({})",
                stats.lowest.value,
                stats.lowest.date.format("%Y-%m")
            );
            println!("Среднее:  {:>8.2}", stats.average);
        }
        None => println!("Ряд пуст."),
    }

    let yearly = yearly_stats(&ind.data);
    if !yearly.is_empty() {
        println!();
        println!(
            "{:<6} {:>9} {:>10} {:>9} {:>9} {:>7}",
            "Год", "Среднее", "Ст. откл.", "Мин", "Макс", "Мес."
        );
        println!("{}", "-".repeat(54));
        for y in &yearly {
            println!(
                "{:<6} {:>9.2} {:>10.2} {:>9.2} {:>9.2} {:>7}",
                y.year, y.mean, y.std_dev, y.min, y.max, y.count
            );
        }
    }

    if months {
        println!();
        print_month_matrix(&ind.data);
    }
    Ok(())
}

/// Year-by-month pivot: one row per year, `—` for missing months.
fn print_month_matrix(series: &rustat_core::domain::Series) {
    const MONTH_HEADERS: [&str; 12] = [
        "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
    ];

    print!("{:<6}", "Год");
    for h in MONTH_HEADERS {
        print!(" {h:>7}");
    }
    println!();
    println!("{}", "-".repeat(6 + 12 * 8));

    for (year, values) in month_matrix(series) {
        print!("{year:<6}");
        for v in values {
            match v {
                Some(v) => print!(" {v:>7.2}"),
                None => print!(" {:>7}", "—"),
            }
        }
        println!();
    }
}

fn run_export(loaded: &LoadedIndicator, output_dir: &Path) -> Result<()> {
    let ind = &loaded.indicator;
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let data_path = output_dir.join(format!("{}_data.csv", ind.code));
    let file = File::create(&data_path)
        .with_context(|| format!("failed to create {}", data_path.display()))?;
    write_series_csv(file, &ind.data)?;
    println!("Series:   {}", data_path.display());

    if let Some(forecast) = ind.forecast() {
        let forecast_path = output_dir.join(format!("{}_forecast.csv", ind.code));
        let file = File::create(&forecast_path)
            .with_context(|| format!("failed to create {}", forecast_path.display()))?;
        write_forecast_csv(file, forecast)?;
        println!("Forecast: {}", forecast_path.display());
    }

    println!("Dataset:  {}", loaded.dataset_hash);
    Ok(())
}

fn opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.2}"),
        None => "—".to_string(),
    }
}
