// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV result set (1 dimension, 2 measures), drives the widget through the
// host adapter, and writes the rendered widget as SVG and HTML.

use anyhow::{Context, Result};
use flexi_logger::Logger;
use log::{info, warn};
use serde_json::{json, Map, Value};
use sparkline_core::{ContainerSize, SparklineWidget};
use sparkline_host::{ErrorPanel, HostAdapter, RenderDetails};
use std::path::{Path, PathBuf};

struct Args {
    input: Option<PathBuf>,
    options: Option<PathBuf>,
    width: f64,
    height: f64,
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let args = parse_args(std::env::args().skip(1))?;

    let (headers, rows) = match &args.input {
        Some(path) => load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            info!("no input given; using built-in sample");
            sample()
        }
    };
    info!("Loaded {} rows with columns {:?}", rows.len(), headers);

    let options = match &args.options {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing options {}", p.display()))?
        }
        None => json!({}),
    };

    let query_response = query_response(&headers);
    let data = host_rows(&headers, &rows);

    let mut adapter = HostAdapter::new(SparklineWidget::new());
    adapter.create(ContainerSize::new(args.width, args.height), &options);
    let mut panel = ErrorPanel::default();
    let outcome = adapter.update(&mut panel, &data, &options, &query_response, RenderDetails::default(), || {
        info!("render complete")
    });

    for (title, message) in &panel.errors {
        warn!("{title}: {message}");
    }
    if let Ok(summary) = &outcome {
        println!("Average: {} ({})", summary.value_text, summary.average);
        println!("Sparkline points: {}", summary.geometry.points.len());
    }

    let stem = args
        .input
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    for ext in ["svg", "html"] {
        let out = args.out_dir.join(format!("sparkline_{stem}.{ext}"));
        adapter.surface().render_to_file(&out)?;
        println!("Wrote {}", out.display());
    }

    outcome.map(|_| ()).map_err(anyhow::Error::from)
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: None,
        options: None,
        width: sparkline_core::types::WIDTH,
        height: sparkline_core::types::HEIGHT,
        out_dir: PathBuf::from("target/out"),
    };
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
        match a.as_str() {
            "--options" => args.options = Some(PathBuf::from(value("--options")?)),
            "--out" => args.out_dir = PathBuf::from(value("--out")?),
            "--width" => args.width = value("--width")?.parse::<f64>().context("--width must be a number")?,
            "--height" => args.height = value("--height")?.parse::<f64>().context("--height must be a number")?,
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}"),
            other => args.input = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

/// Read a CSV with a header row; cells are kept as text and typed by the host adapter.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

/// First column is the dimension, every following column a measure.
fn query_response(headers: &[String]) -> Value {
    let field = |name: &String| json!({ "name": name });
    let (dims, measures) = headers.split_first().map_or((&[][..], &[][..]), |(d, m)| (std::slice::from_ref(d), m));
    json!({
        "fields": {
            "dimensions": dims.iter().map(field).collect::<Vec<_>>(),
            "measures": measures.iter().map(field).collect::<Vec<_>>(),
        }
    })
}

fn host_rows(headers: &[String], rows: &[Vec<String>]) -> Value {
    let rows = rows
        .iter()
        .map(|r| {
            let obj: Map<String, Value> = headers
                .iter()
                .zip(r)
                .map(|(h, cell)| {
                    let v = if cell.is_empty() { Value::Null } else { Value::String(cell.clone()) };
                    (h.clone(), json!({ "value": v }))
                })
                .collect();
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

fn sample() -> (Vec<String>, Vec<Vec<String>>) {
    let headers = ["week", "signups", "conversion_rate"].map(String::from).to_vec();
    let rows = [
        ("2024-W01", "120", "0.031"),
        ("2024-W02", "135", "0.029"),
        ("2024-W03", "128", "0.034"),
        ("2024-W04", "160", "0.036"),
        ("2024-W05", "", "0.033"),
        ("2024-W06", "171", "0.038"),
        ("2024-W07", "190", "0.041"),
    ]
    .iter()
    .map(|(w, s, c)| vec![w.to_string(), s.to_string(), c.to_string()])
    .collect();
    (headers, rows)
}
