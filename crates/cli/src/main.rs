use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dsg_types::DischargeSummary;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dsg")]
#[command(about = "Discharge summary generator CLI")]
struct Cli {
    /// Base URL of the dsg server
    #[arg(long, env = "DSG_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all discharge summaries, newest first
    List,
    /// Show one discharge summary as JSON
    Show {
        /// Record id
        id: u64,
    },
    /// Create a discharge summary from a JSON input file
    Create {
        /// Path to a JSON file with the create-request body
        file: PathBuf,
    },
    /// Download the PDF export
    Pdf {
        /// Record id
        id: u64,
        /// Output path (defaults to discharge_<ipNumber>.pdf)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Download the Word-compatible export
    Docx {
        /// Record id
        id: u64,
        /// Output path (defaults to discharge_<ipNumber>.docx)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::blocking::Client::new();
    let base = cli.api_url.trim_end_matches('/').to_owned();

    match cli.command {
        Commands::List => {
            let summaries: Vec<DischargeSummary> = client
                .get(format!("{}/api/discharges", base))
                .send()
                .context("listing discharge summaries")?
                .error_for_status()?
                .json()?;
            if summaries.is_empty() {
                println!("No discharge summaries found.");
            } else {
                for summary in summaries {
                    println!(
                        "ID: {}, Patient: {}, IP: {}, Condition: {}, Created: {}",
                        summary.id,
                        summary.patient_name,
                        summary.ip_number,
                        summary.discharge_condition,
                        summary.created_at
                    );
                }
            }
        }
        Commands::Show { id } => {
            let response = client
                .get(format!("{}/api/discharges/{}", base, id))
                .send()
                .context("fetching discharge summary")?;
            if !response.status().is_success() {
                bail!("server returned {}", response.status());
            }
            let summary: serde_json::Value = response.json()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Create { file } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let response = client
                .post(format!("{}/api/discharges", base))
                .header("content-type", "application/json")
                .body(body)
                .send()
                .context("creating discharge summary")?;
            let status = response.status();
            let value: serde_json::Value = response.json()?;
            if !status.is_success() {
                bail!(
                    "create failed ({}): {}",
                    status,
                    value["message"].as_str().unwrap_or("unknown error")
                );
            }
            println!(
                "Created discharge summary with id {}",
                value["id"].as_u64().unwrap_or_default()
            );
        }
        Commands::Pdf { id, output } => {
            download(&client, &base, id, "pdf", output)?;
        }
        Commands::Docx { id, output } => {
            download(&client, &base, id, "docx", output)?;
        }
    }

    Ok(())
}

fn download(
    client: &reqwest::blocking::Client,
    base: &str,
    id: u64,
    format: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let response = client
        .get(format!("{}/api/discharges/{}/{}", base, id, format))
        .send()
        .with_context(|| format!("downloading {} export", format))?;
    if !response.status().is_success() {
        bail!("server returned {}", response.status());
    }

    // Prefer the server-supplied attachment filename.
    let path = output.unwrap_or_else(|| {
        response
            .headers()
            .get("content-disposition")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split("filename=").nth(1))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("discharge_{}.{}", id, format)))
    });

    let bytes = response.bytes()?;
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
