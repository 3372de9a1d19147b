use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use qr_layout::{Field, ImagePayload, LayoutOptions, PrintLayout, UnitMode, Viewport};
use qr_layout_runtime::{LayoutCommand, LayoutUpdate};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

mod dispatch;
mod logger;
mod qr;
mod script;

#[derive(Parser)]
#[command(name = "qrl", about = "QR code print layout CLI", version)]
struct Cli {
    /// Layout options JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a preview or print document from typed layout values
    Render {
        #[command(flatten)]
        payload: PayloadArgs,

        /// Viewport width in device pixels
        #[arg(long, default_value = "390")]
        viewport_width: f64,

        /// Viewport height in device pixels
        #[arg(long, default_value = "844")]
        viewport_height: f64,

        /// X position, as typed into the field
        #[arg(long, allow_hyphen_values = true)]
        x: Option<String>,

        /// Y position, as typed into the field
        #[arg(long, allow_hyphen_values = true)]
        y: Option<String>,

        /// Image width, as typed into the field
        #[arg(long, allow_hyphen_values = true)]
        width: Option<String>,

        /// Image height, as typed into the field
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Which document to produce
        #[arg(long, default_value = "print", value_enum)]
        mode: ModeArg,

        /// Output HTML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay a recorded gesture script and print the result
    Replay {
        /// Script JSON file (viewport and events)
        #[arg(short, long)]
        script: PathBuf,

        #[command(flatten)]
        payload: PayloadArgs,

        /// Where the print document is written
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the final preview document here
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Write the default layout options to a JSON file
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PayloadSourceArgs {
    /// Text to encode as a QR code
    #[arg(long)]
    text: Option<String>,

    /// File holding a base64-encoded PNG
    #[arg(long)]
    payload_file: Option<PathBuf>,
}

#[derive(Args)]
struct PayloadArgs {
    #[command(flatten)]
    source: PayloadSourceArgs,

    /// Pixel size of the generated QR image
    #[arg(long, default_value = "256")]
    qr_size: u32,
}

impl PayloadArgs {
    async fn load(&self) -> Result<ImagePayload> {
        match (&self.source.text, &self.source.payload_file) {
            (Some(text), _) => qr::encode_payload(text, self.qr_size),
            (None, Some(path)) => qr::read_payload(path).await,
            (None, None) => anyhow::bail!("Either --text or --payload-file is required"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Preview,
    Print,
}

impl From<ModeArg> for UnitMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Preview => Self::Pixels,
            ModeArg::Print => Self::Percent,
        }
    }
}

async fn load_options(path: Option<&Path>) -> Result<LayoutOptions> {
    match path {
        Some(path) => LayoutOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options {}", path.display())),
        None => Ok(LayoutOptions::default()),
    }
}

async fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Rendered → {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::from_verbosity(cli.verbose).init()?;

    let options = load_options(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Render {
            payload,
            viewport_width,
            viewport_height,
            x,
            y,
            width,
            height,
            mode,
            output,
        } => {
            let payload = payload.load().await?;
            let mut session =
                PrintLayout::new(options, Viewport::new(viewport_width, viewport_height))?;

            let typed = [
                (Field::X, x),
                (Field::Y, y),
                (Field::Width, width),
                (Field::Height, height),
            ];
            for (field, text) in typed {
                if let Some(text) = text {
                    session.set_field_text(field, text);
                }
            }

            let html = session.render(&payload, mode.into());
            write_output(output.as_deref(), &html).await?;
        }

        Commands::Replay {
            script: script_path,
            payload,
            output,
            preview,
        } => {
            let script = script::Script::load(&script_path).await?;
            let payload = payload.load().await?;
            let session = PrintLayout::new(options, script.viewport)?;

            let (command_tx, command_rx) = mpsc::unbounded_channel::<LayoutCommand>();
            let (update_tx, mut update_rx) = mpsc::unbounded_channel();

            let event_count = script.events.len();
            for event in script.events {
                command_tx.send(event.into())?;
            }
            command_tx.send(LayoutCommand::Print)?;
            drop(command_tx);

            let session = qr_layout_runtime::worker_task(
                session,
                payload.clone(),
                dispatch::FileDispatcher::new(output.clone()),
                command_rx,
                update_tx,
            )
            .await;

            while let Ok(update) = update_rx.try_recv() {
                if let LayoutUpdate::Error { message } = update {
                    anyhow::bail!(message);
                }
            }

            let layout = session.snapshot();
            let page = session.page();
            println!("Replayed {} events", event_count);
            println!("Final layout:");
            for field in Field::ALL {
                println!(
                    "  {:<6} {} (stored as {:?})",
                    field.label(),
                    session.layout().value(field),
                    session.layout().text(field)
                );
            }
            println!(
                "  Page: {}x{} ({:.2}% x {:.2}% of page)",
                page.width,
                page.height,
                page.percent_x(layout.width),
                page.percent_y(layout.height)
            );
            println!("Printed → {}", output.display());

            if let Some(path) = preview {
                write_output(Some(&path), &session.preview_document(&payload)).await?;
            }
        }

        Commands::InitConfig { output } => {
            options.save(&output).await?;
            println!("Options → {}", output.display());
        }
    }

    Ok(())
}
