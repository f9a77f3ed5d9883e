use anchor_canvas::{Canvas, CanvasOptions, Color, PromptError};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated workers reporting progress on a shared canvas.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of concurrent workers
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    /// Progress steps per worker
    #[arg(short, long, default_value_t = 20)]
    steps: u32,

    /// Append plain lines instead of redrawing in place
    #[arg(long)]
    plain: bool,

    /// Ask for a name once all workers are done
    #[arg(long)]
    prompt: bool,

    /// Write debug logs here; the terminal belongs to the canvas
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    }

    let mut options = CanvasOptions::detect().with_anchor_color(Color::Red);
    if args.plain {
        options = options.with_plain(true);
    }
    let canvas = Canvas::with_options(options);
    info!("starting {} workers, {} steps each", args.workers, args.steps);

    let workers: Vec<_> = (0..args.workers)
        .map(|worker| tokio::spawn(run_worker(canvas.clone(), worker, args.steps)))
        .collect();
    for worker in workers {
        worker.await?;
    }

    if args.prompt {
        let prompt_canvas = canvas.clone();
        let answer =
            tokio::task::spawn_blocking(move || prompt_canvas.prompt("name for this run:"))
                .await?;
        match answer {
            Ok(name) if name.is_empty() => canvas.print("run left unnamed"),
            Ok(name) => canvas.anchor_print(format_args!("run named {name}")),
            Err(PromptError::Closed) => canvas.print("no input, run left unnamed"),
            Err(err) => return Err(err.into()),
        }
    }

    info!("all workers finished");
    Ok(())
}

async fn run_worker(canvas: Canvas, worker: usize, steps: u32) {
    let name = format!("worker-{worker}");
    let lot = canvas.lot(&name);
    let pause = Duration::from_millis(40 + 15 * worker as u64);
    let steps = steps.max(1);

    for step in 0..=steps {
        lot.print(format_args!("{}%", u64::from(step) * 100 / u64::from(steps)));
        if step == steps / 2 && worker % 3 == 2 {
            canvas.anchor_print(format_args!("{name} retried step {step}"));
        }
        tokio::time::sleep(pause).await;
    }

    lot.close();
    canvas.print(format_args!("{name} finished {steps} steps"));
}
