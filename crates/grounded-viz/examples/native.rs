//! Native desktop runner for grounded-viz development.
//!
//! Run with: cargo run --example native --features native
//! Unclamped drops: cargo run --example native --features native -- --no-clamp

use eframe::{run_native, NativeOptions};
use grounded_core::{GrowthYear, SessionSettings};
use grounded_viz::{AppOptions, GroundedApp};

fn main() -> eframe::Result<()> {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("grounded_core=debug,grounded_viz=debug")
            }))
            .init();
    }

    let mut session = SessionSettings::default();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-clamp" => {
                session.clamp_drops = false;
                i += 1;
            }
            "--year" | "-y" => {
                let year = args.get(i + 1).and_then(|v| v.parse::<i64>().ok());
                match year.map(GrowthYear::new) {
                    Some(Ok(year)) => session.growth_year = year,
                    _ => {
                        eprintln!("Error: --year requires a number between 1 and 20");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!("Grounded Viz - Native Development Runner");
                println!();
                println!("Usage: native [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --year, -y <YEAR>  Initial growth projection year (1-20)");
                println!("  --no-clamp         Keep drop positions outside the canvas unclamped");
                println!("  --help, -h         Show this help message");
                println!();
                println!("Keyboard Shortcuts:");
                println!("  Tab         Toggle catalog panel");
                println!("  Esc         Cancel the current drag");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Grounded - Development"),
        ..Default::default()
    };

    run_native(
        "Grounded",
        options,
        Box::new(move |cc| {
            let app = GroundedApp::with_options(
                cc,
                AppOptions {
                    session,
                    ..AppOptions::default()
                },
            );
            Ok(Box::new(app))
        }),
    )
}
