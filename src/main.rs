mod ui;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::info;

use pitcool::simulation::{RACE_DURATION_MIN, metrics};
use pitcool::{PitcoolError, circuits, simulation, summary};
use ui::dashboard::{DashboardApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the cooling dashboard
    Dashboard,
    /// Run one race simulation and print the figures
    Simulate {
        #[arg(short, long)]
        circuit: String,
    },
    /// Write the activation summary for a circuit
    Export {
        #[arg(short, long)]
        circuit: String,

        #[arg(short, long)]
        output: PathBuf,
    },
}

fn dashboard() -> Result<(), PitcoolError> {
    let app_config = AppConfig::from_local_file().unwrap_or_default();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(960., 620.));

    eframe::run_native(
        "Pitcool",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(app_config, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn simulate_report(circuit: &str) -> Result<(), PitcoolError> {
    let run = simulation::simulate(circuit);
    let rpm = circuits::nominal_rpm(circuit);

    println!(
        "Circuit: {} (base {:.0}°C, {} RPM)",
        run.circuit_name, run.base_temp_c, rpm
    );
    println!(
        "Samples: {} over {:.0} minutes",
        run.sample_count(),
        RACE_DURATION_MIN
    );
    println!(
        "Mean turbine temperature: {:.1}°C without cooling, {:.1}°C with cooling",
        run.mean_without_cooling(),
        run.mean_with_cooling()
    );
    println!(
        "Performance with cooling: {:.1}%",
        metrics::performance_pct(run.mean_with_cooling())
    );
    println!(
        "CO₂ saved over the race: {:.2} kg",
        metrics::co2_reduction_kg(rpm, RACE_DURATION_MIN)
    );
    Ok(())
}

fn export(circuit: &str, output: &Path) -> Result<(), PitcoolError> {
    summary::write_summary(output, circuit, circuits::nominal_rpm(circuit))?;
    info!(
        "Wrote activation summary for {} to {}",
        circuit,
        output.display()
    );
    Ok(())
}

fn main() {
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    match &cli.command {
        Commands::Dashboard => dashboard().expect("Error while running dashboard"),
        Commands::Simulate { circuit } => {
            simulate_report(circuit).expect("Error while simulating race")
        }
        Commands::Export { circuit, output } => {
            export(circuit, output).expect("Error while writing activation summary")
        }
    };
}
