use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::ContractVersion;
use dashboard::ColorScheme;

pub mod commands;

use commands::{inspect, render};

use crate::config::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(name = "wattboard")]
#[command(about = "Render and inspect energy consumption charts offline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a saved consumption summary to standalone chart pages
    ///
    /// Writes one `<element-id>.html` page per chart into the output
    /// directory, e.g. `floor-wise-chart.html`. The directory must exist.
    Render {
        /// Path to the JSON body returned by the visualize endpoint
        #[arg(short, long)]
        input: PathBuf,

        /// Directory receiving the chart pages
        #[arg(short, long, env = "WATTBOARD_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,

        /// Backend contract the summary follows
        ///
        /// v1: the whole body is the floor-wise dataset
        /// v2: the body nests the four datasets by name
        #[arg(short, long, env = "WATTBOARD_CONTRACT", default_value = "v2")]
        contract: ContractVersion,

        /// How series colors are picked (random or palette)
        #[arg(long, env = "WATTBOARD_COLORS", default_value = "random")]
        colors: ColorScheme,
    },
    /// Print the chart specifications a summary produces without writing files
    Inspect {
        /// Path to the JSON body returned by the visualize endpoint
        #[arg(short, long)]
        input: PathBuf,

        /// Backend contract the summary follows
        #[arg(short, long, env = "WATTBOARD_CONTRACT", default_value = "v2")]
        contract: ContractVersion,

        /// Print the chart specifications as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render { input, out_dir, contract, colors } => {
                let report = render(&input, &out_dir, contract, colors)?;
                print!("{}", report);
            }
            Commands::Inspect { input, contract, json } => {
                print!("{}", inspect(&input, contract, json)?);
            }
        }
        Ok(())
    }
}
