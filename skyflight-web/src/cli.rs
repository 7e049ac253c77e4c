use clap::Parser;
use skyflight_core::{FlightConfig, SceneryConfig};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skyflight", about = "Keyboard-flown chase-camera flight demo")]
pub struct Args {
    /// JSON flight tuning and key bindings; omitted fields keep their defaults
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Seed for cloud and star placement
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    #[arg(long = "clouds", default_value_t = 20)]
    pub clouds: usize,

    #[arg(long = "stars", default_value_t = 5000)]
    pub stars: usize,

    #[arg(short = 'f', long = "fullscreen")]
    pub fullscreen: bool,

    #[arg(long = "width", default_value_t = 1280)]
    pub width: i32,

    #[arg(long = "height", default_value_t = 720)]
    pub height: i32,
}

#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub flight: FlightConfig,
    pub scenery: SceneryConfig,
}

impl Args {
    pub fn launch_options(&self) -> Result<LaunchOptions, Box<dyn Error>> {
        let flight = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|err| format!("could not read {}: {}", path.display(), err))?;
                let config = FlightConfig::from_json(&text)?;
                log::info!("loaded flight config from {}", path.display());
                config
            }
            None => FlightConfig::default(),
        };

        Ok(LaunchOptions {
            flight,
            scenery: SceneryConfig {
                seed: self.seed,
                cloud_count: self.clouds,
                star_count: self.stars,
            },
        })
    }
}
