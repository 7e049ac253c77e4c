use clap::Parser;
use macroquad::Window;
use macroquad::prelude::Conf;
use skyflight_web_lib::cli::Args;
use std::error::Error;

fn window_conf(args: &Args) -> Conf {
    Conf {
        window_title: String::from("Skyflight"),
        window_width: args.width,
        window_height: args.height,
        fullscreen: args.fullscreen,
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let options = args.launch_options()?;

    Window::from_config(window_conf(&args), skyflight_web_lib::run(options));
    Ok(())
}
