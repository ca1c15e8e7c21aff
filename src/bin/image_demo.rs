use matrix_buffer::config::image_demo::load_config;
use matrix_buffer::image::io::{save_gray_png, save_rgb_png, write_json_file};
use matrix_buffer::{Image, MatrixCore};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut image = Image::new(config.shape.rows, config.shape.cols);
    config.pattern.paint(&mut image);

    save_rgb_png(&image, &config.output.png)?;
    println!("Image written to {}", config.output.png.display());

    if let Some(path) = &config.output.gray_png {
        save_gray_png(&image.to_gray(), path)?;
        println!("Grayscale image written to {}", path.display());
    }

    let core: &mut dyn MatrixCore = &mut image;
    let summary = core.summarize();
    println!("{}", summary.allocation);
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: image_demo <config.json>".to_string()
}
