use clap::Parser;
use pixelpitch::{camera::CameraProfile, compare::CameraSet, render, sensor::SensorFormat};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Camera used as the normalization reference.
    #[arg(short, long, default_value = "700D")]
    normalize_with: String,
}

fn main() {
    let args = Args::parse();

    let cameras: CameraSet = [
        ("6DII", SensorFormat::FullFrame, 26.2),
        ("R6", SensorFormat::FullFrame, 20.0),
        ("R5", SensorFormat::FullFrame, 44.7),
        ("700D", SensorFormat::Apsc, 18.0),
        ("80D", SensorFormat::Apsc, 24.2),
        ("90D", SensorFormat::Apsc, 32.5),
    ]
    .into_iter()
    .map(|(name, format, resolution)| {
        CameraProfile::new(name, format, resolution).expect("built-in camera entries are valid")
    })
    .collect();

    let rows = cameras.comparison_rows(&args.normalize_with);

    println!();
    println!("-------------------------------- Camera Comparison ---------------------------------- ");
    println!(
        "--------------------- used {} to normalize pixel densities ------------------------- ",
        args.normalize_with
    );
    println!();
    print!("{}", render::render_table(&rows));
}
