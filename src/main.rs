use {
  anyhow::Result,
  clap::Parser,
  icongen::icons,
  std::{fs, path::PathBuf}
};

/// Render the built-in 24x24 icon set as PNG files.
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(version)]
struct Args {
  /// Directory the icons are written into, created if missing
  #[arg(default_value = "assets")]
  out_dir: PathBuf
}

fn main() -> Result<()> {
  let args = Args::parse();
  fs::create_dir_all(&args.out_dir)?;

  let icons = icons::all();
  for icon in &icons {
    icon.write_to(&args.out_dir)?;
    println!("✓ {}", icon.filename());
  }
  println!("\n{} icons written to {}", icons.len(), args.out_dir.display());
  Ok(())
}
