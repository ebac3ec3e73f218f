// one poster per palette mode, written next to each other
use {
  anyhow::Result,
  blob_poster::scene::{self, PaletteMode, Parameters},
};

fn main() -> Result<()> {
  env_logger::init();

  for (i, mode) in PaletteMode::ALL.into_iter().enumerate() {
    let params = Parameters {
      seed: 7015 + i as u64,
      palette_mode: mode,
      ..Parameters::default()
    };
    let path = format!("poster_{}.png", mode);
    scene::compose(&params)?.render(700).save(&path)?;
    println!("{}", path);
  }
  Ok(())
}
