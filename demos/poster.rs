// the reference poster: 11 pastel layers, seed 7015
use {
  anyhow::Result,
  blob_poster::scene::{self, Parameters},
};

fn main() -> Result<()> {
  env_logger::init();
  let path = "poster.png";

  let poster = scene::compose(&Parameters::default())?;
  poster.render(700).save(path)?;
  open::that(path)?;
  Ok(())
}
