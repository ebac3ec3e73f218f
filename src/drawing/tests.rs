use {
  super::*,
  crate::{
    geometry::{Circle, Polygon, P2},
    scene::{blob, Label, Layer, Style},
  },
  approx::assert_abs_diff_eq,
  image::Pixel,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::time::{Duration, Instant},
};

const BG: Color = Color::new(0.98, 0.98, 0.97);

fn square(min: f64, max: f64) -> Polygon<f64> {
  Polygon::new(vec![
    P2::new(min, min),
    P2::new(max, min),
    P2::new(max, max),
    P2::new(min, max),
  ])
}

#[test] fn rgba_quantizes_channels() {
  assert_eq!(rgba(Color::new(1.0, 0.0, 0.5), 0.5), Rgba([255, 0, 128, 128]));
  assert_eq!(rgba(Color::new(-1.0, 2.0, 0.98), 1.0), Rgba([0, 255, 250, 255]));
}

#[test] fn polygon_sdf_signs() {
  let shape = square(0.25, 0.75);
  assert_abs_diff_eq!(shape.sdf(P2::new(0.5, 0.5)), -0.25, epsilon = 1e-12);
  assert_abs_diff_eq!(shape.sdf(P2::new(0.5, 0.2)), 0.05, epsilon = 1e-12);
  assert_abs_diff_eq!(shape.sdf(P2::new(0.25, 0.5)), 0.0, epsilon = 1e-12);
  assert_abs_diff_eq!(shape.sdf(P2::new(1.0, 0.5)), 0.25, epsilon = 1e-12);
}

// the scanline fill and the per-pixel distance fill are two renditions of
// the same coverage model; away from the antialiased edge band they must
// agree to the byte
#[test] fn scanline_and_sdf_fill_agree() {
  let shape = square(0.25, 0.75);
  let color = rgba(Color::new(0.2, 0.4, 0.8), 0.45);
  let bg = rgba(BG, 1.0);

  let mut scanline = RgbaImage::from_pixel(128, 128, bg);
  fill_polygon(&mut scanline, &shape, color);
  // borrowed shapes draw too, the polygon is not consumed
  let mut sdf_fill = RgbaImage::from_pixel(128, 128, bg);
  (&shape).texture(color).draw(&mut sdf_fill);

  for (x, y, px) in scanline.enumerate_pixels() {
    let (wx, wy) = ((x as f64 + 0.5) / 128.0, (y as f64 + 0.5) / 128.0);
    let interior = wx > 0.27 && wx < 0.73 && wy > 0.27 && wy < 0.73;
    let exterior = wx < 0.23 || wx > 0.77 || wy < 0.23 || wy > 0.77;
    if interior || exterior {
      assert_eq!(px, sdf_fill.get_pixel(x, y), "pixel {} {}", x, y);
    }
  }
  assert_ne!(scanline.get_pixel(64, 64), &bg);
}

#[test] fn interior_blends_exactly_once() {
  let bg = rgba(BG, 1.0);
  let color = rgba(Color::new(0.3, 0.6, 0.9), 0.4);
  let mut image = RgbaImage::from_pixel(64, 64, bg);
  fill_polygon(&mut image, &square(0.2, 0.8), color);

  let mut expected = bg;
  expected.blend(&color);
  assert_eq!(image.get_pixel(32, 32), &expected);
}

#[test] fn layers_blend_in_order() {
  let blank = Label { text: String::new(), anchor: P2::new(0.05, 0.05), em: 0.025 };
  let poster = Poster {
    background: Color::new(1.0, 1.0, 1.0),
    palette: vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 0.0, 1.0)],
    layers: vec![
      Layer {
        center: P2::new(0.5, 0.5),
        radius: 0.4,
        blob: square(0.1, 0.9),
        color_index: 0,
        alpha: 1.0,
      },
      Layer {
        center: P2::new(0.5, 0.5),
        radius: 0.2,
        blob: square(0.3, 0.7),
        color_index: 1,
        alpha: 1.0,
      },
    ],
    label: blank,
    aspect: (1, 1),
  };
  let image = poster.render(100);
  // the later layer fully covers the earlier one where they overlap
  assert_eq!(image.get_pixel(50, 50), &Rgba([0, 0, 255, 255]));
  assert_eq!(image.get_pixel(15, 15), &Rgba([255, 0, 0, 255]));
}

#[test] fn fill_is_clipped_to_canvas() -> Result<()> {
  let mut rng = Pcg64::seed_from_u64(11);
  let blob = blob::generate(P2::new(1.05, 0.5), 0.2, 200, 0.3, &mut rng)?;
  let bg = rgba(BG, 1.0);
  let mut image = RgbaImage::from_pixel(70, 100, bg);
  fill_polygon(&mut image, &blob, rgba(Color::new(0.1, 0.2, 0.3), 0.5));
  for (x, _, px) in image.enumerate_pixels() {
    if x < 50 {
      assert_eq!(px, &bg);
    }
  }

  // fully off-canvas shapes are rejected by the bounding box test
  let off = Circle { xy: P2::new(2.0, 2.0), r: 0.5 };
  off.texture(rgba(Color::new(0.0, 0.0, 0.0), 1.0)).draw(&mut image);
  Ok(())
}

#[test] fn empty_scene_is_plain_background() {
  let poster = Poster {
    background: BG,
    palette: vec![Color::new(0.5, 0.5, 0.5)],
    layers: vec![],
    label: Label { text: String::new(), anchor: P2::new(0.05, 0.05), em: 0.025 },
    aspect: (7, 10),
  };
  let image = poster.render(70);
  assert_eq!(image.dimensions(), (70, 100));
  let bg = rgba(BG, 1.0);
  assert!(image.pixels().all(|px| px == &bg));
}

#[test] fn caption_leaves_ink() {
  let bg = rgba(BG, 1.0);
  let mut image = RgbaImage::from_pixel(300, 200, bg);
  super::label::draw(&mut image, &Label {
    text: "Poster • pastel".into(),
    anchor: P2::new(0.05, 0.5),
    em: 0.12,
  });
  let inked = image.pixels().filter(|px| *px != &bg).count();
  assert!(inked > 200, "only {} pixels inked", inked);

  // unsupported characters advance the pen without leaving ink
  let mut unknown = RgbaImage::from_pixel(300, 200, bg);
  super::label::draw(&mut unknown, &Label {
    text: "@#$%".into(),
    anchor: P2::new(0.05, 0.5),
    em: 0.12,
  });
  assert!(unknown.pixels().all(|px| px == &bg));
}

#[test] fn reference_pipeline_end_to_end() -> Result<()> {
  let image = render_poster(&Parameters::default(), 700)?;
  assert_eq!(image.dimensions(), (700, 1000));

  let bg = rgba(BG, 1.0);
  assert!(image.pixels().any(|px| px != &bg));

  // caption ink sits near the anchor; pastel layers never get this dark
  let ink = itertools::iproduct!(25..55u32, 28..150u32).any(|(y, x)| {
    let px = image.get_pixel(x, y);
    px.0[0] < 100 && px.0[1] < 100 && px.0[2] < 100
  });
  assert!(ink);
  Ok(())
}

#[test] fn raster_is_deterministic() -> Result<()> {
  let poster = scene::compose(&Parameters::default())?;
  assert_eq!(render(&poster, 140).as_raw(), render(&poster, 140).as_raw());
  Ok(())
}

#[test] fn aspect_controls_height() -> Result<()> {
  let poster = scene::compose_with(&Parameters::default(), &Style { aspect: (1, 1), ..Style::default() })?;
  assert_eq!(poster.render(140).dimensions(), (140, 140));
  let poster = scene::compose(&Parameters::default())?;
  assert_eq!(poster.render(140).dimensions(), (140, 200));
  Ok(())
}

#[test] fn dense_posters_render_quickly() -> Result<()> {
  let params = Parameters { layer_count: 50, wobble: 0.8, seed: 0, ..Parameters::default() };
  let t0 = Instant::now();
  let image = render_poster(&params, 210)?;
  assert_eq!(image.dimensions(), (210, 300));
  assert!(t0.elapsed() < Duration::from_secs(2), "took {:?}", t0.elapsed());
  Ok(())
}
