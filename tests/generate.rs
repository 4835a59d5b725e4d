use {
  anyhow::Result,
  icongen::icons,
  image::GenericImageView,
  std::fs
};

#[test] fn writes_exactly_five_icons() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let paths = icons::write_all(dir.path())?;
  assert_eq!(paths.len(), 5);

  let mut names = fs::read_dir(dir.path())?
    .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
    .collect::<Result<Vec<_>>>()?;
  names.sort();
  assert_eq!(names, ["clear.png", "moon.png", "settings.png", "submit.png", "sun.png"]);

  for path in &paths {
    assert!(fs::metadata(path)?.len() > 0, "{} is empty", path.display());
  }
  Ok(())
}

#[test] fn icons_decode_as_24x24_rgba() -> Result<()> {
  let dir = tempfile::tempdir()?;
  for path in icons::write_all(dir.path())? {
    let image = image::open(&path)?;
    assert_eq!(image.dimensions(), (24, 24));
    assert!(image.color().has_alpha());
  }
  Ok(())
}

#[test] fn reruns_are_byte_identical() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let first = icons::write_all(dir.path())?
    .iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?;
  let second = icons::write_all(dir.path())?
    .iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?;
  assert_eq!(first, second);
  Ok(())
}

#[test] fn creates_missing_output_directory() -> Result<()> {
  let root = tempfile::tempdir()?;
  let nested = root.path().join("assets").join("icons");
  assert!(!nested.exists());

  icons::write_all(&nested)?;
  assert!(nested.is_dir());

  // a second run reuses the directory, overwriting in place
  icons::write_all(&nested)?;
  assert_eq!(fs::read_dir(&nested)?.count(), 5);
  Ok(())
}
