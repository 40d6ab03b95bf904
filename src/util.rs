/// Time a block and report it through the `log` facade.
#[macro_export]
macro_rules! profile(
  ($title: literal, $body: block) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    ::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// `out.png` -> `out-3.png`
pub fn suffixed(path: &std::path::Path, index: usize) -> std::path::PathBuf {
  let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
  let name = match path.extension() {
    Some(ext) => format!("{}-{}.{}", stem, index, ext.to_string_lossy()),
    None => format!("{}-{}", stem, index)
  };
  path.with_file_name(name)
}

/// Seed for runs that did not ask for one.
pub fn time_seed() -> u64 {
  use std::time::{SystemTime, UNIX_EPOCH};

  SystemTime::now().duration_since(UNIX_EPOCH)
    .map(|d| d.as_nanos() as u64)
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use {super::*, std::path::{Path, PathBuf}};

  #[test] fn suffix() {
    assert_eq!(suffixed(Path::new("out.png"), 3), PathBuf::from("out-3.png"));
    assert_eq!(suffixed(Path::new("dir/frames"), 0), PathBuf::from("dir/frames-0"));
  }

  #[test] fn profile_returns_value() {
    let x = crate::profile!("sum", { (1..=4).sum::<i32>() });
    assert_eq!(x, 10);
  }
}
