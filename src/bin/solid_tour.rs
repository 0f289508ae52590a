// SOLID tour: runs every lesson against the configured animals.
//
// Usage: solid_tour [tour.toml]
// Set RUST_LOG=debug to watch the visitor dispatch.

use colored::Colorize;
use log::info;
use solid_principles::config::TourConfig;
use solid_principles::inversion::{
    Folder, GenericThumbnailService, LocalFolder, S3Folder, ThumbnailService,
    ThumbnailServiceConcrete,
};
use solid_principles::responsibility::{format_summary, summarize};
use solid_principles::segregation::{staple_all, OfficeJob, PrintJob, StapleOnlyJob};
use solid_principles::substitution::{total_lifespan_dynamic, total_lifespan_static};
use solid_principles::visitor::{Animal, Cat, LifeSpanVisitor, SoundVisitor};
use solid_principles::SolidError;
use std::env;
use std::path::Path;
use std::process;

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// `color = false` forces plain output. Otherwise `colored` keeps deciding
/// from NO_COLOR, CLICOLOR and whether stdout is a terminal.
fn color_override(config: &TourConfig) -> Option<bool> {
    if config.color {
        None
    } else {
        Some(false)
    }
}

fn load_config(arg: Option<String>) -> Result<TourConfig, SolidError> {
    match arg {
        Some(path) => TourConfig::load(Path::new(&path)),
        None => Ok(TourConfig::default()),
    }
}

fn run(config: &TourConfig) -> Result<(), SolidError> {
    let herd: Vec<Box<dyn Animal>> = config.animals.iter().map(|s| s.into_animal()).collect();
    info!("touring with {} animals", herd.len());

    heading("Single Responsibility");
    println!("{}", format_summary(&summarize(&config.animals)));

    heading("Visitor Pattern");
    for animal in &herd {
        let mut years = 0;
        animal.accept(&mut LifeSpanVisitor::new(&mut years));
        println!("{} lives {} years", animal.name(), years.to_string().green());
    }
    let mut sounds = SoundVisitor::new();
    for animal in &herd {
        animal.accept(&mut sounds);
    }
    println!("the herd says: {}", sounds.into_sounds().join(", "));

    heading("Tagged Variants");
    for species in &config.animals {
        println!("{species}: {} years, says {}", species.lifespan(), species.sound());
    }

    heading("Liskov Substitution");
    println!("static total (cats only): {}", total_lifespan_static(&[Cat, Cat]));
    println!("dynamic total (whole herd): {}", total_lifespan_dynamic(&herd));

    heading("Interface Segregation");
    let mut office = OfficeJob::new(3);
    println!("printed {} of {} pages", office.print(), office.pages());
    let mut loose = vec![StapleOnlyJob::new(2), StapleOnlyJob::new(4)];
    let stapled = staple_all(&mut loose)? + staple_all(std::slice::from_mut(&mut office))?;
    println!("stapled {} sheets", stapled.to_string().green());

    heading("Dependency Inversion");
    let s3 = S3Folder::default();
    let local = LocalFolder::new("./photos", 3);
    println!(
        "coupled to S3: {} thumbnails",
        ThumbnailServiceConcrete::new(s3.clone()).thumbnails().len()
    );
    println!(
        "via &dyn Folder: {} thumbnails",
        ThumbnailService::new(&local).thumbnails().len()
    );
    let generic = GenericThumbnailService::new(s3);
    println!(
        "via F: Folder ({}): {} thumbnails",
        generic.folder().location(),
        generic.thumbnails().len()
    );

    Ok(())
}

fn main() {
    env_logger::init();

    let result = load_config(env::args().nth(1)).and_then(|config| {
        if let Some(color) = color_override(&config) {
            colored::control::set_override(color);
        }
        run(&config)
    });

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_tour_runs() {
        assert_eq!(load_config(None).unwrap(), TourConfig::default());
        assert!(run(&TourConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_herd_tour_runs() {
        let config = TourConfig::from_toml("animals = []").unwrap();
        assert!(config.animals.is_empty());
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_color_left_to_environment_by_default() {
        assert_eq!(color_override(&TourConfig::default()), None);

        let plain = TourConfig::from_toml("color = false").unwrap();
        assert_eq!(color_override(&plain), Some(false));
    }

    #[test]
    fn test_load_config_from_argument() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "animals = [\"dog\"]").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.animals.len(), 1);
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml").to_string_lossy().into_owned();
        assert!(matches!(
            load_config(Some(missing)),
            Err(SolidError::ConfigRead { .. })
        ));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "animals = [\"parrot\"]").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(matches!(
            load_config(Some(path)),
            Err(SolidError::ConfigParse(_))
        ));
    }
}
