use clap::Parser;
use std::path::PathBuf;

use golist::console::Console;
use golist::error_fmt::{AppError, SettingsResultExt};
use golist::{logging, repl, ListContext, Settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser)]
#[command(name = "golist")]
#[command(about = "Interactive to-do list kept in memory for one session")]
struct Cli {
    /// Settings file (YAML); a missing file means defaults
    #[arg(long, short, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Number of tasks the preview shows (overrides the settings file)
    #[arg(long, short, value_parser = parse_preview_limit)]
    preview_limit: Option<usize>,
    /// Log debug events to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn parse_preview_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("preview limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(_) => Err(format!("invalid preview limit '{}', expected a positive number", s)),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = load_settings(&cli)?;
    let mut ctx = ListContext::new(settings);
    let mut console = Console::stdio();
    repl::run(&mut ctx, &mut console)
}

fn load_settings(cli: &Cli) -> Result<Settings, AppError> {
    let path = cli.config.display().to_string();
    let mut settings = Settings::load(&cli.config).with_path(&path)?;

    if let Some(limit) = cli.preview_limit {
        settings.preview_limit = limit;
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_preview_limit() {
        assert_eq!(parse_preview_limit("5"), Ok(5));
        assert!(parse_preview_limit("0").is_err());
        assert!(parse_preview_limit("-2").is_err());
        assert!(parse_preview_limit("many").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["golist"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(cli.preview_limit, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_rejects_zero_preview_limit() {
        assert!(Cli::try_parse_from(["golist", "--preview-limit", "0"]).is_err());
    }

    #[test]
    fn test_preview_limit_flag_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("golist.yml");
        std::fs::write(&path, "preview_limit: 7\nshow_tips: false\n").unwrap();

        let cli = Cli::try_parse_from([
            "golist",
            "--config",
            path.to_str().unwrap(),
            "--preview-limit",
            "2",
        ])
        .unwrap();

        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.preview_limit, 2);
        assert!(!settings.show_tips);
    }

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yml");

        let cli = Cli::try_parse_from(["golist", "--config", path.to_str().unwrap()]).unwrap();

        assert_eq!(load_settings(&cli).unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_settings_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("golist.yml");
        std::fs::write(&path, "preview_limit: 0\n").unwrap();

        let cli = Cli::try_parse_from(["golist", "--config", path.to_str().unwrap()]).unwrap();

        let err = load_settings(&cli).unwrap_err();
        assert!(matches!(err, AppError::Settings { path: p, .. } if p == path.display().to_string()));
    }
}
