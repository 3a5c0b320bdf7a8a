//! designview - headless design view demo

use clap::Parser;
use designview::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use designview::logging::{self, LogTarget};
use designview::model::{AppError, ControlSchemeKind, FrameTime, SlotId, ViewMode};
use designview::preview::preview_text;
use designview::{DesignView, Editor};
use ratatui::layout::Rect;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Drive a headless quad-pane design view and print its layout
#[derive(Parser, Debug)]
#[command(name = "designview")]
#[command(version)]
#[command(about = "Drive a headless quad-pane design view and print its layout")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial view mode
    #[arg(short = 'm', long)]
    pub view_mode: Option<ViewMode>,

    /// Initially focused slot
    #[arg(short, long)]
    pub active_slot: Option<SlotId>,

    /// Camera control scheme
    #[arg(short, long)]
    pub control_scheme: Option<ControlSchemeKind>,

    /// Number of frames to tick before printing
    #[arg(short, long, default_value = "1")]
    pub frames: u32,

    /// Grid width in cells
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Log to this file instead of the configured path
    #[arg(long, conflicts_with = "stderr")]
    pub log_file: Option<PathBuf>,

    /// Log to stderr
    #[arg(long)]
    pub stderr: bool,
}

/// Editor that only records frame timing.
#[derive(Debug, Default)]
struct FrameLogger {
    frames: u32,
}

impl Editor for FrameLogger {
    fn tick(&mut self, view: &mut DesignView, frame: FrameTime) {
        self.frames += 1;
        debug!(
            frame = self.frames,
            total = frame.total_time,
            delta = frame.delta_time,
            visible = view.layout().views().count(),
            "Tick"
        );
    }
}

/// Log destination: `--stderr`, then `--log-file`, then the configured path.
fn log_target(args: &Args, config: &ResolvedConfig) -> LogTarget {
    if args.stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File(
            args.log_file
                .clone()
                .unwrap_or_else(|| config.log_file_path.clone()),
        )
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File, enough to know where logs go
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file)?;

    logging::init(&log_target(&args, &merged))?;

    // → Env Vars → CLI Args, after logging so rejected overrides are reported
    let config = apply_cli_overrides(
        apply_env_overrides(merged),
        args.view_mode,
        args.active_slot,
        args.control_scheme,
    );

    info!(config = ?config, "Configuration loaded and resolved");

    let mut view = DesignView::headless(&config.view);
    view.resize(Rect::new(0, 0, args.width, args.height));

    let mut editor = FrameLogger::default();
    for _ in 0..args.frames {
        view.tick(&mut editor);
    }
    info!(frames = editor.frames, mode = %view.view_mode(), "Ticks complete");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", preview_text(&view.layout()))?;
    writeln!(
        stdout,
        "mode: {}  active: {}  controls: {}",
        view.view_mode(),
        view.active_slot(),
        view.control_scheme()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["designview", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["designview", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["designview"]);
        assert_eq!(args.config, None);
        assert_eq!(args.view_mode, None);
        assert_eq!(args.active_slot, None);
        assert_eq!(args.control_scheme, None);
        assert_eq!(args.frames, 1);
        assert_eq!(args.width, 80);
        assert_eq!(args.height, 24);
        assert_eq!(args.log_file, None);
        assert!(!args.stderr);
    }

    #[test]
    fn test_view_mode_parses_kebab_case() {
        let args = Args::parse_from(["designview", "--view-mode", "dual-vertical"]);
        assert_eq!(args.view_mode, Some(ViewMode::DualVertical));
    }

    #[test]
    fn test_view_mode_short_flag() {
        let args = Args::parse_from(["designview", "-m", "single"]);
        assert_eq!(args.view_mode, Some(ViewMode::Single));
    }

    #[test]
    fn test_view_mode_invalid_rejects() {
        let result = Args::try_parse_from(["designview", "--view-mode", "triple"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_active_slot_flag() {
        let args = Args::parse_from(["designview", "-a", "bottom-right"]);
        assert_eq!(args.active_slot, Some(SlotId::BottomRight));
    }

    #[test]
    fn test_control_scheme_flag() {
        let args = Args::parse_from(["designview", "--control-scheme", "maya-laptop"]);
        assert_eq!(args.control_scheme, Some(ControlSchemeKind::MayaLaptop));
    }

    #[test]
    fn test_width_rejects_zero() {
        let result = Args::try_parse_from(["designview", "--width", "0"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_log_targets_conflict() {
        let result = Args::try_parse_from(["designview", "--stderr", "--log-file", "x.log"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "designview",
            "-m",
            "quad",
            "-a",
            "top-right",
            "-f",
            "10",
            "--width",
            "120",
            "--height",
            "40",
            "--stderr",
        ]);
        assert_eq!(args.view_mode, Some(ViewMode::Quad));
        assert_eq!(args.active_slot, Some(SlotId::TopRight));
        assert_eq!(args.frames, 10);
        assert_eq!(args.width, 120);
        assert_eq!(args.height, 40);
        assert!(args.stderr);
    }

    #[test]
    fn test_cli_view_mode_flows_through_config_precedence_chain() {
        use designview::config::ConfigFile;

        let config_file = ConfigFile {
            view_mode: Some(ViewMode::DualHorizontal),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file)).expect("valid file");
        assert_eq!(merged.view.view_mode, ViewMode::DualHorizontal);

        let with_cli = apply_cli_overrides(merged, Some(ViewMode::Single), None, None);
        assert_eq!(with_cli.view.view_mode, ViewMode::Single);

        assert_eq!(ResolvedConfig::default().view.view_mode, ViewMode::Quad);
    }

    #[test]
    fn test_log_target_prefers_stderr_then_flag_then_config() {
        let config = ResolvedConfig {
            log_file_path: PathBuf::from("/from/config.log"),
            ..ResolvedConfig::default()
        };

        let args = Args::parse_from(["designview"]);
        assert_eq!(
            log_target(&args, &config),
            LogTarget::File(PathBuf::from("/from/config.log"))
        );

        let args = Args::parse_from(["designview", "--log-file", "/from/flag.log"]);
        assert_eq!(
            log_target(&args, &config),
            LogTarget::File(PathBuf::from("/from/flag.log"))
        );

        let args = Args::parse_from(["designview", "--stderr"]);
        assert_eq!(log_target(&args, &config), LogTarget::Stderr);
    }

    #[test]
    fn test_frame_logger_counts_ticks() {
        let mut view = DesignView::headless(&Default::default());
        view.resize(Rect::new(0, 0, 40, 10));
        let mut editor = FrameLogger::default();
        view.tick(&mut editor);
        view.tick(&mut editor);
        assert_eq!(editor.frames, 2);
    }
}
