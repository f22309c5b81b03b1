//! probe-layout: command-line generator for synthetic electrode-array layouts
//!
//! Builds a probe (or probe group) and prints it as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use probe_layout::config::{self, Config};
use probe_layout::generator::{
    generate_dummy_probe, generate_dummy_probe_group, generate_multi_columns_probe,
    generate_multi_shank, generate_tetrode, ColumnLayout, ContactsPerColumn, DEFAULT_NUM_SHANK, DEFAULT_SHANK_PITCH, DEFAULT_TETRODE_RADIUS,
};
use probe_layout::output::{self, OutputError};
use probe_layout::probe::{ContactShape, Outline, Point, Probe, ProbeError, ProbeGroup, ShapeKind};

/// Generator for synthetic electrode-array (probe) layouts.
///
/// Prints the generated probe as JSON on stdout, or writes it to a file.
#[derive(Parser, Debug)]
#[command(name = "probe-layout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 32-contact, 3-column test probe
    Dummy {
        /// Contact shape (circle, square, rect)
        #[arg(long, default_value = "circle")]
        shape: ShapeKind,
    },

    /// Two dummy probes, the second one offset by (150, -50)
    DummyGroup,

    /// Four contacts on a circle
    Tetrode {
        /// Radius of the circle the contacts sit on
        #[arg(short, long, default_value_t = DEFAULT_TETRODE_RADIUS)]
        radius: f64,
    },

    /// Single column of contacts
    Linear {
        /// Number of electrodes
        #[arg(long, default_value_t = 16)]
        num_elec: usize,

        /// Distance between electrodes
        #[arg(long, default_value_t = 20.0)]
        ypitch: f64,

        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Several columns of contacts
    MultiColumns(ColumnArgs),

    /// Several identical column probes side by side
    MultiShank {
        /// Number of shanks
        #[arg(long, default_value_t = DEFAULT_NUM_SHANK)]
        num_shank: usize,

        /// Offset between neighbouring shanks
        #[arg(
            long,
            num_args = 2,
            value_names = ["X", "Y"],
            default_values_t = [DEFAULT_SHANK_PITCH.x, DEFAULT_SHANK_PITCH.y],
            allow_negative_numbers = true
        )]
        shank_pitch: Vec<f64>,

        #[command(flatten)]
        columns: ColumnArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct ShapeArgs {
    /// Contact shape (circle, square, rect)
    #[arg(long, default_value = "circle")]
    shape: String,

    /// Circle radius
    #[arg(long)]
    radius: Option<f64>,

    /// Square side or rectangle width
    #[arg(long)]
    width: Option<f64>,

    /// Rectangle height
    #[arg(long)]
    height: Option<f64>,
}

impl ShapeArgs {
    /// Uses the preset for the tag when no parameter was given.
    fn to_shape(&self) -> Result<ContactShape, ProbeError> {
        if self.radius.is_none() && self.width.is_none() && self.height.is_none() {
            return Ok(self.shape.parse::<ShapeKind>()?.preset());
        }
        ContactShape::from_tag(&self.shape, self.radius, self.width, self.height)
    }
}

#[derive(ClapArgs, Debug)]
struct ColumnArgs {
    /// Number of columns
    #[arg(long, default_value_t = 3)]
    num_columns: usize,

    /// Contacts per column: one value for all columns, or one per column
    #[arg(long, value_delimiter = ',', default_value = "10")]
    num_contact_per_column: Vec<usize>,

    /// Distance between columns
    #[arg(long, default_value_t = 20.0)]
    xpitch: f64,

    /// Distance between contacts within a column
    #[arg(long, default_value_t = 20.0)]
    ypitch: f64,

    /// Vertical offset of each column, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    y_shift_per_column: Option<Vec<f64>>,

    #[command(flatten)]
    shape: ShapeArgs,
}

impl ColumnArgs {
    fn to_layout(&self, outline: Outline) -> Result<ColumnLayout, ProbeError> {
        let num_contact_per_column = match self.num_contact_per_column.as_slice() {
            [count] => ContactsPerColumn::Uniform(*count),
            counts => ContactsPerColumn::PerColumn(counts.to_vec()),
        };

        Ok(ColumnLayout {
            num_columns: self.num_columns,
            num_contact_per_column,
            xpitch: self.xpitch,
            ypitch: self.ypitch,
            y_shift_per_column: self.y_shift_per_column.clone(),
            contact_shape: self.shape.to_shape()?,
            outline,
        })
    }
}

/// What a subcommand produced.
#[derive(Serialize)]
#[serde(untagged)]
enum Generated {
    Probe(Probe),
    Group(ProbeGroup),
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Config(#[from] probe_layout::error::ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the selected generator.
fn generate(command: &Command, cfg: &Config) -> Result<Generated, RunError> {
    let outline = cfg.outline.to_outline()?;

    let generated = match command {
        Command::Dummy { shape } => Generated::Probe(generate_dummy_probe(*shape)?),
        Command::DummyGroup => Generated::Group(generate_dummy_probe_group()?),
        Command::Tetrode { radius } => Generated::Probe(generate_tetrode(*radius)?),
        Command::Linear {
            num_elec,
            ypitch,
            shape,
        } => {
            let layout = ColumnLayout {
                outline,
                ..ColumnLayout::linear(*num_elec, *ypitch, shape.to_shape()?)
            };
            Generated::Probe(generate_multi_columns_probe(&layout)?)
        }
        Command::MultiColumns(columns) => {
            Generated::Probe(generate_multi_columns_probe(&columns.to_layout(outline)?)?)
        }
        Command::MultiShank {
            num_shank,
            shank_pitch,
            columns,
        } => {
            let pitch = match shank_pitch.as_slice() {
                [x, y] => Point::new(*x, *y),
                other => {
                    return Err(ProbeError::length_mismatch("shank_pitch", 2, other.len()).into())
                }
            };
            Generated::Probe(generate_multi_shank(
                *num_shank,
                pitch,
                &columns.to_layout(outline)?,
            )?)
        }
    };

    Ok(generated)
}

/// Entry point for the probe-layout tool.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?args.command,
        "Generating probe"
    );

    let result = generate(&args.command, &cfg).and_then(|generated| {
        output::write_json(&generated, args.output.as_deref(), cfg.output.pretty)
            .map_err(RunError::from)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Generation failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_multi_shank_arguments() {
        let args = Args::try_parse_from([
            "probe-layout",
            "multi-shank",
            "--num-shank",
            "4",
            "--shank-pitch",
            "200",
            "-10",
            "--num-contact-per-column",
            "8,10,8",
            "--y-shift-per-column",
            "0,-10,0",
        ])
        .unwrap();

        let generated = generate(&args.command, &Config::default()).unwrap();
        let Generated::Probe(probe) = generated else {
            panic!("Expected a probe");
        };
        assert_eq!(probe.contact_count(), 4 * 26);
        assert_eq!(probe.shank_ids.as_ref().map(|ids| ids[26]), Some(1));
    }

    #[test]
    fn shape_args_use_preset_without_parameters() {
        let args = Args::try_parse_from(["probe-layout", "linear", "--shape", "rect"]).unwrap();
        let Command::Linear { shape, .. } = args.command else {
            panic!("Expected linear");
        };
        assert_eq!(shape.to_shape(), Ok(ShapeKind::Rect.preset()));
    }

    #[test]
    fn unsupported_shape_is_rejected() {
        let args = Args::try_parse_from([
            "probe-layout",
            "multi-columns",
            "--shape",
            "hexagon",
            "--radius",
            "5",
        ])
        .unwrap();
        assert!(matches!(
            generate(&args.command, &Config::default()),
            Err(RunError::Probe(ProbeError::UnsupportedShape { .. }))
        ));
    }

    #[test]
    fn linear_uses_configured_outline() {
        let args = Args::try_parse_from(["probe-layout", "linear", "--num-elec", "4"]).unwrap();
        let mut cfg = Config::default();
        cfg.outline.probe_type = "rect".to_string();
        cfg.outline.margin = 5.0;

        let Generated::Probe(probe) = generate(&args.command, &cfg).unwrap() else {
            panic!("Expected a probe");
        };
        let contour = probe.planar_contour.unwrap();
        assert_eq!(contour.len(), 4);
        assert!(contour.iter().all(|p| (p.x.abs() - 5.0).abs() < 1e-9));
    }

    #[test]
    fn defaults_come_from_generators() {
        let args = Args::try_parse_from(["probe-layout", "tetrode"]).unwrap();
        let Command::Tetrode { radius } = args.command else {
            panic!("Expected tetrode");
        };
        assert!((radius - DEFAULT_TETRODE_RADIUS).abs() < f64::EPSILON);

        let args = Args::try_parse_from(["probe-layout", "multi-shank"]).unwrap();
        let Command::MultiShank {
            num_shank,
            shank_pitch,
            ..
        } = args.command
        else {
            panic!("Expected multi-shank");
        };
        assert_eq!(num_shank, DEFAULT_NUM_SHANK);
        assert_eq!(shank_pitch, vec![DEFAULT_SHANK_PITCH.x, DEFAULT_SHANK_PITCH.y]);
    }

    #[test]
    fn dummy_shape_is_parsed_by_clap() {
        assert!(Args::try_parse_from(["probe-layout", "dummy", "--shape", "triangle"]).is_err());
    }

    #[test]
    fn log_level_from_flags() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }
}
