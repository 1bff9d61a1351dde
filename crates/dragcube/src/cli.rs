use std::path::PathBuf;
use std::str::FromStr;

use cgmath::Point2;
use dragcube_core::{CubeState, Cubelet};
use dragcube_notation::Move;
use dragcube_prefs::{FileStore, Preferences, paths};
use dragcube_view::{CubeController, OrbitCamera, Outcome, SurfaceHit};
use eyre::{Context, OptionExt, Result, bail};
use itertools::Itertools;
use serde::Serialize;

use crate::animator::TerminalAnimator;

/// Outward surface normal in world space.
type Normal = [f32; 3];

/// Interactive 3x3x3 cube driven from the command line.
///
/// The cube state persists between invocations.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// File storing the cube state. Defaults to the user data directory.
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,
    /// Preferences file. Defaults to the user config directory.
    #[arg(long, global = true)]
    pub prefs_file: Option<PathBuf>,
    /// Skip animation delays.
    #[arg(long, global = true)]
    pub instant: bool,
    /// Print the result as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the cube state.
    Show,
    /// Reset the cube to the solved state or to a pattern.
    Reset {
        /// 54-character pattern, listing faces in the order U R F D L B.
        pattern: Option<String>,
    },
    /// Play a list of moves, such as `R U R' U'`.
    Apply {
        /// Moves to play.
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Play a random shuffle.
    Shuffle {
        /// Number of moves. Defaults to the configured shuffle length.
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible shuffle.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Play a solution.
    Solve,
    /// Play the demonstration sequence.
    Demo,
    /// Recolor the cube to a well-known pattern, one cubelet at a time.
    Scan,
    /// Feed a pointer gesture through the drag classifier and commit it.
    Drag {
        /// Cubelet under the pointer, such as `1,1,1`.
        #[arg(long, value_parser = parse_cubelet, allow_hyphen_values = true)]
        cubelet: Cubelet,
        /// Outward normal of the surface under the pointer, such as `0,0,1`.
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        normal: Normal,
        /// Camera azimuth in degrees, measured from +Z toward +X.
        #[arg(long, default_value_t = 45.0, allow_hyphen_values = true)]
        azimuth: f32,
        /// Screen positions, such as `100,100 130,102 270,90`. The first is
        /// the press and the last is the release.
        #[arg(
            long,
            value_parser = parse_point,
            num_args = 2..,
            required = true,
            allow_hyphen_values = true
        )]
        path: Vec<Point2<f32>>,
    },
}

/// Result of a command.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct Report {
    pattern: String,
    solved: bool,
    /// Moves that were played, or `None` if the command was rejected.
    moves: Option<Vec<String>>,
}
impl Report {
    fn new(state: &CubeState, moves: Option<&[Move]>) -> Self {
        Self {
            pattern: state.as_string(),
            solved: state.is_solved(),
            moves: moves.map(|moves| moves.iter().map(|m| m.to_string()).collect()),
        }
    }
}

type Controller = CubeController<TerminalAnimator, FileStore>;

pub(crate) async fn exec(args: Args) -> Result<()> {
    let prefs = match &args.prefs_file {
        Some(path) => Preferences::load(Some(path)),
        None => Preferences::load_default_file(),
    };
    let state_file = match args.state_file {
        Some(path) => path,
        None => paths::state_file()?.to_owned(),
    };
    let animator = TerminalAnimator {
        twist_duration: prefs.animation.twist_duration(),
        instant: args.instant,
    };
    let c = Controller::new(animator, FileStore::new(state_file), prefs);

    let moves = run(&c, args.subcommand).await?;
    let report = Report::new(&c.state(), moves.as_deref());
    if args.json {
        write_json_output(&report)
    } else {
        print_report(&report);
        Ok(())
    }
}

/// Runs a subcommand. Returns the moves that were played, or `None` if the
/// command was rejected.
async fn run(c: &Controller, subcommand: Subcommand) -> Result<Option<Vec<Move>>> {
    let outcome = match subcommand {
        Subcommand::Show => Outcome::Done(vec![]),
        Subcommand::Reset { pattern } => c.reset(pattern.as_deref())?.map(|()| vec![]),
        Subcommand::Apply { moves } => c.play(&moves.join(" ")).await?,
        Subcommand::Shuffle { length, seed } => c.shuffle(length, seed).await,
        Subcommand::Solve => c.solve().await?,
        Subcommand::Demo => c.demo().await?,
        Subcommand::Scan => c.scan().await?.map(|()| vec![]),
        Subcommand::Drag {
            cubelet,
            normal,
            azimuth,
            path,
        } => drag(c, cubelet, normal, azimuth, &path).await?,
    };
    if outcome.is_busy() {
        log::warn!("command rejected because another operation is in flight");
    }
    Ok(outcome.done())
}

async fn drag(
    c: &Controller,
    cubelet: Cubelet,
    normal: Normal,
    azimuth: f32,
    path: &[Point2<f32>],
) -> Result<Outcome<Vec<Move>>> {
    let camera = OrbitCamera::at_azimuth(azimuth);
    let (&press, rest) = path.split_first().ok_or_eyre("empty drag path")?;
    let hit = SurfaceHit {
        cubelet,
        normal: normal.into(),
    };

    if !c.pointer_down(press, hit)? {
        return Ok(Outcome::Busy);
    }
    for &point in rest {
        if let Some(pending) = c.pointer_move(point, &camera)? {
            log::info!("dragging at {:.0} degrees", pending.angle.to_degrees());
        }
    }
    Ok(c.pointer_up().await?)
}

fn print_report(report: &Report) {
    if let Some(moves) = &report.moves
        && !moves.is_empty()
    {
        println!("{}", moves.iter().join(" "));
    }
    println!("{}", report.pattern);
    if report.solved {
        println!("solved");
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

fn parse_components<T, const N: usize>(s: &str) -> Result<[T; N]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<T>())
        .collect::<Result<Vec<T>, _>>()
        .wrap_err_with(|| format!("bad number in {s:?}"))?;
    match <[T; N]>::try_from(components) {
        Ok(array) => Ok(array),
        Err(v) => bail!("expected {N} comma-separated numbers, got {}", v.len()),
    }
}

fn parse_point(s: &str) -> Result<Point2<f32>> {
    let [x, y] = parse_components(s)?;
    Ok(Point2::new(x, y))
}

fn parse_vector(s: &str) -> Result<Normal> {
    parse_components(s)
}

fn parse_cubelet(s: &str) -> Result<Cubelet> {
    Cubelet::from_ints(parse_components(s)?)
        .ok_or_eyre("cubelet coordinates must each be -1, 0, or 1")
}
