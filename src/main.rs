//! Neon Gradient command line entrypoint: build a gradient from stop arguments and print
//! samples, single colors or CSS.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neon_gradient::{Color, CssKind, Gradient, GradientConfig, HueArc, StopInput};

#[derive(Parser)]
#[command(name = "neon-gradient")]
#[command(about = "Sample color gradients and render them as CSS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reverse the gradient before running the command
    #[arg(long, global = true)]
    reverse: bool,

    /// Run through the stops and back before running the command
    #[arg(long, global = true)]
    looped: bool,

    /// Output format for colors
    #[arg(long, value_enum, default_value_t = Format::Hex, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Command {
    /// Sample colors with RGB interpolation
    Rgb {
        /// Stops: CSS colors or JSON descriptors such as '{"color":"red","pos":0.2}'
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,

        /// Number of colors to produce
        #[arg(long)]
        steps: Option<usize>,
    },

    /// Sample colors with HSV interpolation
    Hsv {
        /// Stops: CSS colors or JSON descriptors
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,

        /// Number of colors to produce
        #[arg(long)]
        steps: Option<usize>,

        /// Hue direction (clockwise, counterclockwise, short, long)
        #[arg(long)]
        arc: Option<HueArc>,
    },

    /// Color at one position with RGB interpolation
    RgbAt {
        /// Stops: CSS colors or JSON descriptors
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,

        /// Position between 0 and 1
        #[arg(long)]
        pos: f64,
    },

    /// Color at one position with HSV interpolation
    HsvAt {
        /// Stops: CSS colors or JSON descriptors
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,

        /// Position between 0 and 1
        #[arg(long)]
        pos: f64,

        /// Hue direction (clockwise, counterclockwise, short, long)
        #[arg(long)]
        arc: Option<HueArc>,
    },

    /// Render the stops as a CSS gradient
    Css {
        /// Stops: CSS colors or JSON descriptors
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,

        /// Gradient function (linear, radial)
        #[arg(long, default_value = "linear")]
        kind: CssKind,

        /// Direction or shape, e.g. "45deg" or "circle"
        #[arg(long)]
        direction: Option<String>,
    },

    /// Print the normalized stops
    Stops {
        /// Stops: CSS colors or JSON descriptors
        #[arg(required = true, num_args = 2..)]
        stops: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`
    Rgb,
    /// JSON channel objects
    Json,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GradientConfig::load();
    let options = Options {
        reverse: cli.reverse,
        looped: cli.looped,
        format: cli.format,
    };

    match cli.command {
        Command::Rgb { stops, steps } => {
            let gradient = options.gradient(&stops)?;
            let steps = steps.unwrap_or(config.steps);
            let colors = gradient
                .rgb(steps)
                .with_context(|| format!("sampling {steps} rgb colors"))?;
            print_colors(&colors, options.format, false)?;
        }
        Command::Hsv { stops, steps, arc } => {
            let gradient = options.gradient(&stops)?;
            let steps = steps.unwrap_or(config.steps);
            let arc = arc.unwrap_or(config.hue_arc);
            let colors = gradient
                .hsv(steps, arc)
                .with_context(|| format!("sampling {steps} hsv colors ({arc})"))?;
            print_colors(&colors, options.format, true)?;
        }
        Command::RgbAt { stops, pos } => {
            let color = options
                .gradient(&stops)?
                .rgb_at(pos)
                .context("querying rgb color")?;
            print_colors(&[color], options.format, false)?;
        }
        Command::HsvAt { stops, pos, arc } => {
            let arc = arc.unwrap_or(config.hue_arc);
            let color = options
                .gradient(&stops)?
                .hsv_at_with(pos, arc)
                .context("querying hsv color")?;
            print_colors(&[color], options.format, true)?;
        }
        Command::Css {
            stops,
            kind,
            direction,
        } => {
            let gradient = options.gradient(&stops)?;
            let direction = direction.as_deref().unwrap_or_else(|| config.direction(kind));
            println!("{}", gradient.css(kind, Some(direction)));
        }
        Command::Stops { stops } => {
            let gradient = options.gradient(&stops)?;
            for stop in gradient.stops() {
                println!("{} {}", stop.pos, render(&stop.color, options.format)?);
            }
        }
    }

    Ok(())
}

/// Flags shared by every subcommand.
struct Options {
    reverse: bool,
    looped: bool,
    format: Format,
}

impl Options {
    fn gradient(&self, args: &[String]) -> anyhow::Result<Gradient> {
        let inputs = args
            .iter()
            .map(String::as_str)
            .map(parse_stop)
            .collect::<anyhow::Result<Vec<_>>>()?;
        let mut gradient = Gradient::new(inputs).context("building gradient")?;
        if self.reverse {
            gradient = gradient.reverse();
        }
        if self.looped {
            gradient = gradient.looped();
        }
        debug!(
            stops = gradient.len(),
            reverse = self.reverse,
            looped = self.looped,
            "gradient ready"
        );
        Ok(gradient)
    }
}

/// JSON descriptors start with `{`; anything else is a CSS color.
fn parse_stop(arg: &str) -> anyhow::Result<StopInput> {
    if arg.trim_start().starts_with('{') {
        serde_json::from_str(arg).with_context(|| format!("parsing stop descriptor {arg}"))
    } else {
        Ok(StopInput::from(arg))
    }
}

fn print_colors(colors: &[Color], format: Format, hsv: bool) -> anyhow::Result<()> {
    if let Format::Json = format {
        let json = if hsv {
            to_json(&colors.iter().map(Color::to_hsv).collect::<Vec<_>>())?
        } else {
            to_json(&colors.iter().map(Color::to_rgb).collect::<Vec<_>>())?
        };
        println!("{json}");
        return Ok(());
    }
    for color in colors {
        println!("{}", render(color, format)?);
    }
    Ok(())
}

fn render(color: &Color, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Hex => color.to_hex_string(),
        Format::Rgb => color.to_rgb_string(),
        Format::Json => to_json(&color.to_rgb())?,
    })
}

fn to_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string(value).context("serializing colors")
}

/// Configure tracing so logs go to stderr and stay quiet unless `RUST_LOG` asks otherwise.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
