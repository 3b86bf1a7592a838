use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "fixbrot", version, about = "Fixed-point Mandelbrot/Julia explorer for the terminal")]
pub struct Config {
    #[arg(long, value_enum, default_value_t = Mode::Mandelbrot)]
    pub mode: Mode,

    #[arg(long, value_enum, default_value_t = Backend::Fixed)]
    pub backend: Backend,

    #[arg(long, default_value_t = 50)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Override the raster width (defaults to the terminal width).
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the raster height (defaults to the terminal height).
    /// Half-block cells hold two pixel rows, so odd values are rounded
    /// down to an even row count.
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial center, real part (defaults per mode).
    #[arg(long)]
    pub center_re: Option<f64>,

    /// Initial center, imaginary part (defaults per mode).
    #[arg(long)]
    pub center_im: Option<f64>,

    /// Julia constant, real part.
    #[arg(long, default_value_t = -0.5)]
    pub k_re: f64,

    /// Julia constant, imaginary part.
    #[arg(long, default_value_t = 0.65)]
    pub k_im: f64,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[value(alias = "brot", alias = "m")]
    Mandelbrot,
    #[value(alias = "j")]
    Julia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Q4.29 scaled-integer arithmetic.
    Fixed,
    /// Double-precision floating point.
    #[value(alias = "f64", alias = "double")]
    Float,
}

impl Mode {
    /// Default view center ("valley" coordinates for Mandelbrot, the seed
    /// neighbourhood for Julia).
    pub fn default_center(self) -> (f64, f64) {
        match self {
            Self::Mandelbrot => (-0.76, -0.102),
            Self::Julia => (-0.15, -0.05),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
        }
    }
}

impl Config {
    pub fn center(&self) -> (f64, f64) {
        let (re, im) = self.mode.default_center();
        (self.center_re.unwrap_or(re), self.center_im.unwrap_or(im))
    }
}
