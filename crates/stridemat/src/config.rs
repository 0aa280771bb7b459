use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a freshly allocated vector or matrix is filled.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum Fill {
    #[default]
    Zeros,
    Ones,
    Constant(f64),
    /// Ones on the main diagonal, zeros elsewhere. Vectors only get a one
    /// at index 0.
    Eye,
    /// Uniform in `[0, 1)`.
    Uniform,
    /// Mean 0, variance 1.
    Gaussian,
}

impl Fill {
    pub fn is_random(&self) -> bool {
        matches!(self, Fill::Uniform | Fill::Gaussian)
    }

    /// The value this fill puts at `(row, col)`. Deterministic fills ignore `rng`.
    pub fn value_at<R: Rng + ?Sized>(&self, row: usize, col: usize, rng: &mut R) -> f64 {
        match *self {
            Fill::Zeros => 0.0,
            Fill::Ones => 1.0,
            Fill::Constant(value) => value,
            Fill::Eye => {
                if row == col {
                    1.0
                } else {
                    0.0
                }
            }
            Fill::Uniform => rng.gen::<f64>(),
            Fill::Gaussian => rng.sample(StandardNormal),
        }
    }
}

impl FromStr for Fill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zeros" => Ok(Fill::Zeros),
            "ones" => Ok(Fill::Ones),
            "eye" | "identity" => Ok(Fill::Eye),
            "rand" | "uniform" => Ok(Fill::Uniform),
            "randn" | "gaussian" => Ok(Fill::Gaussian),
            _ => Err(format!(
                "Unknown fill: {}. Expected one of zeros, ones, eye, rand or randn",
                s
            )),
        }
    }
}

/// Controls how vectors and matrices are rendered as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DisplayConfig {
    /// Digits after the decimal point; `None` prints the shortest exact form.
    #[serde(default)]
    pub precision: Option<usize>,

    /// Rows beyond this are elided with `...`.
    #[serde(default)]
    pub max_rows: Option<usize>,

    /// Columns (or vector elements) beyond this are elided with `...`.
    #[serde(default)]
    pub max_cols: Option<usize>,
}

impl DisplayConfig {
    pub fn new(precision: Option<usize>, max_rows: Option<usize>, max_cols: Option<usize>) -> Self {
        Self {
            precision,
            max_rows,
            max_cols,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}
