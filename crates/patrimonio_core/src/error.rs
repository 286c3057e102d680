use std::fmt;

/// Errors raised by parameter validation before any simulation work starts.
///
/// The engine never coerces an invalid parameter to a default; callers get
/// one of these immediately instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A path count of zero leaves every summary statistic undefined.
    ZeroPaths,
    /// The horizon is shorter than one month.
    ZeroHorizon,
    /// The volatility did not yield a valid normal distribution
    /// (negative or non-finite standard deviation).
    InvalidVolatility { annual_volatility_pct: f64 },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ZeroPaths => {
                write!(f, "path count must be at least 1")
            }
            SimulationError::ZeroHorizon => {
                write!(f, "simulation horizon must cover at least 1 month")
            }
            SimulationError::InvalidVolatility {
                annual_volatility_pct,
            } => {
                write!(
                    f,
                    "annual volatility {annual_volatility_pct}% is not a valid distribution parameter"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}
