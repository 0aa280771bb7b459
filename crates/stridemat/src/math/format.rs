//! Text rendering shared by vectors and matrices.

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::math::capability::{Readable1, Readable2};

/// Indices to print for an extent of `len`; `None` marks the elision point.
fn visible(len: usize, limit: Option<usize>) -> Vec<Option<usize>> {
    match limit {
        Some(limit) if len > limit => {
            let half = (limit / 2).max(1);
            (0..half)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((len - half..len).map(Some))
                .collect()
        }
        _ => (0..len).map(Some).collect(),
    }
}

fn format_value(value: f64, config: &DisplayConfig) -> String {
    match config.precision {
        Some(precision) => format!("{:.*}", precision, value),
        None => format!("{}", value),
    }
}

fn render_line<F>(len: usize, config: &DisplayConfig, mut get: F) -> Result<String>
where
    F: FnMut(usize) -> Result<f64>,
{
    let mut parts = Vec::new();
    for idx in visible(len, config.max_cols) {
        match idx {
            Some(i) => parts.push(format_value(get(i)?, config)),
            None => parts.push("...".to_string()),
        }
    }
    Ok(format!("[{}]", parts.join(", ")))
}

pub fn render_vector<V>(vector: &V, config: &DisplayConfig) -> Result<String>
where
    V: Readable1<f64> + ?Sized,
{
    render_line(vector.size(), config, |i| vector.get(i))
}

/// Row-major, one row per line.
pub fn render_matrix<M>(matrix: &M, config: &DisplayConfig) -> Result<String>
where
    M: Readable2<f64> + ?Sized,
{
    let mut lines = Vec::new();
    for idx in visible(matrix.rows(), config.max_rows) {
        match idx {
            Some(r) => lines.push(render_line(matrix.cols(), config, |c| matrix.get(r, c))?),
            None => lines.push("...".to_string()),
        }
    }
    Ok(format!("[{}]", lines.join(",\n ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible() {
        assert_eq!(visible(3, None), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(visible(3, Some(3)), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(
            visible(10, Some(4)),
            vec![Some(0), Some(1), None, Some(8), Some(9)]
        );
        assert_eq!(visible(10, Some(1)), vec![Some(0), None, Some(9)]);
    }

    #[test]
    fn test_format_value() {
        let config = DisplayConfig::default();
        assert_eq!(format_value(1.5, &config), "1.5");
        assert_eq!(format_value(2.0, &config.clone().with_precision(2)), "2.00");
    }
}
