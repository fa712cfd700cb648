//! Static HTML chart rendering.
//!
//! Charts are emitted as self-contained HTML pages that load plotly.js
//! from its CDN and inline the data arrays. This keeps the service layer
//! free of native rendering dependencies; a browser does the drawing.

/// Page template shared by both charts.
const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>__TITLE__</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { margin: 0; font-family: "Segoe UI", Helvetica, Arial, sans-serif; }
    #chart { width: 100vw; height: 100vh; }
  </style>
</head>
<body>
  <div id="chart"></div>
  <script>
    Plotly.newPlot("chart", __TRACES__, __LAYOUT__, { responsive: true });
  </script>
</body>
</html>
"#;

/// Renders a line chart of simulated price paths.
pub fn sample_paths_page(paths: &[Vec<f64>]) -> String {
    let traces: Vec<String> = paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            format!(
                r#"{{ "y": {}, "mode": "lines", "name": "path {}" }}"#,
                json_array(path),
                i + 1
            )
        })
        .collect();

    let layout = r#"{ "title": { "text": "Sample GBM Price Paths" },
      "xaxis": { "title": { "text": "Time Steps" } },
      "yaxis": { "title": { "text": "Stock Price" } } }"#;

    render(
        "Sample GBM Price Paths",
        &format!("[{}]", traces.join(",")),
        layout,
    )
}

/// Renders a histogram of the payoff sample.
pub fn payoff_histogram_page(payoffs: &[f64], bins: usize) -> String {
    let trace = format!(
        r#"[{{ "x": {}, "type": "histogram", "nbinsx": {bins} }}]"#,
        json_array(payoffs)
    );

    let layout = r#"{ "title": { "text": "Distribution of Option Payoffs" },
      "xaxis": { "title": { "text": "Payoff" } },
      "yaxis": { "title": { "text": "Frequency" } } }"#;

    render("Distribution of Option Payoffs", &trace, layout)
}

fn render(title: &str, traces: &str, layout: &str) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", title)
        .replace("__TRACES__", traces)
        .replace("__LAYOUT__", layout)
}

/// Formats a float slice as a JSON array literal.
fn json_array(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 10 + 2);
    out.push('[');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // NaN/inf have no JSON literal; plotly treats null as a gap.
        if value.is_finite() {
            out.push_str(&format!("{value:.6}"));
        } else {
            out.push_str("null");
        }
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_formatting() {
        assert_eq!(json_array(&[]), "[]");
        assert_eq!(json_array(&[1.0]), "[1.000000]");
        assert_eq!(json_array(&[1.0, 2.5]), "[1.000000,2.500000]");
        assert_eq!(json_array(&[f64::NAN]), "[null]");
    }

    #[test]
    fn test_sample_paths_page_contains_traces() {
        let page = sample_paths_page(&[vec![100.0, 101.0], vec![100.0, 99.0]]);

        assert!(page.contains("cdn.plot.ly"));
        assert!(page.contains(r#""name": "path 1""#));
        assert!(page.contains(r#""name": "path 2""#));
        assert!(page.contains("[100.000000,101.000000]"));
    }

    #[test]
    fn test_histogram_page_sets_bin_count() {
        let page = payoff_histogram_page(&[0.0, 1.5, 3.0], 50);

        assert!(page.contains(r#""type": "histogram""#));
        assert!(page.contains(r#""nbinsx": 50"#));
        assert!(page.contains("Distribution of Option Payoffs"));
    }
}
