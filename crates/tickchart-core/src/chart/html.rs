use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use super::{ChartData, ChartRenderer, RenderHandle};
use crate::RenderError;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Light palette, one colour per plotted series.
const PALETTE: [&str; 4] = ["#242424", "#9f6767", "#92ac68", "#d0d293"];

/// Writes a standalone HTML page drawing the chart with Chart.js and,
/// optionally, opens it in the default browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlChartRenderer {
    output_dir: PathBuf,
    open_browser: bool,
}

impl HtmlChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, open_browser: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            open_browser,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, chart: &ChartData) -> PathBuf {
        self.output_dir
            .join(format!("{}-{}.html", slug(&chart.title), chart.kind.as_str().to_ascii_lowercase()))
    }
}

impl Default for HtmlChartRenderer {
    fn default() -> Self {
        Self::new(std::env::temp_dir(), true)
    }
}

impl ChartRenderer for HtmlChartRenderer {
    fn render(&self, chart: &ChartData) -> Result<RenderHandle, RenderError> {
        let page = render_page(chart)?;
        let path = self.path_for(chart);

        std::fs::write(&path, page).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "chart written");

        if self.open_browser {
            let target = format!("file://{}", path.display());
            webbrowser::open(&target).map_err(RenderError::Browser)?;
        }

        Ok(RenderHandle {
            path: Some(path),
            opened: self.open_browser,
        })
    }
}

/// Chart.js configuration object for `chart`.
pub fn chart_config(chart: &ChartData) -> Value {
    let datasets: Vec<Value> = chart
        .series
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(series, colour)| {
            json!({
                "label": series.name,
                "data": series.values,
                "borderColor": colour,
                "backgroundColor": colour,
            })
        })
        .collect();

    json!({
        "type": chart.kind,
        "data": {
            "labels": chart.x_labels,
            "datasets": datasets,
        },
        "options": {
            "plugins": {
                "title": { "display": true, "text": chart.title },
                "legend": { "display": chart.style.show_legend },
            },
            "scales": {
                "x": {
                    "ticks": {
                        "minRotation": chart.style.x_label_rotation,
                        "maxRotation": chart.style.x_label_rotation,
                        "autoSkip": !chart.style.show_minor_x_labels,
                    }
                }
            }
        }
    })
}

fn render_page(chart: &ChartData) -> Result<String, RenderError> {
    // `</` inside a script block would close it early.
    let config = serde_json::to_string(&chart_config(chart))?.replace("</", "<\\/");
    let truncate = chart.style.truncate_label;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{CHART_JS_CDN}"></script>
<style>body {{ background: #ffffff; font-family: sans-serif; margin: 2em; }}</style>
</head>
<body>
<canvas id="chart"></canvas>
<script>
const config = {config};
config.options.scales.x.ticks.callback = function (value) {{
  const label = this.getLabelForValue(value);
  return label.length > {truncate} ? label.slice(0, {truncate} - 1) + "…" : label;
}};
new Chart(document.getElementById("chart"), config);
</script>
</body>
</html>
"#,
        title = escape_html(&chart.title),
    ))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn slug(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartSeries, ChartStyle};
    use crate::ChartKind;

    fn chart(kind: ChartKind) -> ChartData {
        ChartData {
            kind,
            title: String::from("Stock Data for IBM: 2024-01-01 to 2024-01-31"),
            x_labels: vec![String::from("2024-01-02")],
            series: ["Open", "High", "Low", "Close"]
                .into_iter()
                .map(|name| ChartSeries {
                    name,
                    values: vec![1.0],
                })
                .collect(),
            style: ChartStyle::default(),
        }
    }

    #[test]
    fn config_uses_chart_kind_as_chart_js_type() {
        assert_eq!(chart_config(&chart(ChartKind::Bar))["type"], "bar");
        assert_eq!(chart_config(&chart(ChartKind::Line))["type"], "line");
    }

    #[test]
    fn config_keeps_series_order_and_style() {
        let config = chart_config(&chart(ChartKind::Line));
        let labels: Vec<&str> = config["data"]["datasets"]
            .as_array()
            .expect("datasets array")
            .iter()
            .map(|dataset| dataset["label"].as_str().expect("label"))
            .collect();
        assert_eq!(labels, vec!["Open", "High", "Low", "Close"]);
        assert_eq!(config["options"]["scales"]["x"]["ticks"]["maxRotation"], 20);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], true);
    }

    #[test]
    fn file_name_is_derived_from_title_and_kind() {
        let renderer = HtmlChartRenderer::new("/charts", false);
        assert_eq!(
            renderer.path_for(&chart(ChartKind::Bar)),
            PathBuf::from("/charts/stock-data-for-ibm-2024-01-01-to-2024-01-31-bar.html")
        );
    }

    #[test]
    fn writes_page_without_opening_browser() {
        let dir = tempfile::tempdir().expect("temp dir");
        let renderer = HtmlChartRenderer::new(dir.path(), false);

        let handle = renderer.render(&chart(ChartKind::Line)).expect("render");
        let path = handle.path.expect("written path");
        let page = std::fs::read_to_string(&path).expect("page readable");

        assert!(!handle.opened);
        assert!(page.contains("<title>Stock Data for IBM: 2024-01-01 to 2024-01-31</title>"));
        assert!(page.contains("\"type\":\"line\""));
    }

    #[test]
    fn escapes_script_terminators() {
        let mut chart = chart(ChartKind::Line);
        chart.title = String::from("</script><b>");
        let page = render_page(&chart).expect("page");
        assert!(!page.contains("</script><b>"));
        assert!(page.contains("&lt;/script&gt;&lt;b&gt;"));
    }
}
