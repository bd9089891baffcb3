//! Histogram bar charts for numeric columns.
//!
//! The chart engine (Chart.js, loaded in index.html) stays on the JS side;
//! this module builds a plain config value and hands it to the `Chart`
//! constructor through wasm-bindgen.

use contracts::analysis::Histogram;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

const BAR_FILL: &str = "rgba(0, 123, 255, 0.5)";
const BAR_BORDER: &str = "rgba(0, 123, 255, 1)";
const TICK_ROTATION: u32 = 70;

/// Chart.js config subset used for histograms
#[derive(Debug, Clone, Serialize)]
pub struct BarChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
    #[serde(rename = "borderColor")]
    pub border_color: &'static str,
    #[serde(rename = "borderWidth")]
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scales {
    pub x: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticks {
    #[serde(rename = "maxRotation")]
    pub max_rotation: u32,
    #[serde(rename = "minRotation")]
    pub min_rotation: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub display: bool,
}

/// Bar chart over histogram bins: one bar per count, labelled by the bin's
/// upper edge to one decimal place. The first edge is only the lower bound
/// of the first bin and gets no label of its own.
pub fn histogram_config(histogram: &Histogram) -> BarChartConfig {
    let labels = histogram
        .bins
        .iter()
        .skip(1)
        .map(|edge| format!("{:.1}", edge))
        .collect();

    BarChartConfig {
        chart_type: "bar",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Frequency",
                data: histogram.counts.clone(),
                background_color: BAR_FILL,
                border_color: BAR_BORDER,
                border_width: 1,
            }],
        },
        options: ChartOptions {
            scales: Scales {
                x: Axis {
                    ticks: Ticks {
                        max_rotation: TICK_ROTATION,
                        min_rotation: TICK_ROTATION,
                    },
                },
            },
            plugins: Plugins {
                legend: Legend { display: false },
            },
        },
    }
}

/// Instantiate a chart on a mounted canvas via the global `Chart`
/// constructor.
pub fn render_histogram(canvas: &HtmlCanvasElement, config: &BarChartConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let chart_ctor = js_sys::Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !chart_ctor.is_function() {
        return Err(JsValue::from_str("Chart constructor not found on window"));
    }
    let chart_ctor: js_sys::Function = chart_ctor.dyn_into()?;

    let config_value = config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let args = js_sys::Array::of2(canvas.as_ref(), &config_value);
    js_sys::Reflect::construct(&chart_ctor, &args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram() -> Histogram {
        Histogram {
            bins: vec![0.0, 2.5, 5.0, 7.5, 10.0],
            counts: vec![4, 0, 9, 2],
        }
    }

    #[test]
    fn test_labels_skip_first_edge() {
        let config = histogram_config(&histogram());
        assert_eq!(config.data.labels, ["2.5", "5.0", "7.5", "10.0"]);
        assert_eq!(config.data.labels.len(), histogram().bins.len() - 1);
    }

    #[test]
    fn test_labels_round_to_one_decimal() {
        let config = histogram_config(&Histogram {
            bins: vec![0.0, 3.333333, 6.666666],
            counts: vec![1, 2],
        });
        assert_eq!(config.data.labels, ["3.3", "6.7"]);
    }

    #[test]
    fn test_one_bar_per_count() {
        let config = histogram_config(&histogram());
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].data, [4, 0, 9, 2]);
    }

    #[test]
    fn test_fixed_styling() {
        let config = histogram_config(&histogram());
        let dataset = &config.data.datasets[0];
        assert_eq!(dataset.background_color, BAR_FILL);
        assert_eq!(dataset.border_color, BAR_BORDER);
        assert_eq!(dataset.border_width, 1);
        assert!(!config.options.plugins.legend.display);
        assert_eq!(config.options.scales.x.ticks.max_rotation, 70);
        assert_eq!(config.options.scales.x.ticks.min_rotation, 70);
    }

    #[test]
    fn test_config_serializes_with_chartjs_keys() {
        let value = serde_json::to_value(histogram_config(&histogram())).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], BAR_FILL);
        assert_eq!(value["options"]["scales"]["x"]["ticks"]["maxRotation"], 70);
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
    }
}
