//! Plotly figure construction.
//!
//! Figures serialize to the JSON shape plotly.js expects, so a page only has
//! to hand `data` and `layout` to `Plotly.newPlot`.

use market_data::analysis::{CorrelationMatrix, Interval};
use market_data::data::{Column, Dataset, Observation};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Heatmap colours, stops evenly spaced over [0, 1]. Without `zmin`/`zmax`
/// plotly stretches them over the observed range of the matrix.
pub const HEATMAP_COLORS: [&str; 5] = ["#FFDDE3", "#C76D7E", "#9F8082", "#AD9B9A", "#6ACBDE"];

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Value,
}

impl Figure {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// JSON safe to place inside an inline `<script>` element
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(self.to_json()?.replace("</", "<\\/"))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(Scatter),
    Heatmap(Heatmap),
}

#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Scatter {
    pub fn new(x: Vec<String>, y: Vec<f64>, name: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            mode: None,
            xaxis: None,
            yaxis: None,
        }
    }

    pub fn lines(mut self) -> Self {
        self.mode = Some("lines");
        self
    }

    /// Place the trace on the axes of a subplot cell
    pub fn on(mut self, cell: &SubplotCell) -> Self {
        self.xaxis = Some(cell.x_ref.clone());
        self.yaxis = Some(cell.y_ref.clone());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub z: Vec<Vec<f64>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: Vec<(f64, String)>,
    pub colorbar: Value,
}

/// Axis references of one cell in a subplot grid
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotCell {
    pub x_ref: String,
    pub y_ref: String,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
}

/// A rows × cols grid laid out like plotly's `make_subplots` defaults
#[derive(Debug, Clone)]
pub struct SubplotGrid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<SubplotCell>,
}

impl SubplotGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let h_spacing = 0.2 / cols as f64;
        let v_spacing = 0.3 / rows as f64;
        let width = (1.0 - h_spacing * (cols - 1) as f64) / cols as f64;
        let height = (1.0 - v_spacing * (rows - 1) as f64) / rows as f64;

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let k = r * cols + c + 1;
                let suffix = if k == 1 { String::new() } else { k.to_string() };
                let x0 = c as f64 * (width + h_spacing);
                let top = 1.0 - r as f64 * (height + v_spacing);
                cells.push(SubplotCell {
                    x_ref: format!("x{suffix}"),
                    y_ref: format!("y{suffix}"),
                    x_domain: [x0, x0 + width],
                    y_domain: [top - height, top],
                });
            }
        }

        Self { rows, cols, cells }
    }

    /// Cell at 1-based `row` and `col`, as `make_subplots` numbers them
    pub fn cell(&self, row: usize, col: usize) -> &SubplotCell {
        &self.cells[(row - 1) * self.cols + (col - 1)]
    }

    /// Axis definitions plus one title annotation per cell
    pub fn layout(&self, titles: &[&str]) -> Map<String, Value> {
        let mut layout = Map::new();
        let mut annotations = Vec::new();

        for (i, cell) in self.cells.iter().enumerate() {
            let suffix = &cell.x_ref[1..];
            layout.insert(
                format!("xaxis{suffix}"),
                json!({ "domain": cell.x_domain, "anchor": cell.y_ref, "showgrid": false }),
            );
            layout.insert(
                format!("yaxis{suffix}"),
                json!({ "domain": cell.y_domain, "anchor": cell.x_ref, "showgrid": false }),
            );

            if let Some(title) = titles.get(i) {
                annotations.push(json!({
                    "text": title,
                    "x": (cell.x_domain[0] + cell.x_domain[1]) / 2.0,
                    "y": cell.y_domain[1],
                    "xref": "paper",
                    "yref": "paper",
                    "xanchor": "center",
                    "yanchor": "bottom",
                    "showarrow": false,
                    "font": { "size": 16 }
                }));
            }
        }

        layout.insert("annotations".to_string(), Value::Array(annotations));
        layout
    }
}

/// Four-panel overview: index price with both SMAs, crude, GDP, Fed rate
pub fn time_series_figure(dataset: &Dataset) -> Figure {
    let grid = SubplotGrid::new(2, 2);
    let dates = dataset.dates();

    let data = vec![
        Trace::Scatter(Scatter::new(dates.clone(), dataset.column(Column::Nasdaq100Price), "Price").on(grid.cell(1, 1))),
        Trace::Scatter(Scatter::new(dates.clone(), dataset.column(Column::Sma50), "SMA 50").on(grid.cell(1, 1))),
        Trace::Scatter(Scatter::new(dates.clone(), dataset.column(Column::Sma100), "SMA 100").on(grid.cell(1, 1))),
        Trace::Scatter(Scatter::new(dates.clone(), dataset.column(Column::CrudePrice), "Price").on(grid.cell(1, 2))),
        Trace::Scatter(Scatter::new(dates.clone(), dataset.column(Column::Gdp), "GDP").on(grid.cell(2, 1))),
        Trace::Scatter(Scatter::new(dates, dataset.column(Column::FedRate), "Fed Rate").on(grid.cell(2, 2))),
    ];

    let mut layout = grid.layout(&["Nasdaq 100", "Crude Price", "GDP", "Fed Rate"]);
    layout.insert("height".to_string(), json!(600));
    layout.insert("width".to_string(), json!(800));
    layout.insert("title".to_string(), json!({ "text": "Time Series Plots" }));

    Figure {
        data,
        layout: Value::Object(layout),
    }
}

/// Heatmap of a correlation matrix with the fixed five-colour scale
pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> Figure {
    let labels: Vec<String> = matrix.labels.iter().map(|l| l.to_string()).collect();
    let last = (HEATMAP_COLORS.len() - 1) as f64;
    let colorscale = HEATMAP_COLORS
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64 / last, c.to_string()))
        .collect();

    let heatmap = Heatmap {
        z: matrix.values.clone(),
        x: labels.clone(),
        y: labels,
        colorscale,
        colorbar: json!({ "title": { "text": "Correlation Coefficient" } }),
    };

    Figure {
        data: vec![Trace::Heatmap(heatmap)],
        layout: json!({
            "title": { "text": "Correlation Matrix" },
            "xaxis": { "title": { "text": "Features" } },
            "yaxis": { "title": { "text": "Features" } }
        }),
    }
}

/// Index price and moving averages over the rows selected by `interval`
pub fn interval_figure(rows: &[Observation], interval: Interval) -> Figure {
    let dates: Vec<String> = rows.iter().map(|r| r.date.clone()).collect();
    let series = |column: Column| rows.iter().map(|r| column.value(r)).collect::<Vec<f64>>();

    let data = vec![
        Trace::Scatter(Scatter::new(dates.clone(), series(Column::Nasdaq100Price), "Nasdaq100 Price").lines()),
        Trace::Scatter(Scatter::new(dates.clone(), series(Column::Sma50), "SMA 50").lines()),
        Trace::Scatter(Scatter::new(dates, series(Column::Sma100), "SMA 100").lines()),
    ];

    tracing::debug!("Built {} chart with {} points", interval, rows.len());

    Figure {
        data,
        layout: json!({
            "title": { "text": "Nasdaq100 Price and Moving Averages" },
            "xaxis": { "title": { "text": "Date" }, "rangeslider": { "visible": false } },
            "yaxis": { "title": { "text": "Price" } },
            "showlegend": true
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_data::analysis::correlation_matrix;
    use market_data::data::RawObservation;

    fn dataset(len: usize) -> Dataset {
        let raw = (0..len + 99)
            .map(|i| RawObservation::new(format!("d{i}"), i as f64, (i % 7) as f64, i as f64 * 2.0, 1.0 + (i % 3) as f64))
            .collect();
        Dataset::from_raw(raw).unwrap()
    }

    #[test]
    fn test_grid_domains() {
        let grid = SubplotGrid::new(2, 2);
        let top_left = grid.cell(1, 1);
        let bottom_right = grid.cell(2, 2);

        assert_eq!(top_left.x_ref, "x");
        assert_eq!(bottom_right.y_ref, "y4");
        assert!((top_left.x_domain[1] - 0.45).abs() < 1e-12);
        assert!((top_left.y_domain[0] - 0.575).abs() < 1e-12);
        assert!((bottom_right.x_domain[0] - 0.55).abs() < 1e-12);
        assert!((bottom_right.y_domain[1] - 0.425).abs() < 1e-12);
    }

    #[test]
    fn test_time_series_figure() {
        let figure = time_series_figure(&dataset(10));
        let value = serde_json::to_value(&figure).unwrap();

        assert_eq!(value["data"].as_array().unwrap().len(), 6);
        assert_eq!(value["data"][0]["type"], "scatter");
        assert_eq!(value["data"][3]["xaxis"], "x2");
        assert_eq!(value["data"][5]["name"], "Fed Rate");
        assert_eq!(value["layout"]["height"], 600);
        assert_eq!(value["layout"]["annotations"][2]["text"], "GDP");
        assert_eq!(value["layout"]["xaxis3"]["showgrid"], false);
    }

    #[test]
    fn test_heatmap_colorscale() {
        let data = dataset(20);
        let figure = correlation_heatmap(&correlation_matrix(&data, &Column::SOURCE));
        let value = serde_json::to_value(&figure).unwrap();
        let trace = &value["data"][0];

        assert_eq!(trace["type"], "heatmap");
        assert_eq!(trace["colorscale"][0], json!([0.0, "#FFDDE3"]));
        assert_eq!(trace["colorscale"][4], json!([1.0, "#6ACBDE"]));
        assert_eq!(trace["x"][3], "FED rate");
        assert_eq!(trace["colorbar"]["title"]["text"], "Correlation Coefficient");
    }

    #[test]
    fn test_heatmap_constant_column_serializes_null() {
        // crude price is constant, so its correlations are undefined
        let raw = (0..120)
            .map(|i| RawObservation::new(format!("d{i}"), i as f64, 70.0, i as f64 * 2.0, 1.0 + (i % 3) as f64))
            .collect();
        let data = Dataset::from_raw(raw).unwrap();
        let figure = correlation_heatmap(&correlation_matrix(&data, &Column::SOURCE));
        let value = serde_json::to_value(&figure).unwrap();
        let z = &value["data"][0]["z"];

        for i in 0..4 {
            assert_eq!(z[i][i], json!(1.0));
            if i != 1 {
                assert!(z[1][i].is_null());
                assert!(z[i][1].is_null());
            }
        }
        assert!(z[0][2].is_f64());
    }

    #[test]
    fn test_interval_figure() {
        let data = dataset(30);
        let figure = interval_figure(Interval::OneWeek.filter(&data), Interval::OneWeek);
        let value = serde_json::to_value(&figure).unwrap();

        for trace in value["data"].as_array().unwrap() {
            assert_eq!(trace["x"].as_array().unwrap().len(), 7);
            assert_eq!(trace["mode"], "lines");
        }
        assert_eq!(value["layout"]["xaxis"]["rangeslider"]["visible"], false);
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let figure = Figure {
            data: vec![Trace::Scatter(Scatter::new(vec!["</script>".to_string()], vec![1.0], "x"))],
            layout: json!({}),
        };
        let json = figure.to_script_json().unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }
}
