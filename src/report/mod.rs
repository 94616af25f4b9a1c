use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use prettytable::{row, Cell, Table};

use crate::runner::Variant;
use crate::sweep::VariantSeries;

/// Builds the aggregated sweep results as a table, one row per element count
/// and one mean-time column per variant.
pub fn results_table(series: &[VariantSeries]) -> Table {
    let mut table = Table::new();

    let mut header = row!["Elements"];
    for s in series {
        header.add_cell(Cell::new(&format!("{} mean time", s.variant)));
    }
    table.add_row(header);

    let point_count = series.first().map_or(0, |s| s.points.len());
    for i in 0..point_count {
        let mut result_row = row![series[0].points[i].element_count];
        for s in series {
            result_row.add_cell(Cell::new(&format!("{:.2}", s.points[i].mean_time)));
        }
        table.add_row(result_row);
    }

    table
}

/// Print the aggregated sweep results in a human-readable format.
pub fn print_results_table(series: &[VariantSeries]) {
    println!();
    results_table(series).printstd();
    println!();
}

/// Renders the size-vs-time series as a comparison chart and displays it.
///
/// `poly_vec` is drawn as bare markers and `unique_ptr_vec` as a
/// line-with-markers trace, so the two curves stay distinguishable where
/// they overlap.
pub fn render_chart(series: &[VariantSeries]) {
    let mut plot = Plot::new();

    for s in series {
        let x: Vec<u64> = s.points.iter().map(|p| p.element_count).collect();
        let y: Vec<f64> = s.points.iter().map(|p| p.mean_time).collect();
        let mode = match s.variant {
            Variant::PolyVec => Mode::Markers,
            Variant::UniquePtrVec => Mode::LinesMarkers,
        };
        plot.add_trace(Scatter::new(x, y).name(s.variant.as_str()).mode(mode));
    }

    plot.set_layout(
        Layout::new()
            .title("poly_vec vs unique_ptr_vec traversal time")
            .x_axis(Axis::new().title("number of elements"))
            .y_axis(Axis::new().title("mean time per run")),
    );

    plot.show();
}
