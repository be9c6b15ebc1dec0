use core_types::TabularResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Data for the "players per country" histogram, always computed over the
/// unfiltered ranked-competitor view so the distribution stays comparable
/// while a country filter is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    pub title: String,
    pub buckets: Vec<HistogramBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub label: String,
    pub count: u64,
}

/// Data for the "top 10 players by points" bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSpec {
    pub title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: Decimal,
}

/// Counts competitors per `country` over a ranked-competitor view.
///
/// Buckets appear in first-occurrence order, which is deterministic because
/// the join is stable. Rows with a null country are skipped rather than
/// bucketed under a synthetic label.
pub fn country_histogram(rows: &TabularResult) -> HistogramSpec {
    let mut spec = HistogramSpec {
        title: "Number of Players per Country (Overall)".to_string(),
        buckets: Vec::new(),
    };
    let Some(idx) = rows.column_index("country") else {
        return spec;
    };
    for row in rows.rows() {
        let Some(country) = row[idx].as_str() else {
            continue;
        };
        match spec.buckets.iter_mut().find(|b| b.label == country) {
            Some(bucket) => bucket.count += 1,
            None => spec.buckets.push(HistogramBucket {
                label: country.to_string(),
                count: 1,
            }),
        }
    }
    spec
}

/// Builds `(name, points)` bars from a top-N view, in its (rank) order.
/// Rows missing a name or a numeric points value are skipped.
pub fn points_bar(top: &TabularResult) -> BarChartSpec {
    let mut spec = BarChartSpec {
        title: "Top 10 Players by Points (Overall)".to_string(),
        bars: Vec::new(),
    };
    let (Some(name_idx), Some(points_idx)) =
        (top.column_index("name"), top.column_index("points"))
    else {
        return spec;
    };
    for row in top.rows() {
        let (Some(name), Some(points)) = (row[name_idx].as_str(), row[points_idx].as_number())
        else {
            continue;
        };
        spec.bars.push(Bar {
            label: name.to_string(),
            value: points,
        });
    }
    spec
}
