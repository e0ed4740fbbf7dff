//! Left-margin clustering over item x positions.

use serde::{Deserialize, Serialize};

use crate::layout::tolerances::LayoutTolerances;
use crate::models::document::TextItem;

/// A group of items sharing (approximately) the same left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginCluster {
    /// Mean left edge of the members.
    pub position: f32,
    pub members: usize,
}

/// Clusters item left edges into candidate margins.
///
/// Sorted x values are swept once; a value joins the open cluster when it lies
/// within `cluster_tolerance_ratio * page_width` of the cluster mean. Clusters
/// with fewer than `min_cluster_members` members are discarded.
pub fn cluster_left_margins(
    items: &[TextItem],
    page_width: f32,
    tolerances: &LayoutTolerances,
) -> Vec<MarginCluster> {
    let tolerance = tolerances.cluster_tolerance_ratio * page_width;
    let mut xs: Vec<f32> = items.iter().map(|i| i.x).filter(|x| x.is_finite()).collect();
    xs.sort_by(|a, b| a.total_cmp(b));

    let mut clusters = Vec::new();
    let mut sum = 0.0_f32;
    let mut count = 0usize;

    for x in xs {
        if count > 0 && (x - sum / count as f32).abs() > tolerance {
            push_if_populated(&mut clusters, sum, count, tolerances.min_cluster_members);
            sum = 0.0;
            count = 0;
        }
        sum += x;
        count += 1;
    }
    push_if_populated(&mut clusters, sum, count, tolerances.min_cluster_members);

    clusters
}

fn push_if_populated(clusters: &mut Vec<MarginCluster>, sum: f32, count: usize, min: usize) {
    if count >= min && count > 0 {
        clusters.push(MarginCluster {
            position: sum / count as f32,
            members: count,
        });
    }
}

/// True when the margin clusters populate the left, middle and right thirds of the page.
pub fn spans_all_thirds(clusters: &[MarginCluster], page_width: f32) -> bool {
    if page_width <= 0.0 {
        return false;
    }
    let mut occupied = [false; 3];
    for cluster in clusters {
        let third = ((cluster.position / page_width) * 3.0).floor();
        let idx = third.clamp(0.0, 2.0) as usize;
        occupied[idx] = true;
    }
    occupied.iter().all(|&o| o)
}
