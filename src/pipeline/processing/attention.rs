use crate::types::{AdAlgoRow, AttentionRow, ScreenTimeRow};
use std::collections::HashMap;

/// Inner join of screen time and ad/algorithm exposure on `Country`, with
/// `Attention_Index = Avg_Screen_Time_Min * Ad_Algo_Score`.
///
/// Output follows the screen time order. Countries missing from either side
/// are dropped; a country repeated on either side yields one row per pair.
pub fn compute_attention_index(
    screen_time: &[ScreenTimeRow],
    ad_algo: &[AdAlgoRow],
) -> Vec<AttentionRow> {
    let mut scores: HashMap<&str, Vec<f64>> = HashMap::new();
    for row in ad_algo {
        scores
            .entry(row.country.as_str())
            .or_default()
            .push(row.ad_algo_score);
    }

    screen_time
        .iter()
        .flat_map(|time| {
            scores
                .get(time.country.as_str())
                .into_iter()
                .flatten()
                .map(move |&ad_algo_score| AttentionRow {
                    country: time.country.clone(),
                    avg_screen_time_min: time.avg_screen_time_min,
                    ad_algo_score,
                    attention_index: time.avg_screen_time_min * ad_algo_score,
                })
        })
        .collect()
}
