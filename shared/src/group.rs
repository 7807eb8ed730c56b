//! Part-Number Grouper
//!
//! Collapses articles sharing a part number into one table row while
//! keeping the underlying records reachable as group members.

use std::collections::HashMap;

use crate::models::{ArticleGroup, ArticleRecord, InventoryRow};

/// Group a flat article list by trimmed part number
///
/// Output order is the first-seen order of part numbers; ordering is
/// explicit (an insertion-order bucket list), never hash-map iteration
/// order, so the result is deterministic for a given input.
///
/// Articles whose part number is empty or whitespace-only have no group
/// key and are dropped from the output entirely. The grouped view can
/// therefore contain fewer records than the input.
pub fn group_by_part_number(articles: &[ArticleRecord]) -> Vec<InventoryRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<Vec<ArticleRecord>> = Vec::new();

    for article in articles {
        let key = article.part_number.trim();
        if key.is_empty() {
            continue;
        }
        match index.get(key) {
            Some(&slot) => buckets[slot].push(article.clone()),
            None => {
                index.insert(key, buckets.len());
                buckets.push(vec![article.clone()]);
            }
        }
    }

    buckets
        .into_iter()
        .map(|mut bucket| {
            if bucket.len() == 1 {
                InventoryRow::Single(bucket.remove(0))
            } else {
                InventoryRow::Group(ArticleGroup {
                    article: bucket[0].clone(),
                    group_count: bucket.len(),
                    members: bucket,
                })
            }
        })
        .collect()
}
