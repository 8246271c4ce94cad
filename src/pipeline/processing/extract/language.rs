use std::collections::HashMap;

use super::ReportSet;
use crate::pipeline::payload::LanguageCount;
use crate::pipeline::processing::normalize::columns::LANGUAGE;
use crate::pipeline::processing::normalize::PlatformTable;
use crate::platform::Platform;

/// Platforms in the order their language counts appear in the payload
pub const LANGUAGE_PLATFORMS: [Platform; 3] = [Platform::JioSaavn, Platform::Wynk, Platform::Airtel];

/// Key for blank language cells. Deliberately the same key Airtel's
/// defaulted `"Unknown"` lowercases to, so both land in one bucket rather
/// than a separate `"nan"` or empty-string entry.
const BLANK_LANGUAGE: &str = "unknown";

/// Song counts per language, computed separately for each platform.
///
/// Counts are not merged across platforms, so the same language can appear
/// once per platform.
pub fn language_distribution(reports: &ReportSet) -> Vec<LanguageCount> {
    reports
        .tables(&LANGUAGE_PLATFORMS)
        .filter(|table| table.has_column(LANGUAGE))
        .flat_map(count_languages)
        .collect()
}

/// Most frequent first; ties keep first-appearance order.
fn count_languages(table: &PlatformTable) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in &table.rows {
        let language = row
            .language()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| BLANK_LANGUAGE.to_string());

        match index.get(&language) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(language.clone(), counts.len());
                counts.push(LanguageCount { language, count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
