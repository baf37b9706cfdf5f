//! Compiled-in sample dataset for demo mode.
//!
//! Mirrors the shape of real upstream rows: free-text region labels
//! (some canonical, some aliases), mixed industries, and unevenly
//! populated metric fields. A few regions are deliberately left without
//! rows so the no-data treatment shows up in the demo.

use predictive_pulse_heatmap_models::ObservedRecord;

/// Builds the demo dataset.
#[must_use]
pub fn demo_records() -> Vec<ObservedRecord> {
    vec![
        ObservedRecord {
            region: Some("Khomas".to_string()),
            industry: Some("housing".to_string()),
            growth_rate: Some(15.5),
            risk_level: Some("medium".to_string()),
            investment_volume: Some(42_000_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Walvis Bay".to_string()),
            industry: Some("mining".to_string()),
            growth_rate: Some(11.2),
            risk_score: Some(2.4),
            investment_volume: Some(68_500_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("ǁKaras".to_string()),
            industry: Some("mining".to_string()),
            forecast: Some(18.3),
            risk_level: Some("high".to_string()),
            investment: Some(21_000_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Oshana Region".to_string()),
            industry: Some("agriculture".to_string()),
            growth_rate: Some(6.8),
            risk_level: Some("low".to_string()),
            investment_volume: Some(9_300_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Zambezi".to_string()),
            industry: Some("tourism".to_string()),
            growth_rate: Some(9.1),
            risk_level: Some("medium".to_string()),
            investment: Some(5_750_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Rundu".to_string()),
            industry: Some("agriculture".to_string()),
            forecast: Some(4.4),
            risk_level: Some("low".to_string()),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Otjozondjupa".to_string()),
            industry: Some("agriculture".to_string()),
            growth_rate: Some(7.6),
            risk_score: Some(1.8),
            investment_volume: Some(12_400_000.0),
            ..ObservedRecord::default()
        },
        ObservedRecord {
            region: Some("Kunene".to_string()),
            industry: Some("tourism".to_string()),
            growth_rate: Some(13.9),
            risk_level: Some("high".to_string()),
            investment: Some(3_100_000.0),
            ..ObservedRecord::default()
        },
    ]
}
