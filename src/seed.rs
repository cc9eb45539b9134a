//! Seed Loader - first-run sample content
//!
//! When a backend has never been written, the catalog bootstraps it with a
//! small fixed set of well-known robots so a fresh install is browsable.
//! Seeding runs exactly once per backend; subsequent opens attach to the
//! persisted state untouched.

use serde_json::json;

use crate::robot::{Manufacturer, MediaRef, RobotDraft, RobotRecord, RobotStatus, Specification};
use crate::slug::slugify;

/// Built-in sample records, ids allocated sequentially from 1.
#[must_use]
pub fn sample_records() -> Vec<RobotRecord> {
    sample_drafts()
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            let slug = slugify(&draft.name);
            RobotRecord::from_draft(i as u64 + 1, slug, draft)
        })
        .collect()
}

fn sample_drafts() -> Vec<RobotDraft> {
    vec![
        RobotDraft::new("Unimate")
            .manufacturer(Manufacturer {
                name: Some("Unimation".to_string()),
                country: Some("United States".to_string()),
                website: None,
            })
            .year(1961)
            .category("industrial")
            .category("manipulator")
            .summary("The first industrial robot, installed on a General Motors assembly line.")
            .specs(Specification {
                physical: Some(json!({ "weight_kg": 1814, "arms": 1 })),
                performance: Some(json!({ "payload_kg": 11 })),
                sensors: None,
            })
            .status(RobotStatus::Published),
        RobotDraft::new("ASIMO")
            .manufacturer(Manufacturer {
                name: Some("Honda".to_string()),
                country: Some("Japan".to_string()),
                website: Some("https://global.honda".to_string()),
            })
            .year(2000)
            .category("humanoid")
            .category("bipedal")
            .summary("Honda's long-running humanoid research platform.")
            .specs(Specification {
                physical: Some(json!({ "height_cm": 130, "weight_kg": 48 })),
                performance: Some(json!({ "walk_speed_kmh": 2.7, "run_speed_kmh": 9 })),
                sensors: Some(json!(["camera", "ground", "ultrasonic"])),
            })
            .status(RobotStatus::Published),
        RobotDraft::new("Spot")
            .manufacturer(Manufacturer {
                name: Some("Boston Dynamics".to_string()),
                country: Some("United States".to_string()),
                website: Some("https://bostondynamics.com".to_string()),
            })
            .year(2019)
            .category("quadruped")
            .category("inspection")
            .summary("Agile quadruped for industrial inspection and data collection.")
            .specs(Specification {
                physical: Some(json!({ "height_cm": 84, "weight_kg": 32.5 })),
                performance: Some(json!({ "speed_ms": 1.6, "runtime_min": 90 })),
                sensors: Some(json!(["stereo cameras", "depth", "IMU"])),
            })
            .media(crate::robot::MediaBlock {
                featured: Some(
                    MediaRef::url("https://bostondynamics.com/spot.jpg").caption("Spot"),
                ),
                images: vec![],
                videos: vec![],
            })
            .status(RobotStatus::Published),
        RobotDraft::new("Curiosity")
            .manufacturer(Manufacturer {
                name: Some("NASA JPL".to_string()),
                country: Some("United States".to_string()),
                website: Some("https://mars.nasa.gov".to_string()),
            })
            .year(2012)
            .category("rover")
            .category("exploration")
            .summary("Car-sized rover exploring Gale crater on Mars.")
            .specs(Specification {
                physical: Some(json!({ "length_m": 2.9, "weight_kg": 899 })),
                performance: Some(json!({ "top_speed_cms": 4 })),
                sensors: Some(json!(["mastcam", "chemcam", "rad"])),
            })
            .status(RobotStatus::Published),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_sequential_from_one() {
        let records = sample_records();
        assert!(!records.is_empty());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id(), i as u64 + 1);
        }
    }

    #[test]
    fn test_sample_slugs_unique_and_derived() {
        let records = sample_records();
        let slugs: HashSet<&str> = records.iter().map(RobotRecord::slug).collect();
        assert_eq!(slugs.len(), records.len());
        for record in &records {
            assert_eq!(record.slug(), slugify(record.name()));
        }
    }

    #[test]
    fn test_samples_are_published() {
        for record in sample_records() {
            assert_eq!(record.status(), RobotStatus::Published);
        }
    }
}
