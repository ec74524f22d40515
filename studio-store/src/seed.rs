use chrono::{Duration, Utc};
use studio_catalog::{ClassCatalog, ClassSession};

/// Build the seed catalog: three classes at upcoming times.
///
/// Recreated on every process start; nothing persists between runs.
pub fn seed_catalog() -> ClassCatalog {
    let now = Utc::now();
    let mut catalog = ClassCatalog::new();

    let sessions = [
        ClassSession {
            id: 1,
            name: "Yoga".to_string(),
            instructor: "Priya".to_string(),
            start_time: now + Duration::hours(33),
            capacity: 10,
        },
        ClassSession {
            id: 2,
            name: "Zumba".to_string(),
            instructor: "Carlos".to_string(),
            start_time: now + Duration::hours(41),
            capacity: 15,
        },
        ClassSession {
            id: 3,
            name: "HIIT".to_string(),
            instructor: "Aisha".to_string(),
            start_time: now + Duration::hours(55),
            capacity: 12,
        },
    ];

    for session in sessions {
        if let Err(err) = catalog.insert(session) {
            tracing::warn!("Skipping seed session: {}", err);
        }
    }

    tracing::info!("Seeded {} classes", catalog.len());
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 3);

        let yoga = catalog.get(1).unwrap();
        assert_eq!(yoga.name, "Yoga");
        assert_eq!(yoga.instructor, "Priya");
        assert_eq!(yoga.capacity, 10);

        // All seeded sessions start in the future
        let now = Utc::now();
        for session in catalog.sessions_by_start() {
            assert!(session.start_time > now);
        }
    }
}
