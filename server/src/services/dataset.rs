use std::path::Path;

use tracing::{info, warn};

use gazette_shared::parse_csv;

use crate::config::DATA_FILE;

/// Parse the bundled dataset once at startup so deployment mistakes (missing
/// file, empty export) show up in the logs before the first client fetch.
///
/// The server never blocks on this: a missing dataset still serves the
/// viewer, it just renders without rows.
pub fn record_count(site_root: &Path) -> Option<usize> {
    let path = site_root.join(DATA_FILE);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), "publications dataset not readable: {e}");
            return None;
        }
    };

    let count = parse_csv(&text).len();
    if count == 0 {
        warn!(path = %path.display(), "publications dataset parsed to zero records");
    } else {
        info!("loaded {count} publication records from {DATA_FILE}");
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::record_count;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gazette-dataset-{label}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn counts_records_in_a_valid_dataset() {
        let dir = scratch_dir("valid");
        std::fs::write(
            dir.join("data.csv"),
            "issue_date,place_of_publication\n1775-03-01,Boston [Mass.]\n1790-01-01,Newport [R.I.]\n",
        )
        .expect("write dataset");

        assert_eq!(record_count(&dir), Some(2));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_dataset_reports_none() {
        let dir = scratch_dir("missing");
        assert_eq!(record_count(&dir), None);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn header_only_dataset_counts_zero() {
        let dir = scratch_dir("empty");
        std::fs::write(dir.join("data.csv"), "issue_date,place_of_publication\n")
            .expect("write dataset");

        assert_eq!(record_count(&dir), Some(0));

        std::fs::remove_dir_all(&dir).ok();
    }
}
