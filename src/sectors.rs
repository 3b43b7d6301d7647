//! Works out which storms to fetch and where their track files live.

/// Storm ids from the sector listing that belong to `basin`.
///
/// The id is the first token of each line. Ids are kept in listing order
/// without repeats.
pub fn active_storm_ids(sector_text: &str, basin: &str) -> Vec<String> {
    let basin = basin.to_lowercase();
    let mut ids: Vec<String> = Vec::new();

    for line in sector_text.lines() {
        let Some(id) = line.split_whitespace().next() else {
            continue;
        };
        if !id.to_lowercase().contains(&basin) {
            continue;
        }
        let id = id.to_uppercase();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    ids
}

/// Every id `<basin><NN><year>` for storm numbers in `numbers`.
pub fn season_storm_ids(basin: &str, year: i32, numbers: std::ops::RangeInclusive<u32>) -> Vec<String> {
    numbers
        .map(|n| format!("{}{:02}{}", basin.to_uppercase(), n, year))
        .collect()
}

pub fn track_url(root: &str, season: i32, storm_id: &str) -> String {
    let storm_id = storm_id.to_uppercase();
    let basin: String = storm_id.chars().take(2).collect();

    format!(
        "{}/tc{}/{}/{}/txt/trackfile.txt",
        root.trim_end_matches('/'),
        season,
        basin,
        storm_id
    )
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const SECTORS: &str = "\
al142024 MILTON 241009 1800 25.1N 085.3W AL 85 965
wp222024 TRAMI 241025 0000 16.0N 117.5E WP 55 985

al152024 LESLIE 241009 1800 15.1N 040.3W AL 65 985
al142024 MILTON 241009 1800 25.1N 085.3W AL 85 965
";

    #[test]
    fn should_filter_by_basin() {
        let ids = active_storm_ids(SECTORS, "al");
        assert_eq!(ids, vec!["AL142024".to_string(), "AL152024".to_string()]);

        let ids = active_storm_ids(SECTORS, "WP");
        assert_eq!(ids, vec!["WP222024".to_string()]);

        assert!(active_storm_ids(SECTORS, "sh").is_empty());
    }

    #[test]
    fn should_generate_season_ids() {
        let ids = season_storm_ids("al", 2022, 1..=20);

        assert_eq!(ids.len(), 20);
        assert_eq!(ids[0], "AL012022");
        assert_eq!(ids[19], "AL202022");
    }

    #[test]
    fn should_make_track_url() {
        assert_eq!(
            track_url("https://www.nrlmry.navy.mil/tcdat/", 2024, "al142024"),
            "https://www.nrlmry.navy.mil/tcdat/tc2024/AL/AL142024/txt/trackfile.txt"
        );
    }
}
