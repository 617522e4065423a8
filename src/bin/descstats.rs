//! Fixed-configuration analysis over the social-media dataset families.
//!
//! Paths are deployment constants relative to `data/`; a missing file is
//! reported to stderr and degrades to "no data" without aborting the rest.

use std::io::{self, Write};

use descriptive_stats::config::{DatasetSource, GroupLevel, StatsConfig};
use descriptive_stats::observe::StdErrObserver;
use descriptive_stats::runner::run;

fn fb_ads_config() -> StatsConfig {
    StatsConfig {
        datasets: vec![
            DatasetSource::new("main_ads_cleaned.csv", "data/fb_ads/main_ads_cleaned.csv"),
            DatasetSource::new(
                "unpacked_demographics.csv",
                "data/fb_ads/unpacked_demographics.csv",
            ),
            DatasetSource::new(
                "unpacked_platforms.csv",
                "data/fb_ads/unpacked_platforms.csv",
            ),
            DatasetSource::new("unpacked_mentions.csv", "data/fb_ads/unpacked_mentions.csv"),
            DatasetSource::new(
                "unpacked_delivery_by_region.csv",
                "data/fb_ads/unpacked_delivery_by_region.csv",
            ),
        ],
        group_levels: vec![
            GroupLevel::ungrouped(),
            GroupLevel::by(&["page_id"]),
            GroupLevel::by(&["page_id", "ad_id"]),
        ],
        ..Default::default()
    }
}

fn fb_posts_config() -> StatsConfig {
    StatsConfig {
        datasets: vec![DatasetSource::new(
            "2024_fb_posts_president_scored_anon.csv",
            "data/fb_posts/2024_fb_posts_president_scored_anon.csv",
        )],
        group_levels: vec![
            GroupLevel::ungrouped(),
            GroupLevel::by(&["Facebook_Id"]),
            GroupLevel::by(&["Facebook_Id", "post_id"]),
        ],
        ..Default::default()
    }
}

fn tw_posts_config() -> StatsConfig {
    StatsConfig {
        datasets: vec![DatasetSource::new(
            "2024_tw_posts_president_scored_anon.csv",
            "data/tw_posts/2024_tw_posts_president_scored_anon.csv",
        )],
        group_levels: vec![GroupLevel::ungrouped()],
        ..Default::default()
    }
}

fn main() -> io::Result<()> {
    let observer = StdErrObserver;
    let mut out = io::stdout().lock();

    for (family, config) in [
        ("Facebook ads", fb_ads_config()),
        ("Facebook posts", fb_posts_config()),
        ("Twitter posts", tw_posts_config()),
    ] {
        writeln!(out, "\n############ {family} ############")?;
        run(&config, &mut out, &observer)?;
    }
    Ok(())
}
