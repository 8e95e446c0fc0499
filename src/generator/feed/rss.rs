//! RSS 2.0 feed rendering.
//!
//! Items are rendered straight from extracted records; nothing is escaped.
//! The item body is the document's raw `<main>` block inside CDATA, and the
//! meta description is not used here.

use crate::{
    config::SiteInfoConfig,
    embed::feed::{RSS_CHANNEL, RSS_ITEM, RssChannelVars, RssItemVars},
    page::ExtractedRecord,
    utils::date::DateTimeUtc,
};
use ::rss::{Channel, validation::Validate};
use anyhow::{Result, anyhow};

/// Render one `<item>` fragment.
pub fn render_item(record: &ExtractedRecord, site: &SiteInfoConfig) -> String {
    let categories: String = record
        .categories()
        .iter()
        .map(|category| format!("    <category>{category}</category>\n"))
        .collect();
    let link = site.link_for(&record.file_name);
    let pub_date = record.published.to_rfc2822();

    RSS_ITEM.render(&RssItemVars {
        title: &record.meta.title,
        body: &record.body,
        categories: &categories,
        link: &link,
        pub_date: &pub_date,
    })
}

/// Render the complete feed document, items in the given order.
///
/// `now` stamps the channel `pubDate` and the copyright year.
pub fn render_channel(
    records: &[ExtractedRecord],
    site: &SiteInfoConfig,
    now: DateTimeUtc,
) -> String {
    let items: String = records
        .iter()
        .map(|record| render_item(record, site))
        .collect();
    let pub_date = now.to_rfc2822();
    let year = now.year.to_string();

    RSS_CHANNEL.render(&RssChannelVars {
        feed_url: &site.feed_url,
        title: &site.title,
        url: &site.url,
        icon: &site.icon,
        pub_date: &pub_date,
        language: &site.language,
        year: &year,
        author: &site.author,
        description: &site.description,
        items: &items,
    })
}

/// Parse the rendered feed back and run RSS validation on it.
pub fn validate_feed(xml: &str) -> Result<Channel> {
    let channel = Channel::read_from(xml.as_bytes())
        .map_err(|e| anyhow!("RSS parsing failed: {e}"))?;
    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel)
}
