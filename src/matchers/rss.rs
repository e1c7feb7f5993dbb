//! RSS matcher
//!
//! Fetches an RSS 2.0 document and matches the search term, as a regular
//! expression, against the title and description of every item.

use super::traits::Matcher;
use crate::error::MatchError;
use crate::feeds::Feed;
use crate::network::HttpClient;
use crate::results::{ResultSender, SearchResult};
use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

/// One `<item>` of an RSS channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub guid: String,
    pub pub_date: String,
}

/// The `<channel>` of an RSS document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssDocument {
    pub title: String,
    pub description: String,
    pub link: String,
    pub items: Vec<RssItem>,
}

/// Matcher for feeds of type "rss"
pub struct RssMatcher {
    client: HttpClient,
}

impl RssMatcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch and parse the feed document
    async fn retrieve(&self, feed: &Feed) -> Result<RssDocument, MatchError> {
        if feed.location.trim().is_empty() {
            return Err(MatchError::MissingLocation(feed.name.clone()));
        }

        let response = self.client.get(&feed.location).await?;
        if !response.is_ok() {
            return Err(MatchError::Http {
                status: response.status,
            });
        }

        parse_document(&response.text)
    }
}

#[async_trait]
impl Matcher for RssMatcher {
    fn name(&self) -> &str {
        "rss"
    }

    async fn search(
        &self,
        feed: &Feed,
        term: &str,
        results: &ResultSender,
    ) -> Result<(), MatchError> {
        let pattern = Regex::new(term).map_err(|e| MatchError::InvalidTerm(e.to_string()))?;

        debug!(
            "Search feed type[{}] site[{}] for uri[{}]",
            feed.feed_type, feed.name, feed.location
        );
        let document = self.retrieve(feed).await?;

        for item in &document.items {
            if pattern.is_match(&item.title) {
                results
                    .send(SearchResult::new(&feed.name, "Title", &item.title))
                    .await?;
            }
            if pattern.is_match(&item.description) {
                results
                    .send(SearchResult::new(&feed.name, "Description", &item.description))
                    .await?;
            }
        }

        Ok(())
    }
}

/// Parse an RSS 2.0 document
pub fn parse_document(xml: &str) -> Result<RssDocument, MatchError> {
    let channel_start = xml
        .find("<channel")
        .ok_or_else(|| MatchError::Parse("missing <channel> element".to_string()))?;
    let channel = &xml[channel_start..];

    // Channel-level fields live before the first item.
    let header_end = find_open_tag(channel, "item").unwrap_or(channel.len());
    let header = &channel[..header_end];

    Ok(RssDocument {
        title: extract_tag(header, "title").unwrap_or_default(),
        description: extract_tag(header, "description").unwrap_or_default(),
        link: extract_tag(header, "link").unwrap_or_default(),
        items: split_items(channel).into_iter().map(parse_item).collect(),
    })
}

fn parse_item(item: &str) -> RssItem {
    RssItem {
        title: extract_tag(item, "title").unwrap_or_default(),
        description: extract_tag(item, "description").unwrap_or_default(),
        link: extract_tag(item, "link").unwrap_or_default(),
        guid: extract_tag(item, "guid").unwrap_or_default(),
        pub_date: extract_tag(item, "pubDate").unwrap_or_default(),
    }
}

/// Bodies of every `<item>` element, in document order
fn split_items(xml: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut rest = xml;

    while let Some(start) = find_open_tag(rest, "item") {
        let after = &rest[start..];
        let body_start = match after.find('>') {
            Some(pos) => pos + 1,
            None => break,
        };
        let body = &after[body_start..];
        let body_end = match body.find("</item>") {
            Some(pos) => pos,
            None => break,
        };
        items.push(&body[..body_end]);
        rest = &body[body_end + "</item>".len()..];
    }

    items
}

/// Position of `<tag>` or `<tag ...>`, skipping longer names like `<tagline>`
fn find_open_tag(xml: &str, tag: &str) -> Option<usize> {
    let needle = format!("<{}", tag);
    let mut offset = 0;

    while let Some(pos) = xml[offset..].find(&needle) {
        let start = offset + pos;
        match xml[start + needle.len()..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => return Some(start),
            _ => offset = start + needle.len(),
        }
    }

    None
}

/// Decoded text content of the first `tag` element
fn extract_tag(xml: &str, tag: &str) -> Option<String> {
    let start = find_open_tag(xml, tag)?;
    let open_end = xml[start..].find('>')? + start;

    // <tag/> has no content
    if xml[..open_end].ends_with('/') {
        return Some(String::new());
    }

    let content_start = open_end + 1;
    let end_tag = format!("</{}>", tag);
    let end = xml[content_start..].find(&end_tag)? + content_start;

    Some(decode_text(xml[content_start..end].trim()))
}

/// Unwrap CDATA sections and decode XML entities
fn decode_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("<![CDATA[") {
        out.push_str(&decode_entities(&rest[..start]));
        let data = &rest[start + "<![CDATA[".len()..];
        match data.find("]]>") {
            Some(end) => {
                out.push_str(&data[..end]);
                rest = &data[end + "]]>".len()..];
            }
            None => {
                out.push_str(data);
                rest = "";
            }
        }
    }
    out.push_str(&decode_entities(rest));

    out.trim().to_string()
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let decoded = candidate.find(';').and_then(|semi| {
            let entity = &candidate[1..semi];
            let ch = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") || entity.starts_with("#X") => {
                    u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
                }
                _ if entity.starts_with('#') => {
                    entity[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            ch.map(|c| (c, semi + 1))
        });

        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &candidate[len..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);

    out
}
