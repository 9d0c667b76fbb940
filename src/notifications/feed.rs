use quick_xml::{Reader, events::Event};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("malformed feed: {0}")]
    Xml(String),
}

/// The parts of a notification entry the detector needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub video_id: String,
    pub channel_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Clone, Copy)]
enum Field {
    VideoId,
    ChannelId,
    Title,
}

/// Parse the first `<entry>` of a hub notification.
///
/// Returns `Ok(None)` for feeds without an entry video id, which is how
/// deletions (`at:deleted-entry`) arrive.
pub fn parse_publication(xml: &str) -> Result<Option<Publication>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_entry = false;
    let mut field: Option<Field> = None;
    let mut video_id = None;
    let mut channel_id = None;
    let mut title = None;

    loop {
        match reader
            .read_event()
            .map_err(|e| FeedError::Xml(e.to_string()))?
        {
            Event::Start(element) => match element.local_name().as_ref() {
                b"entry" => in_entry = true,
                b"videoId" if in_entry => field = Some(Field::VideoId),
                b"channelId" if in_entry => field = Some(Field::ChannelId),
                b"title" if in_entry => field = Some(Field::Title),
                _ => field = None,
            },
            Event::Text(text) => {
                let Some(current) = field else { continue };
                let value = text
                    .unescape()
                    .map_err(|e| FeedError::Xml(e.to_string()))?
                    .trim()
                    .to_string();
                match current {
                    Field::VideoId => video_id = Some(value),
                    Field::ChannelId => channel_id = Some(value),
                    Field::Title => title = Some(value),
                }
            }
            Event::End(element) => {
                field = None;
                if element.local_name().as_ref() == b"entry" {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(video_id
        .filter(|id| !id.is_empty())
        .map(|video_id| Publication {
            video_id,
            channel_id,
            title,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTIFICATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns="http://www.w3.org/2005/Atom">
  <link rel="hub" href="https://pubsubhubbub.appspot.com"/>
  <title>YouTube video feed</title>
  <updated>2024-05-01T12:00:00.000000000+00:00</updated>
  <entry>
    <id>yt:video:dQw4w9WgXcQ</id>
    <yt:videoId>dQw4w9WgXcQ</yt:videoId>
    <yt:channelId>UCuAXFkgsw1L7xaCfnd5JJOw</yt:channelId>
    <title>Cooking &amp; Deals</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=dQw4w9WgXcQ"/>
    <author><name>Channel</name></author>
    <published>2024-05-01T11:59:00+00:00</published>
  </entry>
</feed>"#;

    #[test]
    fn test_parses_entry() {
        let publication = parse_publication(NOTIFICATION).unwrap().unwrap();
        assert_eq!(publication.video_id, "dQw4w9WgXcQ");
        assert_eq!(
            publication.channel_id.as_deref(),
            Some("UCuAXFkgsw1L7xaCfnd5JJOw")
        );
        assert_eq!(publication.title.as_deref(), Some("Cooking & Deals"));
    }

    #[test]
    fn test_feed_title_is_not_entry_title() {
        let xml = r#"<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015"><title>Feed</title><entry><yt:videoId>abc</yt:videoId></entry></feed>"#;
        let publication = parse_publication(xml).unwrap().unwrap();
        assert_eq!(publication.video_id, "abc");
        assert_eq!(publication.title, None);
    }

    #[test]
    fn test_deleted_entry_has_no_publication() {
        let xml = r#"<feed xmlns:at="http://purl.org/atompub/tombstones/1.0">
  <at:deleted-entry ref="yt:video:abc" when="2024-05-01T12:00:00+00:00"/>
</feed>"#;
        assert_eq!(parse_publication(xml).unwrap(), None);
    }

    #[test]
    fn test_malformed_feed_is_an_error() {
        let xml = "<feed><entry><yt:videoId>abc</yt:channelId></entry></feed>";
        assert!(matches!(parse_publication(xml), Err(FeedError::Xml(_))));
    }
}
