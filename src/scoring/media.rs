use crate::{DraftTweet, MediaType};

pub const MEDIA_MAX: i32 = 20;

pub fn media_score(tweet: &DraftTweet) -> i32 {
    if !tweet.has_media {
        return 0;
    }

    let mut score = 12;

    match tweet.media_type {
        Some(MediaType::Video) => score += 8,
        Some(MediaType::Image) => {
            score += 5;
            if let Some(count) = tweet.media_count {
                if count > 1 {
                    score += ((count - 1) as i32).min(3);
                }
            }
        }
        Some(MediaType::Gif) => score += 4,
        Some(MediaType::Poll) => score += 6,
        None => {}
    }

    score.min(MEDIA_MAX)
}
