use crate::DraftTweet;

pub const ENGAGEMENT_MAX: i32 = 20;

pub fn engagement_score(tweet: &DraftTweet) -> i32 {
    let mut score = 5;

    // Questions drive replies, the highest-value engagement signal.
    if tweet.has_question {
        score += 8;
    }

    if tweet.has_call_to_action {
        score += 4;
    }

    // Quote tweets reach both audiences.
    if tweet.quote_tweet {
        score += 3;
    }

    if tweet.is_reply {
        score += 2;
    }

    score.min(ENGAGEMENT_MAX)
}
