use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Verified,
    Heuristic,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightSource {
    pub name: &'static str,
    pub url: &'static str,
    pub last_verified: &'static str,
}

/// One ranking-algorithm fact shown to users. `kind` separates facts traced
/// to the open-source ranking code from community folklore.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: InsightKind,
    pub source: Option<InsightSource>,
}

pub const VERIFIED_INSIGHTS: &[Insight] = &[
    Insight {
        id: "multi-action-prediction",
        title: "ML Model Predicts Multiple Actions",
        description: "The ranking model predicts probabilities for 15+ actions (like, reply, repost, click, share, block, mute, report) and combines them with configurable weights.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "xai-org/x-algorithm README.md",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
    Insight {
        id: "weighted-scoring",
        title: "Weighted Score Combination",
        description: "Final score = sum of weight x P(action). Positive actions carry positive weights; block, mute and report carry negative weights.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "home-mixer weighted scorer",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
    Insight {
        id: "video-duration-gating",
        title: "Video Duration Threshold Exists",
        description: "Videos must exceed a minimum duration to receive video-quality-view weight. Actual weight values are not public.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "home-mixer weighted scorer",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
    Insight {
        id: "author-diversity",
        title: "Author Diversity Scoring",
        description: "Repeated posts from the same author within a feed get exponentially decaying scores, keeping the feed diverse.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "home-mixer author diversity scorer",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
    Insight {
        id: "oon-penalty",
        title: "Out-of-Network Posts Downweighted",
        description: "Posts from accounts the viewer does not follow are multiplied by a factor below 1.0, prioritizing in-network content.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "home-mixer OON scorer",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
    Insight {
        id: "candidate-isolation",
        title: "Candidate Isolation in Ranking",
        description: "During inference, candidates cannot attend to each other, only to the viewer's engagement history. Scores are consistent and cacheable.",
        kind: InsightKind::Verified,
        source: Some(InsightSource {
            name: "xai-org/x-algorithm README.md",
            url: "https://github.com/xai-org/x-algorithm",
            last_verified: "2026-02-05",
        }),
    },
];

pub const HEURISTIC_INSIGHTS: &[Insight] = &[
    Insight {
        id: "reply-engagement-value",
        title: "Replies > Likes for Engagement",
        description: "Community research suggests replies drive significantly more algorithmic value than likes. Engaging with replies to your posts multiplies reach.",
        kind: InsightKind::Heuristic,
        source: None,
    },
    Insight {
        id: "video-engagement-boost",
        title: "Native Video Shows Higher Engagement",
        description: "Community testing indicates directly uploaded video typically achieves higher engagement than text-only posts.",
        kind: InsightKind::Heuristic,
        source: None,
    },
    Insight {
        id: "external-links-penalty",
        title: "External Links May Reduce Reach",
        description: "Community observations suggest external links, especially on non-Premium accounts, receive lower distribution. Consider moving links to replies.",
        kind: InsightKind::Heuristic,
        source: None,
    },
    Insight {
        id: "questions-drive-replies",
        title: "Questions Encourage Engagement",
        description: "Posts with questions tend to generate more reply engagement, which the ranking model weights positively.",
        kind: InsightKind::Heuristic,
        source: None,
    },
];

pub fn all_insights() -> Vec<&'static Insight> {
    VERIFIED_INSIGHTS.iter().chain(HEURISTIC_INSIGHTS).collect()
}

pub fn insights_by_kind(kind: InsightKind) -> Vec<&'static Insight> {
    all_insights()
        .into_iter()
        .filter(|insight| insight.kind == kind)
        .collect()
}

pub fn insight_by_id(id: &str) -> Option<&'static Insight> {
    all_insights().into_iter().find(|insight| insight.id == id)
}
