//! Curated tutorial videos
//!
//! Every exercise page shows one tutorial video. The video is looked up by exercise name in a
//! small, ordered table. Lookups never fail: names without a matching entry fall back to a
//! general tutorial.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoRecord {
    pub video_id: &'static str,
    pub title: &'static str,
    pub channel: &'static str,
}

impl VideoRecord {
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }

    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Entries in match order. Keys are lower case.
pub static VIDEOS: &[(&str, VideoRecord)] = &[
    // Chest
    (
        "bench press",
        VideoRecord {
            video_id: "rT7DgCr-3pg",
            title: "How To: Bench Press (PROPER FORM)",
            channel: "THENX",
        },
    ),
    (
        "push-ups",
        VideoRecord {
            video_id: "IODxDxX7oi4",
            title: "Perfect Push Up Form Guide",
            channel: "THENX",
        },
    ),
    // Back
    (
        "pull-up",
        VideoRecord {
            video_id: "eGo4IYlbE5g",
            title: "Perfect Pull Up Form Guide",
            channel: "THENX",
        },
    ),
    (
        "bent over row",
        VideoRecord {
            video_id: "FWJR5Ve8bnQ",
            title: "How To: Barbell Row (PROPER FORM)",
            channel: "THENX",
        },
    ),
    // Legs
    (
        "squat",
        VideoRecord {
            video_id: "gsNoPYwWXeM",
            title: "How To: Squat (PROPER FORM)",
            channel: "THENX",
        },
    ),
    (
        "deadlift",
        VideoRecord {
            video_id: "r4MzxtBKyNE",
            title: "How To: Deadlift (PROPER FORM)",
            channel: "THENX",
        },
    ),
];

pub static DEFAULT_VIDEO: VideoRecord = VideoRecord {
    video_id: "5ioVZcC5xvU",
    title: "Basic Exercise Tutorial",
    channel: "FitnessBlender",
};

/// Find the tutorial video for an exercise.
///
/// The name is lower-cased and then matched in three steps:
///
/// 1. an entry whose key equals the name,
/// 2. the first entry whose key contains the name or is contained in it,
/// 3. [`DEFAULT_VIDEO`].
#[must_use]
pub fn resolve(exercise_name: &str) -> &'static VideoRecord {
    let name = exercise_name.to_lowercase();

    if let Some((_, video)) = VIDEOS.iter().find(|(key, _)| *key == name) {
        return video;
    }

    if let Some((_, video)) = VIDEOS
        .iter()
        .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
    {
        return video;
    }

    log::debug!("no tutorial video for \"{exercise_name}\", using default");
    &DEFAULT_VIDEO
}
