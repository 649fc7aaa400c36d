//! Fixed unlockable content: praise, jokes and story chapters.

/// Messages picked at random for a correct answer.
pub const PRAISE: [&str; 4] = [
    "🎉 Excellent!",
    "⭐ Amazing!",
    "🎊 Fantastic!",
    "🏆 You got it!",
];

/// Jokes unlocked in joke mode on every third answer of a streak.
pub const JOKES: [&str; 3] = [
    "🐄 What do you call a sleeping bull? A bulldozer! 😴",
    "🍌 Why don't bananas ever feel lonely? Because they hang out in bunches!",
    "🐧 What do you call a penguin in the desert? Lost! 🏜️",
];

/// Story chapters, in order. One chapter per `POINTS_PER_CHAPTER` points.
pub const STORY_CHAPTERS: [&str; 6] = [
    "🏰 Princess Luna needs your help! Solve problems to collect crystal fragments!",
    "✨ Wonderful! You found a fragment in the Enchanted Forest!",
    "🌳 Amazing! The magical unicorn guides you toward the Crystal Lake.",
    "🦄 Fantastic! A friendly dragon tells you the final pieces are in the Cloud Castle!",
    "☁️ Incredible! You're so close to saving Princess Luna's kingdom!",
    "👑 AMAZING! You've collected all the fragments! The kingdom is saved!",
];

pub const POINTS_PER_CHAPTER: u32 = 4;

/// Streak length that unlocks a joke.
pub const JOKE_STREAK: u32 = 3;

pub const MISSING_ANSWER: &str = "Please enter an answer first!";

pub fn wrong_answer(expected: i32) -> String {
    format!("Oops! The answer was {expected}.")
}

/// Index of the chapter reached with `score` points, capped at the last one.
pub fn chapter_index(score: u32) -> usize {
    let reached = (score / POINTS_PER_CHAPTER) as usize;
    reached.min(STORY_CHAPTERS.len() - 1)
}
