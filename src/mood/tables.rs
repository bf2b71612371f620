use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use anyhow::{bail, Result};

/// One bucket of file activity. [MoodCategory::Mixed] is the fallback and is
/// only produced when no rule matched anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodCategory {
    Code,
    Binge,
    Work,
    Web,
    Notes,
    Mixed,
}

impl Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodCategory::Code => write!(f, "code"),
            MoodCategory::Binge => write!(f, "binge"),
            MoodCategory::Work => write!(f, "work"),
            MoodCategory::Web => write!(f, "web"),
            MoodCategory::Notes => write!(f, "notes"),
            MoodCategory::Mixed => write!(f, "mixed"),
        }
    }
}

/// Lookup tables driving classification. Constructed once at startup and
/// passed around by reference, never mutated afterwards.
///
/// The rule table is ordered. When two categories tie on the number of
/// matched files, the one appearing earlier in the table wins.
pub struct MoodTables {
    rules: Vec<(MoodCategory, HashSet<String>)>,
    messages: HashMap<MoodCategory, Vec<String>>,
}

impl MoodTables {
    /// Every category in `rules` needs at least one message, and so does
    /// [MoodCategory::Mixed] since any input can degrade to it.
    pub fn new(
        rules: Vec<(MoodCategory, HashSet<String>)>,
        messages: HashMap<MoodCategory, Vec<String>>,
    ) -> Result<Self> {
        for (category, _) in &rules {
            if !messages.get(category).is_some_and(|m| !m.is_empty()) {
                bail!("Rule category {category} has no messages");
            }
        }
        if !messages.get(&MoodCategory::Mixed).is_some_and(|m| !m.is_empty()) {
            bail!("Fallback category mixed has no messages");
        }
        Ok(Self { rules, messages })
    }

    /// The built-in rule and message catalog.
    pub fn standard() -> Self {
        let rules = vec![
            (
                MoodCategory::Code,
                extensions(&["py", "ipynb", "java", "c", "cpp", "js", "ts"]),
            ),
            (
                MoodCategory::Binge,
                extensions(&["mp4", "mkv", "mov", "avi", "mp3"]),
            ),
            (
                MoodCategory::Work,
                extensions(&["xls", "xlsx", "doc", "docx", "ppt", "pptx", "pdf"]),
            ),
            (MoodCategory::Web, extensions(&["html", "htm", "url"])),
            (MoodCategory::Notes, extensions(&["txt", "md", "rtf"])),
        ];

        let messages = HashMap::from([
            (
                MoodCategory::Code,
                owned(&[
                    "👨‍💻 Code ninja detected!",
                    "🧠 Brainy coder mode: ON",
                    "⌨️ Deep Work with your IDE!",
                ]),
            ),
            (
                MoodCategory::Binge,
                owned(&[
                    "🎬 Entertainment Overload!",
                    "🍿 Netflix and not-so-chill?",
                    "🎧 Immersed in audio-visual joy",
                ]),
            ),
            (
                MoodCategory::Work,
                owned(&[
                    "📈 Productivity peak hours!",
                    "💼 Adulting like a boss",
                    "🧾 Meeting docs and deadlines",
                ]),
            ),
            (
                MoodCategory::Web,
                owned(&[
                    "🌐 Surfing through the web waves",
                    "🕸️ Curious clicker spotted!",
                    "🔍 Explorer mode: Active",
                ]),
            ),
            (
                MoodCategory::Notes,
                owned(&[
                    "📝 Quiet thinker mode",
                    "✍️ Journaling genius",
                    "📒 Notes and reflections",
                ]),
            ),
            (
                MoodCategory::Mixed,
                owned(&[
                    "🤹 Multitasking marvel!",
                    "🔄 Jack of all tabs!",
                    "💫 A little bit of everything!",
                ]),
            ),
        ]);

        Self::new(rules, messages).expect("Built-in tables should always be valid")
    }

    pub fn rules(&self) -> &[(MoodCategory, HashSet<String>)] {
        &self.rules
    }

    pub fn messages_for(&self, category: MoodCategory) -> &[String] {
        self.messages.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn extensions(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
