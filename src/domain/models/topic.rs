#[cfg(test)]
#[path = "topic_test.rs"]
mod tests;

/// A suggested-question group shown above the input box.
#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
    pub label: &'static str,
    pub questions: &'static [&'static str],
}

static TOPICS: &[Topic] = &[
    Topic {
        label: "Work Experience",
        questions: &[
            "What were your key achievements at ZS Associates?",
            "What did you build at GAME?",
            "How have your roles grown in scope over time?",
        ],
    },
    Topic {
        label: "Projects",
        questions: &[
            "Tell me about your most impactful product strategy project.",
            "Which project are you most proud of, and why?",
        ],
    },
    Topic {
        label: "Skills",
        questions: &[
            "What are your core product management skills?",
            "Which analytics tools do you use day to day?",
            "How do you work with engineering teams?",
        ],
    },
    Topic {
        label: "MBA Journey",
        questions: &[
            "Why did you choose Berkeley Haas for your MBA?",
            "What has the MBA changed about how you work?",
        ],
    },
    Topic {
        label: "Product Strategy",
        questions: &[
            "How do you approach product-market fit?",
            "How do you decide what not to build?",
        ],
    },
];

/// Compiled-in table of topics. Read-only, there is no way to add or remove
/// entries at runtime.
pub struct TopicCatalog {}

impl TopicCatalog {
    pub fn all() -> &'static [Topic] {
        return TOPICS;
    }

    pub fn get(label: &str) -> Option<&'static Topic> {
        return TOPICS.iter().find(|topic| return topic.label == label);
    }

    pub fn labels() -> Vec<&'static str> {
        return TOPICS.iter().map(|topic| return topic.label).collect();
    }
}
