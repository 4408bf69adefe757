/// A next-step topic, offered only while its concept is absent from the project.
#[derive(Debug, PartialEq, Eq)]
pub struct AdvancedTopic {
    /// Concept key whose presence means the topic is already covered
    pub concept: &'static str,
    pub topic: &'static str,
    pub description: &'static str,
    pub why_useful: &'static str,
    pub next_project: &'static str,
    /// Typical time from no exposure to working proficiency
    pub time_to_proficiency: &'static str,
    /// Job-requirement keywords that make this topic a priority
    pub keywords: &'static [&'static str],
}

/// Ordered by priority, most valuable first.
pub static ADVANCED_TOPICS: &[AdvancedTopic] = &[
    AdvancedTopic {
        concept: "automated_testing",
        topic: "Automated Testing",
        description: "Learn pytest: fixtures, parametrized tests and mocking external services.",
        why_useful: "Tests let you change code confidently and are expected in every professional codebase.",
        next_project: "Add a pytest suite to your largest project, starting with its data-handling functions.",
        time_to_proficiency: "1-2 months",
        keywords: &["testing", "unit testing", "unit tests", "pytest", "tdd", "qa"],
    },
    AdvancedTopic {
        concept: "web_services",
        topic: "API Development",
        description: "Learn Flask or FastAPI to build your own HTTP APIs.",
        why_useful: "Completes the full-stack picture by letting you create the services you currently consume.",
        next_project: "Expose one of your existing tools as a small REST API.",
        time_to_proficiency: "2-4 months",
        keywords: &["api development", "rest", "flask", "fastapi", "django", "backend", "microservices"],
    },
    AdvancedTopic {
        concept: "database_integration",
        topic: "Database Integration",
        description: "Learn SQL and an ORM such as SQLAlchemy.",
        why_useful: "Persistent, queryable storage is the backbone of most applications.",
        next_project: "Replace a JSON file store in one of your tools with SQLite.",
        time_to_proficiency: "1-3 months",
        keywords: &["sql", "database", "databases", "postgresql", "mysql", "orm", "sqlalchemy"],
    },
    AdvancedTopic {
        concept: "async_programming",
        topic: "Asynchronous I/O",
        description: "Learn asyncio: coroutines, tasks and async HTTP clients.",
        why_useful: "Scales network-heavy programs far beyond what a handful of threads can do.",
        next_project: "Rewrite a sequential scraper to fetch pages concurrently with asyncio.",
        time_to_proficiency: "1-2 months",
        keywords: &["async", "asyncio", "event loop", "coroutines"],
    },
    AdvancedTopic {
        concept: "machine_learning",
        topic: "Machine Learning Basics",
        description: "Learn scikit-learn for basic models and evaluation.",
        why_useful: "A direct step toward AI-focused roles.",
        next_project: "Add a simple classifier that ranks items your tools already collect.",
        time_to_proficiency: "6-12 months",
        keywords: &["machine learning", "ml", "ai", "scikit learn", "pytorch", "tensorflow", "llm"],
    },
    AdvancedTopic {
        concept: "data_analysis",
        topic: "Data Analysis with pandas",
        description: "Learn pandas DataFrames for cleaning, grouping and summarizing data.",
        why_useful: "Turns collected data into insight and is a staple of data-oriented roles.",
        next_project: "Analyze the data one of your tools produces and chart the trends.",
        time_to_proficiency: "1-3 months",
        keywords: &["pandas", "numpy", "data analysis", "analytics", "etl"],
    },
    AdvancedTopic {
        concept: "logging",
        topic: "Structured Logging and Monitoring",
        description: "Learn the logging module: levels, handlers and structured context.",
        why_useful: "Makes programs diagnosable once they run unattended.",
        next_project: "Replace print statements in a tool with configurable logging.",
        time_to_proficiency: "2-4 weeks",
        keywords: &["logging", "monitoring", "observability"],
    },
    AdvancedTopic {
        concept: "abstraction",
        topic: "Interface Design",
        description: "Learn abstract base classes and protocols to design extensible code.",
        why_useful: "Well-defined interfaces keep growing codebases changeable.",
        next_project: "Extract a plugin interface from a tool that handles several data sources.",
        time_to_proficiency: "1-2 months",
        keywords: &["software design", "architecture", "design patterns", "solid", "interfaces"],
    },
    AdvancedTopic {
        concept: "concurrent_programming",
        topic: "Concurrency Fundamentals",
        description: "Learn threads, thread pools and safe data sharing.",
        why_useful: "Keeps interfaces responsive and speeds up I/O-bound work.",
        next_project: "Move a slow network call in one of your tools onto a background thread.",
        time_to_proficiency: "1-2 months",
        keywords: &["concurrency", "threading", "multithreading", "parallel", "multiprocessing"],
    },
    AdvancedTopic {
        concept: "web_scraping",
        topic: "Browser Automation",
        description: "Learn Selenium or Playwright for JavaScript-heavy sites.",
        why_useful: "Handles the dynamic sites plain HTTP scraping can't reach.",
        next_project: "Automate collecting data from a site that renders content with JavaScript.",
        time_to_proficiency: "2-4 weeks",
        keywords: &["selenium", "playwright", "scraping", "browser automation"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn test_every_topic_names_a_known_concept() {
        let kb = KnowledgeBase::builtin();
        for topic in ADVANCED_TOPICS {
            assert!(
                kb.concept(topic.concept).is_some(),
                "{} has no concept",
                topic.topic
            );
        }
    }
}
