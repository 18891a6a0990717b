//! Per-context greetings and suggested questions.

/// Context tags with their own greeting and suggestions
pub const KNOWN_CONTEXTS: [&str; 7] = [
    "negotiation",
    "psychometric",
    "candidate-analysis",
    "performance",
    "interview-summary",
    "ideal-profile",
    "churn-risk",
];

pub const DEFAULT_GREETING: &str = "Hello! I'm Thom, Thomas International's AI assistant. I can help you understand psychometric assessments, candidate fit, and talent insights. How can I assist you today?";

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "What can you help me with?",
    "Explain the Thomas assessments",
    "How do I use this data?",
];

/// Opening assistant message for a session; unknown contexts get the default
pub fn greeting(context: &str) -> &'static str {
    match context {
        "negotiation" => "Hello! I'm Thom, your AI negotiation coach. I can help you understand this candidate's psychometric profile and suggest the best approach for salary discussions. What would you like to know?",
        "psychometric" => "Hi there! I can help you interpret this candidate's Thomas assessment results. The PPA, GIA, and HPTI scores reveal important insights about their work style and potential. What aspects would you like to explore?",
        "candidate-analysis" => "Welcome! I'm here to help you understand this candidate's fit for the role. I can explain the match scores, trait gaps, and provide recommendations. What would you like to discuss?",
        "performance" => "Hello! I can help you understand this employee's performance metrics and Thomas assessment data. Would you like insights on their development areas or leadership potential?",
        "interview-summary" => "Hi! I've summarised the interview feedback for this candidate. I can help you understand the panel's assessments and what the scores indicate about their suitability. How can I help?",
        "ideal-profile" => "Welcome! I can explain how the ideal candidate profile was generated from top performers in your organisation. What would you like to know about the benchmarks?",
        "churn-risk" => "Hello! I'm analysing the churn risk indicators for this employee. I can help you understand the warning signs and suggest retention strategies. What concerns you most?",
        _ => DEFAULT_GREETING,
    }
}

/// Starter questions offered before the first exchange
pub fn suggested_questions(context: &str) -> &'static [&'static str] {
    match context {
        "negotiation" => &[
            "How should I approach this negotiation?",
            "What does their profile suggest about salary expectations?",
            "Is this offer competitive?",
        ],
        "psychometric" => &[
            "What does high Dominance mean?",
            "How do these scores compare to top performers?",
            "What are the development areas?",
        ],
        "candidate-analysis" => &[
            "Is this a good fit for the role?",
            "What are the key concerns?",
            "How confident should I be in this hire?",
        ],
        "performance" => &[
            "What's driving the performance score?",
            "Are there any warning signs?",
            "What development should I prioritise?",
        ],
        "interview-summary" => &[
            "What were the main concerns?",
            "How did technical skills compare?",
            "Should we extend an offer?",
        ],
        "ideal-profile" => &[
            "How was this profile created?",
            "What traits are most important?",
            "How many employees contributed?",
        ],
        "churn-risk" => &[
            "What's causing the risk?",
            "What should I do this week?",
            "How reliable is this prediction?",
        ],
        _ => DEFAULT_SUGGESTIONS,
    }
}
