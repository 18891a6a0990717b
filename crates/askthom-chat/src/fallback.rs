//! Local answers for when the assistant service cannot be reached.
//!
//! Rules are evaluated in registration order and the first match wins.
//! A rule is scoped to a set of context tags (or to every context) and
//! triggers on case-insensitive substrings of the question, or on an
//! arbitrary predicate. When nothing matches, a generic answer naming the
//! context is returned, so the generator never produces an empty reply.

use std::fmt;
use std::sync::Arc;

use askthom_types::ContextMap;

/// What a rule sees when deciding whether it applies
#[derive(Debug, Clone)]
pub struct FallbackQuery<'a> {
    pub question: &'a str,
    pub question_lower: String,
    pub context: &'a str,
    pub context_data: Option<&'a ContextMap>,
}

impl<'a> FallbackQuery<'a> {
    pub fn new(question: &'a str, context: &'a str, context_data: Option<&'a ContextMap>) -> Self {
        Self {
            question,
            question_lower: question.to_lowercase(),
            context,
            context_data,
        }
    }
}

pub type Predicate = Arc<dyn Fn(&FallbackQuery<'_>) -> bool + Send + Sync>;

/// When a rule fires
#[derive(Clone)]
pub enum Trigger {
    /// Any of these (lowercase) substrings appears in the question
    Keywords(Vec<String>),
    Predicate(Predicate),
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Keywords(words) => f.debug_tuple("Keywords").field(words).finish(),
            Trigger::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl Trigger {
    pub fn keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Trigger::Keywords(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }

    fn fires(&self, query: &FallbackQuery<'_>) -> bool {
        match self {
            Trigger::Keywords(words) => words.iter().any(|w| query.question_lower.contains(w.as_str())),
            Trigger::Predicate(predicate) => predicate(query),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FallbackRule {
    /// Context tags this rule applies to; empty means every context
    pub contexts: Vec<String>,
    pub trigger: Trigger,
    pub response: String,
}

impl FallbackRule {
    pub fn new<C, S>(contexts: C, trigger: Trigger, response: impl Into<String>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contexts: contexts.into_iter().map(Into::into).collect(),
            trigger,
            response: response.into(),
        }
    }

    /// A rule for every context
    pub fn generic(trigger: Trigger, response: impl Into<String>) -> Self {
        Self::new(Vec::<String>::new(), trigger, response)
    }

    fn applies_to(&self, context: &str) -> bool {
        self.contexts.is_empty() || self.contexts.iter().any(|c| c == context)
    }

    fn matches(&self, query: &FallbackQuery<'_>) -> bool {
        !self.response.trim().is_empty() && self.applies_to(query.context) && self.trigger.fires(query)
    }
}

/// Ordered rule table, first match wins
#[derive(Debug, Clone)]
pub struct FallbackGenerator {
    rules: Vec<FallbackRule>,
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackGenerator {
    /// No rules; every question gets the generic answer
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in Thomas rule table
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(contexts, words, response)| {
                FallbackRule::new(contexts.iter().copied(), Trigger::keywords(words.iter()), *response)
            })
            .collect();
        Self { rules }
    }

    /// Append a rule; it is consulted after every rule already registered
    pub fn with_rule(mut self, rule: FallbackRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Insert a rule ahead of all others
    pub fn with_priority_rule(mut self, rule: FallbackRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    pub fn rules(&self) -> &[FallbackRule] {
        &self.rules
    }

    /// Answer `question` locally. Deterministic and never empty.
    pub fn respond(&self, question: &str, context: &str, context_data: Option<&ContextMap>) -> String {
        let query = FallbackQuery::new(question, context, context_data);
        self.rules
            .iter()
            .find(|rule| rule.matches(&query))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| generic_response(context))
    }
}

/// Answer with the built-in rule table
pub fn fallback_response(question: &str, context: &str, context_data: Option<&ContextMap>) -> String {
    FallbackGenerator::builtin().respond(question, context, context_data)
}

/// Last-resort answer naming the context ("churn-risk" reads "churn risk")
pub fn generic_response(context: &str) -> String {
    format!(
        "That's a great question about {}. Based on the Thomas assessment data and best practices:\n\n\
• Consider the specific trait scores and how they interact\n\
• Compare against benchmarks (both industry and internal)\n\
• Factor in the context - role requirements, team dynamics, and timeline\n\n\
Would you like me to focus on a specific aspect? I can provide more detailed guidance on any element of the analysis.",
        context.replacen('-', " ", 1)
    )
}

type RuleSpec = (&'static [&'static str], &'static [&'static str], &'static str);

const ANY_CONTEXT: &[&str] = &[];

const BUILTIN_RULES: &[RuleSpec] = &[
    (&["negotiation"], &["approach", "how should"], NEGOTIATION_APPROACH),
    (&["negotiation"], &["competitive", "offer"], NEGOTIATION_OFFER),
    (&["negotiation"], &["salary", "expect"], NEGOTIATION_SALARY),
    (&["psychometric", "candidate-analysis"], &["dominance", "high d"], PSYCHOMETRIC_DOMINANCE),
    (&["psychometric", "candidate-analysis"], &["fit", "good"], PSYCHOMETRIC_FIT),
    (&["psychometric", "candidate-analysis"], &["concern", "risk"], PSYCHOMETRIC_CONCERNS),
    (&["performance", "churn-risk"], &["warning", "sign", "causing"], PERFORMANCE_WARNINGS),
    (&["performance", "churn-risk"], &["development", "prioriti"], PERFORMANCE_DEVELOPMENT),
    (ANY_CONTEXT, &["thank"], GENERIC_THANKS),
    (ANY_CONTEXT, &["help", "what can you"], GENERIC_HELP),
];

const NEGOTIATION_APPROACH: &str = "Based on the candidate's psychometric profile, I'd recommend:\n\n\
1. **Start with rapport** - Their Influence score suggests they value personal connection before business.\n\n\
2. **Be direct but not pushy** - Their moderate Dominance means they appreciate straightforward communication.\n\n\
3. **Emphasise stability** - High Steadiness indicates they prioritise job security over maximum compensation.\n\n\
4. **Present data** - Their Compliance score suggests they'll respond well to market benchmarks and structured reasoning.\n\n\
Would you like specific talking points?";

const NEGOTIATION_OFFER: &str = "Looking at the benchmarks:\n\n\
📊 **Industry comparison**: Your offer is positioned against market rates for this role and level.\n\n\
🏢 **Internal equity**: I've compared against similar roles in your organisation.\n\n\
💡 **My recommendation**: Consider the candidate's flexibility rating and competing offers. Their psychometric profile suggests they may value non-monetary benefits like work-life balance and team culture.\n\n\
Shall I suggest some negotiation levers to use?";

const NEGOTIATION_SALARY: &str = "Based on their profile and the data available:\n\n\
• **Expected range**: The candidate's stated expectation is visible in their profile\n\
• **Flexibility indicator**: Check their negotiation flexibility rating (Low/Medium/High)\n\
• **Profile insight**: High Steadiness candidates typically accept below-market if the role offers stability\n\
• **Risk tolerance**: Their HPTI Risk Approach score indicates whether they'd prefer guaranteed base vs. variable comp\n\n\
Do you want me to explain how to use these insights in your offer?";

const PSYCHOMETRIC_DOMINANCE: &str = "**Dominance (D)** in the PPA measures assertiveness and results-orientation.\n\n\
**High Dominance** (70%+):\n\
• Direct and decisive\n\
• Comfortable with conflict\n\
• Results-focused, may overlook details\n\
• Prefer autonomy over close supervision\n\n\
**In negotiations**: Expect them to push back firmly. Be prepared with data.\n\n\
**In the role**: Best in positions requiring quick decisions and leadership.\n\n\
Would you like to know how this interacts with their other traits?";

const PSYCHOMETRIC_FIT: &str = "To assess role fit, I look at several factors:\n\n\
**1. Profile Match Score** - How closely their PPA/HPTI aligns with successful employees in this role\n\n\
**2. GIA Score** - Cognitive ability relative to role demands\n\n\
**3. Trait gaps** - Where they differ significantly from the ideal profile\n\n\
**4. Interview performance** - Technical and behavioural assessments\n\n\
The match score gives you a quick indicator, but I'd recommend reviewing the specific trait gaps. Even a 70% match can be excellent if the gaps are in less critical areas.\n\n\
Shall I explain the specific gaps for this candidate?";

const PSYCHOMETRIC_CONCERNS: &str = "I'd flag these potential concerns:\n\n\
⚠️ **Trait gaps**: Check where the candidate differs significantly from the ideal profile - gaps over 15 points warrant discussion\n\n\
⚠️ **Confidence trajectory**: Is their interview confidence on track for this stage?\n\n\
⚠️ **Interview red flags**: Review the detailed notes for any concerns raised by the panel\n\n\
⚠️ **Competing offers**: This can affect both timeline and acceptance likelihood\n\n\
Want me to dive deeper into any of these?";

const PERFORMANCE_WARNINGS: &str = "The key risk indicators I monitor are:\n\n\
🔴 **Morale score decline** - A drop of 10+ points quarter-over-quarter is significant\n\n\
🔴 **Slack sentiment** - Negative tone in communications can precede departure\n\n\
🔴 **Velocity changes** - Sudden productivity drops may indicate disengagement\n\n\
🔴 **Life events** - Major changes like maternity, relocation, or team changes\n\n\
I weight these differently based on the employee's Thomas profile. High Steadiness employees are more affected by team changes, while high Dominance employees react more to lack of progression.\n\n\
Would you like specific recommendations for this employee?";

const PERFORMANCE_DEVELOPMENT: &str = "Based on their Thomas assessment and performance data, I'd suggest prioritising:\n\n\
**1. Skill gaps** - Where do their scores fall below role requirements?\n\n\
**2. Leadership readiness** - HPTI traits indicate leadership potential and timeline\n\n\
**3. Career interests** - Consider their profile when suggesting development paths\n\n\
**4. Stretch assignments** - Match opportunities to their behavioural preferences\n\n\
Employees with high Curiosity (HPTI) respond well to new challenges, while high Steadiness employees prefer gradual skill-building.\n\n\
Want me to suggest specific development activities?";

const GENERIC_THANKS: &str = "You're welcome! I'm here whenever you need help interpreting Thomas assessment data or making talent decisions. Good luck! 🎯";

const GENERIC_HELP: &str = "I can help you with:\n\n\
📊 **Interpreting assessments** - Understanding PPA, GIA, and HPTI scores\n\n\
👥 **Candidate analysis** - Evaluating fit and identifying concerns\n\n\
💰 **Negotiation strategy** - Psychometric-informed offer approaches\n\n\
📈 **Performance insights** - Understanding trends and predicting risks\n\n\
🎯 **Development planning** - Tailored recommendations based on profiles\n\n\
Just ask me anything about the data you're viewing!";
