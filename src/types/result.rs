pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Delivery,
    Stability,
    Flow,
    Quality,
    TeamLoad,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Delivery,
        Category::Stability,
        Category::Flow,
        Category::Quality,
        Category::TeamLoad,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Delivery => "delivery",
            Category::Stability => "stability",
            Category::Flow => "flow",
            Category::Quality => "quality",
            Category::TeamLoad => "team_load",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Delivery => "How much of the committed scope reached done",
            Category::Stability => "How little the backlog churned after sprint start",
            Category::Flow => "How evenly completion was distributed across days",
            Category::Quality => "Absence of rework and blocked work",
            Category::TeamLoad => "Balance of estimated versus spent effort per assignee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Healthy,
    AtRisk,
    Critical,
}

impl Tier {
    pub fn key(&self) -> &'static str {
        match self {
            Tier::Healthy => "healthy",
            Tier::AtRisk => "at_risk",
            Tier::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub name: Category,
    pub raw_score: Score,
    pub weight: f64,
}

impl CategoryScore {
    pub fn weighted_contribution(&self) -> f64 {
        self.raw_score * self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetric {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub description: String,
}

impl KeyMetric {
    pub fn new(name: &str, value: f64, unit: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    Penalty,
    Bonus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub kind: AdjustmentKind,
    pub name: String,
    pub points: f64,
    pub trigger_reason: String,
}

impl Adjustment {
    pub fn penalty(name: &str, points: f64, trigger_reason: String) -> Self {
        debug_assert!(points < 0.0);
        Self {
            kind: AdjustmentKind::Penalty,
            name: name.to_string(),
            points,
            trigger_reason,
        }
    }

    pub fn bonus(name: &str, points: f64, trigger_reason: String) -> Self {
        debug_assert!(points > 0.0);
        Self {
            kind: AdjustmentKind::Bonus,
            name: name.to_string(),
            points,
            trigger_reason,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringResult {
    pub composite_score: Score,
    pub tier: Tier,
    pub category_scores: Vec<CategoryScore>,
    pub key_metrics: Vec<KeyMetric>,
    pub adjustments: Vec<Adjustment>,
}

impl ScoringResult {
    pub fn category(&self, name: Category) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|score| score.name == name)
    }

    pub fn metric(&self, name: &str) -> Option<&KeyMetric> {
        self.key_metrics.iter().find(|metric| metric.name == name)
    }

    pub fn adjustment(&self, name: &str) -> Option<&Adjustment> {
        self.adjustments
            .iter()
            .find(|adjustment| adjustment.name == name)
    }
}
